use crate::api::use_api;
use crate::components::download::save_export;
use crate::components::scope::use_cancel_token;
use crate::toast::use_notifier;
use event_console_common::export::{run_export, ExportTarget, EVENTS};
use event_console_common::{Notice, SessionKind};
use patternfly_yew::prelude::*;
use web_sys::HtmlSelectElement;
use yew::prelude::*;

/// Spreadsheet exports, for everyone or for one event.
#[function_component(Events)]
pub fn events() -> Html {
    let client = use_api(SessionKind::Admin);
    let notify = use_notifier();
    let cancel = use_cancel_token();
    let selected = use_state(String::new);
    let downloading = use_state(|| false);

    let start = {
        let notify = notify.clone();
        let downloading = downloading.clone();
        move |target: ExportTarget| {
            let client = client.clone();
            let notify = notify.clone();
            let cancel = cancel.clone();
            let downloading = downloading.clone();
            downloading.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                let Some(result) = cancel.guard(run_export(&client, &target)).await else {
                    return;
                };
                downloading.set(false);
                match result {
                    Ok(export) => {
                        if let Err(e) = save_export(&export) {
                            log::error!("Saving {} failed: {:?}", export.filename, e);
                            notify.emit(Notice::error(format!("Could not save {}", export.filename)));
                        }
                    }
                    Err(notice) => notify.emit(notice),
                }
            });
        }
    };

    let onselect = {
        let selected = selected.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            selected.set(select.value());
        })
    };

    let download_all = {
        let start = start.clone();
        Callback::from(move |_: MouseEvent| start(ExportTarget::AllUsers))
    };

    let download_event = {
        let selected = selected.clone();
        Callback::from(move |_: MouseEvent| match ExportTarget::event(&selected) {
            Ok(target) => start(target),
            Err(notice) => notify.emit(notice),
        })
    };

    let options = EVENTS.iter().map(|event| {
        html! {
            <option value={event.name} selected={*selected == event.name}>
                { format!("{} (₹{})", event.name, event.amount) }
            </option>
        }
    });

    html! {
        <PageSection>
            <Card>
                <CardTitle><h1>{"Events"}</h1></CardTitle>
                <CardBody>
                    <Button
                        label="Download All Data"
                        variant={ButtonVariant::Primary}
                        onclick={download_all}
                        disabled={*downloading}
                    />
                </CardBody>
            </Card>
            <Card>
                <CardTitle><h2>{"Event Data"}</h2></CardTitle>
                <CardBody>
                    <select class="pf-v5-c-form-control" aria-label="Event" onchange={onselect}>
                        <option value="" selected={selected.is_empty()}>{"Select an event"}</option>
                        { for options }
                    </select>
                    <Button
                        label="Download Event Data"
                        variant={ButtonVariant::Secondary}
                        onclick={download_event}
                        disabled={*downloading || selected.is_empty()}
                    />
                </CardBody>
            </Card>
            if *downloading {
                <div>
                    <Spinner size={SpinnerSize::Custom(String::from("24px"))} />
                    {"Downloading..."}
                </div>
            }
        </PageSection>
    }
}
