use crate::api::use_api;
use crate::components::loading_state::LoadingState;
use crate::components::scope::use_cancel_token;
use crate::toast::use_notifier;
use event_console_common::pager::{Pager, ROWS_PER_PAGE_OPTIONS};
use event_console_common::roster::Roster;
use event_console_common::SessionKind;
use event_console_dto::records::Registrant;
use log::warn;
use patternfly_yew::prelude::*;
use web_sys::HtmlSelectElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct RegistrantGridProps {
    pub roster: Roster,
}

/// Fetches a whole listing once and pages through it locally.
#[function_component(RegistrantGrid)]
pub fn registrant_grid(props: &RegistrantGridProps) -> Html {
    let client = use_api(SessionKind::Admin);
    let notify = use_notifier();
    let cancel = use_cancel_token();
    let registrants = use_state(Vec::<Registrant>::new);
    let loading = use_state(|| true);
    let pager = use_state(Pager::default);
    let preview = use_state(|| None::<String>);

    {
        let roster = props.roster;
        let registrants = registrants.clone();
        let loading = loading.clone();
        use_effect_with(roster, move |roster| {
            let roster = *roster;
            wasm_bindgen_futures::spawn_local(async move {
                let Some(result) = cancel.guard(roster.fetch(&client)).await else {
                    return;
                };
                match result {
                    Ok(list) => registrants.set(list),
                    Err(e) => {
                        warn!("{} listing failed: {}", roster, e);
                        notify.emit(roster.failure_notice());
                    }
                }
                loading.set(false);
            });
            || ()
        });
    }

    if *loading {
        return html! { <LoadingState label={format!("Loading {} ...", props.roster.title().to_lowercase())} /> };
    }

    let page_count = pager.page_count(registrants.len()).max(1);
    let go_to = |page: usize| {
        let pager = pager.clone();
        Callback::from(move |_: MouseEvent| pager.set(pager.with_page(page)))
    };
    let onrows = {
        let pager = pager.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            if let Ok(rows) = select.value().parse::<usize>() {
                pager.set(pager.with_rows_per_page(rows));
            }
        })
    };

    let cards = pager.slice(&registrants).iter().map(|r| {
        let open_preview = {
            let preview = preview.clone();
            let image = r.image.clone();
            Callback::from(move |_: MouseEvent| preview.set(Some(image.clone())))
        };
        html! {
            <Card>
                <CardTitle>
                    <img class="registrant-photo" src={r.image.clone()} alt={r.first_name.clone()} onclick={open_preview} />
                    <h2>{ r.full_name() }</h2>
                </CardTitle>
                <CardBody>
                    <DescriptionList>
                        <DescriptionGroup term="College">{ r.college_name.clone() }</DescriptionGroup>
                        <DescriptionGroup term="Token"><strong class="registration-token">{ r.token.clone() }</strong></DescriptionGroup>
                        <DescriptionGroup term="Mobile">{ r.mobile.clone() }</DescriptionGroup>
                        <DescriptionGroup term="Email">{ r.email.clone() }</DescriptionGroup>
                        <DescriptionGroup term="Country">{ r.country.clone() }</DescriptionGroup>
                        <DescriptionGroup term="State">{ r.state.clone() }</DescriptionGroup>
                        <DescriptionGroup term="Date">{ r.created_at.clone() }</DescriptionGroup>
                    </DescriptionList>
                </CardBody>
            </Card>
        }
    });

    let rows_options = ROWS_PER_PAGE_OPTIONS.iter().map(|rows| {
        html! { <option value={rows.to_string()} selected={*rows == pager.rows_per_page()}>{ rows.to_string() }</option> }
    });

    html! {
        <PageSection>
            <h1>{ props.roster.title() }</h1>
            if let Some(image) = (*preview).clone() {
                <Card>
                    <CardBody>
                        <img class="registrant-photo-large" src={image} alt="Photo" />
                        <Button label="Close" onclick={{
                            let preview = preview.clone();
                            Callback::from(move |_| preview.set(None))
                        }} />
                    </CardBody>
                </Card>
            }
            if registrants.is_empty() {
                <p>{ format!("No {} found.", props.roster.title().to_lowercase()) }</p>
            } else {
                <div class="pf-v5-l-gallery pf-m-gutter">{ for cards }</div>
                <div class="pager">
                    <Button label="Previous" disabled={pager.page() == 0} onclick={go_to(pager.page().saturating_sub(1))} />
                    <span>{ format!(" Page {} of {} ", pager.page() + 1, page_count) }</span>
                    <Button label="Next" disabled={pager.page() + 1 >= page_count} onclick={go_to(pager.page() + 1)} />
                    <select class="pf-v5-c-form-control" aria-label="Rows per page" onchange={onrows}>
                        { for rows_options }
                    </select>
                </div>
            }
        </PageSection>
    }
}
