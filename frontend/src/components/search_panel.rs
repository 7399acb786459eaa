use crate::components::people_table::PeopleTable;
use crate::components::scope::use_cancel_token;
use crate::toast::use_notifier;
use event_console_common::search::{run_search, SearchKind};
use event_console_common::ApiClient;
use event_console_dto::records::Person;
use patternfly_yew::prelude::*;
use std::str::FromStr;
use strum::IntoEnumIterator;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SearchPanelProps {
    pub client: ApiClient,
    #[prop_or_default]
    pub kind: SearchKind,
}

/// Mobile number lookup. A miss and a failed lookup both show "No results found.";
/// the failure additionally raises a toast.
#[function_component(SearchPanel)]
pub fn search_panel(props: &SearchPanelProps) -> Html {
    let notify = use_notifier();
    let cancel = use_cancel_token();
    let kind = use_state(|| props.kind);
    let query = use_state(String::new);
    let results = use_state(Vec::<Person>::new);
    let searching = use_state(|| false);

    let onkind = {
        let kind = kind.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            if let Ok(selected) = SearchKind::from_str(&select.value()) {
                kind.set(selected);
            }
        })
    };

    let oninput = {
        let query = query.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            query.set(input.value());
        })
    };

    let onsearch = {
        let client = props.client.clone();
        let kind = kind.clone();
        let query = query.clone();
        let results = results.clone();
        let searching = searching.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let client = client.clone();
            let kind = *kind;
            let mobile = (*query).clone();
            let results = results.clone();
            let searching = searching.clone();
            let notify = notify.clone();
            let cancel = cancel.clone();
            searching.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                if let Some(outcome) = cancel.guard(run_search(&client, kind, &mobile)).await {
                    if let Some(notice) = outcome.notice {
                        notify.emit(notice);
                    }
                    results.set(outcome.results);
                    searching.set(false);
                }
            });
        })
    };

    let options = SearchKind::iter().map(|k| {
        html! { <option value={k.to_string()} selected={k == *kind}>{ k.to_string() }</option> }
    });

    html! {
        <Card>
            <CardTitle><h2>{ format!("Search for {}", *kind) }</h2></CardTitle>
            <CardBody>
                <form onsubmit={onsearch}>
                    <select class="pf-v5-c-form-control" aria-label="Search Type" onchange={onkind}>
                        { for options }
                    </select>
                    <TextInput
                        r#type={TextInputType::Text}
                        placeholder="Mobile number"
                        value={(*query).clone()}
                        {oninput}
                    />
                    <Button label="Search" r#type={ButtonType::Submit} disabled={*searching} />
                </form>
                <PeopleTable people={(*results).clone()} empty_label={AttrValue::from("No results found.")} />
            </CardBody>
        </Card>
    }
}
