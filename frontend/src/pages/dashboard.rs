use crate::api::use_api;
use crate::components::people_table::PeopleTable;
use crate::components::scope::use_cancel_token;
use crate::components::search_panel::SearchPanel;
use crate::toast::use_notifier;
use event_console_common::dashboard::{
    format_amount, DashboardSection, DashboardState, DashboardUpdate, Loadable,
};
use event_console_common::SessionKind;
use event_console_dto::records::Counts;
use patternfly_yew::prelude::*;
use std::rc::Rc;
use strum::IntoEnumIterator;
use yew::prelude::*;

#[derive(Default, PartialEq)]
struct DashboardModel(DashboardState);

impl Reducible for DashboardModel {
    type Action = DashboardUpdate;

    fn reduce(self: Rc<Self>, update: Self::Action) -> Rc<Self> {
        let mut state = self.0.clone();
        state.apply(update);
        Rc::new(Self(state))
    }
}

/// Renders one section by its own load state.
fn section<T>(loadable: &Loadable<T>, render: impl FnOnce(&T) -> Html) -> Html {
    match loadable {
        Loadable::Loading => html! { <Spinner size={SpinnerSize::Custom(String::from("24px"))} /> },
        Loadable::Ready(value) => render(value),
        Loadable::Failed => html! { <div class="pf-v5-u-danger-color-100">{"Unavailable"}</div> },
    }
}

fn stat_card(title: &str, body: Html) -> Html {
    html! {
        <Card>
            <CardTitle><h2>{ title.to_string() }</h2></CardTitle>
            <CardBody>{ body }</CardBody>
        </Card>
    }
}

fn event_cards(counts: &Counts) -> Html {
    counts
        .events
        .iter()
        .map(|event| {
            stat_card(
                &event.event,
                html! { <h3>{ format!("{} participants", event.participants) }</h3> },
            )
        })
        .collect()
}

#[function_component(Dashboard)]
pub fn dashboard() -> Html {
    let client = use_api(SessionKind::Admin);
    let notify = use_notifier();
    let cancel = use_cancel_token();
    let model = use_reducer(DashboardModel::default);

    {
        let client = client.clone();
        let model = model.clone();
        use_effect_with((), move |_| {
            for section in DashboardSection::iter() {
                let client = client.clone();
                let model = model.clone();
                let notify = notify.clone();
                let cancel = cancel.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    let Some(update) = cancel.guard(section.fetch(&client)).await else {
                        return;
                    };
                    if let Some(notice) = update.notice() {
                        notify.emit(notice);
                    }
                    model.dispatch(update);
                });
            }
            || ()
        });
    }

    let state = &model.0;
    html! {
        <>
            <PageSection>
                <h1>{"Dashboard"}</h1>
                <div class="pf-v5-l-gallery pf-m-gutter">
                    { section(&state.counts, event_cards) }
                    { stat_card("Total Staff", section(&state.counts, |c| html! { <h3>{ c.staff_count.to_string() }</h3> })) }
                    { stat_card("Total Amount", section(&state.total_amount, |a| html! { <h3>{ format_amount(*a) }</h3> })) }
                    { stat_card("Total Participants", section(&state.total_participants, |t| html! { <h3>{ t.to_string() }</h3> })) }
                </div>
            </PageSection>
            <PageSection>
                <SearchPanel client={client} />
            </PageSection>
            <PageSection>
                { stat_card("Latest 10 Users", section(&state.latest_users, |users| html! { <PeopleTable people={users.clone()} /> })) }
                { stat_card("Latest 10 Staff", section(&state.latest_staff, |staff| html! { <PeopleTable people={staff.clone()} /> })) }
            </PageSection>
        </>
    }
}
