use crate::app::AppRoute;
use crate::session::use_session;
use event_console_common::gate::{check, Access, Page};
use log::debug;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub struct GateProps {
    pub page: Page,
    pub children: Children,
}

/// Mounts its children only when the sessions allow `page`, otherwise redirects.
/// Re-evaluated on every render, so a logout elsewhere takes effect at once.
#[function_component(Gate)]
pub fn gate(props: &GateProps) -> Html {
    let sessions = use_session().sessions();
    match check(props.page, &sessions) {
        Access::Granted => html! { <>{ for props.children.iter() }</> },
        Access::Redirect(to) => {
            debug!("{} not accessible, redirecting to {}", props.page, to);
            html! { <Redirect<AppRoute> to={AppRoute::from(to)} /> }
        }
    }
}
