use crate::components::registrant_grid::RegistrantGrid;
use event_console_common::roster::Roster;
use yew::prelude::*;

#[function_component(Participants)]
pub fn participants() -> Html {
    html! { <RegistrantGrid roster={Roster::Participants} /> }
}
