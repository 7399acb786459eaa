use crate::components::registrant_grid::RegistrantGrid;
use event_console_common::roster::Roster;
use yew::prelude::*;

#[function_component(Teachers)]
pub fn teachers() -> Html {
    html! { <RegistrantGrid roster={Roster::Teachers} /> }
}
