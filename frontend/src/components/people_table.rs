use event_console_dto::records::Person;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PeopleTableProps {
    pub people: Vec<Person>,
    /// Row shown instead of an empty body, if any.
    #[prop_or_default]
    pub empty_label: Option<AttrValue>,
}

#[function_component(PeopleTable)]
pub fn people_table(props: &PeopleTableProps) -> Html {
    let rows = props.people.iter().map(|person| {
        html! {
            <tr>
                <td>{ person.full_name() }</td>
                <td>{ person.mobile.clone() }</td>
                <td>{ person.created_at.clone() }</td>
            </tr>
        }
    });

    html! {
        <table class="pf-v5-c-table pf-m-compact" role="grid">
            <thead>
                <tr>
                    <th>{"Name"}</th>
                    <th>{"Mobile"}</th>
                    <th>{"Created At"}</th>
                </tr>
            </thead>
            <tbody>
                if props.people.is_empty() {
                    if let Some(label) = &props.empty_label {
                        <tr><td colspan="3">{ label.clone() }</td></tr>
                    }
                } else {
                    { for rows }
                }
            </tbody>
        </table>
    }
}
