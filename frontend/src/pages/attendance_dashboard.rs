use crate::api::use_api;
use crate::components::logout::Logout;
use crate::components::search_panel::SearchPanel;
use event_console_common::SessionKind;
use patternfly_yew::prelude::*;
use yew::prelude::*;

#[function_component(AttendanceDashboard)]
pub fn attendance_dashboard() -> Html {
    let client = use_api(SessionKind::Attendance);

    html! {
        <>
            <PageSection>
                <Card>
                    <CardTitle><h1>{"Attendance Desk"}</h1></CardTitle>
                    <CardBody>
                        <p>{"Look up a participant or staff member by mobile number."}</p>
                        <Logout kind={SessionKind::Attendance} label="End attendance session" />
                    </CardBody>
                </Card>
            </PageSection>
            <PageSection>
                <SearchPanel client={client} />
            </PageSection>
        </>
    }
}
