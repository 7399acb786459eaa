use crate::api::use_api;
use crate::app::AppRoute;
use crate::components::credentials_form::CredentialsForm;
use crate::components::scope::use_cancel_token;
use crate::session::use_session;
use event_console_common::login::attendance_sign_in;
use event_console_common::SessionKind;
use event_console_dto::session::Credentials;
use yew::prelude::*;
use yew_router::prelude::*;

/// Attendance desk login, reached from inside the coordinator console.
#[function_component(AttendanceLogin)]
pub fn attendance_login() -> Html {
    let client = use_api(SessionKind::Attendance);
    let session = use_session();
    let navigator = use_navigator().expect("Must be nested inside a Router");
    let cancel = use_cancel_token();
    let error = use_state(|| None::<String>);
    let loading_state = use_state(|| false);

    let login_submit = {
        let error = error.clone();
        let loading_state = loading_state.clone();
        Callback::from(move |credentials: Credentials| {
            let client = client.clone();
            let session = session.clone();
            let navigator = navigator.clone();
            let cancel = cancel.clone();
            let error = error.clone();
            let loading_state = loading_state.clone();

            loading_state.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                let Some(result) = cancel.guard(attendance_sign_in(&client, credentials)).await
                else {
                    return;
                };
                loading_state.set(false);
                match result {
                    Ok(token) => match session.login(SessionKind::Attendance, token) {
                        Ok(()) => {
                            error.set(None);
                            navigator.push(&AppRoute::AttendanceDashboard);
                        }
                        Err(message) => error.set(Some(message)),
                    },
                    Err(message) => error.set(Some(message)),
                }
            });
        })
    };

    html! {
        <CredentialsForm
            title="Attendance Login"
            username_label="Username"
            onsubmit={login_submit}
            error={(*error).clone()}
            loading={*loading_state}
        />
    }
}
