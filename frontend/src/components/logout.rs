use crate::app::AppRoute;
use crate::session::use_session;
use crate::toast::use_notifier;
use event_console_common::gate::Page;
use event_console_common::{Notice, SessionKind};
use patternfly_yew::prelude::*;
use web_sys::SubmitEvent;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LogoutProps {
    pub kind: SessionKind,
    #[prop_or(AttrValue::from("Logout"))]
    pub label: AttrValue,
}

#[function_component(Logout)]
pub fn logout(props: &LogoutProps) -> Html {
    let notify = use_notifier();
    let session = use_session();
    let navigator = use_navigator().expect("Must be nested inside a Router");
    let kind = props.kind;
    let logged_in = session.sessions().is_authenticated(kind);

    let logout_submit = {
        let session = session.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            session.logout(kind);
            notify.emit(Notice::success("Logged out!"));
            navigator.push(&AppRoute::from(Page::login_for(kind)));
        })
    };

    html! {
        <>
            if logged_in {
                <form onsubmit={logout_submit}>
                    <Button label={props.label.to_string()} variant={ButtonVariant::Danger} r#type={ButtonType::Submit} />
                </form>
            } else {
                <div>{"Not logged in."}</div>
            }
        </>
    }
}
