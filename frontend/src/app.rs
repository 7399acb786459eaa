use crate::api::{api_config, FetchTransport};
use crate::components::gate::Gate;
use crate::components::logout::Logout;
use crate::pages::{
    attendance::AttendanceLogin, attendance_dashboard::AttendanceDashboard, dashboard::Dashboard,
    events::Events, login::Login, participants::Participants, teachers::Teachers,
};
use crate::session::SessionProvider;
use event_console_common::gate::Page as ConsolePage;
use event_console_common::{ApiClient, SessionKind};
use patternfly_yew::prelude::*;
use std::rc::Rc;
use yew::prelude::*;
use yew_router::prelude::*;
use yew_router::Switch;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Routable)]
pub enum AppRoute {
    #[at("/login")]
    Login,
    #[at("/")]
    Dashboard,
    #[at("/events")]
    Events,
    #[at("/participants")]
    Participants,
    #[at("/teachers")]
    Teachers,
    #[at("/attendance")]
    Attendance,
    #[at("/attendance/dashboard")]
    AttendanceDashboard,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl From<ConsolePage> for AppRoute {
    fn from(page: ConsolePage) -> Self {
        match page {
            ConsolePage::Login => AppRoute::Login,
            ConsolePage::Dashboard => AppRoute::Dashboard,
            ConsolePage::Events => AppRoute::Events,
            ConsolePage::Participants => AppRoute::Participants,
            ConsolePage::Teachers => AppRoute::Teachers,
            ConsolePage::Attendance => AppRoute::Attendance,
            ConsolePage::AttendanceDashboard => AppRoute::AttendanceDashboard,
        }
    }
}

/// Side menu entries, in display order.
const MENU: [(&str, AppRoute); 5] = [
    ("Dashboard", AppRoute::Dashboard),
    ("Attendance", AppRoute::Attendance),
    ("Events", AppRoute::Events),
    ("Participants", AppRoute::Participants),
    ("Teachers", AppRoute::Teachers),
];

#[function_component(Application)]
pub fn app() -> Html {
    let client = use_memo((), |_| ApiClient::new(api_config(), Rc::new(FetchTransport)));

    html! {
        <BackdropViewer>
          <ToastViewer>
            <SessionProvider>
              <ContextProvider<ApiClient> context={(*client).clone()}>
                <BrowserRouter>
                  <Switch<AppRoute> render={switch_app_route} />
                </BrowserRouter>
              </ContextProvider<ApiClient>>
            </SessionProvider>
          </ToastViewer>
        </BackdropViewer>
    }
}

fn switch_app_route(target: AppRoute) -> Html {
    match target {
        AppRoute::Login => {
            html! {<Gate page={ConsolePage::Login}><Login/></Gate>}
        }
        AppRoute::Dashboard => {
            html! {<Gate page={ConsolePage::Dashboard}><AppPage><Dashboard/></AppPage></Gate>}
        }
        AppRoute::Events => {
            html! {<Gate page={ConsolePage::Events}><AppPage><Events/></AppPage></Gate>}
        }
        AppRoute::Participants => {
            html! {<Gate page={ConsolePage::Participants}><AppPage><Participants/></AppPage></Gate>}
        }
        AppRoute::Teachers => {
            html! {<Gate page={ConsolePage::Teachers}><AppPage><Teachers/></AppPage></Gate>}
        }
        AppRoute::Attendance => {
            html! {<Gate page={ConsolePage::Attendance}><AppPage><AttendanceLogin/></AppPage></Gate>}
        }
        AppRoute::AttendanceDashboard => {
            html! {<Gate page={ConsolePage::AttendanceDashboard}><AppPage><AttendanceDashboard/></AppPage></Gate>}
        }
        AppRoute::NotFound => html! {<Redirect<AppRoute> to={AppRoute::Dashboard} />},
    }
}

#[derive(Clone, Debug, PartialEq, Properties)]
pub struct PageProps {
    pub children: Children,
}

#[function_component(AppPage)]
fn page(props: &PageProps) -> Html {
    let tools = html! { <Logout kind={SessionKind::Admin} /> };
    let brand = html! { <strong>{"Event Console"}</strong> };

    let sidebar = html_nested! {
        <PageSidebar>
            <Nav>
                <ul class="pf-v5-c-nav__list" role="list">
                    { for MENU.iter().map(|(label, route)| html! {
                        <li class="pf-v5-c-nav__item">
                            <Link<AppRoute> classes={classes!("pf-v5-c-nav__link")} to={*route}>{ *label }</Link<AppRoute>>
                        </li>
                    }) }
                </ul>
            </Nav>
        </PageSidebar>
    };

    html! {
        <Page {tools} {brand} {sidebar}>
            { for props.children.iter() }
        </Page>
    }
}
