use crate::session::{SessionKind, Sessions};
use strum::{Display, EnumIter};

/// Every screen of the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum Page {
    Login,
    Dashboard,
    Events,
    Participants,
    Teachers,
    Attendance,
    AttendanceDashboard,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Granted,
    Redirect(Page),
}

impl Page {
    pub fn path(&self) -> &'static str {
        match self {
            Page::Login => "/login",
            Page::Dashboard => "/",
            Page::Events => "/events",
            Page::Participants => "/participants",
            Page::Teachers => "/teachers",
            Page::Attendance => "/attendance",
            Page::AttendanceDashboard => "/attendance/dashboard",
        }
    }

    /// Sessions that must be signed in, checked in order.
    pub fn requirements(&self) -> &'static [SessionKind] {
        match self {
            Page::Login => &[],
            Page::Dashboard | Page::Events | Page::Participants | Page::Teachers => {
                &[SessionKind::Admin]
            }
            Page::Attendance => &[SessionKind::Admin],
            Page::AttendanceDashboard => &[SessionKind::Admin, SessionKind::Attendance],
        }
    }

    /// The session this page signs in to, if it is a login form.
    pub fn signs_in(&self) -> Option<SessionKind> {
        match self {
            Page::Login => Some(SessionKind::Admin),
            Page::Attendance => Some(SessionKind::Attendance),
            _ => None,
        }
    }

    pub fn login_for(kind: SessionKind) -> Page {
        match kind {
            SessionKind::Admin => Page::Login,
            SessionKind::Attendance => Page::Attendance,
        }
    }

    pub fn home_for(kind: SessionKind) -> Page {
        match kind {
            SessionKind::Admin => Page::Dashboard,
            SessionKind::Attendance => Page::AttendanceDashboard,
        }
    }

    pub fn is_protected(&self) -> bool {
        !self.requirements().is_empty()
    }
}

/// Decides whether `page` may mount given the current sessions. Called on every render.
pub fn check(page: Page, sessions: &Sessions) -> Access {
    if let Some(kind) = page
        .requirements()
        .iter()
        .find(|kind| !sessions.is_authenticated(**kind))
    {
        return Access::Redirect(Page::login_for(*kind));
    }
    match page.signs_in() {
        Some(kind) if sessions.is_authenticated(kind) => Access::Redirect(Page::home_for(kind)),
        _ => Access::Granted,
    }
}
