use event_console_common::login::remember_sign_in;
use event_console_common::{
    Session, SessionKind, SessionStore, Sessions, StorageError, Token, TokenStorage,
};
use gloo_storage::{LocalStorage, Storage};
use log::warn;
use std::rc::Rc;
use yew::prelude::*;

/// Token slots in `localStorage`, stored as plain strings.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl TokenStorage for BrowserStorage {
    fn read(&self, key: &str) -> Option<String> {
        LocalStorage::raw().get_item(key).ok().flatten()
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        LocalStorage::raw()
            .set_item(key, value)
            .map_err(|e| StorageError::Write(format!("{:?}", e)))
    }

    fn remove(&self, key: &str) {
        if let Err(e) = LocalStorage::raw().remove_item(key) {
            warn!("Could not clear {}: {:?}", key, e);
        }
    }
}

pub enum SessionAction {
    /// A store whose token is already persisted.
    SignedIn(SessionStore<BrowserStorage>),
    Logout,
}

/// One session as yew state.
#[derive(Debug, Clone)]
pub struct SessionSlot {
    store: SessionStore<BrowserStorage>,
}

impl SessionSlot {
    fn load(kind: SessionKind) -> Self {
        Self {
            store: SessionStore::load(kind, BrowserStorage),
        }
    }

    pub fn session(&self) -> &Session {
        self.store.session()
    }
}

impl PartialEq for SessionSlot {
    fn eq(&self, other: &Self) -> bool {
        self.session() == other.session()
    }
}

impl Reducible for SessionSlot {
    type Action = SessionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let store = match action {
            SessionAction::SignedIn(store) => store,
            SessionAction::Logout => {
                let mut store = self.store.clone();
                store.logout();
                store
            }
        };
        Rc::new(Self { store })
    }
}

/// Both sessions, provided once at the application root.
#[derive(Clone, PartialEq)]
pub struct SessionContext {
    admin: UseReducerHandle<SessionSlot>,
    attendance: UseReducerHandle<SessionSlot>,
}

impl SessionContext {
    fn slot(&self, kind: SessionKind) -> &UseReducerHandle<SessionSlot> {
        match kind {
            SessionKind::Admin => &self.admin,
            SessionKind::Attendance => &self.attendance,
        }
    }

    pub fn sessions(&self) -> Sessions {
        Sessions {
            admin: self.admin.session().clone(),
            attendance: self.attendance.session().clone(),
        }
    }

    /// Persists the token before the slot changes. The error is the inline message
    /// for the login form.
    pub fn login(&self, kind: SessionKind, token: Token) -> Result<(), String> {
        let slot = self.slot(kind);
        let store = remember_sign_in(&slot.store, token)?;
        slot.dispatch(SessionAction::SignedIn(store));
        Ok(())
    }

    pub fn logout(&self, kind: SessionKind) {
        self.slot(kind).dispatch(SessionAction::Logout);
    }
}

#[derive(Properties, PartialEq)]
pub struct SessionProviderProps {
    pub children: Children,
}

#[function_component(SessionProvider)]
pub fn session_provider(props: &SessionProviderProps) -> Html {
    let admin = use_reducer_eq(|| SessionSlot::load(SessionKind::Admin));
    let attendance = use_reducer_eq(|| SessionSlot::load(SessionKind::Attendance));
    let context = SessionContext { admin, attendance };

    html! {
        <ContextProvider<SessionContext> {context}>
            { for props.children.iter() }
        </ContextProvider<SessionContext>>
    }
}

#[hook]
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().expect("Must be nested inside a SessionProvider")
}
