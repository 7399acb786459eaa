//! Platform independent core of the event console: sessions, the route gate and the
//! backend API contract. Nothing in here touches the browser, so it is tested natively.

pub mod api;
pub mod config;
pub mod dashboard;
pub mod export;
pub mod gate;
pub mod login;
pub mod notice;
pub mod pager;
pub mod roster;
pub mod scope;
pub mod search;
pub mod session;
pub mod storage;
pub mod transport;

#[cfg(test)]
pub(crate) mod testing;

pub use api::{ApiClient, ApiError, Endpoint};
pub use config::ApiConfig;
pub use notice::{Notice, NoticeLevel};
pub use session::{Session, SessionError, SessionKind, SessionStore, Sessions, Token};
pub use storage::{MemoryStorage, StorageError, TokenStorage};
pub use transport::{ApiRequest, Method, RawResponse, Transport, TransportError};
