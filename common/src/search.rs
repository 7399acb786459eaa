use crate::api::{ApiClient, Endpoint};
use crate::notice::{Notice, FETCH_FAILED};
use event_console_dto::records::Person;
use log::warn;
use strum::{Display, EnumIter, EnumString};

/// Which register a mobile number is looked up in.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Display, EnumIter, EnumString)]
pub enum SearchKind {
    #[default]
    Student,
    Staff,
}

impl SearchKind {
    pub fn endpoint(&self) -> Endpoint {
        match self {
            SearchKind::Student => Endpoint::SearchUser,
            SearchKind::Staff => Endpoint::SearchStaff,
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct SearchOutcome {
    pub results: Vec<Person>,
    pub notice: Option<Notice>,
}

/// A miss and a failure both leave the table empty; only the failure raises a notice.
pub async fn run_search(client: &ApiClient, kind: SearchKind, mobile: &str) -> SearchOutcome {
    match client.search_by_mobile(kind, mobile).await {
        Ok(results) => SearchOutcome {
            results,
            notice: None,
        },
        Err(e) => {
            warn!("{} search failed: {}", kind, e);
            SearchOutcome {
                results: Vec::new(),
                notice: Some(Notice::error(FETCH_FAILED)),
            }
        }
    }
}
