use crate::api::{ApiClient, ApiError};
use crate::notice::Notice;
use event_console_dto::records::Registrant;
use strum::Display;

/// The two full registration listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Roster {
    Participants,
    Teachers,
}

impl Roster {
    pub fn title(&self) -> &'static str {
        match self {
            Roster::Participants => "Participants",
            Roster::Teachers => "Teachers",
        }
    }

    pub async fn fetch(&self, client: &ApiClient) -> Result<Vec<Registrant>, ApiError> {
        match self {
            Roster::Participants => client.participants().await,
            Roster::Teachers => client.staff().await,
        }
    }

    pub fn failure_notice(&self) -> Notice {
        Notice::error(match self {
            Roster::Participants => "Error fetching participants data. Please try again later.",
            Roster::Teachers => "Error fetching teachers data. Please try again later.",
        })
    }
}
