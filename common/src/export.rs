use crate::api::ApiClient;
use crate::notice::Notice;
use log::{info, warn};

/// An event offered in the export selector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CatalogueEvent {
    pub name: &'static str,
    pub amount: u32,
}

pub const EVENTS: [CatalogueEvent; 7] = [
    CatalogueEvent { name: "National Conference", amount: 100 },
    CatalogueEvent { name: "Brain Battle (Day1)", amount: 100 },
    CatalogueEvent { name: "Media Splash(Day1)", amount: 100 },
    CatalogueEvent { name: "Wisdom War(Day1)", amount: 100 },
    CatalogueEvent { name: "Hack in the Dark(Day2)", amount: 100 },
    CatalogueEvent { name: "Spark the Idea(Day2)", amount: 100 },
    CatalogueEvent { name: "Gold Rush Quest(Day2)", amount: 100 },
];

pub const NO_EVENT_SELECTED: &str = "Please select an event before downloading.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportTarget {
    AllUsers,
    Event(String),
}

/// Spreadsheet bytes with the name they are saved under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Export {
    pub filename: String,
    pub bytes: Vec<u8>,
}

impl ExportTarget {
    /// Builds an event export from the selector value.
    pub fn event(selected: &str) -> Result<Self, Notice> {
        if selected.is_empty() {
            return Err(Notice::error(NO_EVENT_SELECTED));
        }
        Ok(ExportTarget::Event(selected.to_string()))
    }

    pub fn filename(&self) -> String {
        match self {
            ExportTarget::AllUsers => "users.xlsx".to_string(),
            ExportTarget::Event(name) => {
                format!("{}_participants.xlsx", underscore_whitespace(name))
            }
        }
    }

    fn fallback_message(&self) -> &'static str {
        match self {
            ExportTarget::AllUsers => "Error downloading all data. Please try again later.",
            ExportTarget::Event(_) => "Error downloading event data. Please try again later.",
        }
    }
}

/// Replaces every run of whitespace with a single underscore, keeping everything else.
fn underscore_whitespace(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut in_space = false;
    for c in name.chars() {
        if c.is_whitespace() {
            if !in_space {
                out.push('_');
            }
            in_space = true;
        } else {
            out.push(c);
            in_space = false;
        }
    }
    out
}

/// Fetches the spreadsheet, or the notice to show. The backend's own message wins.
pub async fn run_export(client: &ApiClient, target: &ExportTarget) -> Result<Export, Notice> {
    match client.export(target).await {
        Ok(export) => {
            info!("Exported {} ({} bytes)", export.filename, export.bytes.len());
            Ok(export)
        }
        Err(e) => {
            warn!("Export {:?} failed: {}", target, e);
            Err(Notice::error(
                e.backend_message().unwrap_or(target.fallback_message()),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Endpoint;
    use crate::testing::{authorized_client, MockTransport};
    use crate::transport::RawResponse;
    use futures::executor::block_on;
    use serde_json::json;

    #[test]
    fn event_filename_keeps_punctuation() {
        let target = ExportTarget::event("Brain Battle (Day1)").unwrap();
        assert_eq!(target.filename(), "Brain_Battle_(Day1)_participants.xlsx");
        assert_eq!(
            ExportTarget::Event("Hack  in\tthe Dark(Day2)".into()).filename(),
            "Hack_in_the_Dark(Day2)_participants.xlsx"
        );
        assert_eq!(ExportTarget::AllUsers.filename(), "users.xlsx");
    }

    #[test]
    fn every_catalogue_event_makes_a_filename() {
        for event in EVENTS {
            let name = ExportTarget::event(event.name).unwrap().filename();
            assert!(!name.contains(' '), "{name}");
            assert!(name.ends_with("_participants.xlsx"));
        }
    }

    #[test]
    fn no_selection_is_refused() {
        assert_eq!(ExportTarget::event(""), Err(Notice::error(NO_EVENT_SELECTED)));
    }

    #[test]
    fn backend_message_is_shown_verbatim() {
        let mock = MockTransport::new();
        mock.reply_json(Endpoint::ExportUsers, 500, json!({"message": "disk full"}));
        let notice = block_on(run_export(&authorized_client(&mock, "t"), &ExportTarget::AllUsers))
            .unwrap_err();
        assert_eq!(notice.text, "disk full");
    }

    #[test]
    fn generic_message_without_backend_message() {
        let mock = MockTransport::new();
        mock.reply(Endpoint::ExportEvent, RawResponse::new(500, "Internal Server Error"));
        let target = ExportTarget::Event("National Conference".into());
        let notice = block_on(run_export(&authorized_client(&mock, "t"), &target)).unwrap_err();
        assert_eq!(notice.text, "Error downloading event data. Please try again later.");

        mock.fail(Endpoint::ExportUsers);
        let notice = block_on(run_export(&authorized_client(&mock, "t"), &ExportTarget::AllUsers))
            .unwrap_err();
        assert_eq!(notice.text, "Error downloading all data. Please try again later.");
    }

    #[test]
    fn successful_export_names_file() {
        let mock = MockTransport::new();
        mock.reply(Endpoint::ExportUsers, RawResponse::new(200, vec![1, 2, 3]));
        let export = block_on(run_export(&authorized_client(&mock, "t"), &ExportTarget::AllUsers))
            .unwrap();
        assert_eq!(export.filename, "users.xlsx");
        assert_eq!(export.bytes, vec![1, 2, 3]);
    }
}
