use event_console_common::{Notice, NoticeLevel};
use patternfly_yew::prelude::*;
use std::time::Duration;
use yew::prelude::*;

fn alert_type(level: NoticeLevel) -> AlertType {
    match level {
        NoticeLevel::Success => AlertType::Success,
        NoticeLevel::Error => AlertType::Danger,
    }
}

/// Use this to raise notices inside a component, nested in a ToastViewer:
///     let notify = use_notifier();
///     notify.emit(Notice::error("..."));
#[hook]
pub fn use_notifier() -> Callback<Notice> {
    let toaster = use_toaster().expect("Must be nested inside a ToastViewer");
    Callback::from(move |notice: Notice| {
        toaster.toast(Toast {
            title: notice.text.as_str().into(),
            timeout: Some(Duration::from_secs(match notice.level {
                NoticeLevel::Error => 6,
                _ => 3,
            })),
            r#type: alert_type(notice.level),
            ..Default::default()
        });
    })
}
