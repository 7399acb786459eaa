use event_console_common::scope::{CancelToken, ViewScope};
use yew::prelude::*;

/// Token cancelled when the calling component unmounts. Async work started by the
/// component checks it before touching state.
#[hook]
pub fn use_cancel_token() -> CancelToken {
    let scope = use_memo((), |_| ViewScope::new());
    {
        let scope = scope.clone();
        use_effect_with((), move |_| move || scope.cancel());
    }
    scope.token()
}
