use std::cell::Cell;
use std::future::Future;
use std::rc::Rc;

/// Shared flag telling in-flight work that its view is gone.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Rc<Cell<bool>>);

impl CancelToken {
    pub fn is_cancelled(&self) -> bool {
        self.0.get()
    }

    /// Runs `apply` with the value unless cancelled. Returns whether it ran.
    pub fn deliver<T>(&self, value: T, apply: impl FnOnce(T)) -> bool {
        if self.is_cancelled() {
            log::debug!("Dropping result for a closed view");
            return false;
        }
        apply(value);
        true
    }

    /// Awaits `fut` and yields its output only if the view is still around.
    pub async fn guard<F: Future>(&self, fut: F) -> Option<F::Output> {
        let output = fut.await;
        (!self.is_cancelled()).then_some(output)
    }
}

/// Lifetime of one mounted view. Cancels its token when dropped.
#[derive(Debug, Default)]
pub struct ViewScope {
    token: CancelToken,
}

impl ViewScope {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn token(&self) -> CancelToken {
        self.token.clone()
    }

    pub fn cancel(&self) {
        self.token.0.set(true);
    }
}

impl Drop for ViewScope {
    fn drop(&mut self) {
        self.cancel();
    }
}
