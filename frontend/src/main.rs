mod api;
mod app;
mod components;
mod pages;
mod session;
mod toast;
use browser_panic_hook::{CustomBody, IntoPanicHook};

#[cfg(not(debug_assertions))]
const LOG_LEVEL: log::Level = log::Level::Info;
#[cfg(debug_assertions)]
const LOG_LEVEL: log::Level = log::Level::Trace;

/// Last-resort page shown instead of the console after a panic.
fn crash_page(message: &str) -> String {
    format!(
        r#"<main class="pf-v5-c-page__main">
  <section class="pf-v5-c-page__main-section">
    <div class="pf-v5-c-empty-state">
      <h1 class="pf-v5-c-title pf-m-lg">The console stopped working</h1>
      <p class="pf-v5-c-empty-state__body">Reload the page to start over. Your sign-in is kept.</p>
      <pre>{message}</pre>
    </div>
  </section>
</main>"#
    )
}

fn main() {
    wasm_logger::init(wasm_logger::Config::new(LOG_LEVEL));
    yew::set_custom_panic_hook(
        CustomBody(Box::new(|details| crash_page(&details.message().to_string()))).into_panic_hook(),
    );
    log::info!("Event console starting, API at {}", api::api_config().base_url());
    yew::Renderer::<app::Application>::new().render();
}
