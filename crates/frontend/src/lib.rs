pub mod app;
pub mod dashboards;
pub mod domain;
pub mod layout;
pub mod routes;
pub mod shared;

use contracts::shared::config::AppConfig;
use wasm_bindgen::prelude::wasm_bindgen;

/// Настройки из адреса страницы (`?log=debug&debounce=500&active=...`)
fn read_config() -> AppConfig {
    let search = web_sys::window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default();
    AppConfig::from_query(&search)
}

#[wasm_bindgen]
pub fn hydrate() {
    let config = read_config();

    // initializes logging using the `log` crate
    _ = console_log::init_with_level(config.log_level);
    console_error_panic_hook::set_once();
    log::info!(
        "starting: log={}, debounce={}ms, active={:?}",
        config.log_level,
        config.search_debounce_ms,
        config.active_tab
    );

    leptos::mount::mount_to_body(move || {
        let config = config.clone();
        leptos::view! { <app::App config=config /> }
    });
}

#[wasm_bindgen(start)]
pub fn start() {
    hydrate();
}
