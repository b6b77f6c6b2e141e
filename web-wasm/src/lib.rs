//! BG Remove Pro Web App (Leptos + WASM)

mod api;
mod app;
mod components;
mod driver;
mod page_config;

use wasm_bindgen::prelude::*;

#[cfg(all(target_arch = "wasm32", test))]
wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    leptos::mount::mount_to_body(app::App);
}
