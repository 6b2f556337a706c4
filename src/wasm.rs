use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;

use crate::config::StudioConfig;
use crate::runtime::Runtime;

thread_local! {
    /// Keeps the runtime (and with it every listener) alive for the page's lifetime.
    static RUNTIME: RefCell<Option<Rc<Runtime>>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    let stored = StudioConfig::load_from_local_storage();
    let config = stored.clone().unwrap_or_default();

    if let Err(e) = console_log::init_with_level(config.preferences.log_level.to_level()) {
        web_sys::console::warn_1(&format!("Logger already initialized: {}", e).into());
    }
    log::info!("🎨 Filter Studio WASM starting...");

    if stored.is_none() {
        if let Err(e) = config.save_to_local_storage() {
            log::warn!("Could not store default configuration: {}", e);
        }
    }

    match Runtime::mount(&config) {
        Ok(runtime) => RUNTIME.with(|slot| *slot.borrow_mut() = Some(runtime)),
        Err(e) => log::error!("❌ Failed to start: {}", e),
    }
}
