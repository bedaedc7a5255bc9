//! Browser entry point and DOM bindings.
//!
//! Compiled only with the `csr` feature. The theme is applied as soon as
//! the module starts so the page never paints in the wrong palette; the
//! form and toggle bind once the document has parsed.

mod form;
mod theme;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("logger already set: {err}").into());
    }

    theme::apply_saved();
    on_ready(|| {
        theme::bind_toggle();
        if let Err(err) = form::bind() {
            log::warn!("contact form not bound: {err}");
        }
    });
}

/// Run `f` once the DOM is parsed (immediately if it already is).
fn on_ready(f: impl FnOnce() + 'static) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if document.ready_state() != "loading" {
        f();
        return;
    }

    let callback = Closure::once(f);
    if let Err(err) =
        document.add_event_listener_with_callback("DOMContentLoaded", callback.as_ref().unchecked_ref())
    {
        log::warn!("failed to wait for DOMContentLoaded: {err:?}");
    }
    callback.forget();
}
