//! `ThemeHost` over `<html data-theme>` and `localStorage`.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Element, Storage};

use crate::consts::{THEME_ATTRIBUTE, THEME_STORAGE_KEY, THEME_TOGGLE_SELECTOR};
use crate::theme::{self, Theme, ThemeHost};

struct DocumentTheme {
    root: Element,
    storage: Option<Storage>,
}

impl DocumentTheme {
    fn current() -> Option<Self> {
        let window = web_sys::window()?;
        let root = window.document()?.document_element()?;
        let storage = match window.local_storage() {
            Ok(storage) => storage,
            Err(err) => {
                log::warn!("localStorage unavailable: {err:?}");
                None
            }
        };
        Some(Self { root, storage })
    }
}

impl ThemeHost for DocumentTheme {
    fn attribute(&self) -> Option<String> {
        self.root.get_attribute(THEME_ATTRIBUTE)
    }

    fn set_attribute(&mut self, theme: Theme) {
        if let Err(err) = self.root.set_attribute(THEME_ATTRIBUTE, theme.as_str()) {
            log::warn!("failed to set {THEME_ATTRIBUTE}: {err:?}");
        }
    }

    fn stored(&self) -> Option<String> {
        match self.storage.as_ref()?.get_item(THEME_STORAGE_KEY) {
            Ok(value) => value,
            Err(err) => {
                log::warn!("failed to read theme preference: {err:?}");
                None
            }
        }
    }

    fn store(&mut self, theme: Theme) {
        let Some(storage) = &self.storage else {
            return;
        };
        if let Err(err) = storage.set_item(THEME_STORAGE_KEY, theme.as_str()) {
            log::warn!("failed to persist theme preference: {err:?}");
        }
    }
}

pub(super) fn apply_saved() {
    if let Some(mut host) = DocumentTheme::current() {
        theme::apply_saved(&mut host);
    }
}

pub(super) fn bind_toggle() {
    let Some(host) = DocumentTheme::current() else {
        return;
    };
    let toggle = match host.root.owner_document().map(|doc| doc.query_selector(THEME_TOGGLE_SELECTOR)) {
        Some(Ok(Some(toggle))) => toggle,
        Some(Err(err)) => {
            log::warn!("theme toggle lookup failed: {err:?}");
            return;
        }
        _ => {
            log::debug!("no theme toggle on page");
            return;
        }
    };

    let host = Rc::new(RefCell::new(host));
    let on_click = Closure::<dyn FnMut()>::new(move || {
        theme::toggle(&mut *host.borrow_mut());
    });
    if let Err(err) = toggle.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref()) {
        log::warn!("failed to bind theme toggle: {err:?}");
    }
    on_click.forget();
}
