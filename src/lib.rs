//! Contact-form page glue compiled to WebAssembly.
//!
//! The crate drives a static contact page: real-time sanitizing of the name
//! field, a live character counter for comments, submit-time validation with
//! structured error records, a simulated server round trip, and a persisted
//! light/dark theme toggle. The host page only supplies the markup; the
//! `csr` build binds to it on load.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`form`] | Form controller, error records, and the [`form::Effect`] list it emits |
//! | [`theme`] | Theme preference, toggle, and the [`theme::ThemeHost`] seam |
//! | [`components`] | Leptos view for the submission response overlay |
//! | [`config`] | Tunable limits and delays |
//! | [`consts`] | Shared constants (class names, messages, storage keys) |
//! | [`error`] | Crate error type |
//!
//! Everything outside the `web` module is DOM-free and tested natively.

pub mod components;
pub mod config;
pub mod consts;
pub mod error;
pub mod form;
pub mod theme;

#[cfg(test)]
mod testing;

#[cfg(feature = "csr")]
mod web;

pub use error::{Error, Result};
