//! Leptos views mounted onto the static page.

pub mod response_overlay;
