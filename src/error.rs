//! Crate error type.
//!
//! User-facing validation failures are not errors in this sense; they are
//! recorded as [`crate::form::FormError`] values. This type covers setup
//! problems: bad configuration, a missing form, or a rejected DOM call.

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("required element not found: {0}")]
    MissingElement(&'static str),
    #[error("invalid config: {0}")]
    Config(#[from] serde_json::Error),
    #[error("invalid comment limits: min {min} exceeds max {max}")]
    InvalidLimits { min: usize, max: usize },
    #[error("warning threshold {threshold} exceeds max length {max}")]
    InvalidThreshold { threshold: usize, max: usize },
    #[error("dom error: {0}")]
    Js(String),
}

#[cfg(feature = "csr")]
impl From<wasm_bindgen::JsValue> for Error {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}
