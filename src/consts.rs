//! Shared constants for the contact page.

// ── Limits ──────────────────────────────────────────────────────

/// Maximum number of characters accepted in the comments field.
pub const MAX_COMMENTS_LENGTH: usize = 500;

/// Remaining-character count at or below which the counter warns.
pub const WARNING_THRESHOLD: usize = 50;

/// Minimum number of characters required in the comments field.
pub const MIN_COMMENTS_LENGTH: usize = 10;

// ── Timing (milliseconds) ───────────────────────────────────────

/// Delay before the error banner starts fading out.
pub const BANNER_FADE_MS: u64 = 3000;

/// Delay before the error banner text is cleared.
pub const BANNER_CLEAR_MS: u64 = 4000;

/// Lifetime of the `flash-error` highlight on a sanitized field.
pub const FLASH_MS: u64 = 500;

/// Simulated network latency for form submission.
pub const SUBMIT_DELAY_MS: u64 = 1500;

// ── DOM contract ────────────────────────────────────────────────

pub const FORM_SELECTOR: &str = ".contact-form";
pub const BANNER_SELECTOR: &str = ".error-message";
pub const CHAR_COUNT_ID: &str = "char-count";
pub const CHAR_COUNTER_SELECTOR: &str = ".char-counter";
pub const VALIDATION_MESSAGE_CLASS: &str = "validation-message";
pub const SUBMIT_SELECTOR: &str = "button[type=\"submit\"]";
pub const THEME_TOGGLE_SELECTOR: &str = ".theme-toggle";
pub const CONFIG_ATTRIBUTE: &str = "data-config";

/// Name of the hidden input carrying the serialized error records.
pub const ERRORS_FIELD_NAME: &str = "form-errors";

/// Key added to the submitted snapshot.
pub const TIMESTAMP_KEY: &str = "timestamp";

// ── Classes ─────────────────────────────────────────────────────

pub const CLASS_INVALID: &str = "invalid";
pub const CLASS_FLASH: &str = "flash-error";
pub const CLASS_WARNING: &str = "warning";
pub const CLASS_ERROR: &str = "error";

// ── Copy ────────────────────────────────────────────────────────

pub const DEFAULT_NAME_LABEL: &str = "Name";
pub const MSG_NAME_REQUIRED: &str = "Please enter your name";
pub const MSG_EMAIL_INVALID: &str = "Please enter a valid email address";
pub const PENDING_LABEL: &str = "Sending...";
pub const SUBMIT_SUCCESS_MESSAGE: &str = "Form submitted successfully!";
pub const HEADING_SUCCESS: &str = "Form Submitted Successfully!";
pub const HEADING_FAILURE: &str = "Form Submission Error";
pub const BANNER_FADE_TRANSITION: &str = "opacity 1s ease-out";

// ── Theme ───────────────────────────────────────────────────────

/// `localStorage` key holding `"light"` or `"dark"`.
pub const THEME_STORAGE_KEY: &str = "theme";

/// Attribute on `<html>` carrying the active theme.
pub const THEME_ATTRIBUTE: &str = "data-theme";
