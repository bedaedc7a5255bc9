//! Contact form controller.
//!
//! DESIGN
//! ======
//! [`FormController`] owns the per-page state (accumulated [`FormError`]s,
//! the banner timer pair, pending simulated submissions) and turns plain
//! event data into an ordered list of [`Effect`]s. The browser host applies
//! those effects to the DOM and feeds timer expiries back through
//! [`FormController::on_timer`]. Keeping the DOM on the far side of the
//! effect list lets every rule here run under `cargo test`.

mod banner;
mod controller;
mod effect;
mod record;
mod response;
mod sanitize;

pub use banner::Banner;
pub use controller::{FieldInput, FormController, FormLayout, SubmitRequest, SubmitValues};
pub use effect::{Effect, Target, Timer};
pub use record::{Field, FormError, FormErrorKind};
pub use response::{FormDataSnapshot, SubmitResponse, format_response_data};
pub use sanitize::{is_valid_email, sanitize_name, text_length, truncate_to_length};
