//! Per-page form controller.
//!
//! Each public handler corresponds to one DOM listener and returns the
//! effects that listener would perform, in order. Handlers registered on
//! the same DOM event must be called in registration order by the host:
//! for `submit` that is [`FormController::validate_submission`] then
//! [`FormController::begin_submission`].

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use std::collections::{BTreeSet, VecDeque};

use super::banner::Banner;
use super::effect::{Effect, Target, Timer};
use super::record::{Field, FormError, FormErrorKind};
use super::response::{FormDataSnapshot, SubmitResponse};
use super::sanitize::{is_valid_email, sanitize_name, text_length, truncate_to_length};
use crate::config::FormConfig;
use crate::consts::{
    CLASS_ERROR, CLASS_FLASH, CLASS_INVALID, CLASS_WARNING, DEFAULT_NAME_LABEL, MSG_EMAIL_INVALID,
    MSG_NAME_REQUIRED, PENDING_LABEL,
};

/// Which optional page elements the host found when binding.
///
/// The counter and the minimum-length hint only run when their elements
/// exist, matching the guarded lookups of the page script.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormLayout {
    /// `#char-count` is present.
    pub char_count: bool,
    /// The comments field is followed by a `.validation-message`.
    pub comments_hint: bool,
}

impl Default for FormLayout {
    fn default() -> Self {
        Self { char_count: true, comments_hint: true }
    }
}

/// An `input` event on one of the validated fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldInput {
    pub field: Field,
    /// Current value of the field as of the event.
    pub value: String,
    /// Text of the field's label, if one precedes it.
    pub label: Option<String>,
}

impl FieldInput {
    pub fn new(field: Field, value: impl Into<String>) -> Self {
        Self { field, value: value.into(), label: None }
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

/// Field values read when the validation listener runs. `None` means the
/// field is absent from the page and its check is skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmitValues {
    pub name: Option<String>,
    pub email: Option<String>,
    pub comments: Option<String>,
}

/// Everything the simulated submit listener reads from the page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmitRequest {
    /// All named form entries in form order, `form-errors` included.
    pub entries: Vec<(String, String)>,
    /// ISO-8601 time of the submit.
    pub timestamp: String,
    /// Current label of the submit button, `None` if there is no button.
    pub submit_label: Option<String>,
}

#[derive(Debug)]
pub struct FormController {
    config: FormConfig,
    layout: FormLayout,
    errors: Vec<FormError>,
    invalid: BTreeSet<Field>,
    banner: Banner,
    pending: VecDeque<FormDataSnapshot>,
    idle_label: Option<String>,
}

impl Default for FormController {
    fn default() -> Self {
        Self::new(FormConfig::default(), FormLayout::default())
    }
}

impl FormController {
    #[must_use]
    pub fn new(config: FormConfig, layout: FormLayout) -> Self {
        Self {
            config,
            layout,
            errors: Vec::new(),
            invalid: BTreeSet::new(),
            banner: Banner::new(),
            pending: VecDeque::new(),
            idle_label: None,
        }
    }

    // --- Queries ---

    /// Errors accumulated since load or the last reset, oldest first.
    #[must_use]
    pub fn errors(&self) -> &[FormError] {
        &self.errors
    }

    /// Whether `field` currently carries the `invalid` marker.
    #[must_use]
    pub fn is_marked_invalid(&self, field: Field) -> bool {
        self.invalid.contains(&field)
    }

    /// Number of simulated submissions awaiting their response.
    #[must_use]
    pub fn pending_submissions(&self) -> usize {
        self.pending.len()
    }

    /// Banner timers currently outstanding.
    #[must_use]
    pub fn pending_banner_timers(&self) -> usize {
        self.banner.pending_timers()
    }

    /// The JSON text the hidden `form-errors` field should hold.
    #[must_use]
    pub fn errors_json(&self) -> String {
        serde_json::to_string(&self.errors).unwrap_or_else(|err| {
            log::error!("failed to serialize form errors: {err}");
            "[]".to_owned()
        })
    }

    // --- Event handlers ---

    /// `input` on a field: field-specific feedback, then drop its `invalid`
    /// marker.
    pub fn on_input(&mut self, input: FieldInput) -> Vec<Effect> {
        let mut out = Vec::new();
        match input.field {
            Field::Name => self.sanitize_name_input(&input, &mut out),
            Field::Comments if self.layout.char_count => self.update_counter(&input.value, &mut out),
            Field::Email | Field::Comments => {}
        }
        self.clear_invalid(input.field, &mut out);
        out
    }

    /// First `submit` listener: check every field, publish the error list
    /// to the hidden field, and block native submission on failure.
    pub fn validate_submission(&mut self, values: &SubmitValues) -> Vec<Effect> {
        let mut out = Vec::new();
        let mut valid = true;

        if let Some(name) = &values.name {
            if name.trim().is_empty() {
                valid = false;
                self.reject(Field::Name, FormErrorKind::Required, "", MSG_NAME_REQUIRED, &mut out);
            }
        }

        if let Some(email) = &values.email {
            if !is_valid_email(email) {
                valid = false;
                self.reject(Field::Email, FormErrorKind::InvalidFormat, email, MSG_EMAIL_INVALID, &mut out);
            }
        }

        if let Some(comments) = &values.comments {
            let len = text_length(comments);
            if len < self.config.min_comments_length || len > self.config.max_comments_length {
                valid = false;
                let message = self.config.length_range_message();
                self.reject(Field::Comments, FormErrorKind::InvalidLength, comments, &message, &mut out);
            }
        }

        out.push(Effect::value(Target::ErrorsField, self.errors_json()));

        if !valid {
            log::debug!("submission blocked with {} recorded errors", self.errors.len());
            out.push(Effect::PreventDefault);
        }
        out
    }

    /// Second `submit` listener: always cancel native submission, show the
    /// pending state, and schedule the simulated response.
    pub fn begin_submission(&mut self, request: SubmitRequest) -> Vec<Effect> {
        let mut out = vec![Effect::PreventDefault];

        if let Some(label) = request.submit_label {
            if self.pending.is_empty() {
                self.idle_label = Some(label);
            }
            out.push(Effect::SetDisabled { target: Target::Submit, disabled: true });
            out.push(Effect::text(Target::Submit, PENDING_LABEL));
        }

        let snapshot = FormDataSnapshot::capture(request.entries, request.timestamp);
        match serde_json::to_string(&snapshot) {
            Ok(payload) => log::debug!("prepared submission payload: {payload}"),
            Err(err) => log::warn!("failed to encode submission payload: {err}"),
        }

        self.pending.push_back(snapshot);
        out.push(Effect::Schedule { timer: Timer::SubmitComplete, after: self.config.submit_delay() });
        out
    }

    /// `reset` on the form: clear markers and the error history.
    pub fn on_reset(&mut self) -> Vec<Effect> {
        let mut out: Vec<Effect> = std::mem::take(&mut self.invalid)
            .into_iter()
            .map(|field| Effect::RemoveClass { target: Target::Field(field), class: CLASS_INVALID })
            .collect();
        self.errors.clear();
        out.push(Effect::value(Target::ErrorsField, "[]"));
        out
    }

    /// A timer scheduled through [`Effect::Schedule`] has fired.
    pub fn on_timer(&mut self, timer: Timer) -> Vec<Effect> {
        let mut out = Vec::new();
        match timer {
            Timer::BannerFade => self.banner.fade(&mut out),
            Timer::BannerClear => self.banner.clear(&mut out),
            Timer::FlashEnd(field) => out.push(Effect::RemoveClass { target: Target::Field(field), class: CLASS_FLASH }),
            Timer::SubmitComplete => self.complete_submission(&mut out),
        }
        out
    }

    // --- Internals ---

    fn sanitize_name_input(&mut self, input: &FieldInput, out: &mut Vec<Effect>) {
        let sanitized = sanitize_name(&input.value);
        if sanitized == input.value {
            return;
        }

        let target = Target::Field(Field::Name);
        out.push(Effect::value(target, sanitized));
        out.push(Effect::AddClass { target, class: CLASS_FLASH });
        out.push(Effect::Schedule { timer: Timer::FlashEnd(Field::Name), after: self.config.flash() });

        let label = input.label.as_deref().unwrap_or(DEFAULT_NAME_LABEL);
        let message = format!("Invalid character entered in {label} field");
        self.show_banner(&message, out);
        self.record(FormError::new(Field::Name, FormErrorKind::InvalidCharacter, input.value.as_str(), message));
    }

    fn update_counter(&mut self, value: &str, out: &mut Vec<Effect>) {
        let max = self.config.max_comments_length;
        let len = text_length(value);
        let remaining = signed(max) - signed(len);
        let field = Target::Field(Field::Comments);

        out.push(Effect::text(Target::CharCount, remaining.to_string()));
        for class in [CLASS_WARNING, CLASS_ERROR] {
            out.push(Effect::RemoveClass { target: Target::CharCounter, class });
        }
        for class in [CLASS_WARNING, CLASS_ERROR] {
            out.push(Effect::RemoveClass { target: field, class });
        }

        let mut current_len = len;
        if remaining > 0 && remaining <= signed(self.config.warning_threshold) {
            out.push(Effect::AddClass { target: Target::CharCounter, class: CLASS_WARNING });
        } else if remaining <= 0 {
            out.push(Effect::AddClass { target: Target::CharCounter, class: CLASS_ERROR });
            out.push(Effect::AddClass { target: field, class: CLASS_ERROR });

            let truncated = truncate_to_length(value, max);
            current_len = text_length(truncated);
            out.push(Effect::value(field, truncated));
            out.push(Effect::text(Target::CharCount, "0"));

            let message = self.config.max_length_message();
            self.show_banner(&message, out);
            self.record(FormError::new(Field::Comments, FormErrorKind::MaxLengthExceeded, truncated, message));
        }

        if self.layout.comments_hint {
            let hint = Target::Hint(Field::Comments);
            if current_len < self.config.min_comments_length {
                out.push(Effect::style(hint, "display", "block"));
                out.push(Effect::AddClass { target: Target::CharCounter, class: CLASS_ERROR });
            } else {
                out.push(Effect::style(hint, "display", "none"));
            }
        }
    }

    fn complete_submission(&mut self, out: &mut Vec<Effect>) {
        let Some(snapshot) = self.pending.pop_front() else {
            log::warn!("submit timer fired with no pending submission");
            return;
        };

        out.push(Effect::ShowResponse(SubmitResponse::success(snapshot)));
        out.push(Effect::ResetForm);

        if let Some(label) = &self.idle_label {
            out.push(Effect::SetDisabled { target: Target::Submit, disabled: false });
            out.push(Effect::text(Target::Submit, label.as_str()));
        }
        if self.pending.is_empty() {
            self.idle_label = None;
        }
    }

    fn reject(&mut self, field: Field, kind: FormErrorKind, value: &str, message: &str, out: &mut Vec<Effect>) {
        self.invalid.insert(field);
        out.push(Effect::AddClass { target: Target::Field(field), class: CLASS_INVALID });
        self.show_banner(message, out);
        self.record(FormError::new(field, kind, value, message));
    }

    fn clear_invalid(&mut self, field: Field, out: &mut Vec<Effect>) {
        self.invalid.remove(&field);
        out.push(Effect::RemoveClass { target: Target::Field(field), class: CLASS_INVALID });
    }

    fn show_banner(&mut self, message: &str, out: &mut Vec<Effect>) {
        self.banner.show(message, self.config.banner_fade(), self.config.banner_clear(), out);
    }

    fn record(&mut self, error: FormError) {
        log::debug!("form error on {}: {:?}", error.field.id(), error.kind);
        self.errors.push(error);
    }
}

fn signed(n: usize) -> i64 {
    i64::try_from(n).unwrap_or(i64::MAX)
}
