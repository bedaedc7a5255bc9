//! DOM mutations and timer requests emitted by the form controller.

use std::time::Duration;

use super::record::Field;
use super::response::SubmitResponse;

/// A page element the controller can address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    /// One of the validated form fields.
    Field(Field),
    /// The `validation-message` sibling following a field.
    Hint(Field),
    /// The hidden `form-errors` input.
    ErrorsField,
    /// The shared `.error-message` banner.
    Banner,
    /// The `#char-count` number.
    CharCount,
    /// The `.char-counter` wrapper.
    CharCounter,
    /// The form's submit button.
    Submit,
}

/// A named timer. Expiry is reported back via `FormController::on_timer`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Timer {
    BannerFade,
    BannerClear,
    FlashEnd(Field),
    SubmitComplete,
}

impl Timer {
    /// Whether the host must keep a handle so the timer can be cancelled.
    ///
    /// Only the banner pair is ever cancelled; flash and submit timers may
    /// overlap freely.
    #[must_use]
    pub fn is_cancelable(self) -> bool {
        matches!(self, Self::BannerFade | Self::BannerClear)
    }
}

/// One step for the host to perform, in order.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    SetText { target: Target, text: String },
    SetValue { target: Target, value: String },
    AddClass { target: Target, class: &'static str },
    RemoveClass { target: Target, class: &'static str },
    SetStyle { target: Target, property: &'static str, value: String },
    SetDisabled { target: Target, disabled: bool },
    /// Cancel the browser's native submission of the triggering event.
    PreventDefault,
    Schedule { timer: Timer, after: Duration },
    Cancel(Timer),
    /// Present the response overlay.
    ShowResponse(SubmitResponse),
    /// Reset the form element; the host's reset listener follows up.
    ResetForm,
}

impl Effect {
    pub(crate) fn text(target: Target, text: impl Into<String>) -> Self {
        Self::SetText { target, text: text.into() }
    }

    pub(crate) fn value(target: Target, value: impl Into<String>) -> Self {
        Self::SetValue { target, value: value.into() }
    }

    pub(crate) fn style(target: Target, property: &'static str, value: impl Into<String>) -> Self {
        Self::SetStyle { target, property, value: value.into() }
    }
}
