//! In-memory page for driving the form controller in tests.
//!
//! `Page` applies [`Effect`]s the way the browser host does and keeps a
//! virtual clock: scheduled timers fire in due order when the clock is
//! advanced, and cancelled timers are dropped.

use std::collections::{BTreeSet, HashMap};
use std::time::Duration;

use crate::form::{
    Effect, Field, FieldInput, FormController, SubmitRequest, SubmitResponse, SubmitValues, Target, Timer,
};

pub const SUBMIT_LABEL: &str = "Send Message";
pub const TIMESTAMP: &str = "2026-10-19T12:00:00.000Z";

pub struct Page {
    pub core: FormController,
    pub values: HashMap<Field, String>,
    pub errors_field: String,
    pub texts: HashMap<Target, String>,
    pub styles: HashMap<(Target, &'static str), String>,
    pub submit_label: Option<String>,
    pub submit_disabled: bool,
    pub default_prevented: bool,
    pub overlays: Vec<SubmitResponse>,
    pub now: Duration,
    classes: HashMap<Target, BTreeSet<&'static str>>,
    timers: Vec<(Duration, u64, Timer)>,
    seq: u64,
}

impl Page {
    pub fn new() -> Self {
        Self::with(FormController::default())
    }

    pub fn with(core: FormController) -> Self {
        Self {
            core,
            values: Field::ALL.into_iter().map(|f| (f, String::new())).collect(),
            errors_field: String::new(),
            texts: HashMap::new(),
            styles: HashMap::new(),
            submit_label: Some(SUBMIT_LABEL.to_owned()),
            submit_disabled: false,
            default_prevented: false,
            overlays: Vec::new(),
            now: Duration::ZERO,
            classes: HashMap::new(),
            timers: Vec::new(),
            seq: 0,
        }
    }

    /// Replace a field's value as one `input` event.
    pub fn type_into(&mut self, field: Field, value: &str) {
        self.values.insert(field, value.to_owned());
        let effects = self.core.on_input(FieldInput::new(field, value));
        self.apply(effects);
    }

    /// Dispatch `submit`; returns whether the native submission was prevented.
    pub fn submit(&mut self) -> bool {
        self.default_prevented = false;

        let values = SubmitValues {
            name: Some(self.value(Field::Name)),
            email: Some(self.value(Field::Email)),
            comments: Some(self.value(Field::Comments)),
        };
        let effects = self.core.validate_submission(&values);
        self.apply(effects);

        let mut entries: Vec<(String, String)> =
            Field::ALL.into_iter().map(|f| (f.id().to_owned(), self.value(f))).collect();
        entries.push(("form-errors".to_owned(), self.errors_field.clone()));
        let request =
            SubmitRequest { entries, timestamp: TIMESTAMP.to_owned(), submit_label: self.submit_label.clone() };
        let effects = self.core.begin_submission(request);
        self.apply(effects);

        self.default_prevented
    }

    /// `form.reset()`: restore empty values, then fire the reset listener.
    pub fn reset(&mut self) {
        for value in self.values.values_mut() {
            value.clear();
        }
        let effects = self.core.on_reset();
        self.apply(effects);
    }

    /// Move the clock forward, firing every timer that comes due.
    pub fn advance(&mut self, millis: u64) {
        let until = self.now + Duration::from_millis(millis);
        while let Some(idx) = self.next_due(until) {
            let (due, _, timer) = self.timers.remove(idx);
            self.now = due;
            let effects = self.core.on_timer(timer);
            self.apply(effects);
        }
        self.now = until;
    }

    pub fn value(&self, field: Field) -> String {
        self.values.get(&field).cloned().unwrap_or_default()
    }

    pub fn text(&self, target: Target) -> &str {
        self.texts.get(&target).map_or("", String::as_str)
    }

    pub fn style(&self, target: Target, property: &'static str) -> &str {
        self.styles.get(&(target, property)).map_or("", String::as_str)
    }

    pub fn has_class(&self, target: Target, class: &str) -> bool {
        self.classes.get(&target).is_some_and(|set| set.contains(class))
    }

    pub fn pending(&self, timer: Timer) -> usize {
        self.timers.iter().filter(|(_, _, t)| *t == timer).count()
    }

    fn next_due(&self, until: Duration) -> Option<usize> {
        self.timers
            .iter()
            .enumerate()
            .filter(|(_, (due, _, _))| *due <= until)
            .min_by_key(|(_, (due, seq, _))| (*due, *seq))
            .map(|(idx, _)| idx)
    }

    pub fn apply(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::SetText { target: Target::Submit, text } => self.submit_label = Some(text),
                Effect::SetText { target, text } => {
                    self.texts.insert(target, text);
                }
                Effect::SetValue { target: Target::Field(field), value } => {
                    self.values.insert(field, value);
                }
                Effect::SetValue { target: Target::ErrorsField, value } => self.errors_field = value,
                Effect::SetValue { .. } => {}
                Effect::AddClass { target, class } => {
                    self.classes.entry(target).or_default().insert(class);
                }
                Effect::RemoveClass { target, class } => {
                    if let Some(set) = self.classes.get_mut(&target) {
                        set.remove(class);
                    }
                }
                Effect::SetStyle { target, property, value } => {
                    self.styles.insert((target, property), value);
                }
                Effect::SetDisabled { disabled, .. } => self.submit_disabled = disabled,
                Effect::PreventDefault => self.default_prevented = true,
                Effect::Schedule { timer, after } => {
                    self.seq += 1;
                    self.timers.push((self.now + after, self.seq, timer));
                }
                Effect::Cancel(timer) => self.timers.retain(|(_, _, t)| *t != timer),
                Effect::ShowResponse(response) => self.overlays.push(response),
                Effect::ResetForm => self.reset(),
            }
        }
    }
}
