//! Binds [`FormController`] to the `.contact-form` markup.
//!
//! Listeners read the page, call the controller, and apply the returned
//! effects after the controller borrow is released. `form.reset()` fires
//! the `reset` listener synchronously, so effects must never be applied
//! while the controller is borrowed.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use leptos::prelude::{RwSignal, Set};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    Document, Element, Event, FormData, HtmlButtonElement, HtmlElement, HtmlFormElement, HtmlInputElement,
    HtmlTextAreaElement,
};

use crate::components::response_overlay::ResponseOverlay;
use crate::config::FormConfig;
use crate::consts::{
    BANNER_SELECTOR, CHAR_COUNTER_SELECTOR, CHAR_COUNT_ID, CONFIG_ATTRIBUTE, ERRORS_FIELD_NAME, FORM_SELECTOR,
    SUBMIT_SELECTOR, VALIDATION_MESSAGE_CLASS,
};
use crate::error::{Error, Result};
use crate::form::{
    Effect, Field, FieldInput, FormController, FormLayout, SubmitRequest, SubmitResponse, SubmitValues, Target, Timer,
};

/// A text input or text area; both expose `value`.
#[derive(Clone)]
enum FieldElement {
    Input(HtmlInputElement),
    TextArea(HtmlTextAreaElement),
}

impl FieldElement {
    fn find(document: &Document, id: &str) -> Option<Self> {
        let element = document.get_element_by_id(id)?;
        match element.dyn_into::<HtmlInputElement>() {
            Ok(input) => Some(Self::Input(input)),
            Err(element) => match element.dyn_into::<HtmlTextAreaElement>() {
                Ok(area) => Some(Self::TextArea(area)),
                Err(_) => {
                    log::warn!("#{id} is neither an input nor a textarea");
                    None
                }
            },
        }
    }

    fn html(&self) -> &HtmlElement {
        match self {
            Self::Input(input) => input,
            Self::TextArea(area) => area,
        }
    }

    fn value(&self) -> String {
        match self {
            Self::Input(input) => input.value(),
            Self::TextArea(area) => area.value(),
        }
    }

    fn set_value(&self, value: &str) {
        match self {
            Self::Input(input) => input.set_value(value),
            Self::TextArea(area) => area.set_value(value),
        }
    }

    /// Text of the element right before the field, normally its label.
    fn label(&self) -> Option<String> {
        self.html().previous_element_sibling().and_then(|el| el.text_content())
    }

    /// The `.validation-message` immediately after the field, if any.
    fn hint(&self) -> Option<HtmlElement> {
        let sibling = self.html().next_element_sibling()?;
        if !sibling.class_list().contains(VALIDATION_MESSAGE_CLASS) {
            return None;
        }
        cast(sibling)
    }
}

struct Elements {
    form: HtmlFormElement,
    fields: HashMap<Field, FieldElement>,
    comments_hint: Option<HtmlElement>,
    errors_field: HtmlInputElement,
    banner: Option<HtmlElement>,
    char_count: Option<HtmlElement>,
    char_counter: Option<HtmlElement>,
    submit: Option<HtmlButtonElement>,
}

impl Elements {
    fn html(&self, target: Target) -> Option<&HtmlElement> {
        match target {
            Target::Field(field) => self.fields.get(&field).map(FieldElement::html),
            Target::Hint(Field::Comments) => self.comments_hint.as_ref(),
            Target::Hint(_) => None,
            Target::ErrorsField => Some(&*self.errors_field),
            Target::Banner => self.banner.as_ref(),
            Target::CharCount => self.char_count.as_ref(),
            Target::CharCounter => self.char_counter.as_ref(),
            Target::Submit => self.submit.as_deref(),
        }
    }

    fn value(&self, field: Field) -> Option<String> {
        self.fields.get(&field).map(FieldElement::value)
    }
}

/// Shared state behind every listener and timer callback.
#[derive(Clone)]
struct Binding {
    core: Rc<RefCell<FormController>>,
    dom: Rc<Elements>,
    timers: Rc<RefCell<HashMap<Timer, Timeout>>>,
    overlay: RwSignal<Option<SubmitResponse>>,
}

impl Binding {
    /// Run one controller handler, then apply its effects.
    fn dispatch(&self, event: Option<&Event>, handler: impl FnOnce(&mut FormController) -> Vec<Effect>) {
        let effects = handler(&mut *self.core.borrow_mut());
        for effect in effects {
            self.apply(effect, event);
        }
    }

    fn apply(&self, effect: Effect, event: Option<&Event>) {
        match effect {
            Effect::SetText { target, text } => {
                if let Some(el) = self.dom.html(target) {
                    el.set_text_content(Some(&text));
                }
            }
            Effect::SetValue { target: Target::Field(field), value } => {
                if let Some(el) = self.dom.fields.get(&field) {
                    el.set_value(&value);
                }
            }
            Effect::SetValue { target: Target::ErrorsField, value } => self.dom.errors_field.set_value(&value),
            Effect::SetValue { target, .. } => log::warn!("cannot set value on {target:?}"),
            Effect::AddClass { target, class } => {
                if let Some(el) = self.dom.html(target) {
                    report(el.class_list().add_1(class), "add class");
                }
            }
            Effect::RemoveClass { target, class } => {
                if let Some(el) = self.dom.html(target) {
                    report(el.class_list().remove_1(class), "remove class");
                }
            }
            Effect::SetStyle { target, property, value } => {
                if let Some(el) = self.dom.html(target) {
                    report(el.style().set_property(property, &value), "set style");
                }
            }
            Effect::SetDisabled { disabled, .. } => {
                if let Some(submit) = &self.dom.submit {
                    submit.set_disabled(disabled);
                }
            }
            Effect::PreventDefault => {
                if let Some(event) = event {
                    event.prevent_default();
                }
            }
            Effect::Schedule { timer, after } => self.schedule(timer, after),
            Effect::Cancel(timer) => {
                // Dropping a gloo `Timeout` clears it.
                self.timers.borrow_mut().remove(&timer);
            }
            Effect::ShowResponse(response) => self.overlay.set(Some(response)),
            Effect::ResetForm => self.dom.form.reset(),
        }
    }

    fn schedule(&self, timer: Timer, after: std::time::Duration) {
        let millis = u32::try_from(after.as_millis()).unwrap_or(u32::MAX);
        let binding = self.clone();
        let timeout = Timeout::new(millis, move || {
            binding.dispatch(None, |core| core.on_timer(timer));
        });
        if timer.is_cancelable() {
            self.timers.borrow_mut().insert(timer, timeout);
        } else {
            timeout.forget();
        }
    }

    fn submit_values(&self) -> SubmitValues {
        SubmitValues {
            name: self.dom.value(Field::Name),
            email: self.dom.value(Field::Email),
            comments: self.dom.value(Field::Comments),
        }
    }

    fn submit_request(&self) -> SubmitRequest {
        SubmitRequest {
            entries: form_entries(&self.dom.form),
            timestamp: String::from(js_sys::Date::new_0().to_iso_string()),
            submit_label: self.dom.submit.as_ref().and_then(|b| b.text_content()),
        }
    }
}

/// Locate the form, wire every listener, and mount the response overlay.
pub(super) fn bind() -> Result<()> {
    let document =
        web_sys::window().and_then(|w| w.document()).ok_or(Error::MissingElement("document"))?;

    hide_validation_messages(&document)?;

    let form = document
        .query_selector(FORM_SELECTOR)?
        .ok_or(Error::MissingElement(FORM_SELECTOR))?
        .dyn_into::<HtmlFormElement>()
        .map_err(|_| Error::MissingElement(FORM_SELECTOR))?;

    let fields: HashMap<Field, FieldElement> =
        Field::ALL.into_iter().filter_map(|f| FieldElement::find(&document, f.id()).map(|el| (f, el))).collect();
    for field in Field::ALL.into_iter().filter(|f| !fields.contains_key(f)) {
        log::debug!("field #{} not on page; its checks are skipped", field.id());
    }

    let comments_hint = fields.get(&Field::Comments).and_then(FieldElement::hint);
    let char_count = document.get_element_by_id(CHAR_COUNT_ID).and_then(cast::<HtmlElement>);
    let layout = FormLayout { char_count: char_count.is_some(), comments_hint: comments_hint.is_some() };

    let errors_field = document.create_element("input")?.unchecked_into::<HtmlInputElement>();
    errors_field.set_type("hidden");
    errors_field.set_name(ERRORS_FIELD_NAME);
    form.append_child(&errors_field)?;

    let dom = Elements {
        banner: query_html(&document, BANNER_SELECTOR)?,
        char_counter: query_html(&document, CHAR_COUNTER_SELECTOR)?,
        submit: form.query_selector(SUBMIT_SELECTOR)?.and_then(cast::<HtmlButtonElement>),
        form,
        fields,
        comments_hint,
        errors_field,
        char_count,
    };

    // One overlay per page; a later response replaces the one on screen.
    let overlay = RwSignal::new(None::<SubmitResponse>);
    leptos::mount::mount_to_body(move || leptos::view! { <ResponseOverlay response=overlay/> });

    let binding = Binding {
        core: Rc::new(RefCell::new(FormController::new(read_config(&dom.form), layout))),
        dom: Rc::new(dom),
        timers: Rc::new(RefCell::new(HashMap::new())),
        overlay,
    };

    for (field, element) in &binding.dom.fields {
        let field = *field;
        let b = binding.clone();
        listen(element.html(), "input", move |_| {
            let Some(element) = b.dom.fields.get(&field) else {
                return;
            };
            let input = FieldInput { field, value: element.value(), label: element.label() };
            b.dispatch(None, |core| core.on_input(input));
        })?;
    }

    // Registration order matters: validation first, then the simulated submit.
    let b = binding.clone();
    listen(&binding.dom.form, "submit", move |event| {
        let values = b.submit_values();
        b.dispatch(Some(&event), |core| core.validate_submission(&values));
    })?;
    let b = binding.clone();
    listen(&binding.dom.form, "submit", move |event| {
        let request = b.submit_request();
        b.dispatch(Some(&event), |core| core.begin_submission(request));
    })?;
    let b = binding.clone();
    listen(&binding.dom.form, "reset", move |_| {
        b.dispatch(None, FormController::on_reset);
    })?;

    log::debug!(
        "contact form bound (banner: {}, counter: {}, hint: {}, submit: {})",
        binding.dom.banner.is_some(),
        layout.char_count,
        layout.comments_hint,
        binding.dom.submit.is_some(),
    );
    Ok(())
}

fn listen(target: &web_sys::EventTarget, kind: &str, handler: impl FnMut(Event) + 'static) -> Result<()> {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

fn read_config(form: &HtmlFormElement) -> FormConfig {
    let Some(raw) = form.get_attribute(CONFIG_ATTRIBUTE) else {
        return FormConfig::default();
    };
    match FormConfig::from_json(&raw) {
        Ok(config) => config,
        Err(err) => {
            log::warn!("ignoring {CONFIG_ATTRIBUTE}: {err}");
            FormConfig::default()
        }
    }
}

/// All named string entries of the form, in form order.
fn form_entries(form: &HtmlFormElement) -> Vec<(String, String)> {
    let form_data = match FormData::new_with_form(form) {
        Ok(data) => data,
        Err(err) => {
            log::warn!("failed to read form data: {err:?}");
            return Vec::new();
        }
    };
    let iter = match js_sys::try_iter(&form_data) {
        Ok(Some(iter)) => iter,
        Ok(None) => return Vec::new(),
        Err(err) => {
            log::warn!("form data is not iterable: {err:?}");
            return Vec::new();
        }
    };

    let mut entries = Vec::new();
    for entry in iter {
        let Ok(entry) = entry else { continue };
        let pair = js_sys::Array::from(&entry);
        if let (Some(key), Some(value)) = (pair.get(0).as_string(), pair.get(1).as_string()) {
            entries.push((key, value));
        }
    }
    entries
}

fn hide_validation_messages(document: &Document) -> Result<()> {
    let messages = document.query_selector_all(&format!(".{VALIDATION_MESSAGE_CLASS}"))?;
    for idx in 0..messages.length() {
        let Some(node) = messages.item(idx) else { continue };
        if let Ok(el) = node.dyn_into::<HtmlElement>() {
            report(el.style().set_property("display", "none"), "hide validation message");
        }
    }
    Ok(())
}

fn query_html(document: &Document, selector: &str) -> Result<Option<HtmlElement>> {
    Ok(document.query_selector(selector)?.and_then(cast::<HtmlElement>))
}

fn cast<T: JsCast>(element: Element) -> Option<T> {
    match element.dyn_into::<T>() {
        Ok(el) => Some(el),
        Err(_) => None,
    }
}

fn report(result: std::result::Result<(), JsValue>, what: &str) {
    if let Err(err) = result {
        log::warn!("{what} failed: {err:?}");
    }
}
