//! Modal overlay showing the (simulated) server response.

#[cfg(test)]
#[path = "response_overlay_test.rs"]
mod response_overlay_test;

use leptos::prelude::*;

use crate::form::{SubmitResponse, format_response_data};

/// Backdrop + panel for the latest submission response.
///
/// Renders nothing while `response` is `None`. The close button, or a
/// click landing on the backdrop itself rather than the panel, removes
/// the overlay.
#[component]
pub fn ResponseOverlay(response: RwSignal<Option<SubmitResponse>>) -> impl IntoView {
    move || {
        response.get().map(|resp| {
            let content = OverlayContent::from(resp);

            view! {
                <div
                    class="response-modal"
                    on:click=move |ev: leptos::ev::MouseEvent| {
                        if is_backdrop_click(ev.target(), ev.current_target()) {
                            dismiss(response);
                        }
                    }
                >
                    <div class="response-modal-content">
                        <h3>{content.heading}</h3>
                        <p>{content.message}</p>
                        <pre class="response-data">{content.data}</pre>
                        <button class="modal-close-btn" on:click=move |_| dismiss(response)>
                            "Close"
                        </button>
                    </div>
                </div>
            }
        })
    }
}

/// Text shown in the overlay panel.
#[derive(Debug, Clone, PartialEq, Eq)]
struct OverlayContent {
    heading: &'static str,
    message: String,
    data: String,
}

impl From<SubmitResponse> for OverlayContent {
    fn from(resp: SubmitResponse) -> Self {
        Self { heading: resp.heading(), data: format_response_data(&resp.data), message: resp.message }
    }
}

/// A click closes the overlay only when it lands on the backdrop, not on
/// anything inside the panel.
fn is_backdrop_click<T: PartialEq>(target: Option<T>, current_target: Option<T>) -> bool {
    target.is_some() && target == current_target
}

fn dismiss(response: RwSignal<Option<SubmitResponse>>) {
    response.set(None);
}
