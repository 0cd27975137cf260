//! Modal Component
//!
//! Overlay dialog with a title and arbitrary content. Clicking the dimmed
//! overlay or the close button dismisses it; clicks inside the dialog do not.

use dioxus::prelude::*;

use super::button::CloseButton;

/// Modal overlay
///
/// `on_close` fires once per user dismissal. The parent decides whether the
/// modal is rendered at all.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     if let Some(title) = selection().modal_title() {
///         Modal {
///             title,
///             on_close: move |_| selection.write().close_modal(),
///             p { "..." }
///         }
///     }
/// }
/// ```
#[component]
pub fn Modal(
    /// Heading shown at the top of the dialog
    title: String,
    /// Callback when the modal is dismissed
    on_close: EventHandler<()>,
    children: Element,
) -> Element {
    rsx! {
        div {
            class: "modal-overlay",
            onclick: move |_| on_close.call(()),

            div {
                class: "modal-dialog",
                role: "dialog",
                "aria-modal": "true",
                onclick: move |e| e.stop_propagation(),

                div { class: "modal-header",
                    h2 { class: "modal-title", "{title}" }
                    CloseButton { onclick: move |_| on_close.call(()) }
                }

                div { class: "modal-body", {children} }
            }
        }
    }
}
