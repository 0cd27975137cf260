//! Reveal wrapper
//!
//! Renders its children displaced and transparent until the element
//! intersects the viewport, then transitions to its resting place. The
//! webview's IntersectionObserver reports visibility back over the eval
//! channel. With `once` it disconnects after the first intersection, so
//! re-entry never replays it; otherwise every change is reported and the
//! element hides again when it leaves the viewport.

use dioxus::prelude::*;
use guide_core::RevealPolicy;

/// Script that reports when element `id` is at least `threshold` visible.
///
/// With `once` only the first intersection is sent; otherwise each change
/// is sent as `true`/`false`.
pub(crate) fn observe_script(id: &str, threshold: f32, once: bool) -> String {
    let on_change = if once {
        "if (visible) {\n      observer.disconnect();\n      dioxus.send(true);\n    }"
    } else {
        "dioxus.send(visible);"
    };
    format!(
        r#"
const el = document.getElementById("{id}");
if (el) {{
  const observer = new IntersectionObserver((entries) => {{
    const visible = entries.some((e) => e.isIntersecting);
    {on_change}
  }}, {{ threshold: {threshold} }});
  observer.observe(el);
}}
"#
    )
}

#[component]
pub fn Reveal(
    /// DOM id the observer attaches to; must be unique on the page
    id: String,
    policy: RevealPolicy,
    #[props(default)] class: Option<String>,
    children: Element,
) -> Element {
    let mut revealed = use_signal(|| false);
    let script = observe_script(&id, policy.threshold, policy.once);
    let once = policy.once;
    let style = policy.style(revealed());
    let class = class.unwrap_or_default();

    rsx! {
        div {
            id: "{id}",
            class: "reveal {class}",
            style: "{style}",
            onmounted: move |_| {
                if revealed() {
                    return;
                }
                let mut eval = document::eval(&script);
                spawn(async move {
                    loop {
                        match eval.recv::<bool>().await {
                            Ok(visible) => {
                                revealed.set(visible);
                                if once && visible {
                                    break;
                                }
                            }
                            Err(e) => {
                                tracing::warn!("Viewport observer failed: {:?}, revealing immediately", e);
                                revealed.set(true);
                                break;
                            }
                        }
                    }
                });
            },
            {children}
        }
    }
}
