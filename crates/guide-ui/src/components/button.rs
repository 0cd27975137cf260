//! Button Components
//!
//! - Primary: solid green call-to-action
//! - Outline: bordered secondary action, used by the material cards
//! - Plain: white back-navigation button
//! - Muted: grey, used for features that are not available yet

use dioxus::prelude::*;

/// Button style variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonVariant {
    /// Solid green call-to-action
    #[default]
    Primary,
    /// Bordered, transparent background
    Outline,
    /// White with a light border and shadow
    Plain,
    /// Greyed out
    Muted,
}

impl ButtonVariant {
    /// Returns the CSS class for this variant
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn-primary",
            ButtonVariant::Outline => "btn-outline",
            ButtonVariant::Plain => "btn-plain",
            ButtonVariant::Muted => "btn-muted",
        }
    }
}

/// Joins a base class with optional extra classes
pub(crate) fn join_class(base: &str, extra: Option<&str>) -> String {
    match extra {
        Some(extra) if !extra.is_empty() => format!("{} {}", base, extra),
        _ => base.to_string(),
    }
}

/// Properties for the Button component
#[derive(Clone, PartialEq, Props)]
pub struct ButtonProps {
    /// Visual style variant
    #[props(default)]
    pub variant: ButtonVariant,
    /// Button content (text, icons, etc.)
    pub children: Element,
    /// Click handler
    #[props(default)]
    pub onclick: Option<EventHandler<()>>,
    /// Whether the button is disabled
    #[props(default = false)]
    pub disabled: bool,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// Styled button component
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Button {
///         variant: ButtonVariant::Outline,
///         onclick: move |_| selection.write().open_modal(Material::Glass),
///         "가이드 보기"
///     }
/// }
/// ```
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let disabled_class = if props.disabled { Some("is-disabled") } else { None };
    let base = join_class(props.variant.class(), disabled_class);
    let full_class = join_class(&base, props.class.as_deref());

    rsx! {
        button {
            class: "{full_class}",
            r#type: "button",
            disabled: props.disabled,
            onclick: move |_| {
                if props.disabled {
                    return;
                }
                if let Some(handler) = &props.onclick {
                    handler.call(());
                }
            },
            {props.children}
        }
    }
}

/// Close button with X icon
#[component]
pub fn CloseButton(onclick: EventHandler<()>) -> Element {
    rsx! {
        button {
            class: "icon-btn close-btn",
            r#type: "button",
            "aria-label": "닫기",
            onclick: move |_| onclick.call(()),
            "\u{00D7}"
        }
    }
}
