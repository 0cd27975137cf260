//! Card Component
//!
//! White raised panel with a hover lift, used for grid entries.

use dioxus::prelude::*;

use super::button::join_class;

#[derive(Clone, PartialEq, Props)]
pub struct CardProps {
    pub children: Element,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

#[component]
pub fn Card(props: CardProps) -> Element {
    let full_class = join_class("card", props.class.as_deref());

    rsx! {
        div { class: "{full_class}", {props.children} }
    }
}
