use dioxus::prelude::*;

use crate::context::GuideSettings;
use crate::pages::{GuidePage, Landing};
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - Landing page with a button into the guide
/// - `/guide` - Recycling guide with material cards
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Landing {},
    #[route("/guide")]
    GuidePage {},
}

/// Root application component.
///
/// Provides global styles, guide settings context, and routing.
#[component]
pub fn App() -> Element {
    use_context_provider(GuideSettings::from_startup);

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}
