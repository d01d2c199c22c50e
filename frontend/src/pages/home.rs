use leptos::*;
use leptos_router::Redirect;

/// The shift page is the only surface for now, so the root route just
/// forwards there.
#[component]
pub fn HomePage() -> impl IntoView {
    view! { <Redirect path="/shifts"/> }
}
