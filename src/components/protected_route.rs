//! Route guard for views that require a signed-in user.

#[cfg(test)]
#[path = "protected_route_test.rs"]
mod protected_route_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::SessionState;

/// What the guard tells the router to render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteDecision {
    /// Hydration has not finished; show a placeholder, never redirect.
    Pending,
    /// Not signed in; go to the auth page. The attempted destination is
    /// discarded, as the original site did.
    RedirectToSignIn,
    /// Signed in; render the protected content.
    Render,
}

/// Pure decision over a session snapshot. Safe to evaluate repeatedly.
pub fn decide(session: &SessionState) -> RouteDecision {
    if session.is_loading() {
        RouteDecision::Pending
    } else if session.is_authenticated() {
        RouteDecision::Render
    } else {
        RouteDecision::RedirectToSignIn
    }
}

/// Wrapper that gates its children behind the session.
///
/// Re-evaluates on every session change; redirects to `/auth` from an
/// effect so navigation happens only on the client.
#[component]
pub fn ProtectedRoute(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    Effect::new(move || {
        if decide(&session.get()) == RouteDecision::RedirectToSignIn {
            navigate("/auth", NavigateOptions::default());
        }
    });

    view! {
        {move || match decide(&session.get()) {
            RouteDecision::Pending => {
                view! { <div class="route-guard__pending">"Carregando..."</div> }.into_any()
            }
            RouteDecision::RedirectToSignIn => ().into_any(),
            RouteDecision::Render => children().into_any(),
        }}
    }
}
