//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::protected_route::ProtectedRoute;
use crate::pages::{
    auth::AuthPage, history::HistoryPage, index::IndexPage, not_found::NotFoundPage,
    performance::PerformancePage, trading::TradingPage,
};
use crate::state::session::SessionState;
use crate::util::storage::BrowserStorage;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="pt-BR">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session context, hydrates it once from storage, and sets
/// up client-side routing. Protected routes sit behind [`ProtectedRoute`];
/// the landing and auth pages are public.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::new());
    provide_context(session);

    // One-time hydration from localStorage, client-only. The loading flag
    // doubles as the double-invocation guard: a hydrated session ignores
    // further calls.
    Effect::new(move || {
        session.update(|s| s.hydrate(&BrowserStorage));
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/championship-client.css"/>
        <Title text="Campeonato de Trading"/>

        <Router>
            <Routes fallback=NotFoundPage>
                <Route path=StaticSegment("") view=IndexPage/>
                <Route path=StaticSegment("auth") view=AuthPage/>
                <Route
                    path=StaticSegment("trading")
                    view=|| {
                        view! {
                            <ProtectedRoute>
                                <TradingPage/>
                            </ProtectedRoute>
                        }
                    }
                />
                <Route
                    path=StaticSegment("history")
                    view=|| {
                        view! {
                            <ProtectedRoute>
                                <HistoryPage/>
                            </ProtectedRoute>
                        }
                    }
                />
                <Route
                    path=StaticSegment("dashboard")
                    view=|| {
                        view! {
                            <ProtectedRoute>
                                <PerformancePage/>
                            </ProtectedRoute>
                        }
                    }
                />
            </Routes>
        </Router>
    }
}
