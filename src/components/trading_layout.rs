//! Shared chrome for the authenticated trading pages.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::state::session::SessionState;
use crate::util::storage::BrowserStorage;

const NAV_ITEMS: [(&str, &str); 3] = [
    ("/trading", "Sala de Trading"),
    ("/history", "Histórico"),
    ("/dashboard", "Performance"),
];

/// Sticky header plus content wrapper for the trading room, history, and
/// performance pages: page title, tab navigation, signed-in e-mail, and a
/// logout button that clears the session and returns to the landing page.
#[component]
pub fn TradingLayout(title: &'static str, children: Children) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();
    let pathname = use_location().pathname;

    let user_email = move || {
        session
            .get()
            .user()
            .map_or_else(String::new, |u| u.email.clone())
    };

    let on_logout = {
        let navigate = navigate.clone();
        move |_| {
            session.update(|s| s.logout(&BrowserStorage));
            navigate("/", NavigateOptions::default());
        }
    };

    view! {
        <div class="trading-layout">
            <header class="trading-layout__header">
                <div class="trading-layout__title-row">
                    <a href="/" class="trading-layout__back" title="Voltar ao início">
                        "\u{2190}"
                    </a>
                    <h1 class="trading-layout__title">{title}</h1>
                    <span class="trading-layout__spacer"></span>
                    <span class="trading-layout__user">{user_email}</span>
                    <button class="btn trading-layout__logout" on:click=on_logout>
                        "Sair"
                    </button>
                </div>
                <nav class="trading-layout__tabs">
                    {NAV_ITEMS
                        .into_iter()
                        .map(|(path, label)| {
                            let is_active = move || pathname.get() == path;
                            view! {
                                <a
                                    href=path
                                    class="trading-layout__tab"
                                    class=("trading-layout__tab--active", is_active)
                                >
                                    {label}
                                </a>
                            }
                        })
                        .collect::<Vec<_>>()}
                </nav>
            </header>
            <main class="trading-layout__content">{children()}</main>
        </div>
    }
}
