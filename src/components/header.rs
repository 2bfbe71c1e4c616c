//! Landing page header with navigation and auth shortcuts.

use leptos::prelude::*;

use crate::state::session::SessionState;

const NAV_ITEMS: [(&str, &str); 6] = [
    ("#home", "Início"),
    ("#ranking", "Ranking"),
    ("/trading", "Sala de Trading"),
    ("/history", "Histórico"),
    ("/dashboard", "Performance"),
    ("#about", "Sobre"),
];

/// Fixed top bar: brand, section links, and the login/participate buttons.
/// When a session is active the login button shows the signed-in e-mail
/// instead.
#[component]
pub fn Header() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let account_label = move || {
        session
            .get()
            .user()
            .map_or_else(|| "Entrar".to_owned(), |u| u.email.clone())
    };

    view! {
        <header class="site-header" id="home">
            <div class="site-header__inner">
                <a href="/" class="site-header__brand">
                    <span class="site-header__logo">"\u{1F4C8}"</span>
                    <span>
                        <span class="site-header__name">"Campeonato de Trading"</span>
                        <span class="site-header__tagline">"FP Markets"</span>
                    </span>
                </a>

                <nav class="site-header__nav">
                    {NAV_ITEMS
                        .into_iter()
                        .map(|(href, label)| {
                            view! {
                                <a href=href class="site-header__link">
                                    {label}
                                </a>
                            }
                        })
                        .collect::<Vec<_>>()}
                </nav>

                <div class="site-header__actions">
                    <a href="/auth" class="btn btn--ghost">
                        {account_label}
                    </a>
                    <a href="/auth" class="btn btn--gold">
                        "Participar"
                    </a>
                </div>
            </div>
        </header>
    }
}
