//! Catch-all page for unmatched routes.

use leptos::prelude::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"404"</h1>
            <p>"Página não encontrada."</p>
            <a href="/" class="btn btn--primary">
                "Voltar ao início"
            </a>
        </div>
    }
}
