//! Landing hero with the championship pitch and call to action.

use leptos::prelude::*;

/// Opening section: slogan, prize headline, and the signup call to action.
#[component]
pub fn HeroSection() -> impl IntoView {
    view! {
        <section class="hero">
            <div class="hero__inner">
                <p class="hero__badge">"Inscrições abertas · Edição 2026"</p>
                <h1 class="hero__title">
                    "Prove que você é o melhor trader"
                </h1>
                <p class="hero__subtitle">
                    "Compita com traders de todo o país em contas demo, acumule
                    pontos a cada operação vencedora e dispute prêmios reais."
                </p>
                <div class="hero__actions">
                    <a href="/auth" class="btn btn--gold hero__cta">
                        "Quero Participar"
                    </a>
                    <a href="#how-it-works" class="btn btn--ghost">
                        "Como funciona"
                    </a>
                </div>
                <div class="hero__stats">
                    <div class="hero__stat">
                        <span class="hero__stat-value">"R$ 50.000"</span>
                        <span class="hero__stat-label">"em prêmios"</span>
                    </div>
                    <div class="hero__stat">
                        <span class="hero__stat-value">"1.247"</span>
                        <span class="hero__stat-label">"traders ativos"</span>
                    </div>
                    <div class="hero__stat">
                        <span class="hero__stat-value">"90 dias"</span>
                        <span class="hero__stat-label">"de competição"</span>
                    </div>
                </div>
            </div>
        </section>
    }
}
