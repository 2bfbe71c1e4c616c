//! Top-5 ranking preview on the landing page.

use leptos::prelude::*;

// Demonstration data; the live ranking is on the trading page.
const TOP_TRADERS: [(&str, &str, &str); 5] = [
    ("#1", "João Silva", "+285.7%"),
    ("#2", "Maria Santos", "+247.3%"),
    ("#3", "Carlos Oliveira", "+198.1%"),
    ("#4", "Ana Costa", "+176.9%"),
    ("#5", "Pedro Ferreira", "+154.2%"),
];

/// Marketing preview of the championship standings with summary cards.
#[component]
pub fn RankingSection() -> impl IntoView {
    view! {
        <section class="ranking" id="ranking">
            <div class="ranking__inner">
                <div class="ranking__heading">
                    <h2>"Ranking Atual"</h2>
                    <p>"Acompanhe a classificação dos melhores traders em tempo real"</p>
                </div>

                <div class="ranking__card">
                    <div class="ranking__card-header">
                        <span class="ranking__card-title">"\u{1F3C6} Top 5 Traders"</span>
                        <a href="/trading" class="btn btn--ghost">
                            "Ver Ranking Completo"
                        </a>
                    </div>
                    <ul class="ranking__list">
                        {TOP_TRADERS
                            .into_iter()
                            .map(|(position, name, profit)| {
                                view! {
                                    <li class="ranking__row">
                                        <span class="ranking__position">{position}</span>
                                        <span class="ranking__name">{name}</span>
                                        <span class="ranking__profit">{profit}</span>
                                    </li>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </ul>
                </div>

                <div class="ranking__stats">
                    <div class="ranking__stat">
                        <span class="ranking__stat-value">"1.247"</span>
                        <span class="ranking__stat-label">"Traders ativos"</span>
                    </div>
                    <div class="ranking__stat">
                        <span class="ranking__stat-value">"R$ 2.4M"</span>
                        <span class="ranking__stat-label">"Volume negociado"</span>
                    </div>
                    <div class="ranking__stat">
                        <span class="ranking__stat-value">"18"</span>
                        <span class="ranking__stat-label">"Países participantes"</span>
                    </div>
                </div>
            </div>
        </section>
    }
}
