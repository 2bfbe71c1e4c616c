//! Performance dashboard with demonstration metrics.

use leptos::prelude::*;

use crate::components::trading_layout::TradingLayout;

const HEADLINE_STATS: [(&str, &str); 6] = [
    ("Lucro total", "+$15,450.75"),
    ("Operações", "342"),
    ("Taxa de acerto", "72.8%"),
    ("Posição atual", "#47"),
    ("Pontos", "14,250"),
    ("Fator de lucro", "1.85"),
];

const MONTHLY: [(&str, i32, u32, u32); 6] = [
    ("Jan", 1200, 45, 72),
    ("Fev", 1850, 52, 68),
    ("Mar", 2340, 48, 75),
    ("Abr", 1920, 41, 70),
    ("Mai", 2680, 55, 78),
    ("Jun", 3150, 60, 73),
];

const WEEKLY: [(&str, i32, u32); 7] = [
    ("Seg", 120, 8),
    ("Ter", 85, 6),
    ("Qua", -45, 5),
    ("Qui", 220, 9),
    ("Sex", 180, 7),
    ("Sáb", 95, 4),
    ("Dom", 65, 3),
];

const RISK_METRICS: [(&str, &str); 4] = [
    ("Drawdown máximo", "-8.5%"),
    ("Índice de Sharpe", "1.42"),
    ("Lote médio", "0.08"),
    ("Melhor posição", "#23"),
];

#[component]
pub fn PerformancePage() -> impl IntoView {
    view! {
        <TradingLayout title="Performance">
            <div class="performance-page">
                <div class="performance-page__stats">
                    {HEADLINE_STATS
                        .into_iter()
                        .map(|(label, value)| {
                            view! {
                                <div class="stat-card">
                                    <span class="stat-card__label">{label}</span>
                                    <span class="stat-card__value">{value}</span>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>

                <section class="performance-page__panel">
                    <h2>"Resultados Mensais"</h2>
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>"Mês"</th>
                                <th class="data-table__num">"Lucro"</th>
                                <th class="data-table__num">"Operações"</th>
                                <th class="data-table__num">"Taxa de acerto"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {MONTHLY
                                .into_iter()
                                .map(|(month, profit, trades, win_rate)| {
                                    view! {
                                        <tr>
                                            <td>{month}</td>
                                            <td class="data-table__num data-table__num--gain">
                                                {format!("+${profit}")}
                                            </td>
                                            <td class="data-table__num">{trades}</td>
                                            <td class="data-table__num">{format!("{win_rate}%")}</td>
                                        </tr>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </tbody>
                    </table>
                </section>

                <section class="performance-page__panel">
                    <h2>"Semana Atual"</h2>
                    <div class="performance-page__week">
                        {WEEKLY
                            .into_iter()
                            .map(|(day, pnl, trades)| {
                                let pnl_class = if pnl >= 0 {
                                    "performance-page__day-pnl--gain"
                                } else {
                                    "performance-page__day-pnl--loss"
                                };
                                view! {
                                    <div class="performance-page__day">
                                        <span class="performance-page__day-name">{day}</span>
                                        <span class=pnl_class>{format!("{pnl:+}")}</span>
                                        <span class="performance-page__day-trades">
                                            {format!("{trades} ops")}
                                        </span>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                </section>

                <section class="performance-page__panel">
                    <h2>"Métricas de Risco"</h2>
                    <dl class="performance-page__metrics">
                        {RISK_METRICS
                            .into_iter()
                            .map(|(label, value)| {
                                view! {
                                    <div class="performance-page__metric">
                                        <dt>{label}</dt>
                                        <dd>{value}</dd>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </dl>
                </section>
            </div>
        </TradingLayout>
    }
}
