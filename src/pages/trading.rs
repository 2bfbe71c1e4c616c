//! Trading room: live championship ranking and the user's closed
//! operations, fetched from the REST API on mount.

use leptos::prelude::*;

use crate::components::trading_layout::TradingLayout;
use crate::net::championship::{self, Operation, RankingEntry};

#[component]
pub fn TradingPage() -> impl IntoView {
    let ranking = LocalResource::new(|| championship::fetch_ranking());
    let operations = LocalResource::new(|| championship::fetch_operations());

    view! {
        <TradingLayout title="Sala de Trading">
            <div class="trading-page">
                <section class="trading-page__panel">
                    <h2 class="trading-page__panel-title">"\u{1F3C6} Ranking do Campeonato"</h2>
                    <Suspense fallback=move || view! { <p class="trading-page__loading">"Carregando ranking..."</p> }>
                        {move || {
                            ranking
                                .get()
                                .map(|result| match result {
                                    Ok(entries) => view! { <RankingTable entries=entries/> }.into_any(),
                                    Err(message) => {
                                        view! {
                                            <div class="trading-page__error">
                                                <strong>"Erro ao carregar o ranking"</strong>
                                                <p>{message}</p>
                                            </div>
                                        }
                                            .into_any()
                                    }
                                })
                        }}
                    </Suspense>
                </section>

                <section class="trading-page__panel">
                    <h2 class="trading-page__panel-title">"\u{1F4CA} Suas Operações"</h2>
                    <Suspense fallback=move || view! { <p class="trading-page__loading">"Carregando operações..."</p> }>
                        {move || {
                            operations
                                .get()
                                .map(|result| match result {
                                    Ok(ops) => view! { <OperationsTable operations=ops/> }.into_any(),
                                    Err(message) => {
                                        view! {
                                            <div class="trading-page__error">
                                                <strong>"Erro ao carregar as operações"</strong>
                                                <p>{message}</p>
                                            </div>
                                        }
                                            .into_any()
                                    }
                                })
                        }}
                    </Suspense>
                </section>
            </div>
        </TradingLayout>
    }
}

/// Championship standings ordered by total profit.
#[component]
fn RankingTable(entries: Vec<RankingEntry>) -> impl IntoView {
    if entries.is_empty() {
        return view! { <p class="trading-page__empty">"Nenhum participante classificado ainda."</p> }
            .into_any();
    }
    view! {
        <table class="data-table">
            <thead>
                <tr>
                    <th>"Rank"</th>
                    <th>"Trader"</th>
                    <th class="data-table__num">"Lucro Total"</th>
                    <th class="data-table__num">"Operações"</th>
                </tr>
            </thead>
            <tbody>
                {entries
                    .into_iter()
                    .enumerate()
                    .map(|(index, entry)| {
                        let profit_class = if entry.total_profit >= 0.0 {
                            "data-table__num data-table__num--gain"
                        } else {
                            "data-table__num data-table__num--loss"
                        };
                        view! {
                            <tr>
                                <td>{index + 1}</td>
                                <td>{entry.nickname}</td>
                                <td class=profit_class>{format!("${:.2}", entry.total_profit)}</td>
                                <td class="data-table__num">{entry.operation_count}</td>
                            </tr>
                        }
                    })
                    .collect::<Vec<_>>()}
            </tbody>
        </table>
    }
    .into_any()
}

/// The signed-in user's closed operations.
#[component]
fn OperationsTable(operations: Vec<Operation>) -> impl IntoView {
    if operations.is_empty() {
        return view! { <p class="trading-page__empty">"Nenhuma operação registrada."</p> }
            .into_any();
    }

    view! {
        <table class="data-table">
            <thead>
                <tr>
                    <th>"Símbolo"</th>
                    <th>"Tipo"</th>
                    <th class="data-table__num">"Volume"</th>
                    <th class="data-table__num">"Lucro"</th>
                    <th>"Fechamento"</th>
                </tr>
            </thead>
            <tbody>
                {operations
                    .into_iter()
                    .map(|op| {
                        let gain = op.profit.parse::<f64>().unwrap_or(0.0) >= 0.0;
                        let profit_class = if gain {
                            "data-table__num data-table__num--gain"
                        } else {
                            "data-table__num data-table__num--loss"
                        };
                        view! {
                            <tr>
                                <td>{op.symbol}</td>
                                <td>{op.kind.label()}</td>
                                <td class="data-table__num">{op.volume}</td>
                                <td class=profit_class>{format!("${}", op.profit)}</td>
                                <td>{op.close_time}</td>
                            </tr>
                        }
                    })
                    .collect::<Vec<_>>()}
            </tbody>
        </table>
    }
    .into_any()
}
