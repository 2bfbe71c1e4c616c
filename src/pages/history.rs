//! Trading history with demonstration data and a per-pair filter.

use leptos::prelude::*;

use crate::components::trading_layout::TradingLayout;

/// A closed demo trade shown in the history table.
#[derive(Clone, Debug)]
struct Trade {
    id: &'static str,
    pair: &'static str,
    kind: &'static str,
    size: f64,
    open_price: f64,
    close_price: f64,
    close_time: &'static str,
    pnl: f64,
    points: i32,
    duration: &'static str,
}

// Demonstration data standing in for the per-user trade feed.
const TRADES: [Trade; 5] = [
    Trade {
        id: "T001",
        pair: "EUR/USD",
        kind: "BUY",
        size: 0.10,
        open_price: 1.2450,
        close_price: 1.2485,
        close_time: "2024-01-15 11:45:22",
        pnl: 35.00,
        points: 150,
        duration: "2h 29m",
    },
    Trade {
        id: "T002",
        pair: "GBP/USD",
        kind: "SELL",
        size: 0.05,
        open_price: 1.3120,
        close_price: 1.3095,
        close_time: "2024-01-15 10:15:45",
        pnl: 12.50,
        points: 75,
        duration: "1h 45m",
    },
    Trade {
        id: "T003",
        pair: "USD/JPY",
        kind: "BUY",
        size: 0.08,
        open_price: 149.25,
        close_price: 148.95,
        close_time: "2024-01-15 14:55:33",
        pnl: -24.00,
        points: -50,
        duration: "1h 35m",
    },
    Trade {
        id: "T004",
        pair: "EUR/USD",
        kind: "SELL",
        size: 0.12,
        open_price: 1.2465,
        close_price: 1.2425,
        close_time: "2024-01-15 16:30:18",
        pnl: 48.00,
        points: 200,
        duration: "1h 20m",
    },
    Trade {
        id: "T005",
        pair: "AUD/USD",
        kind: "BUY",
        size: 0.06,
        open_price: 0.6745,
        close_price: 0.6765,
        close_time: "2024-01-15 17:25:55",
        pnl: 12.00,
        points: 60,
        duration: "40m",
    },
];

const SUMMARY: [(&str, &str); 6] = [
    ("Total de operações", "127"),
    ("Vencedoras", "89"),
    ("Perdedoras", "38"),
    ("Taxa de acerto", "70.08%"),
    ("P&L total", "+$2,847.50"),
    ("Pontos", "14,250"),
];

#[component]
pub fn HistoryPage() -> impl IntoView {
    let pair_filter = RwSignal::new("all".to_owned());

    let filtered = move || {
        let filter = pair_filter.get();
        TRADES
            .iter()
            .filter(|t| filter == "all" || t.pair == filter)
            .cloned()
            .collect::<Vec<_>>()
    };

    let pairs = {
        let mut pairs: Vec<&str> = TRADES.iter().map(|t| t.pair).collect();
        pairs.sort_unstable();
        pairs.dedup();
        pairs
    };

    view! {
        <TradingLayout title="Histórico de Operações">
            <div class="history-page">
                <div class="history-page__summary">
                    {SUMMARY
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

                <div class="history-page__filter">
                    <label>
                        "Par: "
                        <select on:change=move |ev| pair_filter.set(event_target_value(&ev))>
                            <option value="all" selected=true>"Todos"</option>
                            {pairs
                                .into_iter()
                                .map(|pair| view! { <option value=pair>{pair}</option> })
                                .collect::<Vec<_>>()}
                        </select>
                    </label>
                </div>

                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"ID"</th>
                            <th>"Par"</th>
                            <th>"Tipo"</th>
                            <th class="data-table__num">"Lote"</th>
                            <th class="data-table__num">"Abertura"</th>
                            <th class="data-table__num">"Fechamento"</th>
                            <th class="data-table__num">"P&L"</th>
                            <th class="data-table__num">"Pontos"</th>
                            <th>"Duração"</th>
                            <th>"Encerrada em"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            filtered()
                                .into_iter()
                                .map(|trade| {
                                    let pnl_class = if trade.pnl >= 0.0 {
                                        "data-table__num data-table__num--gain"
                                    } else {
                                        "data-table__num data-table__num--loss"
                                    };
                                    view! {
                                        <tr>
                                            <td>{trade.id}</td>
                                            <td>{trade.pair}</td>
                                            <td>{trade.kind}</td>
                                            <td class="data-table__num">{format!("{:.2}", trade.size)}</td>
                                            <td class="data-table__num">{format!("{:.4}", trade.open_price)}</td>
                                            <td class="data-table__num">{format!("{:.4}", trade.close_price)}</td>
                                            <td class=pnl_class>{format!("{:+.2}", trade.pnl)}</td>
                                            <td class="data-table__num">{trade.points}</td>
                                            <td>{trade.duration}</td>
                                            <td>{trade.close_time}</td>
                                        </tr>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </tbody>
                </table>
            </div>
        </TradingLayout>
    }
}
