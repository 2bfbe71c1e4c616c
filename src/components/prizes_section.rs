//! Prize tiers on the landing page.

use leptos::prelude::*;

const TIERS: [(&str, &str, &str); 3] = [
    ("\u{1F947}", "1º Lugar", "R$ 25.000"),
    ("\u{1F948}", "2º Lugar", "R$ 15.000"),
    ("\u{1F949}", "3º Lugar", "R$ 10.000"),
];

#[component]
pub fn PrizesSection() -> impl IntoView {
    view! {
        <section class="prizes" id="prizes">
            <div class="prizes__inner">
                <h2 class="prizes__title">"Premiação"</h2>
                <p class="prizes__lead">
                    "R$ 50.000 distribuídos entre os três melhores traders da edição."
                </p>
                <div class="prizes__tiers">
                    {TIERS
                        .into_iter()
                        .map(|(medal, place, amount)| {
                            view! {
                                <div class="prizes__tier">
                                    <span class="prizes__medal">{medal}</span>
                                    <h3>{place}</h3>
                                    <p class="prizes__amount">{amount}</p>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
                <p class="prizes__note">
                    "Prêmios pagos via transferência bancária em até 30 dias após o
                    encerramento, mediante verificação de identidade."
                </p>
            </div>
        </section>
    }
}
