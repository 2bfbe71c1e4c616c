//! "Como funciona" steps on the landing page.

use leptos::prelude::*;

const STEPS: [(&str, &str, &str); 4] = [
    (
        "1",
        "Crie sua conta",
        "Cadastre-se gratuitamente com e-mail e telefone. A inscrição leva \
         menos de dois minutos.",
    ),
    (
        "2",
        "Receba sua conta demo",
        "Todos os participantes começam com o mesmo saldo virtual e acesso \
         aos mesmos pares de moedas.",
    ),
    (
        "3",
        "Opere durante 90 dias",
        "Cada operação fechada soma ou subtrai pontos conforme o resultado. \
         Consistência vale mais que sorte.",
    ),
    (
        "4",
        "Suba no ranking",
        "Acompanhe sua posição em tempo real e dispute os prêmios das três \
         primeiras colocações.",
    ),
];

#[component]
pub fn HowItWorksSection() -> impl IntoView {
    view! {
        <section class="how-it-works" id="how-it-works">
            <div class="how-it-works__inner">
                <h2 class="how-it-works__title">"Como Funciona"</h2>
                <div class="how-it-works__steps">
                    {STEPS
                        .into_iter()
                        .map(|(number, title, body)| {
                            view! {
                                <div class="how-it-works__step">
                                    <span class="how-it-works__number">{number}</span>
                                    <h3>{title}</h3>
                                    <p>{body}</p>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}
