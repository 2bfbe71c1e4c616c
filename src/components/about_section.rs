//! "Sobre" section of the landing page.

use leptos::prelude::*;

const HIGHLIGHTS: [(&str, &str); 3] = [
    (
        "Conta demo, risco zero",
        "Todas as operações acontecem em contas de demonstração com saldo \
         virtual. Nenhum dinheiro real é colocado em risco durante o campeonato.",
    ),
    (
        "Pontuação transparente",
        "Cada operação fechada gera pontos proporcionais ao resultado. O \
         ranking é recalculado em tempo real e auditável por todos os \
         participantes.",
    ),
    (
        "Aberto a todos os níveis",
        "Do iniciante ao profissional: basta criar uma conta, conectar sua \
         plataforma e começar a operar dentro do período da competição.",
    ),
];

/// Static marketing copy describing the championship rules and spirit.
#[component]
pub fn AboutSection() -> impl IntoView {
    view! {
        <section class="about" id="about">
            <div class="about__inner">
                <h2 class="about__title">"Sobre o Campeonato"</h2>
                <p class="about__lead">
                    "Uma competição de trading pensada para revelar talento de
                    verdade: mesmas condições, mesmos instrumentos, mesmo
                    período para todos."
                </p>
                <div class="about__grid">
                    {HIGHLIGHTS
                        .into_iter()
                        .map(|(title, body)| {
                            view! {
                                <div class="about__card">
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
