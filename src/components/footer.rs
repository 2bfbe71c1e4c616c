//! Landing page footer.

use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <div class="site-footer__inner">
                <div class="site-footer__brand">
                    <span class="site-footer__name">"Campeonato de Trading"</span>
                    <p class="site-footer__disclaimer">
                        "Operações em mercados financeiros envolvem risco. O
                        campeonato utiliza exclusivamente contas de demonstração."
                    </p>
                </div>
                <nav class="site-footer__links">
                    <a href="#about">"Sobre"</a>
                    <a href="#prizes">"Premiação"</a>
                    <a href="#ranking">"Ranking"</a>
                    <a href="/auth">"Participar"</a>
                </nav>
                <p class="site-footer__copyright">
                    "© 2026 Campeonato de Trading FP Markets. Todos os direitos reservados."
                </p>
            </div>
        </footer>
    }
}
