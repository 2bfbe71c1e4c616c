//! Login form card for the auth page.

use leptos::prelude::*;

use crate::net::types::LoginRequest;

/// E-mail/password login form.
///
/// Owns its field signals; validation is minimal (non-empty e-mail,
/// password of at least 6 characters) with inline messages. Submission is
/// delegated to the page through `on_submit`, and the whole form is
/// disabled while `busy` is set.
#[component]
pub fn LoginForm(
    on_submit: Callback<LoginRequest>,
    on_switch_to_register: Callback<()>,
    busy: Signal<bool>,
) -> impl IntoView {
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let remember_me = RwSignal::new(false);
    let validation = RwSignal::new(Option::<String>::None);

    let submit = Callback::new(move |()| {
        if busy.get_untracked() {
            return;
        }
        let email_value = email.get().trim().to_owned();
        let password_value = password.get();
        if email_value.is_empty() || !email_value.contains('@') {
            validation.set(Some("E-mail inválido".to_owned()));
            return;
        }
        if password_value.len() < 6 {
            validation.set(Some("Senha deve ter pelo menos 6 caracteres".to_owned()));
            return;
        }
        validation.set(None);
        on_submit.run(LoginRequest {
            email: email_value,
            password: password_value,
            remember_me: remember_me.get(),
        });
    });

    view! {
        <div class="auth-card">
            <div class="auth-card__heading">
                <h2>"Entrar"</h2>
                <p>"Acesse sua conta no Campeonato FP Markets"</p>
            </div>

            <form
                class="auth-card__form"
                on:submit=move |ev| {
                    ev.prevent_default();
                    submit.run(());
                }
            >
                <label class="auth-card__label">
                    "E-mail"
                    <input
                        class="auth-card__input"
                        type="email"
                        placeholder="seu@email.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                        prop:disabled=move || busy.get()
                    />
                </label>

                <label class="auth-card__label">
                    "Senha"
                    <input
                        class="auth-card__input"
                        type="password"
                        placeholder="Sua senha"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                        prop:disabled=move || busy.get()
                    />
                </label>

                <label class="auth-card__checkbox">
                    <input
                        type="checkbox"
                        prop:checked=move || remember_me.get()
                        on:change=move |_| remember_me.update(|v| *v = !*v)
                    />
                    "Lembrar de mim"
                </label>

                <Show when=move || validation.get().is_some()>
                    <p class="auth-card__validation">
                        {move || validation.get().unwrap_or_default()}
                    </p>
                </Show>

                <button class="btn btn--primary auth-card__submit" type="submit" prop:disabled=move || busy.get()>
                    {move || if busy.get() { "Entrando..." } else { "Entrar" }}
                </button>
            </form>

            <p class="auth-card__switch">
                "Ainda não tem conta? "
                <button class="btn btn--link" on:click=move |_| on_switch_to_register.run(())>
                    "Cadastre-se"
                </button>
            </p>
        </div>
    }
}
