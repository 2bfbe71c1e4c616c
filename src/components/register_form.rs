//! Registration form card for the auth page.

use leptos::prelude::*;

use crate::net::types::RegisterRequest;

/// New-account form mirroring the championship signup fields.
///
/// Field rules follow the original form: name, valid e-mail, phone with at
/// least 10 digits, password of at least 8 characters confirmed twice,
/// optional country. The page owns the actual API call via `on_submit`.
#[component]
pub fn RegisterForm(
    on_submit: Callback<RegisterRequest>,
    on_switch_to_login: Callback<()>,
    busy: Signal<bool>,
) -> impl IntoView {
    let full_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let country = RwSignal::new(String::new());
    let validation = RwSignal::new(Option::<String>::None);

    let submit = Callback::new(move |()| {
        if busy.get_untracked() {
            return;
        }
        let name_value = full_name.get().trim().to_owned();
        let email_value = email.get().trim().to_owned();
        let phone_value = phone.get().trim().to_owned();
        let password_value = password.get();

        let error = if name_value.len() < 3 {
            Some("Nome deve ter pelo menos 3 caracteres")
        } else if email_value.is_empty() || !email_value.contains('@') {
            Some("E-mail inválido")
        } else if phone_value.chars().filter(char::is_ascii_digit).count() < 10 {
            Some("Telefone deve ter pelo menos 10 dígitos")
        } else if password_value.len() < 8 {
            Some("Senha deve ter pelo menos 8 caracteres")
        } else if confirm_password.get() != password_value {
            Some("As senhas não coincidem")
        } else {
            None
        };
        if let Some(message) = error {
            validation.set(Some(message.to_owned()));
            return;
        }

        validation.set(None);
        let country_value = country.get().trim().to_owned();
        on_submit.run(RegisterRequest {
            full_name: name_value,
            email: email_value,
            phone: phone_value,
            password: password_value,
            country: (!country_value.is_empty()).then_some(country_value),
        });
    });

    view! {
        <div class="auth-card">
            <div class="auth-card__heading">
                <h2>"Criar Conta"</h2>
                <p>"Participe do Campeonato de Trading"</p>
            </div>

            <form
                class="auth-card__form"
                on:submit=move |ev| {
                    ev.prevent_default();
                    submit.run(());
                }
            >
                <label class="auth-card__label">
                    "Nome completo"
                    <input
                        class="auth-card__input"
                        type="text"
                        prop:value=move || full_name.get()
                        on:input=move |ev| full_name.set(event_target_value(&ev))
                        prop:disabled=move || busy.get()
                    />
                </label>

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
                    "Telefone"
                    <input
                        class="auth-card__input"
                        type="tel"
                        placeholder="+55 11 99999-9999"
                        prop:value=move || phone.get()
                        on:input=move |ev| phone.set(event_target_value(&ev))
                        prop:disabled=move || busy.get()
                    />
                </label>

                <label class="auth-card__label">
                    "País (opcional)"
                    <input
                        class="auth-card__input"
                        type="text"
                        prop:value=move || country.get()
                        on:input=move |ev| country.set(event_target_value(&ev))
                        prop:disabled=move || busy.get()
                    />
                </label>

                <label class="auth-card__label">
                    "Senha"
                    <input
                        class="auth-card__input"
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                        prop:disabled=move || busy.get()
                    />
                </label>

                <label class="auth-card__label">
                    "Confirmar senha"
                    <input
                        class="auth-card__input"
                        type="password"
                        prop:value=move || confirm_password.get()
                        on:input=move |ev| confirm_password.set(event_target_value(&ev))
                        prop:disabled=move || busy.get()
                    />
                </label>

                <Show when=move || validation.get().is_some()>
                    <p class="auth-card__validation">
                        {move || validation.get().unwrap_or_default()}
                    </p>
                </Show>

                <button class="btn btn--primary auth-card__submit" type="submit" prop:disabled=move || busy.get()>
                    {move || if busy.get() { "Criando conta..." } else { "Criar conta" }}
                </button>
            </form>

            <p class="auth-card__switch">
                "Já tem conta? "
                <button class="btn btn--link" on:click=move |_| on_switch_to_login.run(())>
                    "Entrar"
                </button>
            </p>
        </div>
    }
}
