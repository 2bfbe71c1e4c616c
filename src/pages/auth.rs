//! Sign-in / sign-up page.
//!
//! Owns the submission flow for both forms: login commits into the session
//! store and redirects to the trading room; registration only creates the
//! account and drops back to the login form. Gateway errors surface in a
//! banner and never touch the session. A submit while another request is
//! in flight is ignored, so login attempts never overlap.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::login_form::LoginForm;
use crate::components::register_form::RegisterForm;
use crate::net::types::{LoginRequest, RegisterRequest};
use crate::state::session::SessionState;

#[derive(Clone, Copy, PartialEq, Eq)]
enum AuthMode {
    Login,
    Register,
}

#[component]
pub fn AuthPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    let mode = RwSignal::new(AuthMode::Login);
    let submitting = RwSignal::new(false);
    let error = RwSignal::new(Option::<String>::None);
    let notice = RwSignal::new(Option::<String>::None);

    // An already-authenticated visitor has nothing to do here.
    {
        let navigate = navigate.clone();
        Effect::new(move || {
            let state = session.get();
            if !state.is_loading() && state.is_authenticated() {
                navigate("/trading", NavigateOptions::default());
            }
        });
    }

    let on_login = {
        let navigate = navigate.clone();
        Callback::new(move |credentials: LoginRequest| {
            if submitting.get_untracked() {
                return;
            }
            submitting.set(true);
            error.set(None);
            notice.set(None);
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                use crate::util::storage::BrowserStorage;
                match crate::state::session::login(session, &BrowserStorage, credentials).await {
                    Ok(()) => navigate("/trading", NavigateOptions::default()),
                    Err(e) => error.set(Some(e.to_string())),
                }
                submitting.set(false);
            });
        })
    };

    let on_register = Callback::new(move |user_data: RegisterRequest| {
        if submitting.get_untracked() {
            return;
        }
        submitting.set(true);
        error.set(None);
        notice.set(None);
        leptos::task::spawn_local(async move {
            match crate::net::api::register(&user_data).await {
                Ok(_) => {
                    notice.set(Some(
                        "Conta criada com sucesso! Você já pode fazer o login.".to_owned(),
                    ));
                    mode.set(AuthMode::Login);
                }
                Err(e) => error.set(Some(e.to_string())),
            }
            submitting.set(false);
        });
    });

    let switch_to_register = Callback::new(move |()| {
        mode.set(AuthMode::Register);
        error.set(None);
        notice.set(None);
    });
    let switch_to_login = Callback::new(move |()| {
        mode.set(AuthMode::Login);
        error.set(None);
        notice.set(None);
    });

    view! {
        <div class="auth-page">
            <a href="/" class="auth-page__back">
                "\u{2190} Voltar ao início"
            </a>

            <Show when=move || notice.get().is_some()>
                <div class="auth-page__notice">{move || notice.get().unwrap_or_default()}</div>
            </Show>
            <Show when=move || error.get().is_some()>
                <div class="auth-page__error">{move || error.get().unwrap_or_default()}</div>
            </Show>

            {move || match mode.get() {
                AuthMode::Login => {
                    view! {
                        <LoginForm
                            on_submit=on_login
                            on_switch_to_register=switch_to_register
                            busy=submitting.into()
                        />
                    }
                        .into_any()
                }
                AuthMode::Register => {
                    view! {
                        <RegisterForm
                            on_submit=on_register
                            on_switch_to_login=switch_to_login
                            busy=submitting.into()
                        />
                    }
                        .into_any()
                }
            }}
        </div>
    }
}
