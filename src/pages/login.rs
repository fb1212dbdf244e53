//! Login Page

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use whitepaperiq_core::models::LoginCredentials;
use whitepaperiq_core::validation::{self, FormErrors, EMAIL, PASSWORD};

use crate::api;
use crate::browser;
use crate::components::{AuthLayout, FormField};

#[component]
pub fn LoginPage() -> impl IntoView {
    browser::set_page_title("Sign In");
    let navigate = use_navigate();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (errors, set_errors) = signal(FormErrors::default());
    let (banner, set_banner) = signal::<Option<String>>(None);
    let (submitting, set_submitting) = signal(false);

    let field_error = move |field: &'static str| Signal::derive(move || errors.with(|e| e.get(field).map(String::from)));
    let edit = move |field: &'static str, setter: WriteSignal<String>| {
        Callback::new(move |value: String| {
            setter.set(value);
            set_errors.update(|e| e.clear(field));
            set_banner.set(None);
        })
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        let credentials = LoginCredentials {
            email: email.get_untracked().trim().to_string(),
            password: password.get_untracked(),
        };
        let found = validation::validate_login(&credentials.email, &credentials.password);
        if !found.is_empty() {
            set_errors.set(found);
            return;
        }

        set_submitting.set(true);
        let navigate = navigate.clone();
        spawn_local(async move {
            match api::client().login(&credentials).await {
                Ok(_) => {
                    browser::dispatch_logged_in();
                    navigate("/search", Default::default());
                }
                Err(e) => {
                    tracing::warn!(error = %e, "login failed");
                    set_banner.set(Some(e.to_string()));
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <AuthLayout>
            <h2 class="auth-title">"Sign in"</h2>
            <p class="auth-subtitle">"Welcome back. Enter your credentials to continue."</p>

            {move || banner.get().map(|message| view! { <div class="alert alert--error">{message}</div> })}

            <form class="auth-form" on:submit=on_submit novalidate>
                <FormField
                    label="Email"
                    name=EMAIL
                    input_type="email"
                    placeholder="you@company.com"
                    autocomplete="email"
                    value=email
                    on_input=edit(EMAIL, set_email)
                    error=field_error(EMAIL)
                    disabled=submitting
                />
                <FormField
                    label="Password"
                    name=PASSWORD
                    input_type="password"
                    autocomplete="current-password"
                    value=password
                    on_input=edit(PASSWORD, set_password)
                    error=field_error(PASSWORD)
                    disabled=submitting
                />
                <button type="submit" class="btn btn--primary btn--block" disabled=move || submitting.get()>
                    {move || if submitting.get() { "Signing in..." } else { "Sign in" }}
                </button>
            </form>
        </AuthLayout>
    }
}
