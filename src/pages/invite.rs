//! Invitation Acceptance Page
//!
//! Checks the invitation token on load, then lets the invitee set a
//! password. A successful acceptance signs the user in.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_navigate, use_params_map};
use whitepaperiq_core::models::{AcceptInvitationPayload, InvitationDetails};
use whitepaperiq_core::validation::{self, FormErrors, CONFIRM_PASSWORD, FULL_NAME, PASSWORD};

use crate::api;
use crate::browser;
use crate::components::{AuthLayout, FormField};

const REDIRECT_DELAY_MS: u32 = 2_000;

#[derive(Debug, Clone, PartialEq)]
enum InviteState {
    Loading,
    Invalid(String),
    Form(InvitationDetails),
    Accepted,
}

#[component]
pub fn InvitePage() -> impl IntoView {
    browser::set_page_title("Accept Invitation");
    let params = use_params_map();
    let navigate = use_navigate();
    let token = move || params.read().get("token").unwrap_or_default();

    let (state, set_state) = signal(InviteState::Loading);
    let (full_name, set_full_name) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (confirm, set_confirm) = signal(String::new());
    let (errors, set_errors) = signal(FormErrors::default());
    let (banner, set_banner) = signal::<Option<String>>(None);
    let (submitting, set_submitting) = signal(false);

    Effect::new(move |_| {
        let token = token();
        set_state.set(InviteState::Loading);
        if token.is_empty() {
            set_state.set(InviteState::Invalid("Invitation link is missing its token".to_string()));
            return;
        }
        spawn_local(async move {
            match api::client().invitation_details(&token).await {
                Ok(details) => set_state.set(InviteState::Form(details)),
                Err(e) => {
                    tracing::warn!(error = %e, "invitation lookup failed");
                    set_state.set(InviteState::Invalid(e.to_string()));
                }
            }
        });
    });

    let field_error = move |field: &'static str| Signal::derive(move || errors.with(|e| e.get(field).map(String::from)));
    let edit = move |field: &'static str, setter: WriteSignal<String>| {
        Callback::new(move |value: String| {
            setter.set(value);
            set_errors.update(|e| e.clear(field));
        })
    };

    let on_submit = {
        let navigate = navigate.clone();
        move |ev: web_sys::SubmitEvent| {
            ev.prevent_default();
            if submitting.get_untracked() {
                return;
            }
            let (name, pass, again) = (full_name.get_untracked(), password.get_untracked(), confirm.get_untracked());
            let found = validation::validate_invite_acceptance(&name, &pass, &again);
            if !found.is_empty() {
                set_errors.set(found);
                return;
            }

            let payload = AcceptInvitationPayload::new(&token(), &pass, &name);
            set_submitting.set(true);
            set_banner.set(None);
            let navigate = navigate.clone();
            spawn_local(async move {
                match api::client().accept_invitation(&payload).await {
                    Ok(_) => {
                        browser::dispatch_logged_in();
                        set_state.set(InviteState::Accepted);
                        Timeout::new(REDIRECT_DELAY_MS, move || navigate("/search", Default::default())).forget();
                    }
                    Err(e) => set_banner.set(Some(e.to_string())),
                }
                set_submitting.set(false);
            });
        }
    };

    let form = move |details: InvitationDetails| {
        view! {
            <h2 class="auth-title">{format!("Join {}", details.organization.name)}</h2>
            <p class="auth-subtitle">
                {format!("You were invited as {} with {}.", details.role.label(), details.email)}
            </p>
            {move || banner.get().map(|message| view! { <div class="alert alert--error">{message}</div> })}
            <form class="auth-form" on:submit=on_submit.clone() novalidate>
                <FormField
                    label="Full name (optional)"
                    name=FULL_NAME
                    autocomplete="name"
                    value=full_name
                    on_input=edit(FULL_NAME, set_full_name)
                    error=field_error(FULL_NAME)
                    disabled=submitting
                />
                <FormField
                    label="Password"
                    name=PASSWORD
                    input_type="password"
                    autocomplete="new-password"
                    value=password
                    on_input=edit(PASSWORD, set_password)
                    error=field_error(PASSWORD)
                    disabled=submitting
                />
                <FormField
                    label="Confirm password"
                    name=CONFIRM_PASSWORD
                    input_type="password"
                    autocomplete="new-password"
                    value=confirm
                    on_input=edit(CONFIRM_PASSWORD, set_confirm)
                    error=field_error(CONFIRM_PASSWORD)
                    disabled=submitting
                />
                <button type="submit" class="btn btn--primary btn--block" disabled=move || submitting.get()>
                    {move || if submitting.get() { "Joining..." } else { "Accept invitation" }}
                </button>
            </form>
        }
    };

    view! {
        <AuthLayout>
            {move || match state.get() {
                InviteState::Loading => view! { <p class="auth-loading">"Checking invitation..."</p> }.into_any(),
                InviteState::Invalid(message) => {
                    let navigate = navigate.clone();
                    view! {
                        <h2 class="auth-title">"Invalid Invitation"</h2>
                        <p class="auth-subtitle">{message}</p>
                        <button
                            type="button"
                            class="btn btn--primary btn--block"
                            on:click=move |_| navigate("/login", Default::default())
                        >
                            "Go to sign in"
                        </button>
                    }
                        .into_any()
                }
                InviteState::Form(details) => form(details).into_any(),
                InviteState::Accepted => view! {
                    <h2 class="auth-title">"Welcome aboard!"</h2>
                    <p class="auth-subtitle">"Your account is ready. Redirecting..."</p>
                }
                    .into_any(),
            }}
        </AuthLayout>
    }
}
