//! Add Member Modal Component
//!
//! Invites a new member by e-mail with an initial role.

use leptos::prelude::*;
use whitepaperiq_core::models::MemberRole;
use whitepaperiq_core::validation::validate_member_email;

#[component]
pub fn AddMemberModal(
    #[prop(into)] saving: Signal<bool>,
    #[prop(into)] on_close: Callback<()>,
    #[prop(into)] on_add: Callback<(String, MemberRole)>,
) -> impl IntoView {
    let (email, set_email) = signal(String::new());
    let (role, set_role) = signal(MemberRole::Analyst);
    let (error, set_error) = signal::<Option<String>>(None);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        match validate_member_email(&email.get_untracked()) {
            Ok(address) => {
                set_error.set(None);
                on_add.run((address, role.get_untracked()));
            }
            Err(message) => set_error.set(Some(message)),
        }
    };

    view! {
        <div class="modal-overlay" on:click=move |_| on_close.run(())>
            <form class="modal add-member-modal" on:click=|ev| ev.stop_propagation() on:submit=on_submit>
                <div class="modal__header">
                    <h3 class="modal__title">"Add Member"</h3>
                    <button type="button" class="modal__close" on:click=move |_| on_close.run(())>"×"</button>
                </div>

                <label class="add-member-modal__field">
                    <span>"Email"</span>
                    <input
                        type="email"
                        placeholder="colleague@company.com"
                        prop:value=move || email.get()
                        on:input=move |ev| {
                            set_email.set(event_target_value(&ev));
                            set_error.set(None);
                        }
                    />
                </label>
                {move || error.get().map(|message| view! { <span class="form-field__error">{message}</span> })}

                <label class="add-member-modal__field">
                    <span>"Role"</span>
                    <select on:change=move |ev| {
                        if let Some(selected) = MemberRole::parse(&event_target_value(&ev)) {
                            set_role.set(selected);
                        }
                    }>
                        {MemberRole::ASSIGNABLE
                            .iter()
                            .map(|option| {
                                let option = *option;
                                view! {
                                    <option value=option.as_str() selected=move || role.get() == option>
                                        {option.label()}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                </label>

                <div class="modal__actions">
                    <button type="button" class="btn" on:click=move |_| on_close.run(())>"Cancel"</button>
                    <button type="submit" class="btn btn--primary" disabled=move || saving.get()>
                        {move || if saving.get() { "Sending..." } else { "Send invitation" }}
                    </button>
                </div>
            </form>
        </div>
    }
}
