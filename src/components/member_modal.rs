//! Member Modal Component
//!
//! Role change and removal for one organization member.

use leptos::prelude::*;
use whitepaperiq_core::format;
use whitepaperiq_core::models::{MemberRole, OrganizationMember};

use super::DeleteConfirmButton;

#[component]
pub fn MemberModal(
    member: OrganizationMember,
    /// Current user may change roles and remove members
    can_manage: bool,
    #[prop(into)] saving: Signal<bool>,
    #[prop(into)] on_close: Callback<()>,
    #[prop(into)] on_save: Callback<(String, MemberRole)>,
    #[prop(into)] on_delete: Callback<String>,
) -> impl IntoView {
    let (selected_role, set_selected_role) = signal(member.role);
    let editable = can_manage && !member.is_locked();
    let member_id = StoredValue::new(member.id.clone());

    let on_change_role = move |ev: web_sys::Event| {
        if let Some(role) = MemberRole::parse(&event_target_value(&ev)) {
            set_selected_role.set(role);
        }
    };

    view! {
        <div class="modal-overlay" on:click=move |_| on_close.run(())>
            <div class="modal member-modal" on:click=|ev| ev.stop_propagation()>
                <div class="modal__header">
                    <h3 class="modal__title">{member.name.clone()}</h3>
                    <button type="button" class="modal__close" on:click=move |_| on_close.run(())>"×"</button>
                </div>

                <div class="member-modal__row">
                    <span class="member-modal__label">"Email"</span>
                    <span>{member.email.clone()}</span>
                </div>
                <div class="member-modal__row">
                    <span class="member-modal__label">"Status"</span>
                    <span class=format!("member-modal__status member-modal__status--{}", member.status.label().to_lowercase())>
                        {member.status.label()}
                    </span>
                </div>
                <div class="member-modal__row">
                    <span class="member-modal__label">"Joined"</span>
                    <span>{format::date(&member.joined_at)}</span>
                </div>
                <div class="member-modal__row">
                    <span class="member-modal__label">"Role"</span>
                    {if editable {
                        view! {
                            <select class="member-modal__role" on:change=on_change_role>
                                {MemberRole::ASSIGNABLE
                                    .iter()
                                    .map(|role| {
                                        let role = *role;
                                        view! {
                                            <option value=role.as_str() selected=move || selected_role.get() == role>
                                                {role.label()}
                                            </option>
                                        }
                                    })
                                    .collect_view()}
                            </select>
                        }
                            .into_any()
                    } else {
                        view! { <span class="member-modal__role-label">{member.role.label()}</span> }.into_any()
                    }}
                </div>

                <Show when=move || editable>
                    <div class="modal__actions">
                        <DeleteConfirmButton
                            button_class="btn btn--danger"
                            label="Remove member"
                            disabled=saving
                            on_confirm=move |_: ()| on_delete.run(member_id.get_value())
                        />
                        <button
                            type="button"
                            class="btn btn--primary"
                            disabled=move || saving.get()
                            on:click=move |_| on_save.run((member_id.get_value(), selected_role.get_untracked()))
                        >
                            {move || if saving.get() { "Saving..." } else { "Save" }}
                        </button>
                    </div>
                </Show>
            </div>
        </div>
    }
}
