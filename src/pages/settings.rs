//! Settings Page
//!
//! Organization details, members and invitations, and the user's profile.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;
use whitepaperiq_core::format;
use whitepaperiq_core::links;
use whitepaperiq_core::models::{
    InviteMemberPayload, MemberRole, OrganizationMember, PendingInvitation, UpdateMemberPayload,
    UpdateOrganizationPayload, UpdateProfilePayload,
};
use whitepaperiq_core::validation::validate_name;

use crate::api;
use crate::browser;
use crate::components::{AddMemberModal, MainLayout, MemberModal};
use crate::context::use_app_context;
use crate::session;
use crate::store::{store_rename_organization, use_app_store, AppStateStoreFields};

#[component]
pub fn SettingsPage() -> impl IntoView {
    browser::set_page_title("Settings");
    let store = use_app_store();

    view! {
        <MainLayout>
            <div class="settings">
                <h1 class="page-title">"Settings"</h1>
                <OrganizationSection />
                <MembersSection />
                <ProfileSection />
                <section class="settings__card">
                    <h2>"Session"</h2>
                    <button type="button" class="btn btn--danger" on:click=move |_| session::logout(store)>
                        "Log out"
                    </button>
                </section>
            </div>
        </MainLayout>
    }
}

#[component]
fn OrganizationSection() -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();
    let (editing, set_editing) = signal(false);
    let (draft, set_draft) = signal(String::new());
    let (error, set_error) = signal::<Option<String>>(None);

    let can_manage = move || store.user().with(|u| u.as_ref().is_some_and(|u| u.role.can_manage_organization()));

    let begin_edit = move |_: web_sys::MouseEvent| {
        let name = store.organization().with_untracked(|o| o.as_ref().map(|o| o.name.clone()));
        set_draft.set(name.unwrap_or_default());
        set_error.set(None);
        set_editing.set(true);
    };

    let save = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let name = match validate_name(&draft.get_untracked(), "Organization name") {
            Ok(name) => name,
            Err(message) => {
                set_error.set(Some(message));
                return;
            }
        };
        let previous = store
            .organization()
            .with_untracked(|o| o.as_ref().map(|o| o.name.clone()))
            .unwrap_or_default();

        store_rename_organization(&store, &name);
        set_editing.set(false);
        spawn_local(async move {
            let payload = UpdateOrganizationPayload { name: Some(name) };
            match api::client().update_organization(&payload).await {
                Ok(org) => {
                    store.organization().set(Some(org));
                    ctx.success("Organization updated");
                }
                Err(e) => {
                    store_rename_organization(&store, &previous);
                    ctx.error(format!("Failed to update organization: {e}"));
                }
            }
        });
    };

    let details = move || {
        if let Some(message) = store.organization_error().get() {
            return view! { <div class="alert alert--error">{message}</div> }.into_any();
        }
        let Some(org) = store.organization().get() else {
            return view! { <p class="settings__muted">"Loading organization..."</p> }.into_any();
        };
        let usage = org.usage_stats;
        view! {
            <dl class="settings__details">
                <dt>"Plan"</dt>
                <dd>{org.subscription_plan.label()}</dd>
                <dt>"Billing started"</dt>
                <dd>{format::date_time(&org.billing_start_date)}</dd>
                <dt>"Usage"</dt>
                <dd>
                    <div class="usage-bar">
                        <div class="usage-bar__fill" style:width=format!("{:.0}%", usage.percentage())></div>
                    </div>
                    <span class="usage-bar__text">
                        {format!("{}/{} analyses ({} remaining)", usage.used, usage.total, usage.remaining())}
                    </span>
                </dd>
                <dt>"Created"</dt>
                <dd>{format::date(&org.created_at)}</dd>
            </dl>
        }
            .into_any()
    };

    view! {
        <section class="settings__card">
            <h2>"Organization"</h2>
            <Show
                when=move || editing.get()
                fallback=move || view! {
                    <div class="settings__name-row">
                        <span class="settings__org-name">
                            {move || store.organization().with(|o| o.as_ref().map(|o| o.name.clone())).unwrap_or_default()}
                        </span>
                        <Show when=can_manage>
                            <button type="button" class="btn btn--small" on:click=begin_edit>"Edit"</button>
                        </Show>
                    </div>
                }
            >
                <form class="settings__name-form" on:submit=save>
                    <input
                        type="text"
                        prop:value=move || draft.get()
                        on:input=move |ev| {
                            set_draft.set(event_target_value(&ev));
                            set_error.set(None);
                        }
                    />
                    <button type="submit" class="btn btn--primary btn--small">"Save"</button>
                    <button type="button" class="btn btn--small" on:click=move |_| set_editing.set(false)>
                        "Cancel"
                    </button>
                </form>
                {move || error.get().map(|message| view! { <span class="form-field__error">{message}</span> })}
            </Show>
            {details}
        </section>
    }
}

#[component]
fn MembersSection() -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();
    let (members, set_members) = signal(Vec::<OrganizationMember>::new());
    let (invitations, set_invitations) = signal(Vec::<PendingInvitation>::new());
    let (loading, set_loading) = signal(false);
    let (saving, set_saving) = signal(false);
    let (selected, set_selected) = signal::<Option<OrganizationMember>>(None);
    let (adding, set_adding) = signal(false);

    let can_manage = move || store.user().with(|u| u.as_ref().is_some_and(|u| u.role.can_manage_organization()));

    let reload = move || {
        set_loading.set(true);
        spawn_local(async move {
            match api::client().members().await {
                Ok(response) => {
                    set_members.set(response.members);
                    set_invitations.set(response.pending_invitations);
                }
                Err(e) => ctx.error(format!("Failed to load members: {e}")),
            }
            set_loading.set(false);
        });
    };
    reload();

    let on_save = move |(id, role): (String, MemberRole)| {
        set_saving.set(true);
        spawn_local(async move {
            let payload = UpdateMemberPayload {
                role: Some(role),
                ..UpdateMemberPayload::default()
            };
            match api::client().update_member(&id, &payload).await {
                Ok(_) => {
                    ctx.success("Member updated");
                    set_selected.set(None);
                    reload();
                }
                Err(e) => ctx.error(format!("Failed to update member: {e}")),
            }
            set_saving.set(false);
        });
    };

    let on_delete = move |id: String| {
        set_saving.set(true);
        spawn_local(async move {
            match api::client().remove_member(&id).await {
                Ok(_) => {
                    ctx.success("Member removed");
                    set_selected.set(None);
                    reload();
                    session::load_organization(store);
                }
                Err(e) => ctx.error(format!("Failed to remove member: {e}")),
            }
            set_saving.set(false);
        });
    };

    let on_add = move |(email, role): (String, MemberRole)| {
        set_saving.set(true);
        spawn_local(async move {
            match api::client().invite_member(&InviteMemberPayload { email, role }).await {
                Ok(()) => {
                    ctx.success("Invitation sent");
                    set_adding.set(false);
                    reload();
                }
                Err(e) => ctx.error(e.to_string()),
            }
            set_saving.set(false);
        });
    };

    let origin = browser::origin();

    view! {
        <section class="settings__card">
            <div class="settings__card-header">
                <h2>"Members"</h2>
                <Show when=can_manage>
                    <button type="button" class="btn btn--primary btn--small" on:click=move |_| set_adding.set(true)>
                        "Add Member"
                    </button>
                </Show>
            </div>

            <Show when=move || loading.get() && members.with(Vec::is_empty)>
                <p class="settings__muted">"Loading members..."</p>
            </Show>

            <table class="settings__table">
                <thead>
                    <tr>
                        <th>"Name"</th>
                        <th>"Email"</th>
                        <th>"Role"</th>
                        <th>"Status"</th>
                        <th>"Joined"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || members.get()
                        key=|member| member.id.clone()
                        children=move |member: OrganizationMember| {
                            let selected_member = member.clone();
                            view! {
                                <tr>
                                    <td>{member.name.clone()}</td>
                                    <td>{member.email.clone()}</td>
                                    <td>{member.role.label()}</td>
                                    <td>{member.status.label()}</td>
                                    <td>{format::date(&member.joined_at)}</td>
                                    <td>
                                        <button
                                            type="button"
                                            class="btn btn--icon"
                                            title="Member settings"
                                            on:click=move |_| set_selected.set(Some(selected_member.clone()))
                                        >
                                            "⚙"
                                        </button>
                                    </td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>

            <Show when=move || invitations.with(|list| !list.is_empty())>
                <h3 class="settings__subheading">"Pending invitations"</h3>
                <ul class="settings__invitations">
                    {
                        let origin = origin.clone();
                        move || {
                            invitations
                                .get()
                                .into_iter()
                                .map(|invitation| {
                                    let link = invitation.token.as_deref().map(|token| links::invite_link(&origin, token));
                                    view! {
                                        <li class="settings__invitation">
                                            <span>{invitation.email}</span>
                                            <span>{invitation.role.label()}</span>
                                            <span class="settings__muted">
                                                {format!("Expires {}", format::date(&invitation.expires_at))}
                                            </span>
                                            {link.map(|link| view! {
                                                <input
                                                    class="settings__invite-link"
                                                    type="text"
                                                    readonly
                                                    value=link
                                                    on:focus=|ev| {
                                                        if let Some(input) = ev
                                                            .target()
                                                            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
                                                        {
                                                            input.select();
                                                        }
                                                    }
                                                />
                                            })}
                                        </li>
                                    }
                                })
                                .collect_view()
                        }
                    }
                </ul>
            </Show>

            {move || selected.get().map(|member| view! {
                <MemberModal
                    member=member
                    can_manage=can_manage()
                    saving=saving
                    on_close=move |_: ()| set_selected.set(None)
                    on_save=on_save
                    on_delete=on_delete
                />
            })}
            <Show when=move || adding.get()>
                <AddMemberModal saving=saving on_close=move |_: ()| set_adding.set(false) on_add=on_add />
            </Show>
        </section>
    }
}

#[component]
fn ProfileSection() -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();
    let initial = store
        .user()
        .with_untracked(|u| u.as_ref().and_then(|u| u.full_name.clone()))
        .unwrap_or_default();
    let (name, set_name) = signal(initial);
    let (saving, set_saving) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);

    let save = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let full_name = match validate_name(&name.get_untracked(), "Name") {
            Ok(full_name) => full_name,
            Err(message) => {
                set_error.set(Some(message));
                return;
            }
        };
        set_saving.set(true);
        spawn_local(async move {
            let payload = UpdateProfilePayload {
                full_name: Some(full_name),
            };
            match api::client().update_profile(&payload).await {
                Ok(user) => {
                    store.user().set(Some(user));
                    ctx.success("Profile updated");
                }
                Err(e) => ctx.error(format!("Failed to update profile: {e}")),
            }
            set_saving.set(false);
        });
    };

    view! {
        <section class="settings__card">
            <h2>"Profile"</h2>
            <p class="settings__muted">
                {move || store.user().with(|u| u.as_ref().map(|u| format!("{} · {}", u.email, u.role.label())))}
            </p>
            <form class="settings__name-form" on:submit=save>
                <input
                    type="text"
                    placeholder="Full name"
                    prop:value=move || name.get()
                    on:input=move |ev| {
                        set_name.set(event_target_value(&ev));
                        set_error.set(None);
                    }
                />
                <button type="submit" class="btn btn--primary btn--small" disabled=move || saving.get()>
                    {move || if saving.get() { "Saving..." } else { "Save" }}
                </button>
            </form>
            {move || error.get().map(|message| view! { <span class="form-field__error">{message}</span> })}
        </section>
    }
}
