// User management page
//
// Wires the manage-users table to the admin endpoints: adding accounts,
// resetting passwords (server-rendered redirect), and toggling suspension.
use leptos::*;

use crate::api::use_api;
use crate::browser;
use crate::components::buttons::{DangerButton, PrimaryButton};
use crate::components::forms::TextInput;
use crate::components::layout::{Card, EmptyState, LoadingSpinner, PageHeader};
use crate::components::modals::Modal;
use crate::components::notifications::{Alert, AlertContainer};
use crate::components::tables::{DataTable, TableBody, TableHeader};
use crate::types::{AdminUser, BannerKind, BannerStack, UserRow};
use crate::utils;

#[component]
pub fn UsersPage() -> impl IntoView {
    let api = use_api();
    let users = create_local_resource(
        || (),
        move |_| {
            let api = api.clone();
            async move { api.list_users().await }
        },
    );

    let banners = create_rw_signal(BannerStack::default());
    let show_add_modal = create_rw_signal(false);
    let username = create_rw_signal(String::new());
    let username_input: NodeRef<html::Input> = create_node_ref();

    // Opening the dialog always starts from a blank, focused input.
    let open_add_modal = Callback::new(move |_: ()| {
        username.set(String::new());
        show_add_modal.set(true);
        if let Some(input) = username_input.get_untracked() {
            input.set_value("");
            let _ = input.focus();
        }
    });

    // The username is forwarded as typed; the server validates and replies
    // with an envelope that becomes one banner per submission. The dialog
    // stays open so a rejected name can be corrected and resubmitted.
    let api_add = use_api();
    let submit_add_user = Callback::new(move |_: ()| {
        let api = api_add.clone();
        let requested = username.get_untracked();
        spawn_local(async move {
            match api.add_user(&requested).await {
                Ok(envelope) => banners.update(|stack| {
                    stack.push_envelope(&envelope);
                }),
                Err(err) => banners.update(|stack| {
                    stack.push(BannerKind::Error, err.to_string());
                }),
            }
        });
    });

    // The redirect target performs the reset server-side and renders its own
    // result, so there is nothing to inspect here.
    let on_reset = Callback::new(move |row: UserRow| {
        if !browser::confirm(&row.reset_prompt()) {
            return;
        }
        browser::navigate_to(&row.reset_url);
    });

    // Reloads unconditionally once the request settles; the fresh listing is
    // the source of truth for the new suspension state.
    let api_suspend = use_api();
    let on_suspend = Callback::new(move |row: UserRow| {
        if !browser::confirm(&row.suspend_prompt()) {
            return;
        }
        let api = api_suspend.clone();
        spawn_local(async move {
            if let Err(err) = api.suspend_user(&row.username).await {
                log::warn!("suspend request for {} failed: {}", row.username, err);
            }
            browser::reload_page();
        });
    });

    view! {
        <div class="space-y-6">
            <PageHeader
                title="Manage Users".to_string()
                description=Some("Add notebook accounts, reset passwords, and suspend access".to_string())
            />

            <AlertContainer banners=banners/>

            <div class="flex justify-end">
                <PrimaryButton text="Add User" on_click=open_add_modal/>
            </div>

            <Card>
                <Suspense fallback=move || view! { <LoadingSpinner/> }>
                    {move || {
                        users.get().map(|result| match result {
                            Ok(ref list) if list.is_empty() => view! {
                                <EmptyState
                                    title="No users".to_string()
                                    description="Accounts you add will show up here.".to_string()
                                />
                            }.into_view(),
                            Ok(list) => view! {
                                <UsersTable users=list on_reset=on_reset on_suspend=on_suspend/>
                            }.into_view(),
                            Err(err) => view! {
                                <Alert message=err.to_string() alert_type="error"/>
                            }.into_view(),
                        })
                    }}
                </Suspense>
            </Card>

            <Modal title="Add User" show=show_add_modal>
                <TextInput
                    label="Username"
                    name="username"
                    value=username
                    placeholder="Username for the new account".to_string()
                    node_ref=username_input
                />
                <div class="flex justify-end gap-3 pt-2">
                    <button
                        type="button"
                        class="px-4 py-2 text-sm font-medium text-gray-600 hover:text-gray-900 rounded-md"
                        on:click=move |_| show_add_modal.set(false)
                    >
                        "Close"
                    </button>
                    <PrimaryButton text="Add user" on_click=submit_add_user/>
                </div>
            </Modal>
        </div>
    }
}

#[component]
fn UsersTable(
    users: Vec<AdminUser>,
    #[prop(into)] on_reset: Callback<UserRow>,
    #[prop(into)] on_suspend: Callback<UserRow>,
) -> impl IntoView {
    view! {
        <DataTable>
            <TableHeader>
                <th class="px-4 py-3 text-left text-xs font-medium uppercase tracking-wider text-gray-500">"Username"</th>
                <th class="px-4 py-3 text-left text-xs font-medium uppercase tracking-wider text-gray-500">"Email"</th>
                <th class="px-4 py-3 text-left text-xs font-medium uppercase tracking-wider text-gray-500">"Role"</th>
                <th class="px-4 py-3 text-left text-xs font-medium uppercase tracking-wider text-gray-500">"Status"</th>
                <th class="px-4 py-3 text-left text-xs font-medium uppercase tracking-wider text-gray-500">"Created"</th>
                <th class="px-4 py-3 text-right text-xs font-medium uppercase tracking-wider text-gray-500">"Actions"</th>
            </TableHeader>
            <TableBody>
                {users.iter().map(|user| {
                    let row = UserRow::from(user);
                    let row_reset = row.clone();
                    let row_suspend = row.clone();

                    let email = user.email.clone().unwrap_or_else(|| "-".to_string());
                    let role = if user.admin { "Admin" } else { "User" };
                    let created = user
                        .created_at
                        .map(|dt| utils::format_relative_time(&dt))
                        .unwrap_or_else(|| "unknown".to_string());
                    let created_exact = user
                        .created_at
                        .map(|dt| utils::format_datetime(&dt))
                        .unwrap_or_default();
                    let suspend_label = if user.suspended { "Unsuspend" } else { "Suspend" };

                    view! {
                        <tr class="hover:bg-gray-50">
                            <td class="px-4 py-3 text-sm font-medium text-gray-900">{row.username.clone()}</td>
                            <td class="px-4 py-3 text-sm text-gray-500">{email}</td>
                            <td class="px-4 py-3 text-sm text-gray-500">{role}</td>
                            <td class="px-4 py-3 text-sm">
                                <StatusBadge suspended=user.suspended/>
                            </td>
                            <td class="px-4 py-3 text-sm text-gray-500" title=created_exact>{created}</td>
                            <td class="px-4 py-3 text-right">
                                <div class="flex items-center justify-end gap-2">
                                    <button
                                        type="button"
                                        class="px-3 py-1.5 text-sm font-medium text-gray-700 border border-gray-300 rounded-md hover:bg-gray-100"
                                        on:click=move |_| on_reset.call(row_reset.clone())
                                    >
                                        "Reset password"
                                    </button>
                                    <DangerButton
                                        text=suspend_label
                                        on_click=Callback::new(move |_: ()| on_suspend.call(row_suspend.clone()))
                                    />
                                </div>
                            </td>
                        </tr>
                    }
                }).collect::<Vec<_>>()}
            </TableBody>
        </DataTable>
    }
}

#[component]
fn StatusBadge(suspended: bool) -> impl IntoView {
    let (label, class) = if suspended {
        ("Suspended", "bg-red-100 text-red-800")
    } else {
        ("Active", "bg-green-100 text-green-800")
    };

    view! {
        <span class=format!("inline-flex items-center rounded-full px-2.5 py-0.5 text-xs font-medium {}", class)>
            {label}
        </span>
    }
}
