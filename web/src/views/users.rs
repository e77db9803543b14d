use dioxus::prelude::*;
use types::UserAccount;

use crate::views::components::{AccountKind, CreateAccountModal};
use crate::{use_error, use_refresh};

#[component]
pub fn Users() -> Element {
    let mut users = use_signal(Vec::<UserAccount>::new);
    let mut loading = use_signal(|| true);
    let mut error_state = use_error();
    let refresh = use_refresh();
    let mut show_create_form = use_signal(|| false);

    // Fetch on mount and whenever a user account is created.
    use_effect(move || {
        let _ = (refresh.users)();
        spawn(async move {
            loading.set(true);
            match api::list_users().await {
                Ok(u) => users.set(u),
                Err(e) => error_state.set_server_error(&e),
            }
            loading.set(false);
        });
    });

    rsx! {
        div {
            div { class: "page-header",
                div { class: "page-header-content",
                    h1 { class: "page-title", "Users" }
                    p { class: "page-subtitle", "Customer accounts registered on the marketplace." }
                }
                div { class: "page-header-actions",
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| show_create_form.set(true),
                        "Create User"
                    }
                }
            }

            if *show_create_form.read() {
                CreateAccountModal {
                    kind: AccountKind::User,
                    on_close: move |_| show_create_form.set(false),
                    on_created: move |_| show_create_form.set(false),
                }
            }

            if *loading.read() {
                div { class: "loading", "Loading users..." }
            } else {
                div { class: "card",
                    div { class: "table-container",
                        table {
                            thead {
                                tr {
                                    th { "Name" }
                                    th { "Email" }
                                    th { "Phone" }
                                    th { "Joined" }
                                }
                            }
                            tbody {
                                if users.read().is_empty() {
                                    tr {
                                        td { colspan: 4, class: "table-empty", "No users yet" }
                                    }
                                }
                                for user in users.read().iter() {
                                    tr { key: "{user.id}",
                                        td { class: "cell-primary", "{user.full_name}" }
                                        td { "{user.email}" }
                                        td { "{user.phone}" }
                                        td { class: "cell-secondary",
                                            {user.created_at.strftime("%b %d, %Y").to_string()}
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
