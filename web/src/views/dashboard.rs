use dioxus::prelude::*;
use types::{Provider, UserAccount};

use crate::analytics::{Summary, aggregate_by_month};
use crate::views::components::{AccountKind, CreateAccountModal, GrowthChart, StatCard};
use crate::{use_error, use_refresh};

#[component]
pub fn Dashboard() -> Element {
    let mut users = use_signal(Vec::<UserAccount>::new);
    let mut providers = use_signal(Vec::<Provider>::new);
    let mut loading = use_signal(|| true);
    let mut error_state = use_error();
    let refresh = use_refresh();
    let mut show_user_modal = use_signal(|| false);
    let mut show_provider_modal = use_signal(|| false);

    // Fetch on mount and again whenever a mutating action bumps a counter.
    // Both collections are in hand before any derived state is computed.
    use_effect(move || {
        let _ = (refresh.users)();
        let _ = (refresh.providers)();
        let _ = (refresh.approvals)();
        spawn(async move {
            loading.set(true);

            let users_result = api::list_users().await;
            let providers_result = api::list_providers().await;

            match (users_result, providers_result) {
                (Ok(u), Ok(p)) => {
                    users.set(u);
                    providers.set(p);
                }
                (Err(e), _) | (_, Err(e)) => {
                    error_state.set_server_error(&e);
                }
            }
            loading.set(false);
        });
    });

    let today = jiff::Zoned::now().date();
    let summary = use_memo(move || Summary::of(&users.read(), &providers.read()));
    let user_growth =
        use_memo(move || aggregate_by_month(&users.read(), |u| u.created_at, today).to_vec());
    let provider_growth =
        use_memo(move || aggregate_by_month(&providers.read(), |p| p.created_at, today).to_vec());

    rsx! {
        div {
            div { class: "page-header",
                div { class: "page-header-content",
                    h1 { class: "page-title", "Dashboard" }
                    p { class: "page-subtitle", "Overview of your marketplace's performance." }
                }
                div { class: "page-header-actions",
                    button {
                        class: "btn btn-secondary",
                        onclick: move |_| show_user_modal.set(true),
                        "Add User"
                    }
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| show_provider_modal.set(true),
                        "Add Provider"
                    }
                }
            }

            if *show_user_modal.read() {
                CreateAccountModal {
                    kind: AccountKind::User,
                    on_close: move |_| show_user_modal.set(false),
                    on_created: move |_| show_user_modal.set(false),
                }
            }

            if *show_provider_modal.read() {
                CreateAccountModal {
                    kind: AccountKind::Provider,
                    on_close: move |_| show_provider_modal.set(false),
                    on_created: move |_| show_provider_modal.set(false),
                }
            }

            if *loading.read() {
                div { class: "loading", "Loading dashboard..." }
            } else {
                div { class: "stat-grid",
                    StatCard {
                        title: "Total Users",
                        value: summary().total_users,
                        accent: "accent-primary",
                    }
                    StatCard {
                        title: "Total Providers",
                        value: summary().total_providers,
                        accent: "accent-secondary",
                    }
                    StatCard {
                        title: "Pending Approvals",
                        value: summary().pending_providers,
                        accent: "accent-warning",
                    }
                    StatCard {
                        title: "Approved Providers",
                        value: summary().approved_providers,
                        accent: "accent-success",
                    }
                }

                div { class: "chart-grid",
                    GrowthChart { title: "User Growth", buckets: user_growth() }
                    GrowthChart { title: "Provider Growth", buckets: provider_growth() }
                }
            }
        }
    }
}
