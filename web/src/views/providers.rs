use dioxus::prelude::*;
use types::{Provider, ProviderStatus};

use crate::list::{ListControls, StatusFilter, paginate};
use crate::{use_error, use_refresh};

#[component]
pub fn Providers() -> Element {
    let mut providers = use_signal(Vec::<Provider>::new);
    let mut loading = use_signal(|| true);
    let mut controls = use_signal(ListControls::default);
    let mut selected = use_signal(|| None::<Provider>);
    let mut error_state = use_error();
    let refresh = use_refresh();

    // Fetch on mount and whenever a provider is created or reviewed.
    use_effect(move || {
        let _ = (refresh.providers)();
        let _ = (refresh.approvals)();
        spawn(async move {
            loading.set(true);
            match api::list_providers().await {
                Ok(p) => providers.set(p),
                Err(e) => error_state.set_server_error(&e),
            }
            loading.set(false);
        });
    });

    let page = use_memo(move || paginate(&providers.read(), &controls.read()));

    // The active tab snaps back to page 1 the moment the click lands; the
    // backend call and the refetch follow asynchronously.
    let mut review = move |provider_id: String, approve: bool| {
        controls.write().note_action();
        spawn(async move {
            match api::review_provider(provider_id, approve).await {
                Ok(()) => refresh.approvals_changed(),
                Err(e) => error_state.set_server_error(&e),
            }
        });
    };

    rsx! {
        div {
            div { class: "page-header",
                div { class: "page-header-content",
                    h1 { class: "page-title", "Providers" }
                    p { class: "page-subtitle", "Review onboarding requests and manage provider accounts." }
                }
            }

            if let Some(provider) = selected() {
                ProviderDetailsModal {
                    provider,
                    on_close: move |_| selected.set(None),
                }
            }

            div { class: "card",
                div { class: "card-toolbar",
                    input {
                        class: "form-input search-input",
                        r#type: "text",
                        placeholder: "Search providers...",
                        value: "{controls.read().search}",
                        oninput: move |e| controls.write().set_search(e.value()),
                    }
                    div { class: "filter-tabs",
                        for filter in StatusFilter::TABS {
                            button {
                                class: if controls.read().filter == filter { "filter-tab active" } else { "filter-tab" },
                                onclick: move |_| controls.write().set_filter(filter),
                                "{filter.label()}"
                            }
                        }
                    }
                }

                if *loading.read() {
                    div { class: "loading", "Loading providers..." }
                } else {
                    div { class: "table-container",
                        table {
                            thead {
                                tr {
                                    th { "Provider" }
                                    th { "Business" }
                                    th { "Status" }
                                    th { "Date" }
                                    th { class: "actions-column", "Actions" }
                                }
                            }
                            tbody {
                                if page.read().items.is_empty() {
                                    tr {
                                        td { colspan: 5, class: "table-empty",
                                            "No providers found matching your criteria"
                                        }
                                    }
                                }
                                for provider in page.read().items.iter() {
                                    ProviderRow {
                                        key: "{provider.id}",
                                        provider: provider.clone(),
                                        on_view: move |provider| selected.set(Some(provider)),
                                        on_review: move |(id, approve)| review(id, approve),
                                    }
                                }
                            }
                        }
                    }

                    if page.read().total_pages > 1 {
                        PaginationBar {
                            page: page.read().page,
                            total: page.read().total,
                            total_pages: page.read().total_pages,
                            shown: page.read().items.len(),
                            on_page: move |n| controls.write().set_page(n),
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ProviderRow(
    provider: Provider,
    on_view: EventHandler<Provider>,
    on_review: EventHandler<(String, bool)>,
) -> Element {
    let is_pending = provider.status == ProviderStatus::Pending;
    let date = provider.created_at.strftime("%b %d, %Y").to_string();
    let view_target = provider.clone();
    let approve_id = provider.id.clone();
    let deny_id = provider.id.clone();

    rsx! {
        tr {
            td {
                div { class: "cell-primary", "{provider.name}" }
                div { class: "cell-secondary", "{provider.email}" }
            }
            td {
                div { class: "cell-primary", "{provider.business_name}" }
                div { class: "cell-secondary", "{provider.phone}" }
            }
            td { StatusBadge { status: provider.status } }
            td { class: "cell-secondary", "{date}" }
            td { class: "actions-column",
                div { class: "row-actions",
                    button {
                        class: "btn btn-link",
                        onclick: move |_| on_view.call(view_target.clone()),
                        "View"
                    }
                    if is_pending {
                        button {
                            class: "btn btn-link action-approve",
                            onclick: move |_| on_review.call((approve_id.clone(), true)),
                            "Approve"
                        }
                        button {
                            class: "btn btn-link action-deny",
                            onclick: move |_| on_review.call((deny_id.clone(), false)),
                            "Deny"
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn StatusBadge(status: ProviderStatus) -> Element {
    let class = match status {
        ProviderStatus::Pending => "badge badge-warning",
        ProviderStatus::Approved => "badge badge-success",
        ProviderStatus::Rejected => "badge badge-error",
    };

    rsx! {
        span { class: "{class}", "{status.label()}" }
    }
}

#[component]
fn PaginationBar(
    page: usize,
    total: usize,
    total_pages: usize,
    shown: usize,
    on_page: EventHandler<usize>,
) -> Element {
    let start = (page - 1) * crate::list::PAGE_SIZE;
    let from = if shown == 0 { 0 } else { start + 1 };
    let to = start + shown;

    rsx! {
        div { class: "pagination",
            div { class: "pagination-summary",
                "Showing {from} to {to} of {total} providers"
            }
            div { class: "pagination-controls",
                button {
                    class: "btn btn-secondary",
                    disabled: page == 1,
                    onclick: move |_| on_page.call(page - 1),
                    "Previous"
                }
                for n in 1..=total_pages {
                    button {
                        class: if n == page { "btn btn-page active" } else { "btn btn-page" },
                        onclick: move |_| on_page.call(n),
                        "{n}"
                    }
                }
                button {
                    class: "btn btn-secondary",
                    disabled: page == total_pages,
                    onclick: move |_| on_page.call(page + 1),
                    "Next"
                }
            }
        }
    }
}

#[component]
fn ProviderDetailsModal(provider: Provider, on_close: EventHandler<()>) -> Element {
    let date = provider.created_at.strftime("%b %d, %Y").to_string();

    rsx! {
        div { class: "modal-overlay",
            onclick: move |_| on_close.call(()),
            div { class: "modal",
                onclick: move |e| e.stop_propagation(),
                div { class: "modal-header",
                    h2 { class: "modal-title", "Provider Details" }
                    button {
                        class: "modal-close",
                        onclick: move |_| on_close.call(()),
                        "×"
                    }
                }
                div { class: "modal-body",
                    div { class: "form-group",
                        span { class: "form-label", "Name" }
                        div { class: "form-value", "{provider.name}" }
                    }
                    div { class: "form-group",
                        span { class: "form-label", "Business" }
                        div { class: "form-value", "{provider.business_name}" }
                    }
                    div { class: "form-group",
                        span { class: "form-label", "Email" }
                        div { class: "form-value", "{provider.email}" }
                    }
                    div { class: "form-group",
                        span { class: "form-label", "Phone" }
                        div { class: "form-value", "{provider.phone}" }
                    }
                    div { class: "form-group",
                        span { class: "form-label", "Status" }
                        div { class: "form-value", StatusBadge { status: provider.status } }
                    }
                    div { class: "form-group",
                        span { class: "form-label", "Requested" }
                        div { class: "form-value", "{date}" }
                    }
                }
            }
        }
    }
}
