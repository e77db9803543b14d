use dioxus::prelude::*;

use crate::analytics::MonthBucket;
use crate::{ErrorInfo, use_refresh};

#[component]
pub fn StatCard(title: String, value: usize, accent: String) -> Element {
    rsx! {
        div { class: "stat-card",
            div { class: "stat-accent {accent}" }
            div { class: "stat-body",
                div { class: "stat-title", "{title}" }
                div { class: "stat-value", "{value}" }
            }
        }
    }
}

/// Six-month growth chart rendered as inline SVG bars, one per bucket.
#[component]
pub fn GrowthChart(title: String, buckets: Vec<MonthBucket>) -> Element {
    let max = buckets.iter().map(|b| b.count).max().unwrap_or(0).max(1);

    rsx! {
        div { class: "card chart-card",
            div { class: "card-header",
                h2 { class: "card-title", "{title}" }
            }
            div { class: "card-body",
                svg {
                    class: "growth-chart",
                    view_box: "0 0 248 132",
                    preserve_aspect_ratio: "xMidYMid meet",
                    for (i, bucket) in buckets.iter().enumerate() {
                        {
                            let height = (f64::from(bucket.count) / f64::from(max) * 96.0).round();
                            let x = 8 + i * 40;
                            let center = x + 12;
                            let y = 108.0 - height;
                            let value_y = y - 4.0;
                            rsx! {
                                rect {
                                    class: "chart-bar",
                                    x: "{x}",
                                    y: "{y}",
                                    width: "24",
                                    height: "{height}",
                                    rx: "3",
                                }
                                if bucket.count > 0 {
                                    text {
                                        class: "chart-value",
                                        x: "{center}",
                                        y: "{value_y}",
                                        text_anchor: "middle",
                                        "{bucket.count}"
                                    }
                                }
                                text {
                                    class: "chart-label",
                                    x: "{center}",
                                    y: "124",
                                    text_anchor: "middle",
                                    "{bucket.month}"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[derive(Clone, Copy, PartialEq)]
pub enum AccountKind {
    User,
    Provider,
}

impl AccountKind {
    fn title(self) -> &'static str {
        match self {
            Self::User => "Create New User",
            Self::Provider => "Create New Provider",
        }
    }

    fn submit_label(self) -> &'static str {
        match self {
            Self::User => "Create User",
            Self::Provider => "Create Provider",
        }
    }
}

/// Modal form for creating a user or provider account. Failures are rendered
/// inline in the form rather than in the global banner, and stay there until
/// the next submit.
#[component]
pub fn CreateAccountModal(
    kind: AccountKind,
    on_close: EventHandler<()>,
    on_created: EventHandler<()>,
) -> Element {
    let refresh = use_refresh();
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut phone = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut submitting = use_signal(|| false);

    let can_submit = !name.read().is_empty()
        && !email.read().is_empty()
        && !phone.read().is_empty()
        && !password.read().is_empty();

    rsx! {
        div { class: "modal-overlay",
            onclick: move |_| on_close.call(()),
            div { class: "modal",
                onclick: move |e| e.stop_propagation(),
                div { class: "modal-header",
                    h2 { class: "modal-title", "{kind.title()}" }
                    button {
                        class: "modal-close",
                        onclick: move |_| on_close.call(()),
                        "×"
                    }
                }
                div { class: "modal-body",
                    if let Some(message) = error.read().as_ref() {
                        div { class: "form-error", "{message}" }
                    }
                    div { class: "form-group",
                        label { class: "form-label", r#for: "account-name", "Full name *" }
                        input {
                            id: "account-name",
                            class: "form-input",
                            r#type: "text",
                            value: "{name}",
                            oninput: move |e| name.set(e.value()),
                        }
                    }
                    div { class: "form-group",
                        label { class: "form-label", r#for: "account-email", "Email address *" }
                        input {
                            id: "account-email",
                            class: "form-input",
                            r#type: "email",
                            value: "{email}",
                            oninput: move |e| email.set(e.value()),
                        }
                    }
                    div { class: "form-group",
                        label { class: "form-label", r#for: "account-phone", "Phone number *" }
                        input {
                            id: "account-phone",
                            class: "form-input",
                            r#type: "tel",
                            value: "{phone}",
                            oninput: move |e| phone.set(e.value()),
                        }
                    }
                    div { class: "form-group",
                        label { class: "form-label", r#for: "account-password", "Password *" }
                        input {
                            id: "account-password",
                            class: "form-input",
                            r#type: "password",
                            value: "{password}",
                            oninput: move |e| password.set(e.value()),
                        }
                    }
                }
                div { class: "modal-footer",
                    button {
                        class: "btn btn-secondary",
                        onclick: move |_| on_close.call(()),
                        "Cancel"
                    }
                    button {
                        class: "btn btn-primary",
                        disabled: !can_submit || *submitting.read(),
                        onclick: move |_| {
                            let name = name.read().clone();
                            let email_value = email.read().clone();
                            let phone = phone.read().clone();
                            let password = password.read().clone();
                            spawn(async move {
                                submitting.set(true);
                                error.set(None);
                                let result = match kind {
                                    AccountKind::User => {
                                        api::create_user(name, email_value, phone, password).await
                                    }
                                    AccountKind::Provider => {
                                        api::create_provider(name, email_value, phone, password)
                                            .await
                                    }
                                };
                                match result {
                                    Ok(()) => {
                                        match kind {
                                            AccountKind::User => refresh.users_changed(),
                                            AccountKind::Provider => refresh.providers_changed(),
                                        }
                                        on_created.call(());
                                    }
                                    Err(e) => {
                                        error.set(Some(ErrorInfo::from_server_error(&e).message));
                                    }
                                }
                                submitting.set(false);
                            });
                        },
                        if *submitting.read() { "Creating..." } else { "{kind.submit_label()}" }
                    }
                }
            }
        }
    }
}
