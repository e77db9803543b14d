use dioxus::prelude::*;

#[component]
pub fn Login(error: Option<String>) -> Element {
    rsx! {
        div { class: "login-page",
            div { class: "login-card",
                div { class: "login-header",
                    h1 { class: "login-title", "Bazaari" }
                    p { class: "login-subtitle", "Marketplace Administration" }
                }
                form {
                    class: "login-form",
                    action: "/auth/login",
                    method: "post",
                    if let Some(message) = error {
                        div { class: "form-error", "{message}" }
                    }
                    div { class: "form-group",
                        label { class: "form-label", r#for: "email", "Email address" }
                        input {
                            id: "email",
                            name: "email",
                            class: "form-input",
                            r#type: "email",
                            required: true,
                            placeholder: "admin@example.com",
                        }
                    }
                    div { class: "form-group",
                        label { class: "form-label", r#for: "password", "Password" }
                        input {
                            id: "password",
                            name: "password",
                            class: "form-input",
                            r#type: "password",
                            required: true,
                        }
                    }
                    button {
                        r#type: "submit",
                        class: "btn btn-primary login-btn",
                        "Sign in"
                    }
                }
            }
        }
    }
}
