use dioxus::prelude::*;

pub mod analytics;
pub mod list;
mod views;

use views::{Dashboard, Login, Providers, Users};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/login?:error")]
    Login { error: Option<String> },
    #[layout(AuthenticatedLayout)]
        #[route("/")]
        Dashboard {},
        #[route("/providers")]
        Providers {},
        #[route("/users")]
        Users {},
}

fn main() {
    #[cfg(feature = "server")]
    {
        server::init_tracing();
        dioxus::serve(|| async move {
            let routes = server::init().await?;

            Ok(dioxus::server::router(App).merge(routes))
        });
    }

    #[cfg(all(feature = "web", not(feature = "server")))]
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Title { "Bazaari Admin" }
        document::Link { rel: "icon", href: asset!("/assets/favicon.svg") }
        document::Link { rel: "stylesheet", href: asset!("/assets/main.css") }

        Router::<Route> {}
    }
}

#[component]
fn NavLink(to: Route, children: Element) -> Element {
    let current_route: Route = use_route();
    let is_active = current_route == to;

    rsx! {
        Link {
            to,
            class: if is_active { "active" },
            {children}
        }
    }
}

/// Structured error information for display
#[derive(Clone, Debug, Default)]
pub struct ErrorInfo {
    pub message: String,
    pub chain: Vec<String>,
}

impl ErrorInfo {
    /// Parse a ServerFnError to extract structured error info
    pub fn from_server_error(err: &ServerFnError) -> Self {
        match err {
            ServerFnError::ServerError {
                message, details, ..
            } => {
                let chain = details
                    .as_ref()
                    .and_then(|details| details.get("chain"))
                    .and_then(|c| c.as_array())
                    .map(|arr| {
                        arr.iter()
                            .filter_map(|v| v.as_str().map(String::from))
                            .collect()
                    })
                    .unwrap_or_else(|| vec![message.clone()]);
                Self {
                    message: message.clone(),
                    chain,
                }
            }
            other => Self {
                message: other.to_string(),
                chain: vec![other.to_string()],
            },
        }
    }
}

/// Global error state - use `use_error()` to access
#[derive(Clone, Copy)]
pub struct ErrorState(Signal<Option<ErrorInfo>>);

impl ErrorState {
    pub fn set(&mut self, error: impl Into<String>) {
        let msg = error.into();
        self.0.set(Some(ErrorInfo {
            message: msg.clone(),
            chain: vec![msg],
        }));
    }

    pub fn set_server_error(&mut self, err: &ServerFnError) {
        self.0.set(Some(ErrorInfo::from_server_error(err)));
    }

    pub fn clear(&mut self) {
        self.0.set(None);
    }
}

/// Get the global error state for setting/clearing errors
pub fn use_error() -> ErrorState {
    use_context::<ErrorState>()
}

/// Refresh counters bumped by mutating actions. Views read the counter they
/// care about inside an effect, so a bump re-runs their fetch.
#[derive(Clone, Copy)]
pub struct Refresh {
    pub users: Signal<u32>,
    pub providers: Signal<u32>,
    pub approvals: Signal<u32>,
}

impl Refresh {
    pub fn users_changed(&self) {
        let mut users = self.users;
        *users.write() += 1;
    }

    pub fn providers_changed(&self) {
        let mut providers = self.providers;
        *providers.write() += 1;
    }

    pub fn approvals_changed(&self) {
        let mut approvals = self.approvals;
        *approvals.write() += 1;
    }
}

pub fn use_refresh() -> Refresh {
    use_context::<Refresh>()
}

#[component]
fn ErrorBanner() -> Element {
    let mut error_state = use_context::<ErrorState>();
    let error = error_state.0.read();

    if let Some(err) = error.as_ref() {
        let has_chain = err.chain.len() > 1;

        rsx! {
            div { class: "error-banner",
                div { class: "error-banner-content",
                    div { class: "error-banner-header",
                        span { class: "error-banner-message", "{err.message}" }
                        button {
                            class: "error-banner-close",
                            onclick: move |_| error_state.clear(),
                            "×"
                        }
                    }
                    if has_chain {
                        ol { class: "error-chain-list",
                            for (i, msg) in err.chain.iter().enumerate() {
                                li {
                                    key: "{i}",
                                    class: "error-chain-item",
                                    "{msg}"
                                }
                            }
                        }
                    }
                }
            }
        }
    } else {
        rsx! {}
    }
}

#[component]
fn AuthenticatedLayout() -> Element {
    let admin = use_server_future(api::get_current_admin)?;

    match &*admin.read() {
        Some(Ok(Some(session))) => {
            let session = session.clone();
            use_context_provider(|| ErrorState(Signal::new(None)));
            use_context_provider(|| Refresh {
                users: Signal::new(0),
                providers: Signal::new(0),
                approvals: Signal::new(0),
            });
            let initial = session
                .email
                .chars()
                .next()
                .unwrap_or('?')
                .to_uppercase()
                .to_string();

            rsx! {
                div { class: "app-layout",
                    // Sidebar
                    aside { class: "sidebar",
                        div { class: "sidebar-header",
                            span { class: "sidebar-logo", "Bazaari" }
                        }
                        nav { class: "sidebar-nav",
                            NavLink { to: Route::Dashboard {}, "Dashboard" }
                            NavLink { to: Route::Providers {}, "Providers" }
                            NavLink { to: Route::Users {}, "Users" }
                        }
                        div { class: "sidebar-footer",
                            div { class: "sidebar-user",
                                div { class: "sidebar-avatar", "{initial}" }
                                div { class: "sidebar-user-info",
                                    div { class: "sidebar-user-name", "{session.email}" }
                                    div { class: "sidebar-user-role", "Administrator" }
                                }
                            }
                            a { href: "/auth/logout", rel: "external", class: "sidebar-logout", "Sign out" }
                        }
                    }
                    // Main content
                    main { class: "main-content",
                        ErrorBanner {}
                        Outlet::<Route> {}
                    }
                }
            }
        }
        Some(Ok(None)) | Some(Err(_)) => {
            let nav = navigator();
            nav.push(Route::Login { error: None });
            rsx! {
                div { class: "loading", "Redirecting to login..." }
            }
        }
        None => {
            rsx! {
                div { class: "loading", "Loading..." }
            }
        }
    }
}
