use std::collections::HashMap;
use std::sync::{Arc, LazyLock};

use futures::StreamExt;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use url::Url;

use crate::CONFIG;

pub static NOTIFY: LazyLock<NotifyService> =
    LazyLock::new(|| NotifyService::new(CONFIG.notify_url.clone()));

/// Client for the realtime-notification service. A connection is opened when
/// an administrator logs in and closed when they log out; it exists only to
/// bracket the session, so incoming messages are drained without being
/// interpreted.
pub struct NotifyService {
    notify_url: Url,
    connections: Arc<RwLock<HashMap<String, JoinHandle<()>>>>,
}

impl NotifyService {
    pub fn new(notify_url: Url) -> Self {
        Self {
            notify_url,
            connections: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Open the notification stream for `admin_id`, replacing any connection
    /// left over from a previous session for the same administrator.
    pub async fn connect(&self, admin_id: &str) {
        let mut url = self.notify_url.clone();
        url.query_pairs_mut().append_pair("admin", admin_id);

        let handle = tokio::spawn(run_connection(url, admin_id.to_string()));

        let mut connections = self.connections.write().await;
        if let Some(old) = connections.insert(admin_id.to_string(), handle) {
            old.abort();
        }
    }

    pub async fn disconnect(&self, admin_id: &str) {
        if let Some(handle) = self.connections.write().await.remove(admin_id) {
            handle.abort();
            tracing::debug!(%admin_id, "notification stream closed");
        }
    }

    pub async fn is_connected(&self, admin_id: &str) -> bool {
        self.connections.read().await.contains_key(admin_id)
    }
}

async fn run_connection(url: Url, admin_id: String) {
    match tokio_tungstenite::connect_async(url.as_str()).await {
        Ok((stream, _)) => {
            tracing::debug!(%admin_id, "notification stream connected");
            let (_, mut messages) = stream.split();
            while let Some(message) = messages.next().await {
                match message {
                    Ok(message) => tracing::trace!(%admin_id, ?message, "notification"),
                    Err(error) => {
                        tracing::debug!(%admin_id, %error, "notification stream ended");
                        break;
                    }
                }
            }
        }
        Err(error) => {
            tracing::warn!(%admin_id, %error, "failed to open notification stream");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> NotifyService {
        // Nothing listens here; the connection task fails in the background
        // while the bookkeeping under test stays synchronous.
        NotifyService::new(Url::parse("ws://127.0.0.1:9/").unwrap())
    }

    #[tokio::test]
    async fn connect_and_disconnect_track_the_admin() {
        let notify = service();

        notify.connect("admin-1").await;
        assert!(notify.is_connected("admin-1").await);

        notify.disconnect("admin-1").await;
        assert!(!notify.is_connected("admin-1").await);
    }

    #[tokio::test]
    async fn reconnect_replaces_the_previous_stream() {
        let notify = service();

        notify.connect("admin-1").await;
        notify.connect("admin-1").await;
        assert!(notify.is_connected("admin-1").await);
        assert_eq!(notify.connections.read().await.len(), 1);
    }

    #[tokio::test]
    async fn disconnecting_an_unknown_admin_is_a_no_op() {
        let notify = service();
        notify.disconnect("nobody").await;
        assert!(!notify.is_connected("nobody").await);
    }
}
