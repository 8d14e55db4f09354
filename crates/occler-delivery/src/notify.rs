//! Download notifications.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use crate::traits::Notifier;

/// How long a notification stays visible.
pub const NOTIFICATION_DURATION: Duration = Duration::from_secs(3);

/// A transient message shown after a download has been handed off.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    /// Text shown to the user
    pub message: String,

    /// Milliseconds until the message is dismissed
    pub dismiss_after_ms: u64,
}

impl Notification {
    /// A notification that dismisses itself after [`NOTIFICATION_DURATION`].
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            dismiss_after_ms: NOTIFICATION_DURATION.as_millis() as u64,
        }
    }

    /// Announce that the download of `label` has started.
    pub fn download_started(label: &str) -> Self {
        Self::new(format!("{} download started.", label))
    }

    /// Time until the message is dismissed.
    pub fn dismiss_after(&self) -> Duration {
        Duration::from_millis(self.dismiss_after_ms)
    }
}

/// Messages sent to connected browsers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum NotifyMessage {
    /// A download was handed off
    DownloadStarted(Notification),

    /// Connection established
    Connected,
}

/// Reports notifications through the log.
///
/// Used by the command line, where there is no surface to dismiss.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, notification: Notification) {
        tracing::info!("{}", notification.message);
    }
}

/// Hub for broadcasting notifications to all connected browsers.
#[derive(Debug, Clone)]
pub struct NotificationHub {
    sender: broadcast::Sender<NotifyMessage>,
}

impl NotificationHub {
    /// Create a new hub.
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(100);
        Self { sender }
    }

    /// Send a message to all connected clients.
    pub fn send(&self, msg: NotifyMessage) {
        // No receivers is fine
        let _ = self.sender.send(msg);
    }

    /// Subscribe to notifications.
    pub fn subscribe(&self) -> broadcast::Receiver<NotifyMessage> {
        self.sender.subscribe()
    }

    /// Number of connected clients.
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for NotificationHub {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for NotificationHub {
    fn notify(&self, notification: Notification) {
        tracing::info!("{}", notification.message);
        self.send(NotifyMessage::DownloadStarted(notification));
    }
}

/// Generate the client-side toast script.
///
/// The script connects back to `path` on the page's own host and shows each
/// `download_started` message as a toast for its `dismiss_after_ms`.
pub fn notify_client_script(path: &str) -> String {
    format!(
        r#"
(function() {{
  'use strict';

  const scheme = location.protocol === 'https:' ? 'wss://' : 'ws://';
  const ws = new WebSocket(scheme + location.host + '{}');

  function showToast(message, dismissAfter) {{
    const toast = document.createElement('div');
    toast.className = 'occler-toast';
    toast.setAttribute('role', 'status');
    toast.textContent = message;
    toast.style.cssText = 'position:fixed;right:24px;bottom:24px;padding:12px 20px;' +
      'background:#5e6ad2;color:#fff;border-radius:8px;font:14px system-ui,sans-serif;' +
      'box-shadow:0 4px 12px rgba(0,0,0,0.3);z-index:1000;';
    document.body.appendChild(toast);
    setTimeout(function() {{
      toast.remove();
    }}, dismissAfter);
  }}

  ws.onmessage = function(event) {{
    const msg = JSON.parse(event.data);

    switch (msg.type) {{
      case 'download_started':
        showToast(msg.message, msg.dismiss_after_ms);
        break;

      case 'connected':
        console.log('[OCCLER] Notifications connected');
        break;
    }}
  }};

  ws.onerror = function(e) {{
    console.error('[OCCLER] WebSocket error:', e);
  }};
}})();
"#,
        path
    )
}
