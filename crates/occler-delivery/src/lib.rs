//! Archive delivery for OCCLER.
//!
//! Hands finished archives to a delivery target (a file on disk or an HTTP
//! download) and announces each successful hand-off to the user.

pub mod file;
pub mod flow;
pub mod notify;
pub mod server;
pub mod traits;

pub use file::FileDelivery;
pub use flow::{download, DownloadError};
pub use notify::{LogNotifier, Notification, NotificationHub, NotifyMessage, NOTIFICATION_DURATION};
pub use server::{DownloadServer, DownloadServerConfig, HttpDelivery, ServerError};
pub use traits::{Delivery, DeliveryError, Notifier};
