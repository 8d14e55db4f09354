//! Delivery and notification seams.

use occler_package::Archive;

use crate::notify::Notification;

/// A target that offers finished archives to the user.
pub trait Delivery {
    /// What a successful hand-off produces (a written path, a response, ...)
    type Output;

    /// Hand the archive over. Takes ownership, so an archive is delivered
    /// at most once.
    fn deliver(&self, archive: Archive) -> Result<Self::Output, DeliveryError>;
}

/// Shows transient messages to the user.
pub trait Notifier: Send + Sync {
    /// Show `notification`; it is dismissed automatically.
    fn notify(&self, notification: Notification);
}

/// Errors that can occur while delivering an archive.
#[derive(Debug, thiserror::Error)]
pub enum DeliveryError {
    #[error("Delivery unavailable: {0}")]
    Unavailable(String),
}
