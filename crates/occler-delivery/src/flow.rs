//! The download flow: build, deliver, notify.

use occler_package::{ArchiveBuilder, ArchiveRequest, BuildError};

use crate::notify::Notification;
use crate::traits::{Delivery, DeliveryError, Notifier};

/// Errors surfaced by [`download`].
#[derive(Debug, thiserror::Error)]
pub enum DownloadError {
    #[error(transparent)]
    Build(#[from] BuildError),

    #[error(transparent)]
    DeliveryUnavailable(#[from] DeliveryError),
}

/// Build the archive for `request`, hand it to `delivery` and announce it.
///
/// The notification is shown only after delivery succeeded. A failed build
/// reaches neither the delivery target nor the notifier.
pub async fn download<D: Delivery>(
    builder: &ArchiveBuilder,
    request: &ArchiveRequest,
    delivery: &D,
    notifier: &dyn Notifier,
) -> Result<D::Output, DownloadError> {
    let archive = builder.build(request).await.map_err(|e| {
        tracing::error!("Archive build failed: {}", e);
        DownloadError::Build(e)
    })?;

    let label = archive.label.clone();
    let filename = archive.filename.clone();

    let output = delivery.deliver(archive).map_err(|e| {
        tracing::error!("Failed to deliver {}: {}", filename, e);
        DownloadError::DeliveryUnavailable(e)
    })?;

    tracing::debug!("Delivered {}", filename);
    notifier.notify(Notification::download_started(&label));

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    use occler_catalog::Catalog;
    use occler_package::Archive;
    use pretty_assertions::assert_eq;

    /// Records archive filenames instead of delivering them.
    #[derive(Default)]
    struct RecordingDelivery {
        delivered: Mutex<Vec<String>>,
        unavailable: bool,
    }

    impl Delivery for RecordingDelivery {
        type Output = usize;

        fn deliver(&self, archive: Archive) -> Result<usize, DeliveryError> {
            if self.unavailable {
                return Err(DeliveryError::Unavailable("offline".to_string()));
            }
            self.delivered.lock().unwrap().push(archive.filename);
            Ok(archive.bytes.len())
        }
    }

    #[derive(Default)]
    struct RecordingNotifier {
        seen: Mutex<Vec<Notification>>,
    }

    impl Notifier for RecordingNotifier {
        fn notify(&self, notification: Notification) {
            self.seen.lock().unwrap().push(notification);
        }
    }

    fn builder() -> ArchiveBuilder {
        ArchiveBuilder::new(Arc::new(Catalog::builtin()))
    }

    #[tokio::test]
    async fn delivers_then_notifies() {
        let delivery = RecordingDelivery::default();
        let notifier = RecordingNotifier::default();

        let size = download(
            &builder(),
            &ArchiveRequest::single("primary-buttons"),
            &delivery,
            &notifier,
        )
        .await
        .unwrap();

        assert!(size > 0);
        assert_eq!(
            *delivery.delivered.lock().unwrap(),
            vec!["occler-primary-buttons-component.zip".to_string()]
        );

        let seen = notifier.seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].message, "Primary Buttons download started.");
        assert_eq!(seen[0].dismiss_after_ms, 3000);
    }

    #[tokio::test]
    async fn complete_archive_announces_design_system() {
        let delivery = RecordingDelivery::default();
        let notifier = RecordingNotifier::default();

        download(&builder(), &ArchiveRequest::All, &delivery, &notifier)
            .await
            .unwrap();

        assert_eq!(
            *delivery.delivered.lock().unwrap(),
            vec!["occler-linear-design-system-complete.zip".to_string()]
        );
        assert_eq!(
            notifier.seen.lock().unwrap()[0].message,
            "Linear Design System download started."
        );
    }

    #[tokio::test]
    async fn failed_build_is_neither_delivered_nor_announced() {
        let delivery = RecordingDelivery::default();
        let notifier = RecordingNotifier::default();

        let result = download(
            &builder(),
            &ArchiveRequest::single("unknown-widget"),
            &delivery,
            &notifier,
        )
        .await;

        assert!(matches!(
            result,
            Err(DownloadError::Build(BuildError::ComponentNotFound(ref id))) if id == "unknown-widget"
        ));
        assert!(delivery.delivered.lock().unwrap().is_empty());
        assert!(notifier.seen.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn unavailable_delivery_is_not_announced() {
        let delivery = RecordingDelivery {
            unavailable: true,
            ..Default::default()
        };
        let notifier = RecordingNotifier::default();

        let result = download(
            &builder(),
            &ArchiveRequest::single("toggles"),
            &delivery,
            &notifier,
        )
        .await;

        assert!(matches!(result, Err(DownloadError::DeliveryUnavailable(_))));
        assert!(notifier.seen.lock().unwrap().is_empty());
    }
}
