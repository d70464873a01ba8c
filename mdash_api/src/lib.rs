//! Client for the mDash device shadow API.
//!
//! The widget crate only produces documents; this crate delivers them.
//! Delivery goes through the [`ShadowPoster`] trait so jobs can swap the
//! HTTP client for something else in tests.

mod client;
mod config;
mod error;

pub use client::MdashClient;
pub use config::{ApiConfig, DEFAULT_BASE_URL, DeviceConfig};
pub use error::ApiError;

use mdash_widgets::{WidgetCollection, label_document, ui_document};
use tracing::{error, info};

/// Something that can deliver a shadow update document for the device.
pub trait ShadowPoster {
    /// Send `body` as a shadow update. Not retried on failure.
    fn post(&self, body: String) -> impl Future<Output = Result<(), ApiError>>;

    /// Label used when none is given to [`set_label`].
    fn default_label(&self) -> &str;
}

/// Set the device label shown on the dashboard.
///
/// # Errors
/// If the update could not be delivered.
pub async fn set_label<P: ShadowPoster>(
    poster: &P,
    label: Option<&str>,
) -> Result<(), ApiError> {
    let body = label_document(label, poster.default_label());
    poster.post(body).await
}

/// Replace the dashboard UI of the device with `widgets`.
///
/// # Errors
/// If `widgets` is empty, nothing is sent and [`ApiError::EmptyUi`] is
/// returned. Otherwise if the update could not be delivered.
pub async fn create_ui<P: ShadowPoster>(
    poster: &P,
    widgets: &WidgetCollection,
) -> Result<(), ApiError> {
    if widgets.is_empty() {
        error!("Refusing to create a dashboard UI without widgets");
        return Err(ApiError::EmptyUi);
    }

    let body = ui_document(widgets);
    info!("Creating dashboard UI: {}", body);

    poster.post(body).await
}
