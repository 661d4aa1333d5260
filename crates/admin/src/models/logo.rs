//! Site logo domain type.

use chrono::{DateTime, Utc};
use serde::Serialize;

use tidepool_core::LogoId;

/// A site logo managed through the admin panel.
///
/// At most one logo is conventionally "current": public reads take the most
/// recently created row with `active = true`. Nothing in the store enforces
/// single-active, so two concurrent activations can both land.
#[derive(Debug, Clone, Serialize)]
pub struct Logo {
    /// Unique logo ID.
    pub id: LogoId,
    /// Internal display name.
    pub name: String,
    /// Where the image asset is served from.
    pub image_url: String,
    /// Alt text for accessibility.
    pub alt_text: Option<String>,
    /// Whether this logo is a candidate for public display.
    pub active: bool,
    /// When the logo was created.
    pub created_at: DateTime<Utc>,
}
