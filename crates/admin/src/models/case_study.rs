//! Case study domain type.

use chrono::{DateTime, Utc};
use serde::Serialize;

use tidepool_core::{CaseStudyId, Slug};

/// A customer case study.
///
/// Unpublished case studies are visible only through the admin API; the
/// public site lists published ones, newest first.
#[derive(Debug, Clone, Serialize)]
pub struct CaseStudy {
    /// Unique case study ID.
    pub id: CaseStudyId,
    /// URL slug, unique across case studies.
    pub slug: Slug,
    /// Headline.
    pub title: String,
    /// Short teaser shown in listings.
    pub summary: String,
    /// Full body (markdown).
    pub body: String,
    /// Whether the case study is live on the public site.
    pub published: bool,
    /// When the case study was created.
    pub created_at: DateTime<Utc>,
    /// When the case study was last updated.
    pub updated_at: DateTime<Utc>,
}
