//! Extracted fact domain type.

use chrono::{DateTime, Utc};
use serde::Serialize;

use tidepool_core::{CaseStudyId, FactId, FactStatus};

/// A claim extracted from draft content, awaiting editorial review.
#[derive(Debug, Clone, Serialize)]
pub struct Fact {
    /// Unique fact ID.
    pub id: FactId,
    /// Case study the claim was extracted from, if it still exists.
    pub case_study_id: Option<CaseStudyId>,
    /// The claim text itself.
    pub claim: String,
    /// Review status.
    pub status: FactStatus,
    /// When the fact was recorded.
    pub created_at: DateTime<Utc>,
}
