//! Domain models for the admin service.

pub mod admin_user;
pub mod case_study;
pub mod fact;
pub mod logo;
pub mod session;

pub use admin_user::AdminUser;
pub use case_study::CaseStudy;
pub use fact::Fact;
pub use logo::Logo;
pub use session::{CurrentAdmin, keys as session_keys};
