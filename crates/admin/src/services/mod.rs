//! Service clients and helpers for the admin panel.

pub mod identity;
pub mod seo;
