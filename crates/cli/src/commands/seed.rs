//! Seed the database with sample content for local development.
//!
//! # Usage
//!
//! ```bash
//! tp-cli seed
//! ```
//!
//! Idempotent: re-running skips rows that already exist (matched on logo
//! name and case-study slug).

use secrecy::SecretString;
use thiserror::Error;

use tidepool_admin::db::{
    self, CaseStudyFields, CaseStudyRepository, LogoFields, LogoRepository, RepositoryError,
};
use tidepool_core::Slug;

/// Errors that can occur while seeding.
#[derive(Debug, Error)]
pub enum SeedError {
    /// Required environment variable is missing.
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(&'static str),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Repository error.
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
}

/// Seed the database with one active logo and one published case study.
///
/// # Errors
///
/// Returns `SeedError` if the database URL is missing or a write fails.
pub async fn run() -> Result<(), SeedError> {
    dotenvy::dotenv().ok();

    let database_url = std::env::var("ADMIN_DATABASE_URL")
        .or_else(|_| std::env::var("DATABASE_URL"))
        .map_err(|_| SeedError::MissingEnvVar("ADMIN_DATABASE_URL"))?;

    tracing::info!("Connecting to database...");
    let pool = db::create_pool(&SecretString::from(database_url)).await?;

    seed_logo(&pool).await?;
    seed_case_study(&pool).await?;

    tracing::info!("Seeding complete");
    Ok(())
}

async fn seed_logo(pool: &sqlx::PgPool) -> Result<(), SeedError> {
    let repo = LogoRepository::new(pool);

    let already_seeded = repo
        .list()
        .await?
        .iter()
        .any(|logo| logo.name == "Tidepool sample logo");
    if already_seeded {
        tracing::info!("Sample logo already present, skipping");
        return Ok(());
    }

    let logo = repo
        .create(&LogoFields {
            name: "Tidepool sample logo".to_string(),
            image_url: "https://cdn.tidepool.site/dev/sample-logo.svg".to_string(),
            alt_text: Some("Tidepool".to_string()),
            active: true,
        })
        .await?;

    tracing::info!("Seeded logo {}", logo.id);
    Ok(())
}

async fn seed_case_study(pool: &sqlx::PgPool) -> Result<(), SeedError> {
    let repo = CaseStudyRepository::new(pool);

    let slug = Slug::parse("sample-case-study").map_err(|e| {
        // Unreachable with the literal above; surface it rather than panic.
        SeedError::Repository(RepositoryError::DataCorruption(e.to_string()))
    })?;

    if repo.get_by_slug(&slug).await?.is_some() {
        tracing::info!("Sample case study already present, skipping");
        return Ok(());
    }

    let case_study = repo
        .create(&CaseStudyFields {
            slug,
            title: "How Acme halved checkout latency".to_string(),
            summary: "A sample case study used for local development.".to_string(),
            body: "# How Acme halved checkout latency\n\n\
                   Acme rebuilt their checkout pipeline and cut page latency in half. \
                   This is seed content; replace it with a real story."
                .to_string(),
            published: true,
        })
        .await?;

    tracing::info!("Seeded case study {}", case_study.id);
    Ok(())
}
