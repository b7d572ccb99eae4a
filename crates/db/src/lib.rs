//! Persistence layer for the AgroNet landing site.
//!
//! - [`models`]: row structs and DTOs, one module per table.
//! - [`repositories`]: zero-sized Postgres repositories.
//! - [`store`]: the [`SiteStore`] trait handlers depend on, with in-memory
//!   and Postgres-backed implementations.
//! - [`fixtures`]: the static data set used for demos, fallback reads and
//!   seeding.

use std::time::Duration;

use agronet_core::testimonial::validate_rating;
use sqlx::postgres::PgPoolOptions;

pub mod fixtures;
pub mod models;
pub mod repositories;
pub mod store;

pub use store::{MemoryStore, PgStore, SiteStore, StoreError};

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(20)
        .acquire_timeout(Duration::from_secs(5))
        .connect(database_url)
        .await
}

/// Verify the database answers a trivial query.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply pending migrations from `crates/db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}

/// Insert the fixture data set, skipping rows whose id already exists.
///
/// Testimonials with an out-of-range rating are left out rather than
/// tripping the table's CHECK constraint. Returns the number of rows actually inserted.
pub async fn seed_fixtures(pool: &DbPool) -> Result<u64, sqlx::Error> {
    use repositories::{
        CoverageAreaRepo, FaqRepo, PlanRepo, SiteSettingRepo, TestimonialRepo,
    };

    let mut inserted = 0;
    for plan in fixtures::plans() {
        inserted += PlanRepo::insert_if_absent(pool, &plan).await?;
    }
    for area in fixtures::coverage_areas() {
        inserted += CoverageAreaRepo::insert_if_absent(pool, &area).await?;
    }
    for testimonial in rated_testimonials(fixtures::testimonials()) {
        inserted += TestimonialRepo::insert_if_absent(pool, &testimonial).await?;
    }
    for faq in fixtures::faqs() {
        inserted += FaqRepo::insert_if_absent(pool, &faq).await?;
    }
    for setting in fixtures::site_settings() {
        inserted += SiteSettingRepo::insert_if_absent(pool, &setting).await?;
    }

    tracing::info!(inserted, "Fixture data seeded");
    Ok(inserted)
}

/// Keep testimonials whose rating passes [`validate_rating`], logging the rest.
fn rated_testimonials(
    items: impl IntoIterator<Item = models::testimonial::Testimonial>,
) -> Vec<models::testimonial::Testimonial> {
    items
        .into_iter()
        .filter(|t| match validate_rating(t.rating) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(testimonial_id = %t.id, error = %e, "Skipping testimonial");
                false
            }
        })
        .collect()
}
