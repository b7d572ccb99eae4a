//! The storage interface request handlers depend on.
//!
//! [`SiteStore`] is object-safe so the server can pick a backend at startup
//! and hand `Arc<dyn SiteStore>` to every handler:
//!
//! - [`MemoryStore`]: fixture data held in process, for demos and tests.
//! - [`PgStore`]: Postgres through the repositories, optionally falling back
//!   to fixture data when a read fails.

mod memory;
mod postgres;

use async_trait::async_trait;

use crate::models::coverage_area::CoverageArea;
use crate::models::faq::Faq;
use crate::models::lead::{CreateLead, Lead};
use crate::models::plan::Plan;
use crate::models::site_setting::SiteSetting;
use crate::models::testimonial::Testimonial;

pub use memory::MemoryStore;
pub use postgres::PgStore;

/// Storage failure.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Persistence error: {0}")]
    Persistence(#[from] sqlx::Error),

    #[error("{entity} with id {id} already exists")]
    Conflict { entity: &'static str, id: String },

    /// A lead named a plan that does not exist.
    #[error("Plan with id {id} does not exist")]
    UnknownPlan { id: String },
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Read and write operations over the site tables.
///
/// Lookups that find nothing return `Ok(None)`, never an error.
#[async_trait]
pub trait SiteStore: Send + Sync {
    /// Short backend name for logs and the health endpoint.
    fn backend(&self) -> &'static str;

    /// Whether the backing storage is reachable.
    async fn health_check(&self) -> StoreResult<()>;

    /// All plans, unfiltered.
    async fn list_plans(&self) -> StoreResult<Vec<Plan>>;
    async fn get_plan(&self, id: &str) -> StoreResult<Option<Plan>>;
    /// Delete a plan; leads referencing it get `plan_id = None`.
    async fn delete_plan(&self, id: &str) -> StoreResult<bool>;

    async fn list_leads(&self) -> StoreResult<Vec<Lead>>;
    async fn get_lead(&self, id: &str) -> StoreResult<Option<Lead>>;
    /// Persist a lead, filling in id, timestamps and flags when unset.
    ///
    /// Fails with [`StoreError::UnknownPlan`] when `plan_id` names no plan.
    async fn create_lead(&self, input: CreateLead) -> StoreResult<Lead>;

    /// All coverage areas, whatever their status.
    async fn list_coverage_areas(&self) -> StoreResult<Vec<CoverageArea>>;
    async fn get_coverage_area(&self, id: &str) -> StoreResult<Option<CoverageArea>>;

    /// Active testimonials only.
    async fn list_testimonials(&self) -> StoreResult<Vec<Testimonial>>;
    async fn get_testimonial(&self, id: &str) -> StoreResult<Option<Testimonial>>;

    /// Active FAQs, ascending by `order`, ties in insertion order.
    async fn list_faqs(&self) -> StoreResult<Vec<Faq>>;
    async fn get_faq(&self, id: &str) -> StoreResult<Option<Faq>>;

    async fn list_site_settings(&self) -> StoreResult<Vec<SiteSetting>>;
    async fn get_site_setting(&self, key: &str) -> StoreResult<Option<SiteSetting>>;
}

/// Keep active testimonials, preserving order.
pub(crate) fn active_testimonials(items: impl IntoIterator<Item = Testimonial>) -> Vec<Testimonial> {
    items.into_iter().filter(|t| t.is_active).collect()
}

/// Keep active FAQs and stable-sort them by `order`.
pub(crate) fn active_faqs_in_order(items: impl IntoIterator<Item = Faq>) -> Vec<Faq> {
    let mut faqs: Vec<Faq> = items.into_iter().filter(|f| f.is_active).collect();
    faqs.sort_by_key(|f| f.order);
    faqs
}
