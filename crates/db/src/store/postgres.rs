use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;

use super::{active_faqs_in_order, active_testimonials, SiteStore, StoreError, StoreResult};
use crate::fixtures;
use crate::models::coverage_area::CoverageArea;
use crate::models::faq::Faq;
use crate::models::lead::{CreateLead, Lead};
use crate::models::plan::Plan;
use crate::models::site_setting::SiteSetting;
use crate::models::testimonial::Testimonial;
use crate::repositories::{
    CoverageAreaRepo, FaqRepo, LeadRepo, PlanRepo, SiteSettingRepo, TestimonialRepo,
};

/// Postgres-backed store.
///
/// Reads never fail: a query error is logged and replaced by either the
/// fixture data (`fallback_on_read_error`) or an empty result, so a broken
/// database cannot take the landing page down. Writes propagate errors.
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
    fallback_on_read_error: bool,
}

impl PgStore {
    pub fn new(pool: PgPool, fallback_on_read_error: bool) -> Self {
        Self {
            pool,
            fallback_on_read_error,
        }
    }

    /// Turn a failed read into the configured degraded result.
    fn recover<T: Default>(
        &self,
        operation: &'static str,
        err: sqlx::Error,
        fallback: impl FnOnce() -> T,
    ) -> T {
        if self.fallback_on_read_error {
            tracing::warn!(operation, error = %err, "Read failed, serving fixture data");
            fallback()
        } else {
            tracing::warn!(operation, error = %err, "Read failed, serving empty result");
            T::default()
        }
    }
}

/// Map constraint violations on `leads` to the errors the memory store raises.
///
/// - 23503 (foreign key): `plan_id` names no plan.
/// - 23505 (unique): the lead id is taken.
fn classify_lead_insert_error(lead: &Lead, err: sqlx::Error) -> StoreError {
    if let sqlx::Error::Database(db_err) = &err {
        match db_err.code().as_deref() {
            Some("23503") => {
                if let Some(plan_id) = &lead.plan_id {
                    return StoreError::UnknownPlan { id: plan_id.clone() };
                }
            }
            Some("23505") => {
                return StoreError::Conflict {
                    entity: "Lead",
                    id: lead.id.clone(),
                };
            }
            _ => {}
        }
    }
    tracing::error!(lead_id = %lead.id, error = %err, "Failed to persist lead");
    StoreError::Persistence(err)
}

#[async_trait]
impl SiteStore for PgStore {
    fn backend(&self) -> &'static str {
        "postgres"
    }

    async fn health_check(&self) -> StoreResult<()> {
        crate::health_check(&self.pool).await?;
        Ok(())
    }

    async fn list_plans(&self) -> StoreResult<Vec<Plan>> {
        Ok(PlanRepo::list(&self.pool)
            .await
            .unwrap_or_else(|e| self.recover("list_plans", e, fixtures::plans)))
    }

    async fn get_plan(&self, id: &str) -> StoreResult<Option<Plan>> {
        Ok(PlanRepo::find_by_id(&self.pool, id)
            .await
            .unwrap_or_else(|e| {
                self.recover("get_plan", e, || {
                    fixtures::plans().into_iter().find(|p| p.id == id)
                })
            }))
    }

    async fn delete_plan(&self, id: &str) -> StoreResult<bool> {
        let deleted = PlanRepo::delete(&self.pool, id).await?;
        if deleted {
            tracing::info!(plan_id = %id, "Plan deleted");
        }
        Ok(deleted)
    }

    async fn list_leads(&self) -> StoreResult<Vec<Lead>> {
        // No fixture leads exist, so both degraded modes are empty.
        Ok(LeadRepo::list(&self.pool)
            .await
            .unwrap_or_else(|e| self.recover("list_leads", e, Vec::new)))
    }

    async fn get_lead(&self, id: &str) -> StoreResult<Option<Lead>> {
        Ok(LeadRepo::find_by_id(&self.pool, id)
            .await
            .unwrap_or_else(|e| self.recover("get_lead", e, || None)))
    }

    async fn create_lead(&self, input: CreateLead) -> StoreResult<Lead> {
        let lead = input.into_lead(Utc::now());
        LeadRepo::create(&self.pool, &lead)
            .await
            .map_err(|e| classify_lead_insert_error(&lead, e))
    }

    async fn list_coverage_areas(&self) -> StoreResult<Vec<CoverageArea>> {
        Ok(CoverageAreaRepo::list(&self.pool)
            .await
            .unwrap_or_else(|e| self.recover("list_coverage_areas", e, fixtures::coverage_areas)))
    }

    async fn get_coverage_area(&self, id: &str) -> StoreResult<Option<CoverageArea>> {
        Ok(CoverageAreaRepo::find_by_id(&self.pool, id)
            .await
            .unwrap_or_else(|e| {
                self.recover("get_coverage_area", e, || {
                    fixtures::coverage_areas().into_iter().find(|a| a.id == id)
                })
            }))
    }

    async fn list_testimonials(&self) -> StoreResult<Vec<Testimonial>> {
        Ok(TestimonialRepo::list_active(&self.pool)
            .await
            .unwrap_or_else(|e| {
                self.recover("list_testimonials", e, || {
                    active_testimonials(fixtures::testimonials())
                })
            }))
    }

    async fn get_testimonial(&self, id: &str) -> StoreResult<Option<Testimonial>> {
        Ok(TestimonialRepo::find_by_id(&self.pool, id)
            .await
            .unwrap_or_else(|e| {
                self.recover("get_testimonial", e, || {
                    fixtures::testimonials().into_iter().find(|t| t.id == id)
                })
            }))
    }

    async fn list_faqs(&self) -> StoreResult<Vec<Faq>> {
        Ok(FaqRepo::list_active(&self.pool)
            .await
            .unwrap_or_else(|e| {
                self.recover("list_faqs", e, || active_faqs_in_order(fixtures::faqs()))
            }))
    }

    async fn get_faq(&self, id: &str) -> StoreResult<Option<Faq>> {
        Ok(FaqRepo::find_by_id(&self.pool, id)
            .await
            .unwrap_or_else(|e| {
                self.recover("get_faq", e, || {
                    fixtures::faqs().into_iter().find(|f| f.id == id)
                })
            }))
    }

    async fn list_site_settings(&self) -> StoreResult<Vec<SiteSetting>> {
        Ok(SiteSettingRepo::list(&self.pool)
            .await
            .unwrap_or_else(|e| self.recover("list_site_settings", e, fixtures::site_settings)))
    }

    async fn get_site_setting(&self, key: &str) -> StoreResult<Option<SiteSetting>> {
        Ok(SiteSettingRepo::find_by_key(&self.pool, key)
            .await
            .unwrap_or_else(|e| {
                self.recover("get_site_setting", e, || {
                    fixtures::site_settings().into_iter().find(|s| s.key == key)
                })
            }))
    }
}
