use async_trait::async_trait;
use chrono::Utc;
use indexmap::IndexMap;
use tokio::sync::RwLock;

use super::{active_faqs_in_order, active_testimonials, SiteStore, StoreError, StoreResult};
use crate::fixtures::{self, SiteData};
use crate::models::coverage_area::CoverageArea;
use crate::models::faq::Faq;
use crate::models::lead::{CreateLead, Lead};
use crate::models::plan::Plan;
use crate::models::site_setting::SiteSetting;
use crate::models::testimonial::Testimonial;

#[derive(Default)]
struct Tables {
    plans: IndexMap<String, Plan>,
    leads: IndexMap<String, Lead>,
    coverage_areas: IndexMap<String, CoverageArea>,
    testimonials: IndexMap<String, Testimonial>,
    faqs: IndexMap<String, Faq>,
    site_settings: IndexMap<String, SiteSetting>,
}

fn index_by_id<T>(rows: Vec<T>, id: impl Fn(&T) -> &str) -> IndexMap<String, T> {
    rows.into_iter().map(|row| (id(&row).to_string(), row)).collect()
}

/// In-process store over insertion-ordered maps.
///
/// Built once at startup and shared behind an `Arc`; the interior `RwLock`
/// makes it safe to call from concurrent requests.
#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// A store preloaded with the fixture data set.
    pub fn with_fixtures() -> Self {
        Self::from_data(fixtures::site_data())
    }

    /// A store holding exactly `data`. Later rows win on duplicate ids.
    pub fn from_data(data: SiteData) -> Self {
        let tables = Tables {
            plans: index_by_id(data.plans, |p| p.id.as_str()),
            leads: index_by_id(data.leads, |l| l.id.as_str()),
            coverage_areas: index_by_id(data.coverage_areas, |a| a.id.as_str()),
            testimonials: index_by_id(data.testimonials, |t| t.id.as_str()),
            faqs: index_by_id(data.faqs, |f| f.id.as_str()),
            site_settings: index_by_id(data.site_settings, |s| s.id.as_str()),
        };
        Self {
            tables: RwLock::new(tables),
        }
    }
}

#[async_trait]
impl SiteStore for MemoryStore {
    fn backend(&self) -> &'static str {
        "memory"
    }

    async fn health_check(&self) -> StoreResult<()> {
        Ok(())
    }

    async fn list_plans(&self) -> StoreResult<Vec<Plan>> {
        Ok(self.tables.read().await.plans.values().cloned().collect())
    }

    async fn get_plan(&self, id: &str) -> StoreResult<Option<Plan>> {
        Ok(self.tables.read().await.plans.get(id).cloned())
    }

    async fn delete_plan(&self, id: &str) -> StoreResult<bool> {
        let mut tables = self.tables.write().await;
        if tables.plans.shift_remove(id).is_none() {
            return Ok(false);
        }
        for lead in tables.leads.values_mut() {
            if lead.plan_id.as_deref() == Some(id) {
                lead.plan_id = None;
            }
        }
        Ok(true)
    }

    async fn list_leads(&self) -> StoreResult<Vec<Lead>> {
        Ok(self.tables.read().await.leads.values().rev().cloned().collect())
    }

    async fn get_lead(&self, id: &str) -> StoreResult<Option<Lead>> {
        Ok(self.tables.read().await.leads.get(id).cloned())
    }

    async fn create_lead(&self, input: CreateLead) -> StoreResult<Lead> {
        let lead = input.into_lead(Utc::now());
        let mut tables = self.tables.write().await;
        if let Some(plan_id) = lead.plan_id.as_deref() {
            if !tables.plans.contains_key(plan_id) {
                return Err(StoreError::UnknownPlan {
                    id: plan_id.to_string(),
                });
            }
        }
        if tables.leads.contains_key(&lead.id) {
            return Err(StoreError::Conflict {
                entity: "Lead",
                id: lead.id,
            });
        }
        tables.leads.insert(lead.id.clone(), lead.clone());
        Ok(lead)
    }

    async fn list_coverage_areas(&self) -> StoreResult<Vec<CoverageArea>> {
        Ok(self
            .tables
            .read()
            .await
            .coverage_areas
            .values()
            .cloned()
            .collect())
    }

    async fn get_coverage_area(&self, id: &str) -> StoreResult<Option<CoverageArea>> {
        Ok(self.tables.read().await.coverage_areas.get(id).cloned())
    }

    async fn list_testimonials(&self) -> StoreResult<Vec<Testimonial>> {
        let tables = self.tables.read().await;
        Ok(active_testimonials(tables.testimonials.values().cloned()))
    }

    async fn get_testimonial(&self, id: &str) -> StoreResult<Option<Testimonial>> {
        Ok(self.tables.read().await.testimonials.get(id).cloned())
    }

    async fn list_faqs(&self) -> StoreResult<Vec<Faq>> {
        let tables = self.tables.read().await;
        Ok(active_faqs_in_order(tables.faqs.values().cloned()))
    }

    async fn get_faq(&self, id: &str) -> StoreResult<Option<Faq>> {
        Ok(self.tables.read().await.faqs.get(id).cloned())
    }

    async fn list_site_settings(&self) -> StoreResult<Vec<SiteSetting>> {
        Ok(self
            .tables
            .read()
            .await
            .site_settings
            .values()
            .cloned()
            .collect())
    }

    async fn get_site_setting(&self, key: &str) -> StoreResult<Option<SiteSetting>> {
        Ok(self
            .tables
            .read()
            .await
            .site_settings
            .values()
            .find(|s| s.key == key)
            .cloned())
    }
}
