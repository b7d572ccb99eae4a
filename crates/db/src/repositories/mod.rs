//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod coverage_area_repo;
pub mod faq_repo;
pub mod lead_repo;
pub mod plan_repo;
pub mod site_setting_repo;
pub mod testimonial_repo;

pub use coverage_area_repo::CoverageAreaRepo;
pub use faq_repo::FaqRepo;
pub use lead_repo::LeadRepo;
pub use plan_repo::PlanRepo;
pub use site_setting_repo::SiteSettingRepo;
pub use testimonial_repo::TestimonialRepo;
