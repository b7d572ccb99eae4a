//! Domain model structs and DTOs.
//!
//! Each submodule contains a `FromRow` + `Serialize` entity struct matching
//! the database row. JSON field names are camelCase to match the landing
//! page's client types.

pub mod coverage_area;
pub mod faq;
pub mod lead;
pub mod plan;
pub mod site_setting;
pub mod testimonial;
