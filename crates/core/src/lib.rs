//! Domain logic for the AgroNet landing site.
//!
//! Pure functions and shared types only: nothing in this crate touches the
//! network or the database.

pub mod banner;
pub mod coverage;
pub mod error;
pub mod lead;
pub mod testimonial;
pub mod types;
