pub mod coverage;
pub mod faqs;
pub mod leads;
pub mod plans;
pub mod settings;
pub mod testimonials;
