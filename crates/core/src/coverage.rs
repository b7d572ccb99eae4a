//! Postal-code coverage checks.
//!
//! A CEP (Brazilian postal code) is eight digits, commonly written
//! `65800-000`. Areas store their codes in either form; matching is done on
//! the digits only.

use serde::Serialize;

use crate::error::CoreError;

/// Number of digits in a CEP.
pub const ZIP_CODE_DIGITS: usize = 8;

/// A coverage area as seen by the checker.
pub trait CoverageSource {
    fn area_name(&self) -> &str;
    fn zip_codes(&self) -> &[String];
    fn has_fiber(&self) -> bool;
    fn has_radio(&self) -> bool;
    /// Only serving areas count towards coverage.
    fn is_serving(&self) -> bool;
}

/// Result of checking one postal code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverageCheck {
    /// The normalized, digits-only code that was checked.
    pub zip_code: String,
    pub covered: bool,
    pub has_fiber: bool,
    pub has_radio: bool,
    /// Names of the serving areas that list this code.
    pub areas: Vec<String>,
}

/// Strip formatting from a postal code and require exactly eight digits.
pub fn normalize_zip_code(raw: &str) -> Result<String, CoreError> {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    let has_junk = raw
        .chars()
        .any(|c| !c.is_ascii_digit() && c != '-' && c != '.' && !c.is_whitespace());

    if has_junk || digits.len() != ZIP_CODE_DIGITS {
        return Err(CoreError::Validation(format!(
            "Zip code must have {ZIP_CODE_DIGITS} digits (got '{raw}')"
        )));
    }
    Ok(digits)
}

/// Check a postal code against the known areas.
pub fn check_coverage<A: CoverageSource>(raw_zip: &str, areas: &[A]) -> Result<CoverageCheck, CoreError> {
    let zip_code = normalize_zip_code(raw_zip)?;

    let matching: Vec<&A> = areas
        .iter()
        .filter(|area| area.is_serving())
        .filter(|area| {
            area.zip_codes()
                .iter()
                .filter_map(|z| normalize_zip_code(z).ok())
                .any(|z| z == zip_code)
        })
        .collect();

    Ok(CoverageCheck {
        covered: !matching.is_empty(),
        has_fiber: matching.iter().any(|a| a.has_fiber()),
        has_radio: matching.iter().any(|a| a.has_radio()),
        areas: matching.iter().map(|a| a.area_name().to_string()).collect(),
        zip_code,
    })
}
