use crate::core::registry;
use crate::domain::model::{CombinationId, Sign};
use crate::utils::error::Result;

/// Compatibility page id for an ordered (male, female) pair.
///
/// `12 * (male - 1) + female`; order matters because the content site
/// addresses each ordered pair separately.
pub fn combine(male: &Sign, female: &Sign) -> CombinationId {
    CombinationId::from_ordinals(male.ordinal(), female.ordinal())
}

/// Same as [`combine`], starting from display labels.
pub fn combine_labels(male: &str, female: &str) -> Result<CombinationId> {
    let male = registry::lookup(male)?;
    let female = registry::lookup(female)?;
    Ok(combine(male, female))
}

/// Inverse of [`combine`].
pub fn decompose(id: CombinationId) -> Result<(&'static Sign, &'static Sign)> {
    let (male, female) = id.ordinals();
    let male = registry::by_ordinal(male)?;
    let female = registry::by_ordinal(female)?;
    Ok((male, female))
}
