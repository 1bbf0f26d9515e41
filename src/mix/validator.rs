use std::error::Error;
use std::fmt;

use crate::meat::Meat;

/// User-facing validation failure. Deliberately carries no cause: every
/// rejected input surfaces as the same generic notice, so there is nothing
/// to distinguish here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidInput;

impl fmt::Display for InvalidInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid input")
    }
}

impl Error for InvalidInput {}

/// Checks a calculation request before the allocator runs: the total
/// weight and target fat must be finite and positive, and at least two
/// active meats are needed, since with fewer the split is under-determined.
/// The allocator itself never enforces these.
pub fn validate_request(
    active_meats: &[Meat],
    total_weight: f64,
    target_fat: f64,
) -> Result<(), InvalidInput> {
    if !total_weight.is_finite() || total_weight <= 0.0 {
        return Err(InvalidInput);
    }
    if !target_fat.is_finite() || target_fat <= 0.0 {
        return Err(InvalidInput);
    }
    if active_meats.len() < 2 {
        return Err(InvalidInput);
    }
    Ok(())
}
