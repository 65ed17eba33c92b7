//! Conduit material and labor formulas
//!
//! Properties the formulas guarantee:
//! - Counts never decrease as footage or bends grow
//! - connectors = bushings = 2 × pull boxes
//! - total cost = material cost + labor cost, exactly, after rounding

use rust_decimal::{Decimal, RoundingStrategy};

use crate::estimator::types::{EstimateInput, EstimateResult, InstallLocation, MaterialCounts};
use crate::pricing::Material;

/// Bends allowed between pull boxes
pub const MAX_BENDS_PER_RUN: u32 = 4;

/// Footage covered by one pull box
pub const FEET_PER_PULL_BOX: f64 = 100.0;

/// Strap spacing indoors, in feet
pub const INDOOR_STRAP_SPACING_FT: f64 = 10.0;

/// Strap spacing outdoors and underground, in feet
pub const EXPOSED_STRAP_SPACING_FT: f64 = 3.0;

/// Straps per retail pack
pub const STRAPS_PER_PACK: u64 = 10;

/// Length of one conduit stick, in feet
pub const STICK_LENGTH_FT: f64 = 10.0;

/// Compute material quantities and costs for a job
///
/// Pure and deterministic: identical input yields an identical result.
/// Intermediate arithmetic is `f64`; every reported figure is rounded half
/// up to cents on the exact binary value. Total cost is the sum of the
/// already-rounded material and labor costs.
pub fn estimate(input: &EstimateInput) -> EstimateResult {
    let materials = material_counts(input);

    let total_labor_hours =
        (input.footage_feet / FEET_PER_PULL_BOX) * input.complexity.hours_per_100ft();
    let labor_hours_per_person = total_labor_hours / f64::from(input.crew_size.get());
    let labor_cost = total_labor_hours * input.labor_rate_per_hour;

    let material_cost = Material::ALL.iter().fold(0.0, |sum, &material| {
        sum + materials.count(material) as f64 * input.prices.unit_price(material)
    });

    let material_cost = round_2dp(material_cost);
    let labor_cost = round_2dp(labor_cost);

    EstimateResult {
        materials,
        material_cost,
        total_labor_hours: round_2dp(total_labor_hours),
        labor_hours_per_person: round_2dp(labor_hours_per_person),
        labor_cost,
        total_cost: material_cost.saturating_add(labor_cost),
    }
}

/// Material quantities alone, without pricing
pub fn material_counts(input: &EstimateInput) -> MaterialCounts {
    let footage = input.footage_feet;
    let bends = input.bend_count;

    let pull_boxes = u64::from(bends.div_ceil(MAX_BENDS_PER_RUN))
        .saturating_add(ceil_count(footage / FEET_PER_PULL_BOX));

    let straps = match input.location {
        InstallLocation::Indoor => ceil_count(footage / INDOOR_STRAP_SPACING_FT),
        InstallLocation::Outdoor | InstallLocation::Underground => {
            ceil_count(footage / EXPOSED_STRAP_SPACING_FT)
        }
    };

    MaterialCounts {
        straps,
        strap_packs: straps.div_ceil(STRAPS_PER_PACK),
        pull_boxes,
        connectors: pull_boxes.saturating_mul(2),
        couplings: ceil_count(footage / STICK_LENGTH_FT).saturating_sub(1),
        elbows: u64::from(bends),
        bushings: pull_boxes.saturating_mul(2),
    }
}

/// Round to two decimals, ties going up, as a scale-2 decimal
///
/// Non-finite values become zero. Finite values beyond the decimal range
/// saturate to `Decimal::MAX` or `Decimal::MIN`.
pub fn round_2dp(value: f64) -> Decimal {
    let mut rounded = match Decimal::from_f64_retain(value) {
        Some(d) => d.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero),
        None if !value.is_finite() => Decimal::ZERO,
        None if value > 0.0 => return Decimal::MAX,
        None => return Decimal::MIN,
    };
    rounded.rescale(2);
    rounded
}

// Negative and NaN quotients saturate to zero in the cast.
fn ceil_count(quotient: f64) -> u64 {
    quotient.ceil() as u64
}
