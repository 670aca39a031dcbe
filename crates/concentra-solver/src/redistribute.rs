//! Applies rebalanced group targets back onto property contributions.

use crate::AMOUNT_PRECISION;
use concentra_core::Property;
use rust_decimal::{Decimal, RoundingStrategy};
use std::collections::BTreeMap;

/// Scales each property's contribution by its group's rebalancing factor
/// `targets[v] / current[v]`, where `v` is the property's value on
/// `dimension`.
///
/// Contributions are quantized to [`AMOUNT_PRECISION`] digits truncating
/// toward zero after scaling. Repeated truncation bleeds rounding mass
/// across passes; the driver's rounded share comparison absorbs it.
///
/// Groups absent from `targets`, and groups whose current sum is zero, are
/// left untouched. Properties whose contribution is still unset are left
/// untouched; the driver initializes contributions before any pass.
pub fn redistribute(
    properties: &mut [Property],
    dimension: &str,
    current: &BTreeMap<String, Decimal>,
    targets: &BTreeMap<String, Decimal>,
) {
    for property in properties.iter_mut() {
        let factor = match property.attribute(dimension) {
            Some(attr_value) => {
                let before = current.get(attr_value).copied().unwrap_or(Decimal::ZERO);
                if before.is_zero() {
                    continue;
                }
                let after = targets.get(attr_value).copied().unwrap_or(before);
                after / before
            }
            None => continue,
        };

        if factor == Decimal::ONE {
            continue;
        }

        if let Some(contribution) = property.contribution {
            property.contribution = Some(
                (contribution * factor)
                    .round_dp_with_strategy(AMOUNT_PRECISION, RoundingStrategy::ToZero),
            );
        }
    }
}
