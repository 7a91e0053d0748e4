//! Fare policy configuration.

use serde::Deserialize;

use super::AgeGroup;

/// Base fare for any trip up to the base distance.
pub const DEFAULT_FARE: u32 = 1250;

/// Floor applied to every calculated fare.
pub const MINIMUM_FARE: u32 = 0;

/// Configuration parameters for fare calculation.
///
/// Missing fields fall back to their defaults when deserialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FarePolicy {
    /// Fare charged up to `base_distance`.
    pub default_fare: u32,

    /// Lowest fare ever returned.
    pub minimum_fare: u32,

    /// Distance (km) covered by the default fare.
    pub base_distance: u32,

    /// Distance (km) where the middle tier ends and the long tier begins.
    pub middle_distance: u32,

    /// Km per increment in the middle tier.
    pub middle_unit: u32,

    /// Km per increment in the long tier.
    pub long_unit: u32,

    /// Fare added per increment unit.
    pub increment: u32,

    /// Flat amount deducted before a child or teen discount.
    pub discount_deduction: u32,

    /// Percentage taken off a child's fare after the deduction.
    pub child_discount_pct: u32,

    /// Percentage taken off a teen's fare after the deduction.
    pub teen_discount_pct: u32,
}

impl FarePolicy {
    /// Create a policy with the given tier layout and default discounts.
    pub fn new(
        default_fare: u32,
        base_distance: u32,
        middle_distance: u32,
        middle_unit: u32,
        long_unit: u32,
        increment: u32,
    ) -> Self {
        Self {
            default_fare,
            base_distance,
            middle_distance,
            middle_unit,
            long_unit,
            increment,
            ..Self::default()
        }
    }

    /// Final fare for a rider of `age` travelling `distance` km on a query
    /// whose lines carry `surcharge`.
    pub fn calculate_fare(&self, age: u32, distance: u32, surcharge: u32) -> u32 {
        let fare = self
            .default_fare
            .saturating_add(self.distance_fare(distance))
            .saturating_add(surcharge);

        let discounted = match AgeGroup::from_age(age) {
            AgeGroup::Infant => return 0,
            AgeGroup::Child => self.discount(fare, self.child_discount_pct),
            AgeGroup::Teen => self.discount(fare, self.teen_discount_pct),
            AgeGroup::Adult => fare,
        };

        discounted.max(self.minimum_fare)
    }

    /// Extra fare for the distance beyond `base_distance`.
    pub fn distance_fare(&self, distance: u32) -> u32 {
        if distance <= self.base_distance {
            return 0;
        }

        let middle_end = self.middle_distance.max(self.base_distance);
        let middle = distance.min(middle_end) - self.base_distance;
        let long = distance.saturating_sub(middle_end);

        let units = units(middle, self.middle_unit).saturating_add(units(long, self.long_unit));
        units.saturating_mul(self.increment)
    }

    fn discount(&self, fare: u32, pct: u32) -> u32 {
        let remainder = u64::from(fare.saturating_sub(self.discount_deduction));
        let kept = u64::from(100u32.saturating_sub(pct));
        u32::try_from(remainder * kept / 100).unwrap_or(u32::MAX)
    }
}

/// Number of whole or partial `unit`-km blocks in `km`.
fn units(km: u32, unit: u32) -> u32 {
    if unit == 0 { 0 } else { km.div_ceil(unit) }
}

impl Default for FarePolicy {
    fn default() -> Self {
        Self {
            default_fare: DEFAULT_FARE,
            minimum_fare: MINIMUM_FARE,
            base_distance: 10,
            middle_distance: 50,
            middle_unit: 5,
            long_unit: 8,
            increment: 100,
            discount_deduction: 350,
            child_discount_pct: 50,
            teen_discount_pct: 20,
        }
    }
}
