//! Fare calculation.
//!
//! A fare is the base fare, plus distance increments past the base distance,
//! plus the line surcharge, minus the rider's age discount.

mod age;
mod policy;

pub use age::AgeGroup;
pub use policy::{DEFAULT_FARE, FarePolicy, MINIMUM_FARE};

use tracing::debug;

/// Calculate a fare under the default [`FarePolicy`].
///
/// # Examples
///
/// ```
/// use subway_path::fare::calculate_fare;
///
/// assert_eq!(calculate_fare(20, 7, 0), 1250);
/// assert_eq!(calculate_fare(20, 12, 0), 1350);
/// assert_eq!(calculate_fare(10, 10, 0), 450);
/// assert_eq!(calculate_fare(5, 10, 0), 0);
/// ```
pub fn calculate_fare(age: u32, distance: u32, surcharge: u32) -> u32 {
    FarePolicy::default().calculate_fare(age, distance, surcharge)
}

/// Fare for one path query.
///
/// Holds the base fare with the line surcharge already folded in, so that
/// only age and distance are needed once the path is known.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fare {
    surcharge: u32,
    policy: FarePolicy,
}

impl Fare {
    /// Create a fare with the given surcharge under the default policy.
    pub fn new(surcharge: u32) -> Self {
        Self::with_policy(surcharge, FarePolicy::default())
    }

    pub fn with_policy(surcharge: u32, policy: FarePolicy) -> Self {
        Self { surcharge, policy }
    }

    /// Base fare plus surcharge, before distance and age adjustments.
    pub fn base(&self) -> u32 {
        self.policy.default_fare.saturating_add(self.surcharge)
    }

    pub fn surcharge(&self) -> u32 {
        self.surcharge
    }

    pub fn policy(&self) -> &FarePolicy {
        &self.policy
    }

    /// Final fare for a rider of `age` travelling `distance` km.
    pub fn calculate_fare(&self, age: u32, distance: u32) -> u32 {
        let fare = self.policy.calculate_fare(age, distance, self.surcharge);
        debug!(
            age,
            distance,
            surcharge = self.surcharge,
            fare,
            "fare calculated"
        );
        fare
    }
}
