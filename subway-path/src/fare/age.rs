//! Rider age bands.

/// Age band that determines the rider's discount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AgeGroup {
    /// Under 6: rides free
    Infant,
    /// 6 to 12
    Child,
    /// 13 to 18
    Teen,
    /// 19 and over: full fare
    Adult,
}

impl AgeGroup {
    pub fn from_age(age: u32) -> Self {
        match age {
            0..6 => AgeGroup::Infant,
            6..13 => AgeGroup::Child,
            13..19 => AgeGroup::Teen,
            _ => AgeGroup::Adult,
        }
    }
}
