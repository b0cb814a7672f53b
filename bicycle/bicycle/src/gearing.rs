use rust_decimal::Decimal;
use thiserror::Error;

/// A wheel, measured in inches.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Wheel {
    pub rim: Decimal,
    pub tire: Decimal,
}

impl Wheel {
    pub fn new(rim: Decimal, tire: Decimal) -> Self {
        Self {
            rim,
            tire,
        }
    }

    /// Rim diameter plus twice the tire height.
    pub fn diameter(&self) -> Decimal {
        self.rim + self.tire * Decimal::TWO
    }

    pub fn circumference(&self) -> Decimal {
        self.diameter() * Decimal::PI
    }
}

/// A chainring/cog pairing, optionally combined with a wheel.
///
/// Gear inches allow comparing gearing across different wheel sizes.
/// See <https://en.wikipedia.org/wiki/Gear_inches>
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Gear {
    pub chainring: Decimal,
    pub cog: Decimal,
    pub wheel: Option<Wheel>,
}

impl Gear {
    pub fn new(chainring: Decimal, cog: Decimal, wheel: Option<Wheel>) -> Self {
        Self {
            chainring,
            cog,
            wheel,
        }
    }

    pub fn ratio(&self) -> Result<Decimal, GearingError> {
        self.chainring
            .checked_div(self.cog)
            .ok_or(GearingError::ZeroCog)
    }

    pub fn gear_inches(&self) -> Result<Decimal, GearingError> {
        let wheel = self
            .wheel
            .as_ref()
            .ok_or(GearingError::MissingWheel)?;

        Ok(self.ratio()? * wheel.diameter())
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum GearingError {
    #[error("Cog must not be zero")]
    ZeroCog,
    #[error("Gear has no wheel")]
    MissingWheel,
}
