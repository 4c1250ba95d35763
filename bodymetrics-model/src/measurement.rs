use std::ops::RangeInclusive;

use strum::{Display, EnumString};

use crate::error::ValidationError;

pub const HEIGHT_RANGE_CM: RangeInclusive<f64> = 50.0..=220.0;
pub const WEIGHT_RANGE_KG: RangeInclusive<f64> = 10.0..=200.0;
pub const AGE_RANGE_YEARS: RangeInclusive<u32> = 1..=99;
pub const MAX_IMPEDANCE_OHM: u32 = 3000;

#[derive(Clone, Copy, Debug, Display, EnumString, Eq, Hash, PartialEq)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    pub fn is_female(self) -> bool {
        self == Sex::Female
    }
}

/// Measurement as reported by a scale, before any range checks.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MeasurementInput {
    pub weight: f64,
    pub height: f64,
    pub age: u32,
    pub sex: Sex,
    #[cfg_attr(feature = "serde", serde(default))]
    pub impedance: u32,
}

/// A single validated scale measurement.
///
/// Weight is in kilograms, height in centimetres and impedance in ohms.
/// An impedance of zero means the scale did not take a BIA reading.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "MeasurementInput"))]
pub struct Measurement {
    weight: f64,
    height: f64,
    age: u8,
    sex: Sex,
    impedance: u16,
}

impl Measurement {
    pub fn new(
        weight: f64,
        height: f64,
        age: u32,
        sex: Sex,
        impedance: u32,
    ) -> Result<Self, ValidationError> {
        if !HEIGHT_RANGE_CM.contains(&height) {
            return Err(ValidationError::Height {
                value: height,
                min: *HEIGHT_RANGE_CM.start(),
                max: *HEIGHT_RANGE_CM.end(),
            });
        }
        if !WEIGHT_RANGE_KG.contains(&weight) {
            return Err(ValidationError::Weight {
                value: weight,
                min: *WEIGHT_RANGE_KG.start(),
                max: *WEIGHT_RANGE_KG.end(),
            });
        }
        if !AGE_RANGE_YEARS.contains(&age) {
            return Err(ValidationError::Age {
                value: age,
                min: *AGE_RANGE_YEARS.start(),
                max: *AGE_RANGE_YEARS.end(),
            });
        }
        if impedance > MAX_IMPEDANCE_OHM {
            return Err(ValidationError::Impedance {
                value: impedance,
                max: MAX_IMPEDANCE_OHM,
            });
        }

        // Both narrowing casts are lossless after the range checks above.
        Ok(Self {
            weight,
            height,
            age: age as u8,
            sex,
            impedance: impedance as u16,
        })
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }
    pub fn height_cm(&self) -> f64 {
        self.height
    }
    pub fn height_m(&self) -> f64 {
        self.height / 100.0
    }
    pub fn age(&self) -> u8 {
        self.age
    }
    pub fn sex(&self) -> Sex {
        self.sex
    }
    pub fn is_female(&self) -> bool {
        self.sex.is_female()
    }
    pub fn impedance(&self) -> u16 {
        self.impedance
    }
}

impl TryFrom<MeasurementInput> for Measurement {
    type Error = ValidationError;

    fn try_from(input: MeasurementInput) -> Result<Self, Self::Error> {
        Measurement::new(
            input.weight,
            input.height,
            input.age,
            input.sex,
            input.impedance,
        )
    }
}

impl From<Measurement> for MeasurementInput {
    fn from(measurement: Measurement) -> Self {
        Self {
            weight: measurement.weight,
            height: measurement.height,
            age: measurement.age as u32,
            sex: measurement.sex,
            impedance: measurement.impedance as u32,
        }
    }
}
