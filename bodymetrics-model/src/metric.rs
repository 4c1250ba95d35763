use std::collections::BTreeMap;

use num_derive::FromPrimitive;
use strum::{AsRefStr, Display, EnumIter};

/// Keys of a metric report, in report order.
#[derive(
    AsRefStr, Clone, Copy, Debug, Display, EnumIter, Eq, Hash, Ord, PartialEq, PartialOrd,
)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Metric {
    Bmi,
    BodyFatPct,
    WaterPct,
    BoneMass,
    MuscleMass,
    Lbm,
    Bmr,
    VisceralFat,
    IdealWeight,
    MetabolicAge,
    ProteinPct,
    BodyType,
}

impl Metric {
    /// Number of decimals the metric is reported with, `None` for categories.
    pub fn decimals(self) -> Option<i32> {
        match self {
            Metric::Bmr | Metric::MetabolicAge => Some(0),
            Metric::Bmi
            | Metric::BodyFatPct
            | Metric::WaterPct
            | Metric::VisceralFat
            | Metric::IdealWeight
            | Metric::ProteinPct => Some(1),
            Metric::BoneMass | Metric::MuscleMass | Metric::Lbm => Some(2),
            Metric::BodyType => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum MetricValue {
    Decimal(f64),
    Category(u8),
}

impl MetricValue {
    pub fn as_f64(self) -> f64 {
        match self {
            MetricValue::Decimal(x) => x,
            MetricValue::Category(x) => x as f64,
        }
    }
}

/// Result of a single calculation, one value per [`Metric`].
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct MetricReport {
    values: BTreeMap<Metric, MetricValue>,
}

impl MetricReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, metric: Metric, value: MetricValue) {
        self.values.insert(metric, value);
    }

    pub fn get(&self, metric: Metric) -> Option<MetricValue> {
        self.values.get(&metric).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Metric, MetricValue)> + '_ {
        self.values.iter().map(|(metric, value)| (*metric, *value))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Position of a value against a low/high threshold band.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Level {
    Low,
    Normal,
    High,
}

impl Level {
    pub fn classify(value: f64, low: f64, high: f64) -> Self {
        if value > high {
            Level::High
        } else if value < low {
            Level::Low
        } else {
            Level::Normal
        }
    }
}

/// Body type category, crossing fat level against muscle level.
///
/// Codes run from high fat (0-2) to low fat (6-8); within each fat row the
/// muscle level goes low, normal, high.
#[derive(Clone, Copy, Debug, Eq, FromPrimitive, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum BodyType {
    Obese = 0,
    Overweight = 1,
    ThickSet = 2,
    LackExercise = 3,
    Balanced = 4,
    BalancedMuscular = 5,
    Skinny = 6,
    BalancedSkinny = 7,
    SkinnyMuscular = 8,
}

impl BodyType {
    pub fn from_levels(fat: Level, muscle: Level) -> Self {
        match (fat, muscle) {
            (Level::High, Level::Low) => BodyType::Obese,
            (Level::High, Level::Normal) => BodyType::Overweight,
            (Level::High, Level::High) => BodyType::ThickSet,
            (Level::Normal, Level::Low) => BodyType::LackExercise,
            (Level::Normal, Level::Normal) => BodyType::Balanced,
            (Level::Normal, Level::High) => BodyType::BalancedMuscular,
            (Level::Low, Level::Low) => BodyType::Skinny,
            (Level::Low, Level::Normal) => BodyType::BalancedSkinny,
            (Level::Low, Level::High) => BodyType::SkinnyMuscular,
        }
    }

    pub fn code(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for BodyType {
    type Error = &'static str;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        num::FromPrimitive::from_u8(code).ok_or("Invalid body type")
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Direction {
    ToLose,
    ToGain,
}

/// How much fat mass separates a body from its target, in kilograms.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FatMassToIdeal {
    pub direction: Direction,
    pub mass: f64,
}

impl FatMassToIdeal {
    /// Builds the result from a signed difference `current - target`.
    pub fn from_difference(difference: f64) -> Self {
        if difference > 0.0 {
            Self {
                direction: Direction::ToLose,
                mass: difference,
            }
        } else {
            Self {
                direction: Direction::ToGain,
                mass: difference.abs(),
            }
        }
    }
}
