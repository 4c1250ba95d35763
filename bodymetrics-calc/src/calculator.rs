use bodymetrics_model::{
    BodyType, FatMassToIdeal, Level, Measurement, Metric, MetricReport, MetricValue, Sex,
    ValidationError,
};
use log::debug;

use crate::bounds;

const WATER_FRACTION_OF_LEAN_MASS: f64 = 0.73;
const PROTEIN_FRACTION_OF_MUSCLE: f64 = 0.19;
const IDEAL_BODY_MASS_INDEX: f64 = 22.0;

#[mockall::automock]
pub trait Calculator: Send + Sync {
    fn all_metrics(&self) -> MetricReport;
    fn fat_mass_to_ideal(&self) -> FatMassToIdeal;
    fn body_type(&self) -> BodyType;
}

/// Body composition metrics derived from a single measurement.
///
/// Every accessor is a pure function of the stored measurement and clamps
/// its result to the range in [`bounds`], so none of them can fail.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BodyMetrics {
    measurement: Measurement,
}

impl BodyMetrics {
    pub fn new(measurement: Measurement) -> Self {
        Self { measurement }
    }

    pub fn try_new(
        weight: f64,
        height: f64,
        age: u32,
        sex: Sex,
        impedance: u32,
    ) -> Result<Self, ValidationError> {
        Measurement::new(weight, height, age, sex, impedance).map(Self::new)
    }

    pub fn measurement(&self) -> &Measurement {
        &self.measurement
    }

    fn weight(&self) -> f64 {
        self.measurement.weight()
    }

    fn height(&self) -> f64 {
        self.measurement.height_cm()
    }

    fn age(&self) -> f64 {
        self.measurement.age() as f64
    }

    /// Lean body mass from a sex-specific BIA linear regression, in kg.
    pub fn lean_body_mass_coefficient(&self) -> f64 {
        let impedance = self.measurement.impedance() as f64;
        let lbm = if self.measurement.is_female() {
            0.14 * impedance + 0.34 * self.height() + 0.33 * self.weight()
                - 0.16 * self.age()
                - 6.68
        } else {
            0.24 * impedance + 0.41 * self.height() + 0.34 * self.weight()
                - 0.16 * self.age()
                - 10.68
        };

        bounds::LEAN_BODY_MASS_COEFFICIENT.clamp(lbm)
    }

    fn raw_basal_metabolic_rate(&self) -> f64 {
        let sex_constant = if self.measurement.is_female() {
            -161.0
        } else {
            5.0
        };
        10.0 * self.weight() + 6.25 * self.height() - 5.0 * self.age() + sex_constant
    }

    /// Mifflin-St Jeor basal metabolic rate, in kcal/day.
    pub fn basal_metabolic_rate(&self) -> f64 {
        bounds::BASAL_METABOLIC_RATE.clamp(self.raw_basal_metabolic_rate())
    }

    /// Body fat percentage.
    ///
    /// Starts from a BMI and age estimate. When the scale measured impedance,
    /// the result is the mean of that estimate and the fat fraction implied by
    /// [`Self::lean_body_mass_coefficient`].
    pub fn body_fat_percentage(&self) -> f64 {
        let mut fat = 1.20 * self.body_mass_index() + 0.23 * self.age() - 16.2;

        if self.measurement.impedance() > 0 {
            let lbm = self.lean_body_mass_coefficient();
            let fat_from_impedance = (self.weight() - lbm) / self.weight() * 100.0;
            fat = (fat + fat_from_impedance) / 2.0;
        }

        bounds::BODY_FAT_PERCENTAGE.clamp(fat)
    }

    pub fn body_water_percentage(&self) -> f64 {
        let water =
            self.lean_body_mass_coefficient() * WATER_FRACTION_OF_LEAN_MASS / self.weight() * 100.0;
        bounds::BODY_WATER_PERCENTAGE.clamp(water)
    }

    pub fn bone_mass(&self) -> f64 {
        let fraction = if self.measurement.is_female() {
            0.144
        } else {
            0.154
        };
        bounds::BONE_MASS.clamp(self.weight() * fraction)
    }

    /// Weight minus fat mass, in kg.
    pub fn lean_mass(&self) -> f64 {
        let fat_mass = self.weight() * (self.body_fat_percentage() / 100.0);
        bounds::LEAN_MASS.clamp(self.weight() - fat_mass)
    }

    pub fn muscle_mass(&self) -> f64 {
        let water_mass = self.body_water_percentage() / 100.0 * self.weight();
        let muscle = self.lean_mass() - water_mass - self.bone_mass();
        bounds::muscle_mass(self.measurement.sex()).clamp(muscle)
    }

    /// Visceral fat index on a 1-50 scale.
    ///
    /// No waist circumference is measured, so it is approximated from BMI
    /// and height before applying the sex-specific regression.
    pub fn visceral_fat_index(&self) -> f64 {
        let waist = self.height() * 0.5 * (self.body_mass_index() / 25.0);

        let mut index = if self.measurement.is_female() {
            waist * 0.47 - self.age() * 0.13 + 2.5
        } else {
            waist * 0.58 - self.age() * 0.15 + 3.0
        };
        index += (self.body_fat_percentage() - 20.0) * 0.2;

        bounds::VISCERAL_FAT_INDEX.clamp(index)
    }

    pub fn body_mass_index(&self) -> f64 {
        let bmi = self.weight() / self.measurement.height_m().powi(2);
        bounds::BODY_MASS_INDEX.clamp(bmi)
    }

    /// Weight at a BMI of 22 for the measured height.
    pub fn ideal_weight(&self) -> f64 {
        let ideal = IDEAL_BODY_MASS_INDEX * self.measurement.height_m().powi(2);
        bounds::IDEAL_WEIGHT.clamp(ideal)
    }

    /// Distance between current fat mass and the target fat mass at ideal weight.
    ///
    /// The target is 15% of ideal weight for men and 22% for women. The mass
    /// is rounded to 2 decimals.
    pub fn fat_mass_to_ideal(&self) -> FatMassToIdeal {
        let target_percentage = if self.measurement.is_female() {
            22.0
        } else {
            15.0
        };
        let target_fat_mass = self.ideal_weight() * (target_percentage / 100.0);
        let current_fat_mass = self.weight() * (self.body_fat_percentage() / 100.0);

        let mut result = FatMassToIdeal::from_difference(current_fat_mass - target_fat_mass);
        result.mass = round_to(result.mass, 2);
        result
    }

    pub fn protein_percentage(&self) -> f64 {
        let protein_mass = self.muscle_mass() * PROTEIN_FRACTION_OF_MUSCLE;
        bounds::PROTEIN_PERCENTAGE.clamp(protein_mass / self.weight() * 100.0)
    }

    pub fn body_type(&self) -> BodyType {
        let ((fat_low, fat_high), (muscle_low, muscle_high)) = if self.measurement.is_female() {
            ((18.0, 28.0), (20.0, 35.0))
        } else {
            ((10.0, 20.0), (30.0, 45.0))
        };

        BodyType::from_levels(
            Level::classify(self.body_fat_percentage(), fat_low, fat_high),
            Level::classify(self.muscle_mass(), muscle_low, muscle_high),
        )
    }

    /// Body type as its 0-8 category code.
    pub fn body_type_category(&self) -> u8 {
        self.body_type().code()
    }

    /// Chronological age scaled by how the clamped BMR compares to the
    /// unclamped Mifflin-St Jeor value for the same body.
    pub fn metabolic_age(&self) -> f64 {
        let ratio = self.basal_metabolic_rate() / self.raw_basal_metabolic_rate();
        let metabolic_age = if ratio > 0.0 {
            self.age() / ratio
        } else {
            self.age()
        };

        bounds::METABOLIC_AGE.clamp(metabolic_age)
    }

    pub fn all_metrics(&self) -> MetricReport {
        debug!("Computing metrics for {:?}", self.measurement);

        let decimals = [
            (Metric::Bmi, self.body_mass_index()),
            (Metric::BodyFatPct, self.body_fat_percentage()),
            (Metric::WaterPct, self.body_water_percentage()),
            (Metric::BoneMass, self.bone_mass()),
            (Metric::MuscleMass, self.muscle_mass()),
            (Metric::Lbm, self.lean_mass()),
            (Metric::Bmr, self.basal_metabolic_rate()),
            (Metric::VisceralFat, self.visceral_fat_index()),
            (Metric::IdealWeight, self.ideal_weight()),
            (Metric::MetabolicAge, self.metabolic_age()),
            (Metric::ProteinPct, self.protein_percentage()),
        ];

        let mut report = MetricReport::new();
        for (metric, value) in decimals {
            let value = match metric.decimals() {
                Some(places) => round_to(value, places),
                None => value,
            };
            report.insert(metric, MetricValue::Decimal(value));
        }
        report.insert(
            Metric::BodyType,
            MetricValue::Category(self.body_type_category()),
        );

        report
    }
}

impl Calculator for BodyMetrics {
    fn all_metrics(&self) -> MetricReport {
        BodyMetrics::all_metrics(self)
    }

    fn fat_mass_to_ideal(&self) -> FatMassToIdeal {
        BodyMetrics::fat_mass_to_ideal(self)
    }

    fn body_type(&self) -> BodyType {
        BodyMetrics::body_type(self)
    }
}

/// Rounds to the given number of decimals, ties to the even neighbour.
fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round_ties_even() / factor
}
