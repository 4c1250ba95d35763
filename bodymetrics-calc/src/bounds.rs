use bodymetrics_model::Sex;

/// Inclusive plausibility range of a derived metric.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub min: f64,
    pub max: f64,
}

impl Bounds {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn clamp(self, value: f64) -> f64 {
        clamp(value, self.min, self.max)
    }

    pub fn contains(self, value: f64) -> bool {
        self.min <= value && value <= self.max
    }
}

/// Limits `value` to `[min, max]`. NaN is treated as below range and yields `min`.
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    value.max(min).min(max)
}

pub const LEAN_BODY_MASS_COEFFICIENT: Bounds = Bounds::new(10.0, 120.0);
pub const BASAL_METABOLIC_RATE: Bounds = Bounds::new(500.0, 3000.0);
pub const BODY_FAT_PERCENTAGE: Bounds = Bounds::new(3.0, 60.0);
pub const BODY_WATER_PERCENTAGE: Bounds = Bounds::new(35.0, 75.0);
pub const BONE_MASS: Bounds = Bounds::new(1.0, 4.0);
pub const LEAN_MASS: Bounds = Bounds::new(10.0, 120.0);
pub const MUSCLE_MASS_FEMALE: Bounds = Bounds::new(15.0, 45.0);
pub const MUSCLE_MASS_MALE: Bounds = Bounds::new(25.0, 55.0);
pub const VISCERAL_FAT_INDEX: Bounds = Bounds::new(1.0, 50.0);
pub const BODY_MASS_INDEX: Bounds = Bounds::new(10.0, 90.0);
pub const IDEAL_WEIGHT: Bounds = Bounds::new(10.0, 120.0);
pub const PROTEIN_PERCENTAGE: Bounds = Bounds::new(5.0, 32.0);
pub const METABOLIC_AGE: Bounds = Bounds::new(15.0, 80.0);

pub fn muscle_mass(sex: Sex) -> Bounds {
    match sex {
        Sex::Female => MUSCLE_MASS_FEMALE,
        Sex::Male => MUSCLE_MASS_MALE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_limits_both_sides() {
        let test_data = [
            (5.0, 10.0),
            (10.0, 10.0),
            (42.5, 42.5),
            (120.0, 120.0),
            (120.5, 120.0),
            (f64::INFINITY, 120.0),
            (f64::NEG_INFINITY, 10.0),
            (f64::NAN, 10.0),
        ];

        for (i, (value, expected)) in test_data.into_iter().enumerate() {
            assert_eq!(
                LEAN_MASS.clamp(value),
                expected,
                "Test case #{}",
                i
            );
        }
    }

    #[test]
    fn muscle_mass_bounds_depend_on_sex() {
        assert_eq!(muscle_mass(Sex::Female), Bounds::new(15.0, 45.0));
        assert_eq!(muscle_mass(Sex::Male), Bounds::new(25.0, 55.0));
    }
}
