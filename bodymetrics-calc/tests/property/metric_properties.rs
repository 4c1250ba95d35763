use bodymetrics_calc::bounds::{self, Bounds};
use bodymetrics_calc::BodyMetrics;
use bodymetrics_model::{Direction, Metric, MetricValue, Sex};
use proptest::prelude::*;
use strum::IntoEnumIterator;

fn sex() -> impl Strategy<Value = Sex> {
    prop_oneof![Just(Sex::Male), Just(Sex::Female)]
}

fn body() -> impl Strategy<Value = BodyMetrics> {
    (10.0..=200.0f64, 50.0..=220.0f64, 1u32..=99, sex(), 0u32..=3000).prop_map(
        |(weight, height, age, sex, impedance)| {
            BodyMetrics::try_new(weight, height, age, sex, impedance).unwrap()
        },
    )
}

fn assert_within(value: f64, range: Bounds, name: &str) -> Result<(), TestCaseError> {
    prop_assert!(
        range.contains(value),
        "{} = {} outside [{}, {}]",
        name,
        value,
        range.min,
        range.max
    );
    Ok(())
}

proptest! {
    #[test]
    fn every_accessor_stays_within_bounds(body in body()) {
        let sex = body.measurement().sex();
        assert_within(body.lean_body_mass_coefficient(), bounds::LEAN_BODY_MASS_COEFFICIENT, "lbm coefficient")?;
        assert_within(body.basal_metabolic_rate(), bounds::BASAL_METABOLIC_RATE, "bmr")?;
        assert_within(body.body_fat_percentage(), bounds::BODY_FAT_PERCENTAGE, "body fat")?;
        assert_within(body.body_water_percentage(), bounds::BODY_WATER_PERCENTAGE, "water")?;
        assert_within(body.bone_mass(), bounds::BONE_MASS, "bone mass")?;
        assert_within(body.lean_mass(), bounds::LEAN_MASS, "lean mass")?;
        assert_within(body.muscle_mass(), bounds::muscle_mass(sex), "muscle mass")?;
        assert_within(body.visceral_fat_index(), bounds::VISCERAL_FAT_INDEX, "visceral fat")?;
        assert_within(body.body_mass_index(), bounds::BODY_MASS_INDEX, "bmi")?;
        assert_within(body.ideal_weight(), bounds::IDEAL_WEIGHT, "ideal weight")?;
        assert_within(body.protein_percentage(), bounds::PROTEIN_PERCENTAGE, "protein")?;
        assert_within(body.metabolic_age(), bounds::METABOLIC_AGE, "metabolic age")?;
    }

    #[test]
    fn body_type_category_is_in_grid(body in body()) {
        prop_assert!(body.body_type_category() <= 8);
    }

    #[test]
    fn fat_mass_to_ideal_is_signed_by_direction(body in body()) {
        let result = body.fat_mass_to_ideal();
        prop_assert!(result.mass >= 0.0);

        let target = if body.measurement().is_female() { 0.22 } else { 0.15 };
        let current_fat_mass = body.measurement().weight() * (body.body_fat_percentage() / 100.0);
        let target_fat_mass = body.ideal_weight() * target;
        let expected = if current_fat_mass - target_fat_mass > 0.0 {
            Direction::ToLose
        } else {
            Direction::ToGain
        };
        prop_assert_eq!(result.direction, expected);
    }

    #[test]
    fn report_has_every_metric(body in body()) {
        let report = body.all_metrics();
        for metric in Metric::iter() {
            let value = report.get(metric);
            prop_assert!(value.is_some(), "missing {}", metric);
            if metric == Metric::BodyType {
                prop_assert!(matches!(value, Some(MetricValue::Category(0..=8))));
            } else {
                prop_assert!(matches!(value, Some(MetricValue::Decimal(x)) if x.is_finite()));
            }
        }
    }
}
