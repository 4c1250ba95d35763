use bodymetrics_model::Measurement;
use log::debug;

use crate::calculator::Calculator;

#[mockall::automock]
pub trait Factory: Send + Sync {
    fn make_calculator(&self, measurement: Measurement) -> Box<dyn Calculator>;
}

#[derive(Default)]
pub struct FactoryImpl;

impl FactoryImpl {
    pub fn new() -> Self {
        Self
    }
}

impl Factory for FactoryImpl {
    fn make_calculator(&self, measurement: Measurement) -> Box<dyn Calculator> {
        debug!("Creating calculator for {:?}", measurement);
        Box::new(crate::create(measurement))
    }
}

#[cfg(test)]
mod tests {
    use bodymetrics_model::{BodyType, Sex};

    use super::*;
    use crate::calculator::BodyMetrics;

    #[test]
    fn makes_body_metrics_calculator() {
        let measurement = Measurement::new(70.0, 170.0, 30, Sex::Male, 0).unwrap();
        let calculator = FactoryImpl::new().make_calculator(measurement);

        assert_eq!(calculator.body_type(), BodyType::LackExercise);
        assert_eq!(
            calculator.all_metrics(),
            BodyMetrics::new(measurement).all_metrics()
        );
    }
}
