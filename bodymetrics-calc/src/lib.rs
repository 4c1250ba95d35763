pub mod bounds;
pub mod calculator;
pub mod factory;

pub use calculator::{BodyMetrics, Calculator, MockCalculator};
pub use factory::{Factory, FactoryImpl, MockFactory};

use bodymetrics_model::Measurement;

pub fn create(measurement: Measurement) -> impl Calculator {
    BodyMetrics::new(measurement)
}
