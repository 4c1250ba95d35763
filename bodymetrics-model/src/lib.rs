pub mod error;
pub mod measurement;
pub mod metric;

pub use error::ValidationError;
pub use measurement::{Measurement, MeasurementInput, Sex};
pub use metric::{BodyType, Direction, FatMassToIdeal, Level, Metric, MetricReport, MetricValue};
