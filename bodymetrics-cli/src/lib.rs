pub mod config;
pub mod output;

use std::{
    fs::File,
    io::{self, BufReader, Read},
    path::Path,
};

use bodymetrics_calc::Factory;
use bodymetrics_model::{FatMassToIdeal, Measurement, MeasurementInput, MetricReport};
use log::{debug, error, info};
use serde::Serialize;

#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("cannot read {path}: {source}")]
    Read { path: String, source: io::Error },
    #[error("invalid measurement data: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Metrics computed for one valid measurement.
#[derive(Debug, PartialEq, Serialize)]
pub struct Entry {
    pub measurement: Measurement,
    pub metrics: MetricReport,
    pub fat_mass_to_ideal: FatMassToIdeal,
}

pub fn parse_inputs<R: Read>(reader: R) -> Result<Vec<MeasurementInput>, InputError> {
    Ok(serde_json::from_reader(reader)?)
}

pub fn load_inputs(path: &Path) -> Result<Vec<MeasurementInput>, InputError> {
    let file = File::open(path).map_err(|source| InputError::Read {
        path: path.display().to_string(),
        source,
    })?;
    parse_inputs(BufReader::new(file))
}

pub struct Reporter {
    factory: Box<dyn Factory>,
}

impl Reporter {
    pub fn new(factory: Box<dyn Factory>) -> Self {
        Self { factory }
    }

    pub fn run(&self, inputs: Vec<MeasurementInput>) -> Vec<Entry> {
        info!("Processing {} measurements", inputs.len());

        let mut entries = Vec::new();
        for (i, input) in inputs.into_iter().enumerate() {
            let measurement = match Measurement::try_from(input) {
                Ok(measurement) => measurement,
                Err(e) => {
                    error!("Invalid measurement #{}, skipping: {}", i, e);
                    continue;
                }
            };

            info!("Computing metrics for measurement #{}", i);
            let calculator = self.factory.make_calculator(measurement);
            let metrics = calculator.all_metrics();
            let fat_mass_to_ideal = calculator.fat_mass_to_ideal();
            debug!("Metrics: {:?}", metrics);
            debug!("Fat mass to ideal: {:?}", fat_mass_to_ideal);

            entries.push(Entry {
                measurement,
                metrics,
                fat_mass_to_ideal,
            });
        }

        info!("Produced {} reports", entries.len());
        entries
    }
}
