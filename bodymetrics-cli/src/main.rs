use std::{error::Error, path::PathBuf};

use bodymetrics_calc::FactoryImpl;
use bodymetrics_cli::{config::Config, load_inputs, output, Reporter};
use bodymetrics_model::{Measurement, MeasurementInput, Sex};
use clap::Parser;
use log::info;

#[derive(Parser)]
#[command(
    name = "bodymetrics",
    version,
    about = "Body composition metrics from a scale measurement"
)]
struct Args {
    /// JSON file with an array of measurements
    #[arg(long, conflicts_with_all = ["weight", "height", "age", "sex"])]
    input: Option<PathBuf>,

    /// Weight in kg
    #[arg(long, required_unless_present = "input")]
    weight: Option<f64>,

    /// Height in cm
    #[arg(long, required_unless_present = "input")]
    height: Option<f64>,

    /// Age in years
    #[arg(long, required_unless_present = "input")]
    age: Option<u32>,

    /// male or female
    #[arg(long, required_unless_present = "input")]
    sex: Option<Sex>,

    /// Impedance in ohms, 0 if the scale did not measure it
    #[arg(long, default_value_t = 0)]
    impedance: u32,

    #[arg(long, value_enum, default_value_t = output::Format::Json)]
    format: output::Format,

    /// log4rs configuration file
    #[arg(long)]
    log_config: Option<String>,
}

impl Args {
    fn measurement_input(&self) -> Result<MeasurementInput, Box<dyn Error>> {
        Ok(MeasurementInput {
            weight: self.weight.ok_or("missing --weight")?,
            height: self.height.ok_or("missing --height")?,
            age: self.age.ok_or("missing --age")?,
            sex: self.sex.ok_or("missing --sex")?,
            impedance: self.impedance,
        })
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    let config = Config::from_env().with_log_config(args.log_config.clone());
    log4rs::init_file(&config.log_config, Default::default())?;

    let inputs = match &args.input {
        Some(path) => {
            info!("Loading measurements from {}", path.display());
            load_inputs(path)?
        }
        None => {
            let measurement = Measurement::try_from(args.measurement_input()?)?;
            vec![measurement.into()]
        }
    };

    let reporter = Reporter::new(Box::new(FactoryImpl::new()));
    let entries = reporter.run(inputs);
    println!("{}", output::render(&entries, args.format)?);

    Ok(())
}
