use bodymetrics_model::{Direction, MetricValue};
use clap::ValueEnum;
use itertools::Itertools;

use crate::Entry;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, ValueEnum)]
pub enum Format {
    #[default]
    Json,
    Text,
}

pub fn render(entries: &[Entry], format: Format) -> Result<String, serde_json::Error> {
    match format {
        Format::Json => serde_json::to_string_pretty(entries),
        Format::Text => Ok(entries.iter().map(render_line).join("\n")),
    }
}

fn render_line(entry: &Entry) -> String {
    let measurement = &entry.measurement;
    let direction = match entry.fat_mass_to_ideal.direction {
        Direction::ToLose => "to_lose",
        Direction::ToGain => "to_gain",
    };

    format!(
        "sex={} weight={} height={} age={} impedance={} {} fat_mass_to_ideal={}:{}",
        measurement.sex(),
        measurement.weight(),
        measurement.height_cm(),
        measurement.age(),
        measurement.impedance(),
        entry
            .metrics
            .iter()
            .map(|(metric, value)| format!("{}={}", metric, render_value(value)))
            .join(" "),
        direction,
        entry.fat_mass_to_ideal.mass
    )
}

fn render_value(value: MetricValue) -> String {
    match value {
        MetricValue::Decimal(x) => x.to_string(),
        MetricValue::Category(x) => x.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use bodymetrics_model::{FatMassToIdeal, Measurement, Metric, MetricReport, Sex};

    use super::*;

    fn entry() -> Entry {
        let mut metrics = MetricReport::new();
        metrics.insert(Metric::Bmi, MetricValue::Decimal(24.2));
        metrics.insert(Metric::Bmr, MetricValue::Decimal(1618.0));
        metrics.insert(Metric::BodyType, MetricValue::Category(6));

        Entry {
            measurement: Measurement::new(70.0, 170.0, 30, Sex::Male, 450).unwrap(),
            metrics,
            fat_mass_to_ideal: FatMassToIdeal {
                direction: Direction::ToGain,
                mass: 7.44,
            },
        }
    }

    #[test]
    fn renders_text_line() {
        assert_eq!(
            render(&[entry()], Format::Text).unwrap(),
            "sex=male weight=70 height=170 age=30 impedance=450 \
             bmi=24.2 bmr=1618 body_type=6 fat_mass_to_ideal=to_gain:7.44"
        );
    }

    #[test]
    fn renders_json() {
        let json: serde_json::Value =
            serde_json::from_str(&render(&[entry()], Format::Json).unwrap()).unwrap();

        assert_eq!(
            json,
            serde_json::json!([{
                "measurement": {
                    "weight": 70.0,
                    "height": 170.0,
                    "age": 30,
                    "sex": "male",
                    "impedance": 450
                },
                "metrics": {"bmi": 24.2, "bmr": 1618.0, "body_type": 6},
                "fat_mass_to_ideal": {"direction": "to_gain", "mass": 7.44}
            }])
        );
    }
}
