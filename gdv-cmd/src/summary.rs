//! Plain-text summary of what the two charts will show.

use crate::config::ChartConfig;
use anyhow::Context;
use gdv_chart::bar_chart::bar_data;
use gdv_chart::legend::bin_label;
use gdv_chart::scale::{extent, ThresholdScale};
use gdv_data::Dataset;
use log::info;

/// Per-state rates (highest first), the color classes and the bar order.
pub fn render_summary(dataset: &Dataset, config: &ChartConfig) -> String {
    let mut out = String::new();

    let mut states: Vec<_> = dataset.states().iter().collect();
    states.sort_by(|a, b| b.rate_per_100k().total_cmp(&a.rate_per_100k()));
    out.push_str("state,count,male,female,population,per_100k\n");
    for r in &states {
        out.push_str(&format!(
            "{},{},{},{},{},{:.2}\n",
            r.state.display_name(),
            r.count,
            r.male_count,
            r.female_count(),
            r.population,
            r.rate_per_100k()
        ));
    }

    let rates = dataset.rates();
    let scale = ThresholdScale::from_quantiles(&rates, config.map.palette.clone());
    let (lo, hi) = extent(&rates).unwrap_or((0.0, 0.0));
    let thresholds: Vec<String> = scale.thresholds().iter().map(|t| format!("{:.2}", t)).collect();
    out.push_str(&format!("\nthresholds: {}\n", thresholds.join(", ")));

    let mut breaks = vec![lo];
    breaks.extend_from_slice(scale.thresholds());
    breaks.push(hi);
    let classes = scale.outputs().len();
    for (i, color) in scale.outputs().iter().enumerate() {
        out.push_str(&format!(
            "  {} {}\n",
            color,
            bin_label(breaks[i], breaks[i + 1], i + 1 == classes)
        ));
    }

    out.push_str(&format!("\n{}:\n", config.bar_chart.title));
    for (rank, bar) in bar_data(dataset).iter().enumerate() {
        out.push_str(&format!(
            "{:>3}. {} {} (male {}, female {})\n",
            rank + 1,
            bar.state.display_name(),
            bar.total,
            bar.male,
            bar.female
        ));
    }

    if !dataset.cities().is_empty() {
        let mut cities: Vec<_> = dataset.cities().iter().collect();
        cities.sort_by(|a, b| b.count.cmp(&a.count));
        out.push_str("\ncities:\n");
        for city in cities {
            out.push_str(&format!("  {} {}\n", city.city, city.count));
        }
    }

    out
}

pub fn run_summary(states_csv: &str, cities_csv: Option<&str>, config: Option<&str>) -> anyhow::Result<()> {
    let config = ChartConfig::load(config)?;
    let states_text = std::fs::read_to_string(states_csv).with_context(|| format!("reading {}", states_csv))?;
    let cities_text = match cities_csv {
        Some(path) => std::fs::read_to_string(path).with_context(|| format!("reading {}", path))?,
        None => String::new(),
    };
    let dataset = Dataset::from_csv(&states_text, &cities_text).context("loading records")?;
    info!("Summarizing {} states", dataset.states().len());

    print!("{}", render_summary(&dataset, &config));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use gdv_data::StateRecord;

    #[test]
    fn test_summary_sections() {
        let dataset = Dataset::new(
            vec![
                StateRecord::new("Ohio", 100, 70, 1_000_000),
                StateRecord::new("New York", 300, 200, 2_000_000),
                StateRecord::new("Iowa", 10, 9, 1_000_000),
            ],
            vec![],
        )
        .unwrap();
        let text = render_summary(&dataset, &ChartConfig::default());

        assert!(text.contains("Ohio,100,70,30,1000000,10.00\n"));
        // highest rate first
        assert!(text.find("New York,300").unwrap() < text.find("Ohio,100").unwrap());
        assert!(text.contains("thresholds: "));
        assert!(text.contains("per 100k"));
        assert!(text.contains("  1. New York 300 (male 200, female 100)"));
        assert!(!text.contains("cities:"));
    }
}
