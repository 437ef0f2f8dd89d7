//! Join check between a map file and the state records.

use anyhow::Context;
use gdv_data::{Dataset, Geography, JoinReport};
use log::info;

/// Human-readable join report, one line per unmatched key.
pub fn render_report(report: &JoinReport) -> String {
    let mut out = format!(
        "matched: {}\nfeatures without record: {}\nrecords without feature: {}\n",
        report.matched.len(),
        report.features_without_record.len(),
        report.records_without_feature.len()
    );
    for key in &report.features_without_record {
        out.push_str(&format!("  no record for feature {} (drawn with rate 0)\n", key.display_name()));
    }
    for key in &report.records_without_feature {
        out.push_str(&format!("  no feature for record {}\n", key.display_name()));
    }
    out
}

/// Load both files, print the join report and, with `strict`, fail on any
/// unmatched key.
pub fn run_validate(geojson: &str, states_csv: &str, name_property: &str, strict: bool) -> anyhow::Result<()> {
    let geojson_text = std::fs::read_to_string(geojson).with_context(|| format!("reading {}", geojson))?;
    let states_text = std::fs::read_to_string(states_csv).with_context(|| format!("reading {}", states_csv))?;

    let geography = Geography::from_geojson(&geojson_text, name_property)
        .with_context(|| format!("loading map {}", geojson))?;
    let dataset = Dataset::from_csv(&states_text, "").with_context(|| format!("loading records {}", states_csv))?;
    info!(
        "Validating {} features against {} state records",
        geography.features().len(),
        dataset.states().len()
    );

    let report = JoinReport::build(&geography, &dataset);
    report.log();
    print!("{}", render_report(&report));

    if strict && !report.is_complete() {
        anyhow::bail!(
            "{} features and {} records are unmatched",
            report.features_without_record.len(),
            report.records_without_feature.len()
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use gdv_data::StateKey;

    #[test]
    fn test_render_report() {
        let report = JoinReport {
            matched: vec![StateKey::from_name("Ohio")],
            features_without_record: vec![StateKey::from_name("Puerto Rico")],
            records_without_feature: vec![],
        };
        let text = render_report(&report);
        assert!(text.starts_with("matched: 1\n"));
        assert!(text.contains("no record for feature Puerto Rico"));
        assert!(text.contains("records without feature: 0"));
    }
}
