//! Rendering of estimates and price tables for the terminal

use colored::*;
use serde::{Deserialize, Serialize};

use crate::errors::Result;
use crate::estimator::{EstimateInput, EstimateResult};
use crate::pricing::{Material, PriceTable};

/// How an estimate is printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
        }
    }
}

/// Input and result together, as written in JSON output
#[derive(Debug, Serialize)]
pub struct EstimateReport<'a> {
    pub input: &'a EstimateInput,
    pub result: &'a EstimateResult,
}

/// Render in the requested format
pub fn render(
    input: &EstimateInput,
    result: &EstimateResult,
    format: OutputFormat,
    color: bool,
) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(input, result, color)),
        OutputFormat::Json => render_json(input, result),
    }
}

/// Line-item text report
pub fn render_text(input: &EstimateInput, result: &EstimateResult, color: bool) -> String {
    let heading = |text: &str| {
        if color {
            text.bold().blue().to_string()
        } else {
            text.to_string()
        }
    };

    let mut out = String::new();
    out.push_str(&heading("Materials & Labor Estimate"));
    out.push('\n');

    let summary = job_summary(input);
    if color {
        out.push_str(&summary.dimmed().to_string());
    } else {
        out.push_str(&summary);
    }
    out.push_str("\n\n");

    for material in Material::ALL {
        out.push_str(&format!(
            "  {}: {}\n",
            material.label(),
            result.materials.count(material)
        ));
    }
    out.push_str(&format!("  Material Cost: ${}\n\n", result.material_cost));

    out.push_str(&heading("Labor:"));
    out.push('\n');
    out.push_str(&format!("  Total Labor Hours: {} hrs\n", result.total_labor_hours));
    out.push_str(&format!(
        "  Labor Hours Per Person: {} hrs\n",
        result.labor_hours_per_person
    ));
    out.push_str(&format!("  Labor Cost: ${}\n\n", result.labor_cost));

    let total = format!("Estimated Total Cost: ${}", result.total_cost);
    if color {
        out.push_str(&total.bold().green().to_string());
    } else {
        out.push_str(&total);
    }
    out.push('\n');
    out
}

/// Pretty JSON of the input and result
pub fn render_json(input: &EstimateInput, result: &EstimateResult) -> Result<String> {
    let report = EstimateReport { input, result };
    Ok(serde_json::to_string_pretty(&report)?)
}

/// Unit price listing
pub fn render_prices(source: &str, prices: &PriceTable, color: bool) -> String {
    let title = format!("Unit prices ({})", source);
    let mut out = if color {
        title.bold().blue().to_string()
    } else {
        title
    };
    out.push('\n');

    for material in Material::ALL {
        out.push_str(&format!(
            "  {:<24} ${:.2}\n",
            material.label(),
            prices.unit_price(material)
        ));
    }
    out
}

fn job_summary(input: &EstimateInput) -> String {
    format!(
        "{} ft of {}\" {} | {} | {} bends | {} | crew of {} @ ${:.2}/hr",
        input.footage_feet,
        input.trade_size_inches,
        input.conduit_type,
        input.location,
        input.bend_count,
        input.complexity.describe(),
        input.crew_size,
        input.labor_rate_per_hour
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::estimator::estimate;

    #[test]
    fn test_text_report_line_items() {
        let input = EstimateInput::default();
        let result = estimate(&input);
        let text = render_text(&input, &result, false);

        assert!(text.starts_with("Materials & Labor Estimate\n"));
        assert!(text.contains("200 ft of 0.75\" EMT | Indoor | 6 bends"));
        assert!(text.contains("  Straps: 20\n"));
        assert!(text.contains("  Strap Packs (10/pack): 2\n"));
        assert!(text.contains("  Pull Boxes: 4\n"));
        assert!(text.contains("  Couplings: 19\n"));
        assert!(text.contains("  Material Cost: $107.06\n"));
        assert!(text.contains("  Total Labor Hours: 12.00 hrs\n"));
        assert!(text.contains("  Labor Hours Per Person: 6.00 hrs\n"));
        assert!(text.contains("  Labor Cost: $780.00\n"));
        assert!(text.ends_with("Estimated Total Cost: $887.06\n"));
    }

    #[test]
    fn test_line_items_follow_material_order() {
        let input = EstimateInput::default();
        let text = render_text(&input, &estimate(&input), false);
        let straps = text.find("Straps:").unwrap();
        let elbows = text.find("Elbows:").unwrap();
        let bushings = text.find("Bushings:").unwrap();
        assert!(straps < elbows && elbows < bushings);
    }

    #[test]
    fn test_json_report() {
        let input = EstimateInput::default();
        let result = estimate(&input);
        let json = render_json(&input, &result).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["result"]["materials"]["straps"], 20);
        assert_eq!(value["result"]["total_cost"], "887.06");
        assert_eq!(value["result"]["labor_cost"], "780.00");
        assert_eq!(value["input"]["location"], "indoor");
        assert_eq!(value["input"]["conduit_type"], "EMT");
        assert_eq!(value["input"]["crew_size"], 2);
    }

    #[test]
    fn test_render_dispatches_on_format() {
        let input = EstimateInput::default();
        let result = estimate(&input);
        let text = render(&input, &result, OutputFormat::Text, false).unwrap();
        let json = render(&input, &result, OutputFormat::Json, false).unwrap();
        assert!(text.contains("Estimated Total Cost"));
        assert!(json.trim_start().starts_with('{'));
    }

    #[test]
    fn test_price_listing() {
        let text = render_prices("reference", &PriceTable::reference(), false);
        assert!(text.starts_with("Unit prices (reference)\n"));
        assert!(text.contains("$10.98"));
        assert!(text.contains("$0.90"));
        assert_eq!(text.lines().count(), 8);
    }
}
