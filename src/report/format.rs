//! Formatted terminal output.
//!
//! Formatting lives here so the statistics code stays free of presentation
//! concerns. Returns are already in percent; p-values are probabilities and
//! are scaled to percent for display.

use crate::domain::Granularity;
use crate::report::{GranularityReport, Report};

/// Format the whole report.
pub fn format_report(report: &Report) -> String {
    let mut out = String::new();

    out.push_str("=== rstats - decay-weighted return statistics ===\n");
    out.push_str(&format!(
        "As-of: {} | samples: {}\n",
        report.as_of, report.n_samples
    ));

    for section in &report.sections {
        out.push('\n');
        out.push_str(&format_section(section, report.confidence));
    }

    out
}

fn format_section(section: &GranularityReport, confidence: f64) -> String {
    let label = section.granularity.label();
    let mut out = String::new();

    out.push_str(&format!(
        "[{label}] history n={} | decay={}\n",
        section.history.len(),
        section.decay
    ));
    out.push_str(&format!(
        "Most recent {label} return ({}): {:.5}%\n",
        section.latest.date, section.latest.return_pct
    ));
    out.push_str(&format!(
        "Mean and stdev of {label} return: {:.5}%, {:.5}%\n",
        section.moments.mean, section.moments.stdev
    ));

    if let Some(p) = section.p_value {
        out.push_str(&format!("p-value of most recent {label} return: {:.5}%\n", p * 100.0));
    }

    if section.granularity == Granularity::Monthly {
        if let Some(ratio) = section.annualized_ratio {
            out.push_str(&format!("Annualized mean/stdev: {ratio:.5}\n"));
        }
        if let Some(var) = section.value_at_risk {
            out.push_str(&format!(
                "{:.0}% VaR of {label} return: {var:.5}%\n",
                confidence * 100.0
            ));
        }
    }

    out
}
