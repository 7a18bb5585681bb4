use chrono::NaiveDate;
use thiserror::Error;

use crate::domain::profile::{BusinessProfile, LeadContact};
use crate::services::cost_breakdown::CostBreakdownEntry;
use crate::services::simulation_types::{SavingsPercentile, SimulationOutput, SimulationSummary};

#[derive(Error, Debug, PartialEq)]
pub enum ReportFormatError {
    #[error("profile has no contact; name, company and email are required for a report")]
    MissingContact,
    #[error("contact is incomplete; name, company and email are required for a report")]
    IncompleteContact,
}

pub fn format_simulation_report(output: &SimulationOutput) -> String {
    let summary = &output.summary;
    let seed = match output.seed {
        Some(value) => value.to_string(),
        None => "random".to_string(),
    };

    let mut lines = Vec::new();
    lines.push("Savings Simulation Report".to_string());
    lines.push(format!("Data source: {}", output.data_source));
    lines.push(format!("Trials: {}", summary.trial_count));
    lines.push(format!("Seed: {seed}"));
    lines.push(format!(
        "Current OpEx: ${:.2}M",
        summary.current_operating_expense
    ));
    lines.push(String::new());
    lines.push("Percentiles:".to_string());
    lines.push("Percentile | Savings % | Amount".to_string());
    lines.push("-----------|-----------|-------".to_string());
    lines.push(format_percentile_row("P10", &summary.p10));
    lines.push(format_percentile_row("P50", &summary.p50));
    lines.push(format_percentile_row("P90", &summary.p90));

    lines.join("\n")
}

fn format_percentile_row(label: &str, percentile: &SavingsPercentile) -> String {
    format!(
        "{label} | {percent:.2} | ${amount}",
        percent = percentile.percent,
        amount = format_thousands(percentile.amount)
    )
}

pub fn format_cost_breakdown(entries: &[CostBreakdownEntry]) -> String {
    let mut lines = vec![
        "Category | Amount".to_string(),
        "---------|-------".to_string(),
    ];
    for entry in entries {
        lines.push(format!("{} | ${:.2}M", entry.name, entry.value));
    }
    lines.join("\n")
}

/// Amounts are carried in millions; reports show whole thousands.
fn format_thousands(amount_millions: f64) -> String {
    format!("{:.0}K", amount_millions * 1000.0)
}

/// Plain-text analysis report handed to a lead. Refuses to render unless the
/// profile carries a complete contact.
pub fn format_analysis_report(
    profile: &BusinessProfile,
    summary: &SimulationSummary,
    generated_on: NaiveDate,
) -> Result<String, ReportFormatError> {
    let contact = complete_contact(profile)?;
    let headcount = match profile.headcount {
        Some(value) => value.to_string(),
        None => "n/a".to_string(),
    };

    let mut lines = Vec::new();
    lines.push("Small Business Cost-Saving Analysis Report".to_string());
    lines.push(format!("Company: {}", contact.company));
    lines.push(format!("Contact: {}", contact.name));
    lines.push(format!("Email: {}", contact.email));
    if let Some(phone) = contact.phone.as_deref().filter(|p| !p.trim().is_empty()) {
        lines.push(format!("Phone: {phone}"));
    }
    lines.push(String::new());
    lines.push("Business Profile:".to_string());
    lines.push(format!(
        "- Annual Revenue: ${}M",
        profile.annual_revenue_millions
    ));
    lines.push(format!(
        "- Operating Expenses: {}% of revenue (${:.1}M)",
        profile.opex_percent_of_revenue,
        profile.current_operating_expense()
    ));
    lines.push(format!("- Employee Count: {headcount}"));
    lines.push(format!(
        "- Technology Spend: {}% of OpEx",
        profile.tech_spend_percent_of_opex
    ));
    lines.push(format!("- AI/Automation Readiness: {}", profile.ai_readiness));
    lines.push(format!(
        "- Process Maturity: {}%",
        profile.process_maturity_percent
    ));
    lines.push(format!("- Outsourcing Level: {}", profile.outsourcing_level));
    lines.push(String::new());
    lines.push("Cost-Saving Projections:".to_string());
    lines.push(format_projection("Conservative (P10)", &summary.p10));
    lines.push(format_projection("Most Likely (P50)", &summary.p50));
    lines.push(format_projection("Best Case (P90)", &summary.p90));
    lines.push(String::new());
    lines.push("Next Steps:".to_string());
    lines.push("1. Book a cost-optimization session".to_string());
    lines.push("2. Review the savings levers that apply to your situation".to_string());
    lines.push("3. Develop a customized 30-day action plan".to_string());
    lines.push(String::new());
    lines.push(format!(
        "Generated by: costsim {} ({} trials)",
        env!("CARGO_PKG_VERSION"),
        summary.trial_count
    ));
    lines.push(format!("Date: {}", generated_on.format("%Y-%m-%d")));

    Ok(lines.join("\n"))
}

fn format_projection(label: &str, percentile: &SavingsPercentile) -> String {
    format!(
        "- {label}: {:.1}% savings (${}/year)",
        percentile.percent,
        format_thousands(percentile.amount)
    )
}

pub(crate) fn complete_contact(profile: &BusinessProfile) -> Result<&LeadContact, ReportFormatError> {
    let contact = profile
        .contact
        .as_ref()
        .ok_or(ReportFormatError::MissingContact)?;
    if !contact.is_complete() {
        return Err(ReportFormatError::IncompleteContact);
    }
    Ok(contact)
}

/// `<company>_cost_savings_analysis.txt`, with anything but ASCII
/// alphanumerics, `-` and `_` in the company name replaced by `_`.
pub fn default_report_file_name(company: &str) -> String {
    let company: String = company
        .trim()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();
    format!("{company}_cost_savings_analysis.txt")
}
