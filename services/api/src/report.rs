use chrono::{Local, NaiveDate};
use clap::Args;
use rentroll::config::PortfolioConfig;
use rentroll::error::AppError;
use rentroll::import::RentRollImporter;
use rentroll::occupancy::PortfolioSummary;
use std::fmt::Write as _;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct PortfolioReportArgs {
    /// Rent-roll CSV export to summarize
    #[arg(long)]
    pub(crate) rent_roll: PathBuf,
    /// Reference date for the report (defaults to today)
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) today: Option<NaiveDate>,
    /// Include one line per unit in the output
    #[arg(long)]
    pub(crate) list_units: bool,
}

pub(crate) fn run_portfolio_report(args: PortfolioReportArgs) -> Result<(), AppError> {
    let PortfolioReportArgs {
        rent_roll,
        today,
        list_units,
    } = args;

    let today = today.unwrap_or_else(|| Local::now().date_naive());
    let PortfolioConfig { currency } = PortfolioConfig::load()?;

    let units = RentRollImporter::from_path(&rent_roll)?;
    let summary = PortfolioSummary::build(&units, today, currency);
    print!("{}", render_portfolio_report(&summary, list_units));

    Ok(())
}

pub(crate) fn render_portfolio_report(summary: &PortfolioSummary, list_units: bool) -> String {
    let mut out = String::new();
    let currency = &summary.revenue.currency;

    let _ = writeln!(out, "Portfolio summary as of {}", summary.as_of);
    let _ = writeln!(
        out,
        "Units: {} ({:.1}% occupied)",
        summary.total_units,
        summary.occupancy_rate * 100.0
    );

    let _ = writeln!(out, "\nOccupancy");
    for entry in &summary.status_counts {
        let _ = writeln!(out, "- {}: {}", entry.status_label, entry.units);
    }

    let _ = writeln!(out, "\nRevenue ({currency})");
    let _ = writeln!(out, "- Monthly: {:.2}", summary.revenue.monthly_revenue);
    let _ = writeln!(out, "- Expected: {:.2}", summary.revenue.expected_revenue);
    let _ = writeln!(out, "- Gap: {:.2}", summary.revenue.revenue_gap);

    if summary.units_with_drift == 0 {
        let _ = writeln!(out, "\nStatus drift: none");
    } else {
        let _ = writeln!(out, "\nStatus drift");
        for unit in &summary.units {
            if let Some(drift) = &unit.status_drift {
                let _ = writeln!(
                    out,
                    "- {}: declared {}, resolved {}",
                    unit.unit_id, drift.declared_label, drift.resolved_label
                );
            }
        }
    }

    if list_units {
        let _ = writeln!(out, "\nUnits");
        for unit in &summary.units {
            let occupant = unit.occupant.as_deref().unwrap_or("-");
            let _ = writeln!(
                out,
                "- {} | {} | {} | monthly {:.2} | expected {:.2}",
                unit.unit_id,
                unit.status_label,
                occupant,
                unit.monthly_revenue,
                unit.expected_revenue
            );
        }
    }

    out
}
