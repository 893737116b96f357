use chrono::NaiveDate;
use rentroll::import::{RentRollImportError, RentRollImporter, UnitRecord};
use rentroll::occupancy::{LeaseWindow, OccupancyStatus, PortfolioSummary, UnitLeaseInfo};
use std::io::Cursor;

const RENT_ROLL: &str = "\
Unit,Required Rent,Current Tenant,Current Lease Start,Current Lease End,Incoming Tenant,Incoming Lease Start,Incoming Lease End,Maintenance Active,Declared Status
101,\"$1,500.00\",Ada Lovelace,2025-01-01,2025-12-31,,,,no,occupied
102,1200,,,,Grace Hopper,2025-09-20,2026-09-19,,vacant
103,900,Linus T,2025-03-01,2026-02-28,,,,yes,repairs
104,,Old Tenant,2024-01-01,2025-08-31,New Tenant,2025-09-01,2026-08-31,,occupied
105,750,Someone,garbage,2025-12-31,,,,,occupied
,,,,,,,,,
";

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

fn today() -> NaiveDate {
    date(2025, 9, 12)
}

fn import() -> Vec<UnitLeaseInfo> {
    RentRollImporter::from_reader(Cursor::new(RENT_ROLL)).expect("rent roll parses")
}

#[test]
fn imports_rows_and_skips_blank_units() {
    let units = import();
    let ids: Vec<&str> = units.iter().map(|unit| unit.unit_id.as_str()).collect();
    assert_eq!(ids, ["101", "102", "103", "104", "105"]);
}

#[test]
fn parses_rent_dates_and_flags() {
    let units = import();

    assert_eq!(units[0].required_rent, Some(1500.0));
    assert_eq!(
        units[0].current_lease,
        Some(LeaseWindow::new(date(2025, 1, 1), date(2025, 12, 31)))
    );
    assert!(!units[0].maintenance_active);

    assert_eq!(units[1].current_lease, None);
    assert_eq!(units[1].incoming_tenant.as_deref(), Some("Grace Hopper"));
    assert!(units[2].maintenance_active);
    assert_eq!(units[3].required_rent, None);
}

#[test]
fn unparsable_dates_disable_the_lease() {
    let units = import();
    let broken = &units[4];
    assert_eq!(
        broken.current_lease,
        Some(LeaseWindow {
            start: None,
            end: Some(date(2025, 12, 31)),
        })
    );
    assert_eq!(
        rentroll::occupancy::resolve_status(broken, today()),
        OccupancyStatus::Vacant
    );
}

#[test]
fn imported_portfolio_summary_matches_unit_logic() {
    let units = import();
    let summary = PortfolioSummary::build(&units, today(), "USD");

    assert_eq!(summary.count(OccupancyStatus::Occupied), 2);
    assert_eq!(summary.count(OccupancyStatus::Vacant), 2);
    assert_eq!(summary.count(OccupancyStatus::Repairs), 1);

    // 101 + 103 collect; 104 has no rent; 102 starts later this month
    assert_eq!(summary.revenue.monthly_revenue, 2400.0);
    assert_eq!(summary.revenue.expected_revenue, 3600.0);

    let handoff = &summary.units[3];
    assert_eq!(handoff.occupant.as_deref(), Some("New Tenant"));
    assert!(summary.units[1].status_drift.is_none());

    assert_eq!(summary.units_with_drift, 1);
    let drift = summary.units[4]
        .status_drift
        .as_ref()
        .expect("declared occupied but lease incomplete");
    assert_eq!(drift.resolved, OccupancyStatus::Vacant);
}

#[test]
fn ragged_rows_are_rejected() {
    let err = RentRollImporter::from_reader(Cursor::new("Unit,Required Rent\n101,1,2\n"))
        .expect_err("extra column fails");
    assert!(matches!(err, RentRollImportError::Csv(_)));
}

#[test]
fn missing_file_reports_io_error() {
    let err = RentRollImporter::from_path("/nonexistent/rent-roll.csv")
        .expect_err("missing file fails");
    assert!(matches!(err, RentRollImportError::Io(_)));
}

#[test]
fn json_records_convert_like_csv_rows() {
    let record: UnitRecord = serde_json::from_str(
        r#"{
            "unit_id": "201",
            "required_rent": 1000,
            "incoming_tenant": "Grace",
            "incoming_lease_start": "2025-09-12T08:30:00Z",
            "incoming_lease_end": "2026-09-11",
            "declared_status": "vacant"
        }"#,
    )
    .expect("record deserializes");

    let unit = UnitLeaseInfo::from(record);
    assert_eq!(
        rentroll::occupancy::resolve_status(&unit, today()),
        OccupancyStatus::Occupied
    );
}
