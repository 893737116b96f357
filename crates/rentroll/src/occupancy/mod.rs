//! Pure occupancy and revenue resolution.
//!
//! Every function takes the reference day as an argument; nothing in here
//! reads the clock.

mod classifier;
pub mod dates;
pub mod domain;
pub mod portfolio;
mod resolver;
mod revenue;

pub use classifier::{classify_lease, classify_window};
pub use domain::{LeaseStatus, LeaseWindow, OccupancyStatus, UnitLeaseInfo};
pub use portfolio::PortfolioSummary;
pub use resolver::{active_occupant, has_active_tenant, is_lease_active_on, resolve_status};
pub use revenue::{
    compute_unit_revenue, incoming_starts_this_month, portfolio_revenue, UnitRevenue,
};
