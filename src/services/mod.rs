//! Service layer for business logic and orchestration.
//!
//! These functions sit between the HTTP handlers and the store. Every
//! mutating operation loads the envelope, derives a new value with the
//! immutable model helpers, and writes the whole envelope back; reference
//! dates and timestamps are explicit parameters so the layer stays
//! deterministic under test.

pub mod dashboard;

pub mod delivery;

pub mod import;

pub mod route_planner;

pub use dashboard::{dashboard, BuildingProgress, Dashboard, RegisteredAlert};
pub use delivery::{mark_building, record_attempt, save_if_changed, set_apartment_status};
pub use import::{import_buildings, parse_buildings_csv, ImportSummary};
pub use route_planner::plan_route;
