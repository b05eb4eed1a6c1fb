//! Points strategy planner: maps rewards cards, airline networks, hotel programs,
//! and home airports to a prioritized list of point-transfer recommendations.

pub mod catalog;
pub mod config;
pub mod error;
pub mod export;
pub mod plan;
pub mod selection;
pub mod telemetry;

pub use export::{ExportFormat, ExportPayload, PlanDocument};
pub use plan::{generate_plan, PlanBlock, TransferPath};
pub use selection::{Selection, SelectionField, SelectionStore};
