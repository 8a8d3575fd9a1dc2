//! Card rules: treasure settlement and hazard resolution.
//!
//! Both operations take the state they touch as explicit parameters. The
//! round decides *when* to call them; these functions decide *what* happens.

pub mod settlement;
pub mod hazard;

pub use settlement::{distribute, Settlement};
pub use hazard::{resolve, HazardCounts, HazardOutcome, DUPLICATE_HAZARD_THRESHOLD};
