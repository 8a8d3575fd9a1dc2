//! Round state machine, snapshots, and observers.

pub mod state;
pub mod snapshot;
pub mod observer;

pub use state::{Round, RoundEnd, RoundPhase, RoundResult};
pub use snapshot::{PlayerSnapshot, RoundSnapshot};
pub use observer::{NoopObserver, RoundObserver, SnapshotLog};
