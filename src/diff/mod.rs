//! Snapshot comparison and diffing
//!
//! [`compare_snapshots`] classifies keys through a [`ChangeHandler`];
//! [`snapshot_diff`] plugs in a handler that renders each contract as a
//! markdown table row.

pub mod compare;
pub mod snapshot_diff;

pub use compare::{classify, compare_snapshots, ChangeHandler, Classification};
pub use snapshot_diff::{
    snapshot_diff, DiffResult, Direction, FieldDelta, FieldVerdict, Percent, Status, Verdict,
};
