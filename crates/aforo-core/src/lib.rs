//! Core domain logic for library access tracking.
//!
//! This crate turns an ordered log of `identifier;ENTRADA|SALIDA` records into
//! per-user presence state and answers the report queries:
//! - Records: parsing raw register lines into events
//! - Users: the inside/outside state machine and entry counter
//! - Registry: all users plus the inside / activity / most-entries queries
//!
//! No I/O happens here; callers feed lines in and decide where reports go.

pub mod event_kind;
pub mod record;
mod registry;
pub mod report;
pub mod types;
mod user;

pub use event_kind::{EventKind, UnknownEventKind};
pub use record::{Record, RecordError, parse_record};
pub use registry::{LoadStats, Registry};
pub use report::{EntryTally, Report};
pub use types::{UserId, ValidationError};
pub use user::{Transition, UserState};
