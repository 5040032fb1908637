use chrono::{NaiveDate, NaiveTime};
use thiserror::Error;

use crate::model::role::Role;

/// Every failure here is a caller-correctable usage error; the store is left
/// unchanged when one is returned.
#[derive(Debug, Error, PartialEq)]
pub enum WorkerTrackError {
    #[error("attendance already marked for worker {worker_id} on {date}")]
    AlreadyMarked { worker_id: u64, date: NaiveDate },

    #[error("no open attendance record for worker {worker_id} on {date}")]
    NoOpenRecord { worker_id: u64, date: NaiveDate },

    #[error("check-out {check_out} is earlier than check-in {check_in}")]
    InvalidTimeOrder {
        check_in: NaiveTime,
        check_out: NaiveTime,
    },

    #[error("view `{view}` is not available to the {role} role")]
    InvalidView { role: Role, view: String },

    #[error("username and password must be non-empty")]
    EmptyCredential,
}

pub type Result<T> = std::result::Result<T, WorkerTrackError>;
