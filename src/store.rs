use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveTime};
use tracing::debug;

use crate::error::{Result, WorkerTrackError};
use crate::model::attendance::{AttendanceRecord, AttendanceStatus};
use crate::payroll::Period;

/// Persistence seam. A durable backend replaces [`InMemoryStore`] behind this
/// trait without touching the calculator, directory or session code.
pub trait AttendanceStore {
    /// Record a check-in. Fails with `AlreadyMarked` if any record already
    /// exists for (worker, date).
    fn mark_present(
        &mut self,
        worker_id: u64,
        date: NaiveDate,
        check_in: NaiveTime,
    ) -> Result<AttendanceRecord>;

    /// Record a full-day absence. Same duplicate rule as `mark_present`.
    fn mark_absent(&mut self, worker_id: u64, date: NaiveDate) -> Result<AttendanceRecord>;

    /// Close the open record for (worker, date). Fails with `NoOpenRecord`
    /// when there is nothing to close and `InvalidTimeOrder` when the
    /// check-out would precede the check-in.
    fn check_out(
        &mut self,
        worker_id: u64,
        date: NaiveDate,
        check_out: NaiveTime,
    ) -> Result<AttendanceRecord>;

    /// Records for one worker inside the period, newest date first. Stable
    /// across repeated calls absent mutation.
    fn history(&self, worker_id: u64, period: &Period) -> Vec<AttendanceRecord>;

    /// Whether a present record exists for (worker, today); a record that has
    /// already checked out still counts.
    fn is_present_today(&self, worker_id: u64, today: NaiveDate) -> bool;

    /// Snapshot of every record inside the period, for the calculator.
    fn records_in(&self, period: &Period) -> Vec<AttendanceRecord>;
}

#[derive(Debug, Default)]
pub struct InMemoryStore {
    records: BTreeMap<(u64, NaiveDate), AttendanceRecord>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn insert(&mut self, record: AttendanceRecord) -> Result<AttendanceRecord> {
        let key = (record.worker_id, record.date);
        if self.records.contains_key(&key) {
            return Err(WorkerTrackError::AlreadyMarked {
                worker_id: record.worker_id,
                date: record.date,
            });
        }
        self.records.insert(key, record.clone());
        Ok(record)
    }
}

impl AttendanceStore for InMemoryStore {
    fn mark_present(
        &mut self,
        worker_id: u64,
        date: NaiveDate,
        check_in: NaiveTime,
    ) -> Result<AttendanceRecord> {
        debug!(worker_id, %date, %check_in, "marking present");
        self.insert(AttendanceRecord {
            worker_id,
            date,
            status: AttendanceStatus::Present,
            check_in: Some(check_in),
            check_out: None,
        })
    }

    fn mark_absent(&mut self, worker_id: u64, date: NaiveDate) -> Result<AttendanceRecord> {
        debug!(worker_id, %date, "marking absent");
        self.insert(AttendanceRecord {
            worker_id,
            date,
            status: AttendanceStatus::Absent,
            check_in: None,
            check_out: None,
        })
    }

    fn check_out(
        &mut self,
        worker_id: u64,
        date: NaiveDate,
        check_out: NaiveTime,
    ) -> Result<AttendanceRecord> {
        let record = self
            .records
            .get_mut(&(worker_id, date))
            .filter(|r| r.is_open())
            .ok_or(WorkerTrackError::NoOpenRecord { worker_id, date })?;

        // is_open guarantees a check-in is present
        let check_in = record
            .check_in
            .ok_or(WorkerTrackError::NoOpenRecord { worker_id, date })?;
        if check_out < check_in {
            return Err(WorkerTrackError::InvalidTimeOrder {
                check_in,
                check_out,
            });
        }

        debug!(worker_id, %date, %check_out, "checking out");
        record.check_out = Some(check_out);
        Ok(record.clone())
    }

    fn history(&self, worker_id: u64, period: &Period) -> Vec<AttendanceRecord> {
        self.records
            .range((worker_id, period.start)..=(worker_id, period.end))
            .rev()
            .map(|(_, record)| record.clone())
            .collect()
    }

    fn is_present_today(&self, worker_id: u64, today: NaiveDate) -> bool {
        self.records
            .get(&(worker_id, today))
            .is_some_and(|r| r.status == AttendanceStatus::Present)
    }

    fn records_in(&self, period: &Period) -> Vec<AttendanceRecord> {
        self.records
            .values()
            .filter(|r| period.contains(r.date))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    fn time(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn january() -> Period {
        Period {
            start: date(1),
            end: date(31),
            scheduled_days: 20,
        }
    }

    #[test]
    fn mark_then_check_out_succeeds_exactly_once() {
        let mut store = InMemoryStore::new();

        let record = store.mark_present(1, date(15), time(9, 0)).unwrap();
        assert_eq!(record.status, AttendanceStatus::Present);
        assert!(record.is_open());

        assert_eq!(
            store.mark_present(1, date(15), time(9, 30)),
            Err(WorkerTrackError::AlreadyMarked {
                worker_id: 1,
                date: date(15)
            })
        );

        let closed = store.check_out(1, date(15), time(17, 0)).unwrap();
        assert_eq!(closed.hours_worked(), 8.0);

        // record is no longer open, so a second check-out has nothing to close
        assert_eq!(
            store.check_out(1, date(15), time(18, 0)),
            Err(WorkerTrackError::NoOpenRecord {
                worker_id: 1,
                date: date(15)
            })
        );
    }

    #[test]
    fn check_out_without_mark_is_rejected() {
        let mut store = InMemoryStore::new();
        assert_eq!(
            store.check_out(7, date(10), time(17, 0)),
            Err(WorkerTrackError::NoOpenRecord {
                worker_id: 7,
                date: date(10)
            })
        );
    }

    #[test]
    fn check_out_before_check_in_leaves_record_open() {
        let mut store = InMemoryStore::new();
        store.mark_present(1, date(15), time(9, 0)).unwrap();

        assert_eq!(
            store.check_out(1, date(15), time(8, 0)),
            Err(WorkerTrackError::InvalidTimeOrder {
                check_in: time(9, 0),
                check_out: time(8, 0)
            })
        );

        // the rejected check-out must not have mutated the record
        let closed = store.check_out(1, date(15), time(17, 0)).unwrap();
        assert_eq!(closed.check_out, Some(time(17, 0)));
    }

    #[test]
    fn absent_day_blocks_both_marking_and_check_out() {
        let mut store = InMemoryStore::new();
        let record = store.mark_absent(3, date(13)).unwrap();
        assert_eq!(record.check_in, None);
        assert_eq!(record.check_out, None);

        assert_eq!(
            store.mark_present(3, date(13), time(9, 0)),
            Err(WorkerTrackError::AlreadyMarked {
                worker_id: 3,
                date: date(13)
            })
        );
        assert_eq!(
            store.check_out(3, date(13), time(17, 0)),
            Err(WorkerTrackError::NoOpenRecord {
                worker_id: 3,
                date: date(13)
            })
        );
    }

    #[test]
    fn history_is_date_descending_and_restartable() {
        let mut store = InMemoryStore::new();
        store.mark_present(1, date(12), time(8, 45)).unwrap();
        store.mark_present(1, date(15), time(9, 0)).unwrap();
        store.mark_absent(1, date(13)).unwrap();
        store.mark_present(1, date(14), time(9, 15)).unwrap();
        // another worker's record must not leak in
        store.mark_present(2, date(14), time(9, 0)).unwrap();

        let history = store.history(1, &january());
        let dates: Vec<NaiveDate> = history.iter().map(|r| r.date).collect();
        assert_eq!(dates, vec![date(15), date(14), date(13), date(12)]);

        assert_eq!(store.history(1, &january()), history);
    }

    #[test]
    fn history_respects_period_bounds() {
        let mut store = InMemoryStore::new();
        store.mark_present(1, date(5), time(9, 0)).unwrap();
        store.mark_present(1, date(20), time(9, 0)).unwrap();

        let week = Period {
            start: date(1),
            end: date(7),
            scheduled_days: 5,
        };
        let history = store.history(1, &week);
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].date, date(5));
    }

    #[test]
    fn present_today_tracks_status_not_checkout() {
        let mut store = InMemoryStore::new();
        store.mark_present(1, date(16), time(8, 45)).unwrap();
        store.mark_absent(3, date(16)).unwrap();

        assert!(store.is_present_today(1, date(16)));
        assert!(!store.is_present_today(3, date(16)));
        assert!(!store.is_present_today(99, date(16)));

        store.check_out(1, date(16), time(17, 0)).unwrap();
        assert!(store.is_present_today(1, date(16)));
    }
}
