use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum AttendanceStatus {
    Present,
    Absent,
}

/// One worker-day. Absent days carry no times; present days always have a
/// check-in and may still be waiting on a check-out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    pub worker_id: u64,
    pub date: NaiveDate,
    pub status: AttendanceStatus,
    pub check_in: Option<NaiveTime>,
    pub check_out: Option<NaiveTime>,
}

impl AttendanceRecord {
    /// Hours between check-in and check-out; zero for absent days and for
    /// records still clocked in.
    pub fn hours_worked(&self) -> f64 {
        match (self.check_in, self.check_out) {
            (Some(check_in), Some(check_out)) => {
                let seconds = (check_out - check_in).num_seconds();
                seconds.max(0) as f64 / 3600.0
            }
            _ => 0.0,
        }
    }

    /// Present and not yet checked out.
    pub fn is_open(&self) -> bool {
        self.status == AttendanceStatus::Present && self.check_out.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    fn time(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn record(status: AttendanceStatus, check_in: Option<NaiveTime>, check_out: Option<NaiveTime>) -> AttendanceRecord {
        AttendanceRecord {
            worker_id: 1,
            date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            status,
            check_in,
            check_out,
        }
    }

    #[test]
    fn full_day_hours() {
        let r = record(AttendanceStatus::Present, Some(time(9, 0)), Some(time(17, 15)));
        assert_eq!(r.hours_worked(), 8.25);
        assert!(!r.is_open());
    }

    #[test]
    fn open_record_counts_zero_hours() {
        let r = record(AttendanceStatus::Present, Some(time(9, 0)), None);
        assert_eq!(r.hours_worked(), 0.0);
        assert!(r.is_open());
    }

    #[test]
    fn absent_day_counts_zero_hours() {
        let r = record(AttendanceStatus::Absent, None, None);
        assert_eq!(r.hours_worked(), 0.0);
        assert!(!r.is_open());
    }
}
