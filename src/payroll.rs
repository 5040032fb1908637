//! Pure payroll aggregation over worker and attendance snapshots. Nothing in
//! here mutates or caches; every summary is recomputed from its inputs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::model::attendance::{AttendanceRecord, AttendanceStatus};
use crate::model::worker::Worker;
use crate::store::AttendanceStore;

/// Inclusive date range a summary is computed over.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Period {
    pub start: NaiveDate,
    pub end: NaiveDate,
    /// Working days scheduled in this period, used for the attendance-rate
    /// display figure.
    pub scheduled_days: u32,
}

impl Period {
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PayrollSummary {
    pub worker_id: u64,
    pub days_worked: u32,
    pub total_hours: f64,
    pub total_pay: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrgSummary {
    pub total_workers: u32,
    pub present_today: u32,
    pub total_payroll: f64,
    pub average_hours: f64,
}

/// Round a currency amount to its minor unit (two decimals), ties to even so
/// repeated payroll runs carry no systematic bias.
pub fn round_to_minor_unit(amount: f64) -> f64 {
    let scaled = amount * 100.0;
    let floor = scaled.floor();
    let rounded = if scaled - floor == 0.5 {
        if (floor as i64) % 2 == 0 { floor } else { floor + 1.0 }
    } else {
        scaled.round()
    };
    rounded / 100.0
}

pub fn summarize_worker(
    worker: &Worker,
    records: &[AttendanceRecord],
    period: &Period,
) -> PayrollSummary {
    let mut days_worked = 0u32;
    let mut total_hours = 0.0f64;

    for record in records {
        if record.worker_id != worker.id || !period.contains(record.date) {
            continue;
        }
        if record.status == AttendanceStatus::Present {
            days_worked += 1;
            total_hours += record.hours_worked();
        }
    }

    PayrollSummary {
        worker_id: worker.id,
        days_worked,
        total_hours,
        total_pay: round_to_minor_unit(total_hours * worker.rate),
    }
}

pub fn summarize_organization<S: AttendanceStore + ?Sized>(
    workers: &[Worker],
    store: &S,
    period: &Period,
    today: NaiveDate,
) -> OrgSummary {
    // explicit zero branch: an empty roster must not divide by zero
    if workers.is_empty() {
        return OrgSummary {
            total_workers: 0,
            present_today: 0,
            total_payroll: 0.0,
            average_hours: 0.0,
        };
    }

    let records = store.records_in(period);
    let mut total_payroll = 0.0f64;
    let mut hours_sum = 0.0f64;
    let mut present_today = 0u32;

    for worker in workers {
        let summary = summarize_worker(worker, &records, period);
        total_payroll += summary.total_pay;
        hours_sum += summary.total_hours;
        if store.is_present_today(worker.id, today) {
            present_today += 1;
        }
    }

    OrgSummary {
        total_workers: workers.len() as u32,
        present_today,
        total_payroll: round_to_minor_unit(total_payroll),
        average_hours: hours_sum / workers.len() as f64,
    }
}

/// Informational display figure, rounded half up. Zero when nothing was
/// scheduled.
pub fn attendance_rate_pct(days_worked: u32, scheduled_days: u32) -> u32 {
    if scheduled_days == 0 {
        return 0;
    }
    let pct = days_worked as f64 / scheduled_days as f64 * 100.0;
    (pct + 0.5).floor() as u32
}
