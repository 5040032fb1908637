use tracing::debug;

use crate::model::worker::Worker;

/// Case-insensitive substring filter over worker name and department. Input
/// order is preserved; an empty query passes everything through.
pub fn filter_workers<'a>(workers: &'a [Worker], query: &str) -> Vec<&'a Worker> {
    if query.is_empty() {
        return workers.iter().collect();
    }
    let needle = query.to_lowercase();
    workers
        .iter()
        .filter(|w| {
            w.name.to_lowercase().contains(&needle)
                || w.department.to_lowercase().contains(&needle)
        })
        .collect()
}

/// Roster of known workers plus the admin-side edits on it. Rate and
/// department are the only fields that change after creation.
#[derive(Debug, Default)]
pub struct WorkerDirectory {
    workers: Vec<Worker>,
}

impl WorkerDirectory {
    pub fn new(workers: Vec<Worker>) -> Self {
        Self { workers }
    }

    pub fn workers(&self) -> &[Worker] {
        &self.workers
    }

    pub fn get(&self, worker_id: u64) -> Option<&Worker> {
        self.workers.iter().find(|w| w.id == worker_id)
    }

    pub fn filter(&self, query: &str) -> Vec<&Worker> {
        filter_workers(&self.workers, query)
    }

    /// Returns false when the worker is unknown or the rate is negative.
    pub fn update_rate(&mut self, worker_id: u64, rate: f64) -> bool {
        if rate < 0.0 {
            return false;
        }
        match self.workers.iter_mut().find(|w| w.id == worker_id) {
            Some(worker) => {
                debug!(worker_id, rate, "hourly rate updated");
                worker.rate = rate;
                true
            }
            None => false,
        }
    }

    /// Returns false when the worker is unknown.
    pub fn update_department(&mut self, worker_id: u64, department: &str) -> bool {
        match self.workers.iter_mut().find(|w| w.id == worker_id) {
            Some(worker) => {
                debug!(worker_id, department, "department updated");
                worker.department = department.to_string();
                true
            }
            None => false,
        }
    }
}
