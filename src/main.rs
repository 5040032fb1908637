use anyhow::Result;
use chrono::{NaiveDate, NaiveTime};
use dotenvy::dotenv;
use tracing::{info, warn};
use tracing_appender::rolling;

use workertrack::config::Config;
use workertrack::directory::WorkerDirectory;
use workertrack::model::role::Role;
use workertrack::model::worker::Worker;
use workertrack::payroll::{self, Period};
use workertrack::session::Session;
use workertrack::store::{AttendanceStore, InMemoryStore};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn time(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

fn seed_workers() -> Vec<Worker> {
    [
        (1, "Worker_X7K9", "Production", 400.0),
        (2, "User_M3R8", "Quality Control", 440.0),
        (3, "Emp_Q5T2", "Packaging", 360.0),
        (4, "Staff_L9W4", "Maintenance", 500.0),
        (5, "Team_R6P1", "Logistics", 420.0),
    ]
    .into_iter()
    .map(|(id, name, department, rate)| Worker {
        id,
        name: name.to_string(),
        department: department.to_string(),
        rate,
    })
    .collect()
}

/// Last week's records for worker 1 plus everyone's check-ins for today.
fn seed_attendance(store: &mut InMemoryStore, today: NaiveDate) -> Result<()> {
    store.mark_present(1, date(2024, 1, 12), time(8, 45))?;
    store.check_out(1, date(2024, 1, 12), time(17, 0))?;
    store.mark_absent(1, date(2024, 1, 13))?;
    store.mark_present(1, date(2024, 1, 14), time(9, 15))?;
    store.check_out(1, date(2024, 1, 14), time(17, 30))?;
    store.mark_present(1, date(2024, 1, 15), time(9, 0))?;
    store.check_out(1, date(2024, 1, 15), time(17, 0))?;

    store.mark_present(2, today, time(9, 0))?;
    store.mark_absent(3, today)?;
    store.mark_present(4, today, time(8, 30))?;
    store.mark_present(5, today, time(9, 15))?;
    Ok(())
}

fn main() -> Result<()> {
    dotenv().ok();

    let config = Config::from_env();

    // Rolling daily log
    let file_appender = rolling::daily(&config.log_dir, "app.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_target(false)
        .with_level(true)
        .pretty()
        .init();

    info!("WorkerTrack demo starting...");

    let today = date(2024, 1, 16);
    let period = Period {
        start: date(2024, 1, 1),
        end: date(2024, 1, 31),
        scheduled_days: config.scheduled_days,
    };

    let mut directory = WorkerDirectory::new(seed_workers());
    let mut store = InMemoryStore::new();
    seed_attendance(&mut store, today)?;

    // ---------- Worker session ----------
    let mut worker_session = Session::login(Role::Worker, "demo_user", "password")?;

    store.mark_present(1, today, time(8, 45))?;
    if let Err(e) = store.mark_present(1, today, time(9, 30)) {
        warn!(error = %e, "duplicate mark rejected");
    }
    store.check_out(1, today, time(17, 0))?;

    worker_session.set_view_str("history")?;
    let history = store.history(1, &period);
    println!("--- attendance history (worker 1) ---");
    println!("{}", serde_json::to_string_pretty(&history)?);

    let me = directory.get(1).expect("seeded worker");
    let summary = payroll::summarize_worker(me, &store.records_in(&period), &period);
    let rate_pct = payroll::attendance_rate_pct(summary.days_worked, period.scheduled_days);
    println!("--- monthly summary (worker 1, attendance {rate_pct}%) ---");
    println!("{}", serde_json::to_string_pretty(&summary)?);

    if let Err(e) = worker_session.set_view_str("dashboard") {
        warn!(error = %e, "view rejected");
    }
    worker_session.logout();

    // ---------- Admin session ----------
    let mut admin_session = Session::login(Role::Admin, "admin", "admin123")?;

    let org = payroll::summarize_organization(directory.workers(), &store, &period, today);
    println!("--- organization dashboard ---");
    println!("{}", serde_json::to_string_pretty(&org)?);

    admin_session.set_view_str("workers")?;
    let matches = directory.filter("qual");
    println!("--- search: \"qual\" ---");
    println!("{}", serde_json::to_string_pretty(&matches)?);

    if admin_session.is_admin() {
        directory.update_rate(3, 380.0);
        directory.update_department(5, "Dispatch");
    }
    admin_session.logout();

    info!("demo complete");
    Ok(())
}
