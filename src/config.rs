use dotenvy::dotenv;
use std::env;

#[derive(Clone)]
pub struct Config {
    /// Working days scheduled in the current period.
    pub scheduled_days: u32,
    pub log_dir: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        Self {
            scheduled_days: env::var("WT_SCHEDULED_DAYS")
                .unwrap_or_else(|_| "20".to_string())
                .parse()
                .unwrap(),
            log_dir: env::var("WT_LOG_DIR").unwrap_or_else(|_| "logs".to_string()),
        }
    }
}
