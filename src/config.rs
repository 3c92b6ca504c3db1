use std::env;

use crate::error::AppError;

pub const DEFAULT_BLOCKED_TIMES: [&str; 3] = ["10:00", "14:30", "16:00"];

#[derive(Clone, Debug)]
pub struct Config {
    pub port: u16,
    pub seed_appointments: usize,
    pub blocked_times: Vec<String>, // Slots unavailable on every date
    pub log_dir: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            port: parse_var("PORT", 3000)?,
            seed_appointments: parse_var("SEED_APPOINTMENTS", 15)?,
            blocked_times: env::var("BLOCKED_TIMES")
                .map(|raw| parse_time_list(&raw))
                .unwrap_or_else(|_| DEFAULT_BLOCKED_TIMES.iter().map(|t| t.to_string()).collect()),
            log_dir: env::var("LOG_DIR").unwrap_or_else(|_| "./logs".to_string()),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 3000,
            seed_appointments: 15,
            blocked_times: DEFAULT_BLOCKED_TIMES.iter().map(|t| t.to_string()).collect(),
            log_dir: "./logs".to_string(),
        }
    }
}

fn parse_var<T: std::str::FromStr>(name: &str, default: T) -> Result<T, AppError> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|_| AppError::Config(format!("{} must be a number, got '{}'", name, raw))),
        Err(_) => Ok(default),
    }
}

pub fn parse_time_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}
