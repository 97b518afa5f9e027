use crate::error::AppError;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

// Self-imposed budgets for the shared HenrikDev free tier, well under the
// provider's own per-minute limit.
const MAX_REQUESTS_PER_DAY: u32 = 200;
const MAX_REQUESTS_PER_HOUR: u32 = 60;

#[derive(Debug, Serialize, Deserialize)]
pub struct RequestLog {
    pub player: String,
    pub requests_today: u32,
    pub requests_this_hour: u32,
    pub last_request: DateTime<Utc>,
    pub day_reset: DateTime<Utc>,
    pub hour_reset: DateTime<Utc>,
}

impl RequestLog {
    pub fn new(player: &str) -> Self {
        let now = Utc::now();
        RequestLog {
            player: player.to_string(),
            requests_today: 0,
            requests_this_hour: 0,
            last_request: now,
            day_reset: now + Duration::days(1),
            hour_reset: now + Duration::hours(1),
        }
    }

    fn log_path(player: &str) -> PathBuf {
        let dir = dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".valoguard");

        let _ = fs::create_dir_all(&dir);

        dir.join(format!("{}.usage.json", player.replace('#', "_")))
    }

    pub fn load(player: &str) -> Result<Self, AppError> {
        let path = Self::log_path(player);

        match fs::read_to_string(&path) {
            Ok(content) => {
                let mut log: RequestLog = serde_json::from_str(&content).map_err(|e| {
                    AppError::JsonError(format!("Failed to parse usage log: {}", e))
                })?;

                let now = Utc::now();
                if now > log.day_reset {
                    log.requests_today = 0;
                    log.day_reset = now + Duration::days(1);
                }
                if now > log.hour_reset {
                    log.requests_this_hour = 0;
                    log.hour_reset = now + Duration::hours(1);
                }

                Ok(log)
            }
            Err(_) => Ok(RequestLog::new(player)),
        }
    }

    pub fn save(&self) -> Result<(), AppError> {
        let path = Self::log_path(&self.player);
        let json = serde_json::to_string_pretty(self).map_err(|e| {
            AppError::JsonError(format!("Failed to serialize usage log: {}", e))
        })?;

        fs::write(&path, json)
            .map_err(|e| AppError::JsonError(format!("Failed to write usage log: {}", e)))?;

        Ok(())
    }

    pub fn can_make_request(&self) -> bool {
        self.requests_today < MAX_REQUESTS_PER_DAY
            && self.requests_this_hour < MAX_REQUESTS_PER_HOUR
    }

    pub fn record_request(&mut self) {
        self.requests_today += 1;
        self.requests_this_hour += 1;
        self.last_request = Utc::now();
    }

    pub fn remaining(&self) -> u32 {
        MAX_REQUESTS_PER_DAY
            .saturating_sub(self.requests_today)
            .min(MAX_REQUESTS_PER_HOUR.saturating_sub(self.requests_this_hour))
    }

    pub fn display_status(&self) {
        let reset = self.day_reset.min(self.hour_reset);
        let until_reset = reset.signed_duration_since(Utc::now());

        println!("\n📊 API Usage (Player: {})", self.player);
        println!(
            "   Daily:  {}/{} requests",
            self.requests_today, MAX_REQUESTS_PER_DAY
        );
        println!(
            "   Hourly: {}/{} requests",
            self.requests_this_hour, MAX_REQUESTS_PER_HOUR
        );
        println!("   Remaining: {} requests", self.remaining());
        println!(
            "   Reset in: {}h {}m\n",
            until_reset.num_hours(),
            until_reset.num_minutes() % 60
        );
    }
}
