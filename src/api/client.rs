use crate::config::Config;
use crate::error::AppError;
use governor::{Quota, RateLimiter, state::{InMemoryState, NotKeyed}, clock::DefaultClock};
use std::num::NonZeroU32;
use std::thread;
use std::time::Duration;

use super::endpoints;
use super::models::*;

pub struct HenrikApiClient {
    config: Config,
    rate_limiter: RateLimiter<NotKeyed, InMemoryState, DefaultClock>,
}

impl HenrikApiClient {
    pub fn new(config: Config) -> Self {
        // Free-tier keys allow ~30 requests per minute; stay well under it
        let rate_limiter = RateLimiter::direct(Quota::per_minute(NonZeroU32::new(20).unwrap()));
        HenrikApiClient {
            config,
            rate_limiter,
        }
    }

    fn execute_request(&self, url: &str) -> Result<serde_json::Value, AppError> {
        while self.rate_limiter.check().is_err() {
            thread::sleep(Duration::from_millis(100));
        }

        let mut retry_count = 0;
        const MAX_RETRIES: u32 = 3;

        loop {
            let response = ureq::get(url)
                .set("Authorization", &self.config.api_key)
                .set("User-Agent", "valo_guard/0.1.0")
                .call();

            match response {
                Ok(resp) => {
                    let body = resp
                        .into_string()
                        .map_err(|e| AppError::HttpError(e.to_string()))?;
                    return self.unwrap_envelope(&body);
                }
                Err(ureq::Error::Status(429, _)) => {
                    if retry_count >= MAX_RETRIES {
                        return Err(AppError::RateLimited);
                    }
                    let wait_ms = 2000 * (retry_count + 1) as u64;
                    thread::sleep(Duration::from_millis(wait_ms));
                    retry_count += 1;
                }
                Err(e) => {
                    return Err(AppError::HttpError(e.to_string()));
                }
            }
        }
    }

    fn unwrap_envelope(&self, body: &str) -> Result<serde_json::Value, AppError> {
        let envelope: ApiEnvelope =
            serde_json::from_str(body).map_err(|e| AppError::JsonError(e.to_string()))?;

        if envelope.status != 200 && envelope.status != 0 {
            return Err(AppError::ApiError(format!(
                "provider returned status {}",
                envelope.status
            )));
        }

        Ok(envelope.data)
    }

    pub fn get_account(&self, name: &str, tag: &str) -> Result<Account, AppError> {
        let data = self.execute_request(&endpoints::account(name, tag))?;

        if data.is_null() {
            return Err(AppError::PlayerNotFound(format!("{}#{}", name, tag)));
        }

        serde_json::from_value(data)
            .map_err(|_| AppError::PlayerNotFound(format!("{}#{}", name, tag)))
    }

    pub fn get_mmr(&self, region: &str, name: &str, tag: &str) -> Result<MmrData, AppError> {
        let data = self.execute_request(&endpoints::mmr(region, name, tag))?;

        // No ranked data is not an error, the player is simply unranked
        if data.is_null() {
            return Ok(MmrData::unranked());
        }

        serde_json::from_value(data).map_err(|e| AppError::JsonError(e.to_string()))
    }

    pub fn get_matches(&self, region: &str, name: &str, tag: &str) -> Result<Vec<Match>, AppError> {
        let data = self.execute_request(&endpoints::matches(region, name, tag))?;

        if data.is_null() {
            return Ok(Vec::new());
        }

        serde_json::from_value(data).map_err(|e| AppError::JsonError(e.to_string()))
    }
}
