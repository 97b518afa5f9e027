use crate::api::models::{Account, Match, MmrData};
use crate::error::AppError;
use serde::Serialize;

use super::features::extract_features;
use super::scorer::CheatScorer;
use super::summary::{build_match_summaries, MatchScoreSummary};

#[derive(Debug, Clone, Serialize)]
pub struct PlayerStatLine {
    pub kd: f64,
    pub hs_percent: f64,
    pub win_rate: f64,
    pub avg_damage: f64,
    pub account_level: u32,
    pub rank: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub probability: u8,
    pub stats: PlayerStatLine,
    pub matches_summary: Vec<MatchScoreSummary>,
}

/// Analyze one player's fetched match window. Pure and deterministic: the
/// network layer has already delivered the three inputs, and either the
/// whole analysis succeeds or a single error comes back, never a partial
/// report.
pub fn analyze_player(
    account: &Account,
    mmr: &MmrData,
    matches: &[Match],
) -> Result<AnalysisReport, AppError> {
    if matches.is_empty() {
        return Err(AppError::NoMatchesFound);
    }
    if account.puuid.is_empty() {
        return Err(AppError::MissingPuuid);
    }

    let features = extract_features(matches, account, mmr);
    let probability = CheatScorer::probability_percent(&features);
    let matches_summary = build_match_summaries(matches, &account.puuid);

    Ok(AnalysisReport {
        probability,
        stats: PlayerStatLine {
            kd: features.kd,
            hs_percent: features.hs_percent,
            win_rate: features.win_rate,
            avg_damage: features.avg_damage_dealt,
            account_level: features.account_level,
            rank: mmr.current_data.current_tier_patched.clone(),
        },
        matches_summary,
    })
}
