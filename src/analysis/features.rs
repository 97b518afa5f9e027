use crate::api::models::{Account, Match, MmrData};
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Competitive tier label -> ordinal, matching the provider's patched tier
/// names. Lookup is whitespace-trimmed but case-sensitive; anything unmapped
/// (including "Unranked") yields 0, which no scoring rule treats as a rank.
static RANK_ORDINALS: Lazy<HashMap<&'static str, i32>> = Lazy::new(|| {
    HashMap::from([
        ("Iron 1", 3),
        ("Iron 2", 4),
        ("Iron 3", 5),
        ("Bronze 1", 6),
        ("Bronze 2", 7),
        ("Bronze 3", 8),
        ("Silver 1", 9),
        ("Silver 2", 10),
        ("Silver 3", 11),
        ("Gold 1", 12),
        ("Gold 2", 13),
        ("Gold 3", 14),
        ("Platinum 1", 15),
        ("Platinum 2", 16),
        ("Platinum 3", 17),
        ("Diamond 1", 18),
        ("Diamond 2", 19),
        ("Diamond 3", 20),
        ("Ascendant 1", 21),
        ("Ascendant 2", 22),
        ("Ascendant 3", 23),
        ("Immortal 1", 24),
        ("Immortal 2", 25),
        ("Immortal 3", 26),
        ("Radiant", 27),
    ])
});

pub fn rank_ordinal(tier: &str) -> i32 {
    RANK_ORDINALS.get(tier.trim()).copied().unwrap_or(0)
}

/// Zero-policy division: a zero (or negative) denominator yields 0 rather
/// than NaN/inf. Rate statistics over empty or absent data degrade to zero.
pub fn safe_ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator > 0.0 {
        numerator / denominator
    } else {
        0.0
    }
}

/// Unbiased sample standard deviation (n - 1). Fewer than two samples carry
/// no dispersion information and return 0.
pub fn sample_std_dev(data: &[f64]) -> f64 {
    if data.len() < 2 {
        return 0.0;
    }

    let mean = data.iter().sum::<f64>() / data.len() as f64;
    let variance = data
        .iter()
        .map(|v| (v - mean) * (v - mean))
        .sum::<f64>()
        / (data.len() - 1) as f64;

    variance.sqrt()
}

/// Aggregate and dispersion statistics for one player over one match window.
#[derive(Debug, Clone, Default)]
pub struct PlayerFeatures {
    pub kd: f64,
    pub hs_percent: f64,
    pub win_rate: f64,
    pub avg_damage_dealt: f64,
    pub avg_score: f64,
    pub account_level: u32,
    pub rank_ordinal: i32,
    pub sd_kd: f64,
    pub sd_hs_percent: f64,
    pub sd_win_rate: f64,
    pub avg_ability_casts_per_round: f64,
}

/// Reduce a match window to the feature set for `account`'s player.
///
/// Matches that do not contain the player's puuid contribute nothing to the
/// running totals, but still count in the rate denominators: the window size
/// is taken as ground truth over the provider's per-match player lists.
/// Callers are expected to reject an empty window before getting here; on an
/// empty slice every rate degrades to 0.
pub fn extract_features(matches: &[Match], account: &Account, mmr: &MmrData) -> PlayerFeatures {
    let mut total_kills = 0i64;
    let mut total_deaths = 0i64;
    let mut total_headshots = 0i64;
    let mut total_bodyshots = 0i64;
    let mut total_legshots = 0i64;
    let mut total_score = 0i64;
    let mut total_damage_dealt = 0i64;
    let mut total_rounds_played = 0i64;
    let mut total_ability_casts = 0i64;
    let mut wins = 0i64;

    let mut kds = Vec::with_capacity(matches.len());
    let mut hs_percents = Vec::with_capacity(matches.len());
    let mut win_samples = Vec::with_capacity(matches.len());

    for m in matches {
        let player = match m.players.iter().find(|p| p.puuid == account.puuid) {
            Some(p) => p,
            None => continue,
        };

        let stats = &player.stats;
        total_kills += stats.kills as i64;
        total_deaths += stats.deaths as i64;
        total_headshots += stats.headshots as i64;
        total_bodyshots += stats.bodyshots as i64;
        total_legshots += stats.legshots as i64;
        total_score += stats.score as i64;
        total_damage_dealt += stats.damage.dealt as i64;

        // Deaths get a +1 floor so a deathless match still divides cleanly
        let match_kd = stats.kills as f64 / (stats.deaths + 1) as f64;
        let shots = stats.headshots + stats.bodyshots + stats.legshots;
        let match_hs_percent = safe_ratio(stats.headshots as f64, shots as f64) * 100.0;
        kds.push(match_kd);
        hs_percents.push(match_hs_percent);

        let won = m
            .teams
            .iter()
            .any(|team| team.team_id == player.team && team.won);
        if won {
            wins += 1;
        }
        win_samples.push(if won { 1.0 } else { 0.0 });

        for round in &m.rounds {
            if let Some(round_stats) = round
                .player_stats
                .iter()
                .find(|rp| rp.puuid == account.puuid)
            {
                total_ability_casts += round_stats.ability_casts.total() as i64;
                total_rounds_played += 1;
            }
        }
    }

    let match_count = matches.len() as f64;
    let total_shots = total_headshots + total_bodyshots + total_legshots;

    PlayerFeatures {
        kd: total_kills as f64 / (total_deaths + 1) as f64,
        hs_percent: safe_ratio(total_headshots as f64, total_shots as f64) * 100.0,
        win_rate: safe_ratio(wins as f64, match_count) * 100.0,
        avg_damage_dealt: safe_ratio(total_damage_dealt as f64, match_count),
        avg_score: safe_ratio(total_score as f64, match_count),
        account_level: account.account_level,
        rank_ordinal: rank_ordinal(&mmr.current_data.current_tier_patched),
        sd_kd: sample_std_dev(&kds),
        sd_hs_percent: sample_std_dev(&hs_percents),
        sd_win_rate: sample_std_dev(&win_samples),
        avg_ability_casts_per_round: safe_ratio(
            total_ability_casts as f64,
            total_rounds_played as f64,
        ),
    }
}
