use super::features::PlayerFeatures;

// Rule thresholds. Each axis flags performance implausibly good for the
// player's stated experience; the dispersion gates keep merely-streaky
// players from firing a rule, only consistently extreme windows do.
const AIM_HS_PERCENT_MIN: f64 = 40.0;
const AIM_HS_SPREAD_MAX: f64 = 5.0;
const KILL_KD_MIN: f64 = 3.0;
const KILL_KD_SPREAD_MAX: f64 = 0.5;
const WIN_RATE_MIN: f64 = 80.0;
const WIN_RATE_SPREAD_MAX: f64 = 10.0;
const LOW_EXPERIENCE_LEVEL_MAX: u32 = 50;
const RANK_MISMATCH_ORDINAL_MIN: i32 = 15; // strictly above Platinum 1

const AIM_WEIGHT: f64 = 0.3;
const KILL_WEIGHT: f64 = 0.2;
const WIN_WEIGHT: f64 = 0.2;
const RANK_MISMATCH_WEIGHT: f64 = 0.3;

pub struct CheatScorer;

impl CheatScorer {
    /// Cheat probability in [0, 1] from independent additive rules:
    /// - 0.3 if headshot% > 40 with low spread
    /// - 0.2 if KD > 3.0 with low spread
    /// - 0.2 if win rate > 80% with low spread
    /// - 0.3 if the account is low-level but ranked above Platinum 1
    ///
    /// Contributions are summed then clamped, never rescaled, so partial
    /// hits stay comparable across players.
    pub fn probability(features: &PlayerFeatures) -> f64 {
        let mut probability = 0.0;

        if features.hs_percent > AIM_HS_PERCENT_MIN && features.sd_hs_percent < AIM_HS_SPREAD_MAX {
            probability += AIM_WEIGHT;
        }
        if features.kd > KILL_KD_MIN && features.sd_kd < KILL_KD_SPREAD_MAX {
            probability += KILL_WEIGHT;
        }
        if features.win_rate > WIN_RATE_MIN && features.sd_win_rate < WIN_RATE_SPREAD_MAX {
            probability += WIN_WEIGHT;
        }
        if features.account_level < LOW_EXPERIENCE_LEVEL_MAX
            && features.rank_ordinal > RANK_MISMATCH_ORDINAL_MIN
        {
            probability += RANK_MISMATCH_WEIGHT;
        }

        probability.min(1.0)
    }

    /// Probability as an integer percentage 0-100.
    pub fn probability_percent(features: &PlayerFeatures) -> u8 {
        (Self::probability(features) * 100.0).round() as u8
    }
}
