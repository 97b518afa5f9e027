use crate::api::models::Match;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct MatchScoreSummary {
    pub match_id: String,
    pub score: i32,
}

/// One entry per supplied match, in fetch order. A match the player does not
/// appear in gets score 0 rather than being dropped.
pub fn build_match_summaries(matches: &[Match], puuid: &str) -> Vec<MatchScoreSummary> {
    matches
        .iter()
        .map(|m| MatchScoreSummary {
            match_id: m.metadata.match_id.clone(),
            score: find_player_score(m, puuid),
        })
        .collect()
}

fn find_player_score(m: &Match, puuid: &str) -> i32 {
    m.players
        .iter()
        .find(|p| p.puuid == puuid)
        .map(|p| p.stats.score)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::models::{CombatStats, MatchMetadata, MatchPlayer};

    fn match_with_score(id: &str, puuid: &str, score: i32) -> Match {
        Match {
            metadata: MatchMetadata {
                match_id: id.to_string(),
            },
            players: vec![MatchPlayer {
                puuid: puuid.to_string(),
                team: "Red".to_string(),
                stats: CombatStats {
                    score,
                    ..CombatStats::default()
                },
            }],
            teams: Vec::new(),
            rounds: Vec::new(),
        }
    }

    #[test]
    fn preserves_input_order_and_length() {
        let matches = vec![
            match_with_score("m-1", "p-1", 310),
            match_with_score("m-2", "p-1", 150),
            match_with_score("m-3", "p-1", 275),
        ];

        let summaries = build_match_summaries(&matches, "p-1");
        assert_eq!(summaries.len(), 3);
        let ids: Vec<&str> = summaries.iter().map(|s| s.match_id.as_str()).collect();
        assert_eq!(ids, vec!["m-1", "m-2", "m-3"]);
        assert_eq!(summaries[1].score, 150);
    }

    #[test]
    fn missing_player_scores_zero_per_match() {
        let matches = vec![
            match_with_score("m-1", "p-1", 310),
            match_with_score("m-2", "p-other", 420),
        ];

        let summaries = build_match_summaries(&matches, "p-1");
        assert_eq!(summaries[0].score, 310);
        assert_eq!(summaries[1].score, 0);
    }
}
