use serde::Deserialize;
use std::collections::HashMap;

// Every HenrikDev payload arrives wrapped as {"status": ..., "data": ...}.
// `data` stays untyped here; each endpoint decodes it into its own model.
#[derive(Debug, Deserialize)]
pub struct ApiEnvelope {
    #[serde(default)]
    pub status: i64,
    #[serde(default)]
    pub data: serde_json::Value,
}

// Account V2 response
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Account {
    pub puuid: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub tag: String,
    #[serde(default)]
    pub account_level: u32,
}

// MMR V2 response
#[derive(Debug, Clone, Deserialize, Default)]
pub struct MmrData {
    #[serde(default)]
    pub current_data: CurrentMmr,
    #[serde(default)]
    pub by_season: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct CurrentMmr {
    #[serde(rename = "currenttierpatched", default)]
    pub current_tier_patched: String,
    #[serde(rename = "currenttier", default)]
    pub current_tier: Option<i32>,
}

impl MmrData {
    /// Stand-in record for players the provider has no ranked data for.
    pub fn unranked() -> Self {
        MmrData {
            current_data: CurrentMmr {
                current_tier_patched: "Unranked".to_string(),
                current_tier: None,
            },
            by_season: None,
        }
    }
}

// Match V3 response. The provider keys players by an arbitrary string, so the
// wire shape is flattened into an unordered Vec on decode; consumers must scan
// for a puuid rather than index by position.
#[derive(Debug, Clone, Deserialize)]
#[serde(from = "RawMatch")]
pub struct Match {
    pub metadata: MatchMetadata,
    pub players: Vec<MatchPlayer>,
    pub teams: Vec<Team>,
    pub rounds: Vec<Round>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct MatchMetadata {
    #[serde(default)]
    pub match_id: String,
}

#[derive(Debug, Deserialize)]
struct RawMatch {
    #[serde(default)]
    metadata: MatchMetadata,
    #[serde(default)]
    players: HashMap<String, MatchPlayer>,
    #[serde(default)]
    teams: Vec<Team>,
    #[serde(default)]
    rounds: Vec<Round>,
}

impl From<RawMatch> for Match {
    fn from(raw: RawMatch) -> Self {
        Match {
            metadata: raw.metadata,
            players: raw.players.into_values().collect(),
            teams: raw.teams,
            rounds: raw.rounds,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct MatchPlayer {
    #[serde(default)]
    pub puuid: String,
    #[serde(rename = "team_id", default)]
    pub team: String,
    #[serde(default)]
    pub stats: CombatStats,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct CombatStats {
    #[serde(default)]
    pub kills: i32,
    #[serde(default)]
    pub deaths: i32,
    #[serde(default)]
    pub assists: i32,
    #[serde(default)]
    pub headshots: i32,
    #[serde(default)]
    pub bodyshots: i32,
    #[serde(default)]
    pub legshots: i32,
    #[serde(default)]
    pub score: i32,
    #[serde(default)]
    pub damage: DamageStats,
}

#[derive(Debug, Clone, Copy, Deserialize, Default)]
pub struct DamageStats {
    #[serde(default)]
    pub dealt: i32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Team {
    #[serde(default)]
    pub team_id: String,
    #[serde(default)]
    pub won: bool,
    #[serde(default)]
    pub rounds_won: i32,
    #[serde(default)]
    pub rounds_lost: i32,
}

// Round-level granularity is only present on the richer match payloads;
// absent rounds decode to an empty Vec and ability averages fall back to 0.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Round {
    #[serde(default)]
    pub player_stats: Vec<RoundPlayerStats>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct RoundPlayerStats {
    #[serde(rename = "player_puuid", default)]
    pub puuid: String,
    #[serde(default)]
    pub ability_casts: AbilityCasts,
}

#[derive(Debug, Clone, Copy, Deserialize, Default)]
pub struct AbilityCasts {
    #[serde(rename = "c_casts", default)]
    pub grenade: i32,
    #[serde(rename = "q_casts", default)]
    pub ability1: i32,
    #[serde(rename = "e_casts", default)]
    pub ability2: i32,
    #[serde(rename = "x_casts", default)]
    pub ultimate: i32,
}

impl AbilityCasts {
    pub fn total(&self) -> i32 {
        self.grenade + self.ability1 + self.ability2 + self.ultimate
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn match_players_map_is_flattened() {
        let raw = r#"{
            "metadata": {"match_id": "m-1"},
            "players": {
                "a": {"puuid": "p-a", "team_id": "Red", "stats": {"kills": 12}},
                "b": {"puuid": "p-b", "team_id": "Blue", "stats": {"kills": 3}}
            },
            "teams": [{"team_id": "Red", "won": true, "rounds_won": 13, "rounds_lost": 7}]
        }"#;

        let m: Match = serde_json::from_str(raw).expect("match should decode");
        assert_eq!(m.metadata.match_id, "m-1");
        assert_eq!(m.players.len(), 2);
        assert!(m.players.iter().any(|p| p.puuid == "p-a" && p.stats.kills == 12));
        assert!(m.rounds.is_empty());
    }

    #[test]
    fn missing_stat_fields_default_to_zero() {
        let raw = r#"{
            "metadata": {"match_id": "m-2"},
            "players": {"a": {"puuid": "p-a", "team_id": "Red"}},
            "teams": []
        }"#;

        let m: Match = serde_json::from_str(raw).expect("sparse match should decode");
        let p = &m.players[0];
        assert_eq!(p.stats.kills, 0);
        assert_eq!(p.stats.damage.dealt, 0);
    }

    #[test]
    fn round_ability_casts_decode_and_total() {
        let raw = r#"{
            "player_stats": [{
                "player_puuid": "p-a",
                "ability_casts": {"c_casts": 2, "q_casts": 3, "e_casts": 1, "x_casts": 1}
            }]
        }"#;

        let round: Round = serde_json::from_str(raw).expect("round should decode");
        assert_eq!(round.player_stats[0].ability_casts.total(), 7);
    }
}
