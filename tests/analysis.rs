use valo_guard::analysis::service::analyze_player;
use valo_guard::api::models::{
    Account, CombatStats, DamageStats, Match, MatchMetadata, MatchPlayer, MmrData, Team,
};
use valo_guard::error::AppError;

fn account(puuid: &str, level: u32) -> Account {
    Account {
        puuid: puuid.to_string(),
        name: "Suspect".to_string(),
        tag: "BR1".to_string(),
        account_level: level,
    }
}

fn mmr(tier: &str) -> MmrData {
    let mut m = MmrData::unranked();
    m.current_data.current_tier_patched = tier.to_string();
    m
}

fn combat(kills: i32, deaths: i32, head: i32, body: i32, leg: i32, score: i32) -> CombatStats {
    CombatStats {
        kills,
        deaths,
        assists: 2,
        headshots: head,
        bodyshots: body,
        legshots: leg,
        score,
        damage: DamageStats { dealt: 3500 },
    }
}

fn competitive_match(id: &str, players: Vec<MatchPlayer>, winning_team: &str) -> Match {
    Match {
        metadata: MatchMetadata {
            match_id: id.to_string(),
        },
        players,
        teams: vec![
            Team {
                team_id: winning_team.to_string(),
                won: true,
                rounds_won: 13,
                rounds_lost: 6,
            },
            Team {
                team_id: (if winning_team == "Red" { "Blue" } else { "Red" }).to_string(),
                won: false,
                rounds_won: 6,
                rounds_lost: 13,
            },
        ],
        rounds: Vec::new(),
    }
}

fn player(puuid: &str, team: &str, stats: CombatStats) -> MatchPlayer {
    MatchPlayer {
        puuid: puuid.to_string(),
        team: team.to_string(),
        stats,
    }
}

#[test]
fn blatant_window_hits_maximum_probability() {
    // Level 10 account, Platinum 2, five identical dominant wins:
    // KD 16/(4+1)=3.2, HS% 45, win rate 100 — all four rules fire.
    let acc = account("p-suspect", 10);
    let matches: Vec<Match> = (1..=5)
        .map(|i| {
            competitive_match(
                &format!("m-{}", i),
                vec![
                    player("p-suspect", "Red", combat(16, 4, 45, 50, 5, 300 + i)),
                    player("p-bystander", "Blue", combat(9, 12, 4, 20, 3, 150)),
                ],
                "Red",
            )
        })
        .collect();

    let report = analyze_player(&acc, &mmr("Platinum 2"), &matches).expect("analysis should run");

    assert_eq!(report.probability, 100);
    assert_eq!(report.stats.rank, "Platinum 2");
    assert_eq!(report.stats.account_level, 10);
    assert!((report.stats.kd - 3.2).abs() < 1e-12);
    assert!((report.stats.hs_percent - 45.0).abs() < 1e-12);
    assert_eq!(report.stats.win_rate, 100.0);

    // Summaries echo each match's score field in fetch order
    assert_eq!(report.matches_summary.len(), 5);
    for (idx, summary) in report.matches_summary.iter().enumerate() {
        assert_eq!(summary.match_id, format!("m-{}", idx + 1));
        assert_eq!(summary.score, 300 + idx as i32 + 1);
    }
}

#[test]
fn provider_omitting_player_keeps_window_denominator() {
    // Player present in only 2 of 5 fetched matches; the other 3 contribute
    // zero but the denominators still reflect all 5.
    let acc = account("p-suspect", 200);
    let mut matches = vec![
        competitive_match(
            "m-1",
            vec![player("p-suspect", "Red", combat(20, 4, 10, 10, 0, 400))],
            "Red",
        ),
        competitive_match(
            "m-2",
            vec![player("p-suspect", "Blue", combat(10, 10, 5, 15, 0, 200))],
            "Red",
        ),
    ];
    for i in 3..=5 {
        matches.push(competitive_match(
            &format!("m-{}", i),
            vec![player("p-stranger", "Red", combat(15, 8, 8, 12, 0, 260))],
            "Red",
        ));
    }

    let report = analyze_player(&acc, &mmr("Gold 2"), &matches).expect("analysis should run");

    // 1 win over 5 supplied matches, damage 2 * 3500 over 5
    assert_eq!(report.stats.win_rate, 20.0);
    assert_eq!(report.stats.avg_damage, 1400.0);

    assert_eq!(report.matches_summary.len(), 5);
    assert_eq!(report.matches_summary[0].score, 400);
    assert_eq!(report.matches_summary[1].score, 200);
    assert_eq!(report.matches_summary[2].score, 0);
    assert_eq!(report.matches_summary[3].score, 0);
    assert_eq!(report.matches_summary[4].score, 0);
}

#[test]
fn empty_match_window_is_rejected_before_feature_extraction() {
    let acc = account("p-suspect", 50);
    let err = analyze_player(&acc, &mmr("Gold 1"), &[]).expect_err("empty window must fail");
    assert!(matches!(err, AppError::NoMatchesFound));
}

#[test]
fn missing_puuid_is_a_precondition_error() {
    let acc = account("", 50);
    let matches = vec![competitive_match(
        "m-1",
        vec![player("p-anyone", "Red", combat(10, 10, 5, 5, 0, 200))],
        "Red",
    )];

    let err = analyze_player(&acc, &mmr("Gold 1"), &matches).expect_err("missing puuid must fail");
    assert!(matches!(err, AppError::MissingPuuid));
}

#[test]
fn unranked_streaky_player_is_not_flagged() {
    // High peaks but wild dispersion across matches: no rule may fire.
    let acc = account("p-suspect", 300);
    let matches = vec![
        competitive_match(
            "m-1",
            vec![player("p-suspect", "Red", combat(30, 2, 25, 10, 0, 450))],
            "Red",
        ),
        competitive_match(
            "m-2",
            vec![player("p-suspect", "Red", combat(2, 18, 0, 20, 4, 90))],
            "Blue",
        ),
        competitive_match(
            "m-3",
            vec![player("p-suspect", "Blue", combat(14, 9, 6, 14, 2, 240))],
            "Red",
        ),
    ];

    let report = analyze_player(&acc, &mmr("Unranked"), &matches).expect("analysis should run");
    assert_eq!(report.probability, 0);
    assert_eq!(report.stats.rank, "Unranked");
}

#[test]
fn report_serializes_with_wire_field_names() {
    let acc = account("p-suspect", 10);
    let matches = vec![competitive_match(
        "m-1",
        vec![player("p-suspect", "Red", combat(16, 4, 45, 50, 5, 312))],
        "Red",
    )];

    let report = analyze_player(&acc, &mmr("Platinum 2"), &matches).expect("analysis should run");
    let value = serde_json::to_value(&report).expect("report should serialize");

    assert!(value.get("probability").is_some());
    let stats = value.get("stats").expect("stats object");
    for key in [
        "kd",
        "hs_percent",
        "win_rate",
        "avg_damage",
        "account_level",
        "rank",
    ] {
        assert!(stats.get(key).is_some(), "missing stats.{}", key);
    }
    let summaries = value
        .get("matches_summary")
        .and_then(|v| v.as_array())
        .expect("matches_summary array");
    assert_eq!(summaries[0].get("match_id").and_then(|v| v.as_str()), Some("m-1"));
    assert_eq!(summaries[0].get("score").and_then(|v| v.as_i64()), Some(312));
}
