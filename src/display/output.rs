use crate::analysis::service::AnalysisReport;
use colored::*;
use tabled::{settings::Style, Table, Tabled};

#[derive(Tabled)]
struct StatRow {
    #[tabled(rename = "KD")]
    kd: String,
    #[tabled(rename = "HS%")]
    hs_percent: String,
    #[tabled(rename = "Win Rate")]
    win_rate: String,
    #[tabled(rename = "Avg Damage")]
    avg_damage: String,
    #[tabled(rename = "Level")]
    account_level: String,
    #[tabled(rename = "Rank")]
    rank: String,
}

#[derive(Tabled)]
struct MatchScoreRow {
    #[tabled(rename = "#")]
    number: String,
    #[tabled(rename = "Match ID")]
    match_id: String,
    #[tabled(rename = "Combat Score")]
    score: String,
}

pub fn display_report(report: &AnalysisReport, player_name: &str, tag: &str) {
    println!(
        "\n{}",
        format!("🔍 Cheat Analysis for {}#{}", player_name, tag)
            .bold()
            .cyan()
    );
    println!("{}\n", "=".repeat(60).cyan());

    let verdict = format!("Cheat probability: {}%", report.probability);
    if report.probability >= 70 {
        println!("{} {}", "⚠️".red(), verdict.red().bold());
    } else if report.probability >= 40 {
        println!("{} {}", "⚠️".yellow(), verdict.yellow().bold());
    } else {
        println!("{} {}", "✓".green(), verdict.green().bold());
    }
    println!();

    let stats = &report.stats;
    let stat_rows = vec![StatRow {
        kd: format!("{:.2}", stats.kd),
        hs_percent: format!("{:.1}%", stats.hs_percent),
        win_rate: format!("{:.1}%", stats.win_rate),
        avg_damage: format!("{:.0}", stats.avg_damage),
        account_level: format!("{}", stats.account_level),
        rank: stats.rank.clone(),
    }];

    let mut table = Table::new(stat_rows);
    table.with(Style::rounded());
    println!("{}\n", table);

    if report.matches_summary.is_empty() {
        return;
    }

    println!(
        "{}",
        format!(
            "📊 MATCH SCORES (Last {} Games)",
            report.matches_summary.len()
        )
        .bold()
        .cyan()
    );

    let mut rows = vec![];
    for (idx, summary) in report.matches_summary.iter().enumerate() {
        rows.push(MatchScoreRow {
            number: format!("{}", idx + 1),
            match_id: summary.match_id.clone(),
            score: format!("{}", summary.score),
        });
    }

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}\n", table);

    println!("{}", "Interpretation".bold().yellow());
    println!("• Probability: rule-based suspicion score, not a verdict");
    println!("• Combat Score: the player's score field per fetched match (0 = not present)\n");
}

pub fn display_error(error: &str) {
    eprintln!("{} {}", "❌ Error:".red().bold(), error);
}

pub fn display_info(message: &str) {
    println!("{} {}", "ℹ️".cyan(), message);
}

pub fn display_success(message: &str) {
    println!("{} {}", "✓".green(), message);
}
