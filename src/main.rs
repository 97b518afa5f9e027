use clap::Parser;
use indicatif::ProgressBar;

use valo_guard::analysis::service::analyze_player;
use valo_guard::api::client::HenrikApiClient;
use valo_guard::config::Config;
use valo_guard::display::output::{display_error, display_info, display_report, display_success};
use valo_guard::error::AppError;
use valo_guard::rate_limit::RequestLog;

#[derive(Parser, Debug)]
#[command(name = "ValoGuard")]
#[command(about = "Estimate the cheat probability of a Valorant player", long_about = None)]
struct Args {
    /// Riot game name
    name: String,

    /// Riot tag (tag line)
    tag: String,

    /// Region (default: br)
    #[arg(short, long)]
    region: Option<String>,

    /// Print the raw analysis report as JSON instead of tables
    #[arg(long)]
    json: bool,

    /// Ignore the local API usage budget
    #[arg(long)]
    force: bool,
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        display_error(&e.to_string());
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), AppError> {
    let mut config = Config::from_env()?;
    if let Some(region) = args.region {
        config.region = region;
    }

    let player_key = format!("{}#{}", args.name, args.tag);

    let mut usage = RequestLog::load(&player_key)?;
    if !usage.can_make_request() && !args.force {
        usage.display_status();
        return Err(AppError::RateLimited);
    }

    display_info(&format!(
        "Fetching data for {} in region {}",
        player_key, config.region
    ));

    let client = HenrikApiClient::new(config.clone());
    let pb = ProgressBar::new(3);
    pb.set_message("Fetching player data");

    display_info("Step 1: Getting account info...");
    let account = client.get_account(&args.name, &args.tag)?;
    usage.record_request();
    usage.save().ok();
    pb.inc(1);
    display_success(&format!(
        "Found PUUID: {} (level {})",
        &account.puuid[0..8.min(account.puuid.len())],
        account.account_level
    ));

    display_info("Step 2: Getting rank info...");
    let mmr = client.get_mmr(&config.region, &args.name, &args.tag)?;
    usage.record_request();
    usage.save().ok();
    pb.inc(1);
    display_success(&format!(
        "Current rank: {}",
        mmr.current_data.current_tier_patched
    ));

    display_info("Step 3: Getting recent competitive matches...");
    let matches = client.get_matches(&config.region, &args.name, &args.tag)?;
    usage.record_request();
    usage.save().ok();
    pb.inc(1);
    pb.finish_with_message("✓ Player data fetched");
    display_success(&format!("Found {} matches to analyze", matches.len()));

    let report = analyze_player(&account, &mmr, &matches)?;

    if args.json {
        let json = serde_json::to_string_pretty(&report)
            .map_err(|e| AppError::JsonError(e.to_string()))?;
        println!("{}", json);
    } else {
        display_report(&report, &account.name, &account.tag);
    }

    usage.display_status();

    Ok(())
}
