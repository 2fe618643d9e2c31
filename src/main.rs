use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use serde::Deserialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use group_planner::models::{GroupingConfig, MeetingPoint, Person};
use group_planner::utils::seed::RandomSeed;
use group_planner::utils::travel_cost::{SpeedModel, TravelMode};
use group_planner::{AutoGrouper, GroupingStatus, Strategy};

/// Auto-group a roster of people around meeting points
#[derive(Parser, Debug)]
#[command(name = "group_planner", version, about)]
struct Cli {
    /// Roster JSON with `people`, `meetingPoints` and an optional `config`
    roster: PathBuf,

    /// Config JSON overriding the roster's embedded config
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = StrategyArg::Anchored)]
    strategy: StrategyArg,

    /// Travel mode used to rank people for each meeting point
    #[arg(long, value_enum, default_value_t = TravelMode::Driving)]
    mode: TravelMode,

    /// Pick proximity seeds at random from this seed instead of in order
    #[arg(long)]
    seed: Option<u64>,

    /// Keep existing group assignments instead of starting over
    #[arg(long)]
    keep_existing: bool,

    /// Write the outcome as JSON to this file
    #[arg(long)]
    output: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum StrategyArg {
    Proximity,
    Anchored,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Roster {
    people: Vec<Person>,
    #[serde(default)]
    meeting_points: Vec<MeetingPoint>,
    #[serde(default)]
    config: Option<GroupingConfig>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    let contents = fs::read_to_string(&cli.roster)
        .with_context(|| format!("reading roster {}", cli.roster.display()))?;
    let mut roster: Roster = serde_json::from_str(&contents)
        .with_context(|| format!("parsing roster {}", cli.roster.display()))?;

    let config = match &cli.config {
        Some(path) => GroupingConfig::from_json_file(path)?,
        None => roster.config.take().unwrap_or_default(),
    };
    info!(
        people = roster.people.len(),
        meeting_points = roster.meeting_points.len(),
        "Loaded roster"
    );

    let strategy = match cli.strategy {
        StrategyArg::Proximity => Strategy::ProximityOnly,
        StrategyArg::Anchored => Strategy::MeetingAnchored,
    };

    let mut grouper = AutoGrouper::new(config).with_estimator(SpeedModel::for_mode(cli.mode));
    if let Some(seed) = cli.seed {
        grouper = grouper.with_seed_selector(RandomSeed::seeded(seed));
    }

    let outcome = grouper.auto_group(
        &mut roster.people,
        &mut roster.meeting_points,
        strategy,
        !cli.keep_existing,
    )?;

    if outcome.status == GroupingStatus::NoValidGroupsFormed {
        println!("No groups could be formed; the requirements may be too strict.");
    }

    for group in &outcome.groups {
        let summary = group.summarize(&roster.people);
        let anchor = group
            .meeting_point
            .and_then(|id| roster.meeting_points.iter().find(|m| m.id == id))
            .map(|m| m.name.as_str())
            .unwrap_or("-");
        println!(
            "{} ({}) meeting point: {}, {} members, spread {:.2} km",
            group.name, group.color, anchor, summary.member_count, summary.spread_km
        );
        for member in &group.members {
            if let Some(person) = roster.people.iter().find(|p| p.id == *member) {
                let roles: Vec<String> = person.roles.iter().map(|r| format!("{:?}", r)).collect();
                println!("  {} [{}]", person.name, roles.join(", "));
            }
        }
    }
    if !outcome.unassigned.is_empty() {
        println!("Unassigned: {:?}", outcome.unassigned);
    }

    if let Some(path) = &cli.output {
        fs::write(path, serde_json::to_string_pretty(&outcome)?)
            .with_context(|| format!("writing {}", path.display()))?;
        info!(path = %path.display(), "Wrote outcome");
    }

    Ok(())
}
