//! Kingdom Steward - Entry Point
//!
//! Runs a computer kingdom for a number of days and prints what its castles
//! built and hired each day.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;

use kingdom_steward::army::{Commander, HeroRole};
use kingdom_steward::core::error::{Result, StewardError};
use kingdom_steward::core::types::{Color, CommanderId, Race, TownId};
use kingdom_steward::core::StewardConfig;
use kingdom_steward::economy::Funds;
use kingdom_steward::planner::{Personality, Planner, TurnContext};
use kingdom_steward::realm::{Kingdom, RegionStats, Town};

/// Multi-day castle AI simulation
#[derive(Parser, Debug)]
#[command(name = "kingdom-steward")]
#[command(about = "Simulate the castle AI of one kingdom")]
struct Args {
    /// AI seed; overrides the configured one
    #[arg(long)]
    seed: Option<u64>,

    /// Number of days to simulate
    #[arg(long, default_value_t = 28)]
    days: u32,

    /// Race of the kingdom's castles
    #[arg(long, default_value = "knight")]
    race: String,

    /// AI personality: normal, simple or passive
    #[arg(long)]
    personality: Option<String>,

    /// TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the final kingdom state as JSON
    #[arg(long)]
    json: bool,
}

fn build_kingdom(race: Race) -> Kingdom {
    let color = Color::Blue;
    let mut kingdom = Kingdom::new(color, Funds::new(7500, 20, 5, 20, 5, 5, 5));

    kingdom.add_town(
        Town::castle(TownId(1), "Capital", race, color)
            .as_capital()
            .with_population([12, 0, 0, 0, 0, 0])
            .with_region(RegionStats {
                neighbour_regions: 4,
                safety_factor: 50,
                spell_level: 3,
            }),
    );
    kingdom.add_town(
        Town::new(TownId(2), "Harbor", race, color)
            .near_sea()
            .with_region(RegionStats {
                neighbour_regions: 1,
                safety_factor: 10,
                spell_level: 1,
            }),
    );
    kingdom.add_hero(Arc::new(
        Commander::hero(CommanderId(1), "Steward", color).with_role(HeroRole::Fighter),
    ));
    kingdom
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "kingdom_steward=info".into()),
        )
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => StewardConfig::load_from_toml(path)?,
        None => StewardConfig::default(),
    };
    if let Some(name) = &args.personality {
        config.personality = Personality::from_name(name)
            .ok_or_else(|| StewardError::Config(format!("Unknown personality: {}", name)))?;
    }
    if let Some(seed) = args.seed {
        config.ai_seed = seed;
    }
    let race = Race::from_name(&args.race)
        .filter(|race| *race != Race::Neutral)
        .ok_or_else(|| StewardError::Config(format!("Unknown race: {}", args.race)))?;

    tracing::info!(
        "Simulating {} days of a {} kingdom ({} personality, seed {})",
        args.days,
        race,
        config.personality,
        config.ai_seed
    );

    let mut kingdom = build_kingdom(race);
    let mut context = TurnContext::new(1, config.ai_seed);
    let mut planner = Planner::new(config);

    for day in 1..=args.days {
        kingdom.new_day();
        if day > 1 && (day - 1) % 7 == 0 {
            kingdom.new_week();
        }

        for report in planner.kingdom_turn(&mut kingdom, &mut context, &[]) {
            if report.is_empty() {
                continue;
            }
            let actions: Vec<String> = report.actions.iter().map(ToString::to_string).collect();
            println!("Day {:>3} {:<8} {}", day, report.settlement, actions.join(", "));
        }
        context.advance_day();
    }

    println!("\nFinal funds: {}", kingdom.funds());
    for town in kingdom.list_settlements() {
        let snapshot = town.snapshot();
        println!(
            "  {:<8} {} buildings, garrison {:?}",
            snapshot.name,
            snapshot.buildings.len(),
            snapshot.garrison.slots
        );
    }

    if args.json {
        println!("{}", kingdom.snapshot().to_json()?);
    }

    Ok(())
}
