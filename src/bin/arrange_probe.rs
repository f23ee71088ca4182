//! Neutral Arrangement Probe
//!
//! Prints the battle arrangement of a neutral encounter, either as text or
//! as the JSON army record.

use clap::Parser;
use serde::Serialize;

use kingdom_steward::army::{Army, BattleSeed, Monster};
use kingdom_steward::core::error::{Result, StewardError};
use kingdom_steward::core::types::LocationId;
use kingdom_steward::core::ArmyConfig;

/// Neutral Arrangement Probe - inspect seeded stack layouts
#[derive(Parser, Debug)]
#[command(name = "arrange_probe")]
#[command(about = "Show how a neutral stack is split into battle slots")]
struct Args {
    /// Creature name or numeric id
    #[arg(long, default_value = "archer")]
    monster: String,

    /// Total number of creatures
    #[arg(long, default_value_t = 17)]
    count: u32,

    /// Map seed
    #[arg(long, default_value_t = 0)]
    map_seed: u64,

    /// Map location of the encounter
    #[arg(long, default_value_t = 0)]
    location: u32,

    /// Allow the centre stack to be upgraded
    #[arg(long)]
    allow_upgrade: bool,

    /// Output format: json or text
    #[arg(long, default_value = "text")]
    format: String,
}

#[derive(Serialize)]
struct ProbeOutput {
    monster: String,
    count: u32,
    stacks: usize,
    slots: Vec<(String, u32)>,
    strength: f64,
}

fn find_monster(name: &str) -> Option<Monster> {
    if let Ok(id) = name.parse::<u32>() {
        return Monster::from_id(id);
    }
    let wanted = name.replace(['_', '-'], " ");
    Monster::ALL
        .iter()
        .copied()
        .find(|m| m.name().eq_ignore_ascii_case(&wanted))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("kingdom_steward=warn")
        .init();

    let args = Args::parse();
    let monster = find_monster(&args.monster)
        .ok_or_else(|| StewardError::Config(format!("Unknown monster: {}", args.monster)))?;

    let seed = BattleSeed::new(args.map_seed, LocationId(args.location));
    let army = Army::neutral(
        monster,
        args.count,
        seed,
        args.allow_upgrade,
        &ArmyConfig::default(),
    )?;

    let slots: Vec<(String, u32)> = army
        .troops()
        .slots()
        .iter()
        .map(|slot| slot.map_or((String::from("-"), 0), |t| (t.monster.to_string(), t.count)))
        .collect();
    let output = ProbeOutput {
        monster: monster.to_string(),
        count: args.count,
        stacks: army.troops().occupied_slot_count(),
        slots,
        strength: army.strength(),
    };

    if args.format == "json" {
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!(
            "{} x{} at {:?} (seed {}): {} stacks, strength {:.1}",
            output.monster,
            output.count,
            seed.location_id,
            seed.map_seed,
            output.stacks,
            output.strength
        );
        for (index, (name, count)) in output.slots.iter().enumerate() {
            println!("  slot {}: {:>6} {}", index, count, name);
        }
    }
    Ok(())
}
