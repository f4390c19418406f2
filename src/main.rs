//! Horde Companion - command line entry point
//!
//! Rolls spawns, reveals Misery cards and Secondary Missions, and settles
//! mission outcomes from the terminal. Pass `--seed` to replay a session.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use horde_companion::core::config::{self, EngineConfig};
use horde_companion::core::error::Result;
use horde_companion::core::types::{Language, MiseryCardId, MissionId};
use horde_companion::misery::{draw_misery_cards, MiseryCard};
use horde_companion::round::{start_of_round, RoundContext};
use horde_companion::secondary::{
    draw_secondary_missions, mission_resolution_timing, parse_misery_card_punishment,
    require_secondary_mission, ResolutionPass, ResolutionTiming, SecondaryMission,
};
use horde_companion::spawn::{zones_for_points_limit, SpawnResult, SpawnTables, NO_SPAWN};

/// Horde Mode campaign companion
#[derive(Parser, Debug)]
#[command(name = "horde")]
#[command(about = "Spawn Rolls, Misery cards and Secondary Missions for Horde Mode")]
struct Args {
    /// Engine config file (TOML)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Random seed for reproducible results
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Language for card text
    #[arg(long, global = true, value_enum, default_value_t = Lang::En)]
    lang: Lang,

    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Lang {
    En,
    Pt,
}

impl From<Lang> for Language {
    fn from(lang: Lang) -> Self {
        match lang {
            Lang::En => Language::En,
            Lang::Pt => Language::Pt,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Timing {
    EndOfTurn,
    EndOfRound,
}

impl From<Timing> for ResolutionTiming {
    fn from(timing: Timing) -> Self {
        match timing {
            Timing::EndOfTurn => ResolutionTiming::EndOfTurn,
            Timing::EndOfRound => ResolutionTiming::EndOfRound,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List factions with spawn tables
    Factions,

    /// Make one Spawn Roll
    Spawn {
        faction: String,
        #[arg(long, default_value_t = 1)]
        round: u32,
        /// Situational modifier, e.g. -1 from a mission reward
        #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
        modifier: i32,
    },

    /// Make a Spawn Roll for every spawning zone
    SpawnAll {
        faction: String,
        #[arg(long, default_value_t = 1)]
        round: u32,
        /// Game size; 1000 points uses 2 zones, anything else 4
        #[arg(long, default_value_t = 2000)]
        points: u32,
        #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
        modifier: i32,
    },

    /// Reveal Misery cards
    Misery {
        #[arg(default_value_t = 1)]
        count: usize,
        /// Ids of Misery cards already in play
        #[arg(long, value_delimiter = ',')]
        exclude: Vec<MiseryCardId>,
    },

    /// Reveal Secondary Missions
    Secondary {
        #[arg(default_value_t = 1)]
        count: usize,
        #[arg(long, default_value_t = 1)]
        round: u32,
        /// Ids of missions already revealed
        #[arg(long, value_delimiter = ',')]
        exclude: Vec<MissionId>,
    },

    /// Show when a Secondary Mission is resolved
    Timing { mission: MissionId },

    /// Count the Misery cards named in a punishment
    Punishment { text: String },

    /// Run the start-of-round reveal
    StartRound {
        round: u32,
        /// Misery cards owed by last round's failed missions
        #[arg(long, default_value_t = 0)]
        pending: u32,
        #[arg(long, value_delimiter = ',')]
        active_misery: Vec<MiseryCardId>,
        #[arg(long, value_delimiter = ',')]
        active_missions: Vec<MissionId>,
    },

    /// Settle a resolution pass
    Resolve {
        #[arg(long, value_enum, default_value_t = Timing::EndOfRound)]
        timing: Timing,
        #[arg(long, value_delimiter = ',')]
        succeeded: Vec<MissionId>,
        #[arg(long, value_delimiter = ',')]
        failed: Vec<MissionId>,
        #[arg(long, value_delimiter = ',')]
        active_misery: Vec<MiseryCardId>,
        /// Reveal owed Misery cards now even for an end-of-round pass
        #[arg(long)]
        reveal_now: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("horde_companion=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let mut engine_config = match &args.config {
        Some(path) => EngineConfig::load(path)?,
        None => EngineConfig::default(),
    };
    if args.seed.is_some() {
        engine_config.seed = args.seed;
    }
    if config::set_config(engine_config.clone()).is_err() {
        tracing::warn!("Engine config already set; keeping the first one");
    }

    let mut rng = match engine_config.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };
    let language = Language::from(args.lang);

    match args.command {
        Command::Factions => {
            let tables = SpawnTables::from_config(&engine_config)?;
            let factions = tables.factions();
            if args.json {
                println!("{}", serde_json::to_string_pretty(&factions)?);
            } else {
                for faction in factions {
                    println!("{}", faction);
                }
            }
        }

        Command::Spawn {
            faction,
            round,
            modifier,
        } => {
            let tables = SpawnTables::from_config(&engine_config)?;
            let result = tables.perform_spawn_roll(&faction, round, modifier, &mut rng)?;
            emit(args.json, &result, || print_spawn(1, &result))?;
        }

        Command::SpawnAll {
            faction,
            round,
            points,
            modifier,
        } => {
            let tables = SpawnTables::from_config(&engine_config)?;
            let zones = zones_for_points_limit(points);
            let results = tables.spawn_for_all_zones(&faction, round, zones, modifier, &mut rng)?;
            emit(args.json, &results, || {
                for (zone, result) in results.iter().enumerate() {
                    print_spawn(zone + 1, result);
                }
            })?;
        }

        Command::Misery { count, exclude } => {
            let cards = draw_misery_cards(count, &exclude, &mut rng);
            emit(args.json, &cards, || print_misery(&cards, language))?;
        }

        Command::Secondary {
            count,
            round,
            exclude,
        } => {
            let missions = draw_secondary_missions(count, round, &exclude, &mut rng)?;
            emit(args.json, &missions, || print_missions(&missions, language))?;
        }

        Command::Timing { mission } => {
            let mission = require_secondary_mission(mission)?;
            let timing = mission_resolution_timing(mission.id);
            emit(args.json, &timing, || {
                println!("{} resolves at {:?}", mission.name(language), timing)
            })?;
        }

        Command::Punishment { text } => {
            let count = parse_misery_card_punishment(&text);
            emit(args.json, &count, || println!("{} Misery card(s)", count))?;
        }

        Command::StartRound {
            round,
            pending,
            active_misery,
            active_missions,
        } => {
            let context = RoundContext {
                active_misery_ids: &active_misery,
                active_mission_ids: &active_missions,
                pending_misery_cards: pending,
            };
            let start = start_of_round(&engine_config, round, &context, &mut rng)?;
            emit(args.json, &start, || {
                println!(
                    "Battle round {} (Spawn Roll modifier +{})",
                    start.round, start.spawn_modifier
                );
                print_misery(&start.misery_cards, language);
                print_missions(&start.secondary_missions, language);
            })?;
        }

        Command::Resolve {
            timing,
            succeeded,
            failed,
            active_misery,
            reveal_now,
        } => {
            let timing = ResolutionTiming::from(timing);
            let verdicts: Vec<(MissionId, bool)> = succeeded
                .iter()
                .map(|&id| (id, true))
                .chain(failed.iter().map(|&id| (id, false)))
                .collect();

            let mut active = Vec::with_capacity(verdicts.len());
            let mut judged = Vec::with_capacity(verdicts.len());
            for &(id, success) in &verdicts {
                let mission = require_secondary_mission(id)?;
                if mission.timing == timing {
                    active.push(mission);
                    judged.push((id, success));
                } else {
                    tracing::warn!(
                        "Mission {} resolves at {:?}; skipped in the {:?} pass",
                        id,
                        mission.timing,
                        timing
                    );
                }
            }

            let mut pass = ResolutionPass::new(&active, timing);
            for (id, success) in judged {
                pass.resolve(id, success)?;
            }

            let settlement = if reveal_now {
                pass.settle_now(&active_misery, &mut rng)
            } else {
                pass.settle(&active_misery, &mut rng)
            };
            // Every mission in the pass has a verdict, so the pass always settles
            if let Some(settlement) = settlement {
                emit(args.json, &settlement, || {
                    println!(
                        "Completed: {:?}  Failed: {:?}  Misery cards owed: {}",
                        settlement.completed_mission_ids,
                        settlement.failed_mission_ids,
                        settlement.misery_cards_owed
                    );
                    if settlement.deferred {
                        println!(
                            "Carry {} Misery card(s) into next round (start-round --pending)",
                            settlement.misery_cards_owed
                        );
                    } else {
                        print_misery(&settlement.revealed, language);
                    }
                })?;
            }
        }
    }

    Ok(())
}

/// Print a value as JSON or through the text printer
fn emit<T: Serialize>(json: bool, value: &T, text: impl FnOnce()) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(value)?);
    } else {
        text();
    }
    Ok(())
}

fn print_spawn(zone: usize, result: &SpawnResult) {
    let unit = result.selected_unit.as_deref().unwrap_or(NO_SPAWN);
    println!(
        "Zone {}: rolled {} (modified {}) -> bracket {} -> {}",
        zone, result.roll, result.modified_roll, result.bracket, unit
    );
}

fn print_misery(cards: &[&MiseryCard], language: Language) {
    if cards.is_empty() {
        println!("No Misery cards revealed");
    }
    for card in cards {
        println!("[Misery {}] {}", card.id, card.name(language));
        println!("    {}", card.effect(language));
    }
}

fn print_missions(missions: &[&SecondaryMission], language: Language) {
    if missions.is_empty() {
        println!("No Secondary Missions revealed");
    }
    for mission in missions {
        println!(
            "[Mission {}] {} ({:?})",
            mission.id,
            mission.name(language),
            mission.timing
        );
        println!("    Condition: {}", mission.condition(language));
        println!("    Reward: {}", mission.reward(language));
        println!("    Punishment: {}", mission.punishment(language));
    }
}
