//! Club roster CLI
//!
//! Thin driver over `club_core`: seeds a demo roster, lists and searches
//! players, and runs free-agent signings against a roster file.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};

use club_core::{
    ContractedPlayer, FreeAgent, Goalkeeper, Player, Position, RosterManager, RosterStore,
};

#[derive(Parser)]
#[command(name = "club_cli")]
#[command(about = "Manage a football club roster file", long_about = None)]
struct Cli {
    /// Roster file to operate on
    #[arg(long, default_value = "roster.txt")]
    file: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a roster file with demo players
    Seed {
        /// Club name for the new roster
        #[arg(long, default_value = "Dynamo Kyiv")]
        club: String,

        /// Starting transfer budget
        #[arg(long, default_value = "25000000")]
        budget: f64,
    },

    /// Print every player in the roster
    Show {
        /// Sort by performance rating, best first
        #[arg(long, default_value = "false")]
        sorted: bool,
    },

    /// Search players by name substring
    Search {
        /// Case-insensitive name fragment
        query: String,
    },

    /// Filter players by status substring (e.g. "injured", "on loan")
    Status {
        /// Case-insensitive status fragment
        query: String,
    },

    /// Remove a player by id
    Remove {
        #[arg(long)]
        id: u32,
    },

    /// Age a player by one year (applies variant-specific value effects)
    Birthday {
        #[arg(long)]
        id: u32,
    },

    /// Sign a rostered free agent
    Sign {
        /// Id of the free agent in the roster
        #[arg(long)]
        id: u32,

        /// Salary offer; debited from the budget on acceptance
        #[arg(long)]
        offer: f64,

        /// Contract end date (YYYY-MM-DD)
        #[arg(long, default_value = "2027-06-30")]
        until: String,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Seed { club, budget } => {
            let mut roster = RosterManager::new(&club, budget)?;
            seed_demo(&mut roster)?;
            RosterStore::save_to_path(&cli.file, &roster)?;
            println!("Seeded {} players for {} into {}", roster.len(), club, cli.file.display());
        }

        Commands::Show { sorted } => {
            let mut roster = load(&cli.file)?;
            if sorted {
                roster.sort_by_performance_rating();
            }
            println!("{} | budget {:.2}", roster.club_name(), roster.transfer_budget());
            for player in roster.players() {
                println!("  {}", player.describe());
            }
        }

        Commands::Search { query } => {
            let roster = load(&cli.file)?;
            let hits = roster.search_by_name(&query);
            println!("{} player(s) matching {:?}:", hits.len(), query);
            for player in hits {
                println!("  {}", player.describe());
            }
        }

        Commands::Status { query } => {
            let roster = load(&cli.file)?;
            let hits = roster.filter_by_status(&query);
            println!("{} player(s) with status matching {:?}:", hits.len(), query);
            for player in hits {
                println!("  {} [{}]", player.describe(), player.status());
            }
        }

        Commands::Remove { id } => {
            let mut roster = load(&cli.file)?;
            let removed = roster.remove_players(id);
            if removed == 0 {
                bail!("no player with id {} in {}", id, cli.file.display());
            }
            RosterStore::save_to_path(&cli.file, &roster)?;
            println!("Removed player {}", id);
        }

        Commands::Birthday { id } => {
            let mut roster = load(&cli.file)?;
            let player = roster.player_mut(id)?;
            player.celebrate_birthday();
            let line = player.describe();
            RosterStore::save_to_path(&cli.file, &roster)?;
            println!("{}", line);
        }

        Commands::Sign { id, offer, until } => {
            let mut roster = load(&cli.file)?;
            let agent = match roster.find_by_id(id) {
                Some(Player::FreeAgent(agent)) => agent.clone(),
                Some(other) => bail!("player {} ({}) is not a free agent", id, other.name()),
                None => bail!("no player with id {} in {}", id, cli.file.display()),
            };

            let name = agent.base.name.clone();
            roster
                .sign_free_agent(agent, offer, &until)
                .with_context(|| format!("signing {} failed", name))?;
            RosterStore::save_to_path(&cli.file, &roster)?;
            println!(
                "Signed {} for {:.2} until {}; remaining budget {:.2}",
                name,
                offer,
                until,
                roster.transfer_budget()
            );
        }
    }

    Ok(())
}

fn load(path: &Path) -> Result<RosterManager> {
    let mut roster = RosterManager::new("Unknown", 0.0)?;
    RosterStore::load_from_path(path, &mut roster)
        .with_context(|| format!("failed to read roster file {}", path.display()))?;
    Ok(roster)
}

/// A small squad to demo every player variant.
fn seed_demo(roster: &mut RosterManager) -> Result<()> {
    let bushchan =
        Goalkeeper::new("Heorhii Bushchan", 30, "Ukraine", "Kyiv", 1.96, 85.0, 7_000_000.0)?;
    roster.add_player(bushchan.into())?;

    let mut zabarnyi = ContractedPlayer::new(
        "Illia Zabarnyi",
        22,
        "Ukraine",
        "Kyiv",
        1.89,
        80.0,
        28_000_000.0,
        Position::Defender,
        1_500_000.0,
        "2029-06-30",
    )?;
    zabarnyi.contract.set_club_name("Bournemouth")?;
    roster.add_player(zabarnyi.into())?;

    let malinovskyi = FreeAgent::new(
        "Ruslan Malinovskyi",
        31,
        "Ukraine",
        "Zhytomyr",
        1.81,
        79.0,
        10_000_000.0,
        Position::Midfielder,
        1_200_000.0,
        "Genoa",
    )?;
    roster.add_player(malinovskyi.into())?;

    let mut yaremchuk = ContractedPlayer::new(
        "Roman Yaremchuk",
        29,
        "Ukraine",
        "Lviv",
        1.91,
        82.0,
        6_000_000.0,
        Position::Forward,
        1_000_000.0,
        "2027-06-30",
    )?;
    yaremchuk.contract.set_club_name("Valencia")?;
    roster.add_player(yaremchuk.into())?;

    Ok(())
}
