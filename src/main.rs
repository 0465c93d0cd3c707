use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use xpquest::SkillType;
use xpquest::config::Config;
use xpquest::progression::streaks;
use xpquest::store::{self, StateStore};

mod cli;

#[derive(Parser)]
#[command(name = "xpquest")]
#[command(about = "XPQuest - turn daily habits into quests, earn XP and level up")]
#[command(version)]
struct Cli {
    /// Directory holding the state document (defaults to ~/.xpquest)
    #[arg(short, long, global = true)]
    data_dir: Option<PathBuf>,

    /// Path to the config file (defaults to ~/.xpquest/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a new daily quest
    Add {
        /// Quest name
        name: String,

        /// Skill trained by this quest (strength, intelligence, wisdom, charisma, agility)
        #[arg(short = 't', long = "type")]
        skill: SkillType,

        /// XP granted on completion (1-100)
        #[arg(short, long)]
        xp: Option<u32>,
    },

    /// Edit a quest's name, skill or XP reward
    Edit {
        /// Quest id (or unique prefix)
        id: String,

        #[arg(short, long)]
        name: Option<String>,

        #[arg(short = 't', long = "type")]
        skill: Option<SkillType>,

        #[arg(short, long)]
        xp: Option<u32>,
    },

    /// Delete a quest
    Remove {
        /// Quest id (or unique prefix)
        id: String,
    },

    /// Mark a quest as done for today
    Complete {
        /// Quest id (or unique prefix)
        id: String,
    },

    /// List today's quests
    List,

    /// Show level, XP, streak and stats
    Status,

    /// Show the last 7 days of completions
    History,

    /// Mark every quest as not done (happens automatically each new day)
    Reset,

    /// Dismiss the level-up notice
    Ack,

    /// Copy the state document to a backup file
    Export {
        /// Target file (defaults to ./xpquest-backup.json)
        path: Option<PathBuf>,
    },

    /// Set the character avatar from an image file
    Avatar {
        /// Image file (jpeg, png, gif or webp, max 5MB)
        file: Option<PathBuf>,

        /// Remove the current avatar
        #[arg(long, conflicts_with = "file")]
        clear: bool,
    },

    /// Create a default ~/.xpquest/config.toml
    Init {
        /// Overwrite existing config file
        #[arg(long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Some(Commands::Init { force }) = cli.command {
        return cli::init::init_command(cli.config.as_deref(), force);
    }

    let config = Config::load(cli.config.as_deref())?;
    let store = StateStore::open(config.data_dir(cli.data_dir.as_ref()));

    // New session: close out yesterday if the day changed
    store::ensure_daily_reset(&store, streaks::today())?;

    match cli.command {
        Some(Commands::Add { name, skill, xp }) => {
            let xp = xp.unwrap_or(config.settings.default_xp_reward);
            cli::habit::add_command(&store, name, skill, xp)?;
        }
        Some(Commands::Edit {
            id,
            name,
            skill,
            xp,
        }) => {
            cli::habit::edit_command(&store, &id, name, skill, xp)?;
        }
        Some(Commands::Remove { id }) => {
            cli::habit::remove_command(&store, &id)?;
        }
        Some(Commands::Complete { id }) => {
            cli::habit::complete_command(&store, &id)?;
        }
        Some(Commands::List) => {
            cli::habit::list_command(&store)?;
        }
        Some(Commands::Status) | None => {
            cli::status::status_command(&store)?;
        }
        Some(Commands::History) => {
            cli::status::history_command(&store)?;
        }
        Some(Commands::Reset) => {
            cli::reset::reset_command(&store)?;
        }
        Some(Commands::Ack) => {
            cli::reset::ack_command(&store)?;
        }
        Some(Commands::Export { path }) => {
            cli::export::export_command(&store, path)?;
        }
        Some(Commands::Avatar { file, clear }) => {
            cli::avatar::avatar_command(&store, file.as_deref(), clear, config.avatar.options())?;
        }
        // Handled above, before any state is touched
        Some(Commands::Init { .. }) => {}
    }

    Ok(())
}
