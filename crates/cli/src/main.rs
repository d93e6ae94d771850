use clap::{Parser, Subcommand};
use lib::adapters::{get_adapter, AdapterKind, AdapterOptions};
use lib::output::{write_output, WriteMode};
use lib::skills::{load_skill_pack, load_skill_packs, resolve_skill_dir, Tier};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "agentic-templates")]
#[command(about = "Render skill packs into configuration for AI coding assistants", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show version
    Version,

    /// Create the configuration directory, a default config, and the bundled skill packs.
    Init {
        /// Config file path (default: AGENTIC_TEMPLATES_CONFIG_PATH or ~/.agentic-templates/config.json)
        #[arg(long, short, value_name = "PATH")]
        config: Option<PathBuf>,
    },

    /// List the available adapters.
    Adapters,

    /// List the skill packs in the configured skills directory.
    Skills {
        /// Config file path (default: AGENTIC_TEMPLATES_CONFIG_PATH or ~/.agentic-templates/config.json)
        #[arg(long, short, value_name = "PATH")]
        config: Option<PathBuf>,
    },

    /// Render a skill pack with one adapter and write the files into a project.
    Adapt {
        /// Skill pack directory, or the name of a pack in the skills directory.
        skill: String,

        /// Adapter name (default from config, else raw).
        #[arg(long, short)]
        adapter: Option<String>,

        /// Prompt tier: minimal, standard or comprehensive (default from config, else the adapter's).
        #[arg(long, short)]
        tier: Option<Tier>,

        /// Project root to write into (default: current directory).
        #[arg(long, value_name = "DIR")]
        target: Option<PathBuf>,

        /// Print what would be written without writing.
        #[arg(long)]
        dry_run: bool,

        /// Overwrite files that already exist.
        #[arg(long)]
        force: bool,

        /// Config file path (default: AGENTIC_TEMPLATES_CONFIG_PATH or ~/.agentic-templates/config.json)
        #[arg(long, short, value_name = "PATH")]
        config: Option<PathBuf>,
    },
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Version) => {
            println!("agentic-templates {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Some(Commands::Init { config }) => run_init(config),
        Some(Commands::Adapters) => {
            for kind in AdapterKind::ALL {
                println!("{}", kind);
            }
            Ok(())
        }
        Some(Commands::Skills { config }) => run_skills(config),
        Some(Commands::Adapt {
            skill,
            adapter,
            tier,
            target,
            dry_run,
            force,
            config,
        }) => run_adapt(AdaptArgs {
            skill,
            adapter,
            tier,
            target,
            mode: WriteMode { dry_run, force },
            config,
        }),
        None => {
            println!("Run with --help for usage");
            Ok(())
        }
    };

    if let Err(e) = result {
        log::error!("{:#}", e);
        std::process::exit(1);
    }
}

fn run_init(config_path: Option<PathBuf>) -> anyhow::Result<()> {
    let path = config_path.unwrap_or_else(lib::config::default_config_path);
    let skills_dir = lib::init::init_config_dir(&path)?;
    println!("initialized configuration at {}", path.display());
    println!("skill packs in {}", skills_dir.display());
    Ok(())
}

fn run_skills(config_path: Option<PathBuf>) -> anyhow::Result<()> {
    let (config, path) = lib::config::load_config(config_path)?;
    let skills_dir = lib::config::resolve_skills_dir(&config, &path);
    let packs = load_skill_packs(&skills_dir);
    if packs.is_empty() {
        println!("no skill packs in {} (run `agentic-templates init`)", skills_dir.display());
    }
    for pack in packs {
        println!("{} v{}  {}", pack.name, pack.version, pack.description.short);
    }
    Ok(())
}

struct AdaptArgs {
    skill: String,
    adapter: Option<String>,
    tier: Option<Tier>,
    target: Option<PathBuf>,
    mode: WriteMode,
    config: Option<PathBuf>,
}

fn run_adapt(args: AdaptArgs) -> anyhow::Result<()> {
    let (config, path) = lib::config::load_config(args.config)?;
    let adapter_name = config.adapter_name(args.adapter.as_deref());
    let adapter = get_adapter(adapter_name)?;
    let tier = config.tier(args.tier);

    let skills_dir = lib::config::resolve_skills_dir(&config, &path);
    let skill_dir = resolve_skill_dir(&args.skill, &skills_dir);
    let pack = load_skill_pack(&skill_dir, tier)?;
    log::debug!("rendering {} with {}", pack.name, adapter_name);

    let output = adapter(&pack, &AdapterOptions { tier });
    let target = match args.target {
        Some(t) => t,
        None => std::env::current_dir()?,
    };
    let written = write_output(&target, &output, args.mode)?;

    println!("{}", output.summary);
    let verb = if args.mode.dry_run { "would write" } else { "wrote" };
    for p in written {
        println!("  {} {}", verb, p.display());
    }
    Ok(())
}
