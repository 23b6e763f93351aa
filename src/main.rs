use anyhow::Result;
use clap::{Parser, Subcommand};
use is_terminal::IsTerminal;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use unconflict::areas::resolver::Resolver;
use unconflict::artifacts::conflict::ConflictMarkers;
use unconflict::artifacts::plan::{DEFAULT_PLAN_FILE, ResolutionPlan};
use unconflict::commands::resolve::ResolveOptions;

const LOG_ENV: &str = "UNCONFLICT_LOG";

#[derive(Parser)]
#[command(
    name = "unconflict",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "Resolve merge conflict markers from a declarative plan",
    long_about = "This tool rewrites files containing merge conflict markers. \
    Each file listed in a resolution plan is resolved with the rules configured for it \
    and written back in place, or skipped with a reason when its markers are malformed \
    or a rule's pattern is missing.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[arg(short, long, global = true, action = clap::ArgAction::Count, help = "Increase log verbosity")]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "resolve",
        about = "Resolve all files listed in a plan",
        long_about = "This command resolves every file of the plan in order and prints one line per file \
        followed by a summary. Files that fail are left untouched."
    )]
    Resolve {
        #[arg(short, long, default_value = DEFAULT_PLAN_FILE, help = "The resolution plan")]
        plan: PathBuf,
        #[arg(short = 'n', long, help = "Resolve in memory without writing files")]
        dry_run: bool,
        #[arg(short, long, help = "Keep a copy of each original as <file>.orig")]
        backup: bool,
    },
    #[command(
        name = "inspect",
        about = "List the conflict regions of files",
        long_about = "This command prints the conflict regions found in each file without modifying it."
    )]
    Inspect {
        #[arg(short, long, help = "Read conflict markers from this plan")]
        plan: Option<PathBuf>,
        #[arg(index = 1, required = true, help = "The files to inspect")]
        files: Vec<PathBuf>,
    },
}

fn init_tracing(verbose: u8) {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        EnvFilter::new(match verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        })
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if !std::io::stdout().is_terminal() {
        colored::control::set_override(false);
    }

    let failed = match &cli.command {
        Commands::Resolve {
            plan,
            dry_run,
            backup,
        } => {
            let plan = ResolutionPlan::load(plan)?;
            let resolver = Resolver::new(
                plan.root(),
                plan.markers.clone(),
                Box::new(std::io::stdout()),
            );
            let options = ResolveOptions::new(*dry_run, *backup || plan.backup);

            resolver.resolve_plan(&plan, options)?.has_failures()
        }
        Commands::Inspect { plan, files } => {
            let markers = match plan {
                Some(plan) => ResolutionPlan::load(plan)?.markers,
                None => ConflictMarkers::default(),
            };
            let pwd = std::env::current_dir()?;
            let resolver = Resolver::new(&pwd, markers, Box::new(std::io::stdout()));

            resolver.inspect(files)? > 0
        }
    };

    Ok(if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}
