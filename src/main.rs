use clap::error::ErrorKind as ClapErrorKind;
use clap::{Parser, Subcommand};
use is_terminal::IsTerminal;
use std::ffi::OsString;
use std::io::Write;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use twig::areas::repository::Repository;
use twig::artifacts::core::PagerWriter;
use twig::config::Config;
use twig::errors::{TwigError, TwigResult};

/// Every command name the front end recognizes
const COMMANDS: phf::Set<&'static str> = phf::phf_set! {
    "init", "add", "commit", "rm", "log", "global-log", "find", "status", "checkout",
    "branch", "rm-branch", "reset", "merge", "add-remote", "rm-remote", "push", "fetch", "pull",
};

#[derive(Parser)]
#[command(
    name = "twig",
    version,
    about = "A small local version-control system",
    long_about = "twig stores snapshots of the current directory as commits, \
    keeps them on named branches and merges branches with a three-way merge.",
    disable_help_subcommand = true,
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

COMMANDS:
{subcommands}

OPTIONS:
    {options}
"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(about = "Create a repository in the current directory")]
    Init,
    #[command(about = "Stage a file for the next commit")]
    Add {
        #[arg(index = 1)]
        file: String,
    },
    #[command(about = "Record the staged changes")]
    Commit {
        #[arg(index = 1, allow_hyphen_values = true)]
        message: String,
    },
    #[command(about = "Unstage a file, or stop tracking and delete it")]
    Rm {
        #[arg(index = 1)]
        file: String,
    },
    #[command(about = "Show the history of the current branch")]
    Log,
    #[command(about = "Show every commit ever made")]
    GlobalLog,
    #[command(about = "Print the IDs of all commits with the given message")]
    Find {
        #[arg(index = 1, allow_hyphen_values = true)]
        message: String,
    },
    #[command(about = "Show branches, staged, removed, modified and untracked files")]
    Status,
    #[command(
        about = "Restore a file or switch branches",
        long_about = "checkout -- <file>: restore a file from HEAD\n\
        checkout <commit> -- <file>: restore a file from a commit\n\
        checkout <branch>: switch to a branch"
    )]
    Checkout {
        #[arg(index = 1)]
        target: Option<String>,
        #[arg(index = 2, last = true)]
        file: Option<String>,
    },
    #[command(about = "Create a branch at HEAD")]
    Branch {
        #[arg(index = 1)]
        name: String,
    },
    #[command(about = "Delete a branch pointer")]
    RmBranch {
        #[arg(index = 1)]
        name: String,
    },
    #[command(about = "Move the current branch to a commit and check it out")]
    Reset {
        #[arg(index = 1)]
        commit: String,
    },
    #[command(about = "Merge a branch into the current branch")]
    Merge {
        #[arg(index = 1)]
        branch: String,
    },
    #[command(about = "Register a remote (unsupported)")]
    AddRemote { name: String, dir: String },
    #[command(about = "Forget a remote (unsupported)")]
    RmRemote { name: String },
    #[command(about = "Push a branch to a remote (unsupported)")]
    Push { remote: String, branch: String },
    #[command(about = "Fetch a branch from a remote (unsupported)")]
    Fetch { remote: String, branch: String },
    #[command(about = "Fetch and merge a branch from a remote (unsupported)")]
    Pull { remote: String, branch: String },
}

impl Commands {
    fn is_long_output(&self) -> bool {
        matches!(self, Commands::Log | Commands::GlobalLog)
    }
}

/// Parse argv, mapping every parser failure onto the fixed usage diagnostics
///
/// # Returns
///
/// None when clap already printed help or version text
fn parse_cli(args: &[OsString]) -> TwigResult<Option<Cli>> {
    let Some(command) = args.get(1) else {
        return Err(TwigError::NoCommand);
    };
    let command = command.to_string_lossy();
    if !command.starts_with('-') && !COMMANDS.contains(command.as_ref()) {
        return Err(TwigError::UnknownCommand);
    }

    match Cli::try_parse_from(args) {
        Ok(cli) => Ok(Some(cli)),
        Err(error)
            if matches!(
                error.kind(),
                ClapErrorKind::DisplayHelp | ClapErrorKind::DisplayVersion
            ) =>
        {
            error.print()?;
            Ok(None)
        }
        Err(error) if error.kind() == ClapErrorKind::InvalidSubcommand => {
            Err(TwigError::UnknownCommand)
        }
        Err(error) => {
            tracing::debug!(%error, "rejected command line");
            Err(TwigError::IncorrectOperands)
        }
    }
}

fn dispatch(repository: &mut Repository, command: Commands) -> TwigResult<()> {
    match command {
        Commands::Init => Ok(()),
        Commands::Add { file } => repository.add(&file),
        Commands::Commit { message } => repository.commit(&message),
        Commands::Rm { file } => repository.rm(&file),
        Commands::Log => repository.log(),
        Commands::GlobalLog => repository.global_log(),
        Commands::Find { message } => repository.find(&message),
        Commands::Status => repository.status(),
        Commands::Checkout { target, file } => match (target, file) {
            (None, Some(file)) => repository.checkout_file(&file, None),
            (Some(commit), Some(file)) => repository.checkout_file(&file, Some(&commit)),
            (Some(branch), None) => repository.checkout_branch(&branch),
            (None, None) => Err(TwigError::IncorrectOperands),
        },
        Commands::Branch { name } => repository.branch(&name),
        Commands::RmBranch { name } => repository.rm_branch(&name),
        Commands::Reset { commit } => repository.reset(&commit),
        Commands::Merge { branch } => repository.merge(&branch),
        Commands::AddRemote { name, dir } => repository.add_remote(&name, &dir),
        Commands::RmRemote { name } => repository.rm_remote(&name),
        Commands::Push { remote, branch } => repository.push(&remote, &branch),
        Commands::Fetch { remote, branch } => repository.fetch(&remote, &branch),
        Commands::Pull { remote, branch } => repository.pull(&remote, &branch),
    }
}

fn run(args: Vec<OsString>, config: Config) -> TwigResult<()> {
    let Some(cli) = parse_cli(&args)? else {
        return Ok(());
    };

    let is_terminal = std::io::stdout().is_terminal();
    colored::control::set_override(is_terminal);

    let pager = (cli.command.is_long_output() && is_terminal && !config.no_pager())
        .then(minus::Pager::new);
    let writer: Box<dyn Write> = match &pager {
        Some(pager) => Box::new(PagerWriter::new(pager.clone())),
        None => Box::new(std::io::stdout()),
    };

    let path = std::env::current_dir()?;
    let mut repository = match cli.command {
        Commands::Init => Repository::init(&path, config, writer)?,
        _ => Repository::open(&path, config, writer)?,
    };

    dispatch(&mut repository, cli.command)?;
    repository.persist()?;
    repository.writer().flush()?;

    if let Some(pager) = pager {
        minus::page_all(pager).map_err(anyhow::Error::from)?;
    }

    Ok(())
}

fn main() -> ExitCode {
    let config = match Config::load_from_env() {
        Ok(config) => config,
        Err(error) => {
            eprintln!("fatal: {error:#}");
            return ExitCode::FAILURE;
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(config.log_filter()))
        .with_writer(std::io::stderr)
        .init();

    match run(std::env::args_os().collect(), config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) if error.is_diagnostic() => {
            println!("{error}");
            ExitCode::SUCCESS
        }
        Err(error) => {
            eprintln!("fatal: {error:#}");
            ExitCode::FAILURE
        }
    }
}
