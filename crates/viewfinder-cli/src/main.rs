//! CLI for querying view-hierarchy dump files.
//!
//! Runs button queries against a JSON hierarchy dump (see
//! `viewfinder_core::hierarchy`) from the command line.
//!
//! # Usage
//!
//! ```bash
//! # Find the first button titled "Login" (exit code 1 if absent)
//! viewfinder find screen.json --text Login
//!
//! # Find the first button whose image content matches a file
//! viewfinder find screen.json --image assets/cat.png
//!
//! # Yes/no answer; exit code mirrors it
//! viewfinder has screen.json --text "Sign In"
//!
//! # List every button, or only those in a given state
//! viewfinder list screen.json
//! viewfinder list screen.json --state disabled
//!
//! # Count buttons in a state
//! viewfinder count screen.json --state normal
//!
//! # JSON output for scripting
//! viewfinder --format json find screen.json --text Login
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use viewfinder_core::hierarchy::{self, HierarchyError};
use viewfinder_core::query::ButtonQueries;
use viewfinder_core::view::{Button, ControlState, Image, ViewNode};

/// Query buttons in a view-hierarchy dump.
#[derive(Parser)]
#[command(name = "viewfinder")]
#[command(about = "Query buttons in a JSON view-hierarchy dump")]
#[command(version)]
struct Cli {
    /// Output format: text or json
    #[arg(short, long, default_value = "text")]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// Button interaction states accepted on the command line.
#[derive(Clone, Copy, clap::ValueEnum)]
enum StateArg {
    Normal,
    Highlighted,
    Disabled,
    Selected,
    Focused,
    Application,
    Reserved,
}

impl From<StateArg> for ControlState {
    fn from(arg: StateArg) -> Self {
        match arg {
            StateArg::Normal => ControlState::Normal,
            StateArg::Highlighted => ControlState::Highlighted,
            StateArg::Disabled => ControlState::Disabled,
            StateArg::Selected => ControlState::Selected,
            StateArg::Focused => ControlState::Focused,
            StateArg::Application => ControlState::Application,
            StateArg::Reserved => ControlState::Reserved,
        }
    }
}

/// Exactly one of `--text` or `--image` selects the button.
#[derive(Args)]
#[group(required = true, multiple = false)]
struct Selector {
    /// Match by exact title text (case-sensitive, whole string)
    #[arg(short, long)]
    text: Option<String>,

    /// Match by image content read from a file
    #[arg(short, long, value_name = "FILE")]
    image: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Command {
    /// Print the first matching button; exit 1 when nothing matches
    Find {
        /// Path to the hierarchy dump (JSON)
        dump: PathBuf,
        #[command(flatten)]
        selector: Selector,
    },

    /// Print true/false; exit code mirrors the answer
    Has {
        /// Path to the hierarchy dump (JSON)
        dump: PathBuf,
        #[command(flatten)]
        selector: Selector,
    },

    /// List buttons in traversal order, optionally filtered by state
    List {
        /// Path to the hierarchy dump (JSON)
        dump: PathBuf,
        /// Only list buttons in this interaction state
        #[arg(short, long)]
        state: Option<StateArg>,
    },

    /// Count buttons in a given interaction state
    Count {
        /// Path to the hierarchy dump (JSON)
        dump: PathBuf,
        /// The interaction state to count
        #[arg(short, long)]
        state: StateArg,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            e.exit_code()
        }
    }
}

#[derive(Debug)]
enum CliError {
    Dump(HierarchyError),
    ImageFile(std::io::Error),
    Output(serde_json::Error),
}

impl CliError {
    fn exit_code(&self) -> ExitCode {
        match self {
            CliError::Dump(_) => ExitCode::from(2),
            CliError::ImageFile(_) => ExitCode::from(2),
            CliError::Output(_) => ExitCode::from(3),
        }
    }
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Dump(e) => write!(f, "Failed to load dump: {}", e),
            CliError::ImageFile(e) => write!(f, "Failed to read image file: {}", e),
            CliError::Output(e) => write!(f, "Failed to encode output: {}", e),
        }
    }
}

impl Selector {
    /// Resolves the selector against a tree. `--image` reads the file's
    /// bytes and matches by content equality.
    fn find<'a>(&self, root: &'a ViewNode) -> Result<Option<&'a Button>, CliError> {
        if let Some(text) = &self.text {
            return Ok(root.find_button_with_exact_text(text));
        }
        // The arg group guarantees an image path when text is absent.
        let path = self.image.as_ref().expect("selector group invariant");
        let bytes = std::fs::read(path).map_err(CliError::ImageFile)?;
        tracing::debug!(path = %path.display(), len = bytes.len(), "matching by image content");
        Ok(root.find_button_with_image(&Image::from_bytes(bytes)))
    }
}

fn run(cli: Cli) -> Result<ExitCode, CliError> {
    match cli.command {
        Command::Find { dump, selector } => {
            let root = hierarchy::load(dump).map_err(CliError::Dump)?;
            match selector.find(&root)? {
                Some(button) => {
                    print_button(button, cli.format)?;
                    Ok(ExitCode::SUCCESS)
                }
                None => {
                    if cli.format == OutputFormat::Json {
                        println!("null");
                    } else {
                        eprintln!("No matching button");
                    }
                    Ok(ExitCode::FAILURE)
                }
            }
        }

        Command::Has { dump, selector } => {
            let root = hierarchy::load(dump).map_err(CliError::Dump)?;
            let found = selector.find(&root)?.is_some();
            println!("{}", found);
            Ok(if found { ExitCode::SUCCESS } else { ExitCode::FAILURE })
        }

        Command::List { dump, state } => {
            let root = hierarchy::load(dump).map_err(CliError::Dump)?;
            let buttons = match state {
                Some(state) => root.find_buttons_with_state(state.into()),
                None => root.buttons(),
            };
            if cli.format == OutputFormat::Json {
                println!("{}", serde_json::to_string(&buttons).map_err(CliError::Output)?);
            } else {
                for button in buttons {
                    println!("{}", describe(button));
                }
            }
            Ok(ExitCode::SUCCESS)
        }

        Command::Count { dump, state } => {
            let root = hierarchy::load(dump).map_err(CliError::Dump)?;
            let count = root.find_buttons_with_state(state.into()).len();
            if cli.format == OutputFormat::Json {
                println!("{}", serde_json::json!({ "count": count }));
            } else {
                println!("{}", count);
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn print_button(button: &Button, format: OutputFormat) -> Result<(), CliError> {
    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string(button).map_err(CliError::Output)?);
    } else {
        println!("{}", describe(button));
    }
    Ok(())
}

/// One-line human-readable summary of a button.
fn describe(button: &Button) -> String {
    let title = button.title.as_deref().unwrap_or("<untitled>");
    let state = button.state.name();
    match button.image.as_ref().and_then(|i| i.name.as_deref()) {
        Some(image) => format!("button \"{}\" state={} image={}", title, state, image),
        None if button.image.is_some() => format!("button \"{}\" state={} image=<unnamed>", title, state),
        None => format!("button \"{}\" state={}", title, state),
    }
}
