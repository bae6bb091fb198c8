//! axquery CLI.
//!
//! Operates on a JSON tree fixture so queries, dumps, and searches can be
//! exercised without a live platform connection.
//!
//! Usage examples:
//!   $ axquery tree --fixture window.json --max-depth 2
//!   $ axquery resolve --fixture window.json --query "AXGroup[0].AXButton[1]"
//!   $ axquery role --fixture window.json --role AXButton
//!   $ axquery text --fixture window.json --text submit
//!   $ axquery press --fixture window.json --query "AXGroup[0].AXButton[1]"

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use axquery::config::{InspectorConfig, Verbosity};
use axquery::element::ElementHandle;
use axquery::fixture::StaticTree;
use axquery::inspector::Inspector;
use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "axquery",
    author,
    version,
    about = "Accessibility tree addressing and inspection utilities"
)]
struct Cli {
    /// Increase log verbosity (pass twice for DEBUG).
    #[arg(long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Args)]
struct FixtureArgs {
    /// Path to a JSON tree fixture.
    #[arg(long)]
    fixture: PathBuf,
}

#[derive(Subcommand)]
enum Command {
    /// Print an indented dump of the tree, optionally below a query path.
    Tree {
        #[command(flatten)]
        fixture: FixtureArgs,
        /// Query path to descend to before dumping.
        #[arg(long)]
        query: Option<String>,
        /// Maximum dump depth (defaults to the configured depth).
        #[arg(long)]
        max_depth: Option<usize>,
    },
    /// Resolve a query path and describe the target element.
    Resolve {
        #[command(flatten)]
        fixture: FixtureArgs,
        #[arg(long)]
        query: String,
    },
    /// List all elements with the given role.
    Role {
        #[command(flatten)]
        fixture: FixtureArgs,
        #[arg(long)]
        role: String,
    },
    /// List all elements matching the given text.
    Text {
        #[command(flatten)]
        fixture: FixtureArgs,
        #[arg(long)]
        text: String,
    },
    /// Press the element at the query path.
    Press {
        #[command(flatten)]
        fixture: FixtureArgs,
        #[arg(long)]
        query: String,
    },
}

fn load_tree(args: &FixtureArgs) -> Result<StaticTree> {
    let text = fs::read_to_string(&args.fixture)
        .with_context(|| format!("failed to read fixture {}", args.fixture.display()))?;
    StaticTree::from_json(&text)
        .with_context(|| format!("failed to parse fixture {}", args.fixture.display()))
}

fn build_config(verbose: u8) -> Result<InspectorConfig> {
    let mut config = InspectorConfig::from_env().context("invalid environment configuration")?;
    match verbose {
        0 => {}
        1 => config.verbose = Verbosity::Medium,
        _ => config.verbose = Verbosity::Detailed,
    }
    Ok(config)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = build_config(cli.verbose)?;

    match cli.command {
        Command::Tree {
            fixture,
            query,
            max_depth,
        } => {
            let tree = load_tree(&fixture)?;
            let inspector = Inspector::with_config(&tree, config);
            let output = match query {
                Some(query) => inspector.describe(tree.root(), &query, max_depth),
                None => inspector.dump(tree.root(), max_depth),
            };
            print!("{output}");
        }
        Command::Resolve { fixture, query } => {
            let tree = load_tree(&fixture)?;
            let inspector = Inspector::with_config(&tree, config);
            match inspector.resolve(tree.root(), &query) {
                Ok(node) => {
                    let element = ElementHandle::new(&tree, node);
                    println!("{}{}", element.role(), element.annotation());
                }
                Err(err) => println!("{err}"),
            }
        }
        Command::Role { fixture, role } => {
            let tree = load_tree(&fixture)?;
            let inspector = Inspector::with_config(&tree, config);
            println!("{}", inspector.elements_of_role(tree.root(), &role));
        }
        Command::Text { fixture, text } => {
            let tree = load_tree(&fixture)?;
            let inspector = Inspector::with_config(&tree, config);
            println!("{}", inspector.elements_with_text(tree.root(), &text));
        }
        Command::Press { fixture, query } => {
            let tree = load_tree(&fixture)?;
            let inspector = Inspector::with_config(&tree, config);
            println!("{}", inspector.press(tree.root(), &query));
        }
    }

    Ok(())
}
