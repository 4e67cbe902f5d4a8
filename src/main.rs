use std::io;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::Editor;

use pagesim::common::types::{Page, DEFAULT_FRAME_COUNT};
use pagesim::policy::PolicyKind;
use pagesim::simulation::{compare, SimulationConfig, SimulationResult, Simulator};
use pagesim::{report, trace};

const HISTORY_FILE: &str = ".pagesim_history";

#[derive(Parser)]
#[command(author, version, about = "pagesim - FIFO and LRU page replacement simulator")]
struct Cli {
    /// Number of frames
    #[arg(short, long, default_value_t = DEFAULT_FRAME_COUNT, global = true)]
    frames: usize,

    /// Replacement policy
    #[arg(short, long, value_enum, default_value_t = PolicyKind::Fifo, global = true)]
    policy: PolicyKind,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table, global = true)]
    format: OutputFormat,

    /// Command to execute
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

#[derive(Args)]
struct TraceArgs {
    /// Page references, separated by spaces or commas
    #[arg(allow_negative_numbers = true)]
    pages: Vec<String>,

    /// Read references from a file instead
    #[arg(long, conflicts_with = "pages")]
    file: Option<PathBuf>,
}

impl TraceArgs {
    fn references(&self) -> Result<Vec<Page>> {
        match &self.file {
            Some(path) => trace::read_references(path)
                .with_context(|| format!("reading trace file {}", path.display())),
            None => Ok(trace::parse_references(&self.pages.join(" "))?),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive shell
    Shell,

    /// Simulate one policy and print every step
    Run {
        #[command(flatten)]
        trace: TraceArgs,
    },

    /// Compare fault counts of all policies over a range of frame counts
    Compare {
        #[command(flatten)]
        trace: TraceArgs,

        /// Largest frame count to try (defaults to the number of distinct pages)
        #[arg(long)]
        max_frames: Option<usize>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = SimulationConfig::new(cli.frames, cli.policy);

    match &cli.command {
        Some(Commands::Run { trace }) => {
            let result = Simulator::new(config)?.run(&trace.references()?)?;
            print_result(&result, cli.format)?;
        }
        Some(Commands::Compare { trace, max_frames }) => {
            let references = trace.references()?;
            print_comparison(&references, *max_frames, cli.format)?;
        }
        Some(Commands::Shell) | None => run_shell(config, cli.format)?,
    }

    Ok(())
}

fn print_result(result: &SimulationResult, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table => print!("{}", report::render_table(result)),
        OutputFormat::Json => println!("{}", report::render_json(result)?),
    }
    Ok(())
}

fn print_comparison(references: &[Page], max_frames: Option<usize>, format: OutputFormat) -> Result<()> {
    if references.is_empty() {
        bail!("reference sequence must not be empty");
    }

    let max_frames = max_frames.unwrap_or_else(|| trace::distinct_pages(references));
    let frame_counts: Vec<usize> = (1..=max_frames).collect();
    let rows = compare(references, &frame_counts, &PolicyKind::ALL)?;

    match format {
        OutputFormat::Table => print!("{}", report::render_comparison(&rows)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&rows)?),
    }
    Ok(())
}

/// Mutable state of an interactive session
struct Session {
    config: SimulationConfig,
    references: Vec<Page>,
    format: OutputFormat,
}

impl Session {
    fn execute(&mut self, line: &str) -> Result<()> {
        let (command, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));

        match command.to_lowercase().as_str() {
            "pages" => {
                self.references = trace::parse_references(rest)?;
                println!("{} references loaded", self.references.len());
            }
            "frames" => {
                self.config = self.config.with_frames(trace::parse_frame_count(rest)?);
                println!("frames = {}", self.config.frames);
            }
            "policy" => {
                self.config = self.config.with_policy(trace::parse_policy(rest)?);
                println!("policy = {}", self.config.policy);
            }
            "run" => {
                if !rest.trim().is_empty() {
                    self.references = trace::parse_references(rest)?;
                }
                let result = Simulator::new(self.config)?.run(&self.references)?;
                print_result(&result, self.format)?;
            }
            "compare" => print_comparison(&self.references, None, self.format)?,
            "show" => {
                println!("policy:     {}", self.config.policy);
                println!("frames:     {}", self.config.frames);
                println!("references: {:?}", self.references);
            }
            "help" => print_help(),
            other => bail!("unknown command '{}', type 'help' for assistance", other),
        }
        Ok(())
    }
}

fn run_shell(config: SimulationConfig, format: OutputFormat) -> Result<()> {
    println!("Welcome to pagesim. Type 'help' for assistance or 'exit' to quit.");

    let mut session = Session {
        config,
        references: Vec::new(),
        format,
    };

    let mut rl = Editor::<(), DefaultHistory>::new()?;
    match rl.load_history(HISTORY_FILE) {
        Ok(()) => {}
        Err(ReadlineError::Io(err)) if err.kind() == io::ErrorKind::NotFound => {}
        Err(err) => println!("Error loading history: {}", err),
    }

    loop {
        match rl.readline("pagesim> ") {
            Ok(line) => {
                let _ = rl.add_history_entry(&line);

                let line = line.trim();
                if line.is_empty() {
                    continue;
                }

                match line.to_lowercase().as_str() {
                    "exit" | "quit" => {
                        println!("Goodbye!");
                        break;
                    }
                    _ => {
                        if let Err(err) = session.execute(line) {
                            println!("Input error: {}", err);
                        }
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("CTRL-C");
                break;
            }
            Err(ReadlineError::Eof) => break,
            Err(err) => {
                println!("Error: {}", err);
                break;
            }
        }
    }

    if let Err(err) = rl.save_history(HISTORY_FILE) {
        println!("Error saving history: {}", err);
    }
    Ok(())
}

fn print_help() {
    println!("Available commands:");
    println!("  pages <refs...>      - Set the page reference string");
    println!("  frames <n>           - Set the number of frames");
    println!("  policy <fifo|lru>    - Select the replacement policy");
    println!("  run [refs...]        - Simulate and print every step");
    println!("  compare              - Fault counts for every policy and frame count");
    println!("  show                 - Display the current settings");
    println!("  help                 - Display this help message");
    println!("  exit                 - Exit the shell");
}
