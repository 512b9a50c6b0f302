//! solo CLI
//!
//! Shows the process-wide logger in use.
//!
//! ## Usage
//!
//! ```bash
//! # Two references, one buffer (the default command)
//! solo demo
//!
//! # Ten threads racing on first use of the logger
//! solo race --threads 10
//! ```
//!
//! Diagnostics go to stderr; `-v`, `-vv`, `-vvv` or `RUST_LOG` control them.

use std::sync::{Condvar, Mutex, PoisonError};
use std::thread;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use solo_core::{ensure, InitOutcome};
use solo_logger::Logger;
use tracing::{debug, info};

/// solo - a process-wide singleton logger
#[derive(Parser)]
#[command(name = "solo")]
#[command(version)]
#[command(about = "solo - a process-wide singleton logger")]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Log through two references and print the shared buffer
    Demo,

    /// Race several threads on first use of the logger
    Race {
        /// Number of threads requesting the logger at once
        #[arg(short, long, default_value_t = 10)]
        threads: usize,

        /// Stack size in bytes for each worker thread (default: platform default)
        #[arg(long)]
        stack_size: Option<usize>,
    },
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .init();
}

/// Console line printed by a worker for its access outcome.
fn outcome_line(outcome: InitOutcome) -> &'static str {
    match outcome {
        InitOutcome::Created => "Creating single instance now.",
        InitOutcome::AlreadyCreated => "Single instance already created.",
    }
}

fn run_demo() -> Result<()> {
    let logger1 = Logger::get_instance();
    logger1.log("First message.");

    let logger2 = Logger::get_instance();
    logger2.log("Second message.");

    let same = Logger::same_instance(logger1, logger2);
    info!(same, messages = logger1.len(), "demo finished logging");

    println!("Are logger1 and logger2 the same instance? {same}");
    logger1.print_messages()?;
    Ok(())
}

fn check_threads(threads: usize) -> solo_core::Result<usize> {
    ensure!(threads >= 1, "--threads must be at least 1, got {threads}");
    Ok(threads)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GateState {
    Closed,
    Open,
    Aborted,
}

/// Start signal for the racing workers.
///
/// Workers block in [`StartGate::wait`] until the main thread either opens
/// the gate (every worker was spawned) or aborts it (a spawn failed).
struct StartGate {
    state: Mutex<GateState>,
    changed: Condvar,
}

impl StartGate {
    fn new() -> Self {
        Self {
            state: Mutex::new(GateState::Closed),
            changed: Condvar::new(),
        }
    }

    fn set(&self, state: GateState) {
        *self.state.lock().unwrap_or_else(PoisonError::into_inner) = state;
        self.changed.notify_all();
    }

    fn open(&self) {
        self.set(GateState::Open);
    }

    fn abort(&self) {
        self.set(GateState::Aborted);
    }

    /// Block while the gate is closed; `true` if it opened, `false` if aborted.
    fn wait(&self) -> bool {
        let guard = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        let guard = self
            .changed
            .wait_while(guard, |s| *s == GateState::Closed)
            .unwrap_or_else(PoisonError::into_inner);
        *guard == GateState::Open
    }
}

/// Spawn `threads` workers that request the logger together.
///
/// `builder_for(i)` configures worker `i`. If any spawn fails, the workers
/// already started are released without touching the logger and the spawn
/// error is returned.
fn race_workers<B>(threads: usize, mut builder_for: B) -> Result<Vec<InitOutcome>>
where
    B: FnMut(usize) -> thread::Builder,
{
    let gate = StartGate::new();

    thread::scope(|s| {
        let mut workers = Vec::with_capacity(threads);
        for i in 0..threads {
            let gate = &gate;
            let spawned = builder_for(i)
                .name(format!("race-{i}"))
                .spawn_scoped(s, move || {
                    if !gate.wait() {
                        return None;
                    }
                    let (logger, outcome) = Logger::get_instance_with_outcome();
                    println!("{}", outcome_line(outcome));
                    logger.log(format!("worker {i} checked in."));
                    debug!(worker = i, ?outcome, "worker done");
                    Some(outcome)
                });
            match spawned {
                Ok(worker) => workers.push(worker),
                Err(err) => {
                    gate.abort();
                    return Err(err)
                        .with_context(|| format!("failed to start worker {i} of {threads}"));
                }
            }
        }

        gate.open();
        workers
            .into_iter()
            .map(|w| {
                w.join()
                    .map_err(|_| anyhow::anyhow!("worker thread panicked"))?
                    .context("worker was released without running")
            })
            .collect()
    })
}

fn run_race(threads: usize, stack_size: Option<usize>) -> Result<()> {
    let threads = check_threads(threads)?;

    let outcomes = race_workers(threads, |_| {
        let builder = thread::Builder::new();
        match stack_size {
            Some(bytes) => builder.stack_size(bytes),
            None => builder,
        }
    })?;

    let created = outcomes.iter().filter(|o| o.is_created()).count();
    info!(threads, created, "race finished");

    Logger::get_instance().print_messages()?;
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    match cli.command.unwrap_or(Commands::Demo) {
        Commands::Demo => run_demo(),
        Commands::Race {
            threads,
            stack_size,
        } => run_race(threads, stack_size),
    }
}
