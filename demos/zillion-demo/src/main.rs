//! Zillion Demo Application
//!
//! Names powers of ten:
//! - One-shot: `zillion-demo 100` prints the name and digits of 10^100
//! - Interactive: type zeros on a keypad and watch the name change

mod keypad;

use std::io::{self, BufRead, Write};

use clap::Parser;
use tracing_subscriber::EnvFilter;

use zillion_core::{DashMode, NamingConfig, OverflowPolicy, ZeroCount};
use zillion_naming::{Namer, NumberReport};

use keypad::{Command, Keypad};

#[derive(Parser)]
#[command(name = "zillion-demo")]
#[command(about = "Name really big powers of ten", long_about = None)]
#[command(version)]
struct Cli {
    /// Zero counts to name (interactive keypad when omitted)
    zeros: Vec<String>,

    /// Join morphemes without dashes ("unvigintillion")
    #[arg(long)]
    joined: bool,

    /// Limit counts to one millinillion (3003 zeros)
    #[arg(long, conflicts_with = "max")]
    classic: bool,

    /// Custom maximum zero count
    #[arg(long)]
    max: Option<u64>,

    /// Fail on counts above the maximum instead of clamping
    #[arg(long)]
    reject: bool,
}

impl Cli {
    fn config(&self) -> NamingConfig {
        let mut config = if self.classic {
            NamingConfig::classic()
        } else {
            NamingConfig::extended()
        };
        if let Some(max) = self.max {
            config = config.with_max_zeros(max);
        }
        if self.reject {
            config = config.with_overflow(OverflowPolicy::Reject);
        }
        config.with_dash_mode(if self.joined {
            DashMode::Joined
        } else {
            DashMode::Dashed
        })
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let namer = Namer::with_config(cli.config());

    if cli.zeros.is_empty() {
        return run_keypad(namer);
    }

    for raw in &cli.zeros {
        let zeros: ZeroCount = raw.parse()?;
        print_report(&namer.report(zeros)?);
    }
    Ok(())
}

fn run_keypad(mut namer: Namer) -> Result<(), Box<dyn std::error::Error>> {
    println!("╔════════════════════════════════════════════════════════════╗");
    println!("║              Zillion - Big Number Namer                    ║");
    println!("╚════════════════════════════════════════════════════════════╝");
    print_help(namer.config().max_zeros);

    let mut keypad = Keypad::new(namer.entry(), namer.config().dash_mode);
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("zeros [{}]> ", keypad.entry.text());
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;

        let Some(command) = Command::parse(&line) else {
            println!("Unknown command (h for help)");
            continue;
        };
        match command {
            Command::Quit => break,
            Command::Help => {
                print_help(namer.config().max_zeros);
                continue;
            }
            _ => {}
        }

        match keypad.apply(&command) {
            Ok(change) => tracing::debug!(?command, ?change, "keypad"),
            Err(e) => {
                println!("{}", e);
                continue;
            }
        }

        namer.set_dash_mode(keypad.dash_mode);
        print_report(&namer.report(keypad.entry.value())?);
    }

    println!("Goodbye!");
    Ok(())
}

fn print_report(report: &NumberReport) {
    println!();
    match &report.digits {
        Some(digits) => println!("  {}", digits),
        None => println!("  1 followed by {} zeros", report.zeros),
    }
    println!("  {}", report.name);
    if report.clamped {
        println!("  (limited to {} zeros)", report.zeros);
    }
    if let Some(landmark) = report.landmark {
        println!("  * {} *", landmark);
    }
    println!();
}

fn print_help(max: ZeroCount) {
    println!();
    println!("  <digits>   type zeros (up to {})", max);
    println!("  + / -      add or remove one zero");
    println!("  b          backspace");
    println!("  c          clear");
    println!("  d          toggle dashes");
    println!("  /set <n>   replace the count");
    println!("  q          quit");
    println!();
}
