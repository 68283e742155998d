use clap::Parser;
use rand::{rngs::StdRng, SeedableRng};
use slash_roll::Outcome;
use std::io::{self, BufRead, Write};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Commands to roll, e.g. "4d6kh3; strength". Starts a prompt when empty
    expressions: Vec<String>,

    /// Seed for reproducible rolls
    #[arg(short, long)]
    seed: Option<u64>,

    /// Print outcomes as JSON
    #[arg(short, long)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn print(cli: &Cli, outcome: &Outcome) -> Result<(), serde_json::Error> {
    if cli.json {
        println!("{}", serde_json::to_string(outcome)?);
    } else {
        println!("{}", outcome);
    }
    Ok(())
}

/// Rolls one command, reporting failures without stopping.
fn roll(cli: &Cli, command: &str, roller: &mut StdRng) -> Result<bool, serde_json::Error> {
    match slash_roll::roll_with(command, roller) {
        Ok(outcome) => {
            print(cli, &outcome)?;
            Ok(true)
        }
        Err(why) => {
            eprintln!("Unable to roll \"{}\": {}", command.trim(), why);
            Ok(false)
        }
    }
}

fn repl(cli: &Cli, roller: &mut StdRng) -> Result<(), Box<dyn std::error::Error>> {
    print!("> ");
    io::stdout().flush()?;
    for line in io::stdin().lock().lines() {
        let line = line?;
        if !line.trim().is_empty() {
            roll(cli, &line, roller)?;
        }
        print!("> ");
        io::stdout().flush()?;
    }
    println!();
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let mut roller = match cli.seed {
        Some(seed) => {
            info!(seed, "using seeded roller");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };

    if cli.expressions.is_empty() {
        return repl(&cli, &mut roller);
    }

    let mut failed = false;
    for command in &cli.expressions {
        failed |= !roll(&cli, command, &mut roller)?;
    }
    if failed {
        std::process::exit(1);
    }
    Ok(())
}
