use clap::Parser;
use ems::{compile, count_notes, read_tempo, render, EmsError, OutputConfig, OutputFormat};
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process;

/// Compile an Embedded Music Score into a table of (ratio, duration) events.
#[derive(Parser, Debug)]
#[command(name = "ems", version, about)]
struct Cli {
    /// Score file to compile ("-" or omitted reads stdin)
    input: Option<PathBuf>,

    /// Inline score text instead of a file
    #[arg(short, long, conflicts_with = "input")]
    expr: Option<String>,

    /// Output format (overrides the config file)
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Frequency of ratio 1.0 in Hz (overrides the config file)
    #[arg(short, long)]
    reference_hz: Option<f32>,

    /// YAML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Only print the tempo and number of notes
    #[arg(long)]
    count: bool,
}

fn read_score(cli: &Cli) -> Result<String, EmsError> {
    if let Some(expr) = &cli.expr {
        return Ok(expr.clone());
    }
    match &cli.input {
        Some(path) if path.as_os_str() != "-" => {
            fs::read_to_string(path).map_err(|source| EmsError::Io {
                path: path.display().to_string(),
                source,
            })
        }
        _ => {
            let mut score = String::new();
            io::stdin()
                .read_to_string(&mut score)
                .map_err(|source| EmsError::Io {
                    path: "<stdin>".to_string(),
                    source,
                })?;
            Ok(score)
        }
    }
}

fn load_config(cli: &Cli) -> Result<OutputConfig, EmsError> {
    let mut config = match &cli.config {
        Some(path) => OutputConfig::load(path)?,
        None => OutputConfig::default(),
    };
    if let Some(format) = cli.format {
        config.format = format;
    }
    if let Some(reference_hz) = cli.reference_hz {
        config.reference_hz = reference_hz;
    }
    config.validate()?;
    Ok(config)
}

fn run(cli: &Cli) -> Result<(), EmsError> {
    let config = load_config(cli)?;
    let score = read_score(cli)?;

    let tempo = read_tempo(&score);
    let count = count_notes(&score);

    if cli.count {
        println!("tempo: {} bpm, notes: {}", tempo, count);
        return Ok(());
    }

    let notes = compile(&score);
    eprintln!(
        "Compiled {} notes at {} bpm ({} ms total)",
        notes.len(),
        tempo,
        notes.total_duration_ms()
    );

    print!("{}", render(&notes, &config)?);
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("error: {}", e);
        process::exit(1);
    }
}
