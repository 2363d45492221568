// Tapedeck: stepping debugger for the tape language

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use tapedeck::interpreter::config::EngineConfig;
use tapedeck::interpreter::constants::BATCH_SIZE;
use tapedeck::program::check_brackets;
use tapedeck::ui::App;
use tapedeck::{Engine, TickOutcome};

#[derive(Parser)]
#[command(name = "tapedeck", about = "Step through, run and inspect tape-language programs")]
struct Cli {
    /// Program source file.
    file: PathBuf,

    /// Input text consumed by `,` instructions.
    #[arg(long, conflicts_with = "input_file")]
    input: Option<String>,

    /// Read the program input from a file instead.
    #[arg(long)]
    input_file: Option<PathBuf>,

    /// Run to completion without the TUI and print the output.
    #[arg(long)]
    headless: bool,

    /// Milliseconds between batches of a continuous run.
    #[arg(long, default_value_t = 100)]
    tick_ms: u64,

    /// Max steps executed per batch.
    #[arg(long, default_value_t = BATCH_SIZE)]
    batch_size: usize,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if !cli.file.exists() {
        eprintln!("Error: File '{}' not found", cli.file.display());
        std::process::exit(1);
    }

    eprintln!("Loading {}...", cli.file.display());
    let source = fs::read_to_string(&cli.file)?;
    let input = match (&cli.input, &cli.input_file) {
        (Some(text), _) => text.clone(),
        (None, Some(path)) => fs::read_to_string(path)?,
        (None, None) => String::new(),
    };

    let config = EngineConfig::default()
        .with_tick_interval(Duration::from_millis(cli.tick_ms))
        .with_batch_size(cli.batch_size);
    let engine = Engine::with_config(config);

    if cli.headless {
        return run_headless(engine, &source, &input);
    }

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(engine, source, input);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}

/// Drive the engine to completion, sleeping between batches
fn run_headless(
    mut engine: Engine,
    source: &str,
    input: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    if let Err(e) = check_brackets(source) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    engine.start(source, input)?;
    engine.run_to_end()?;

    while let Some(wait) = engine.next_tick_in() {
        std::thread::sleep(wait);
        match engine.poll() {
            Some(TickOutcome::Faulted(e)) => {
                eprintln!("Runtime error: {}", e);
                std::process::exit(1);
            }
            Some(TickOutcome::Finished) => eprintln!("Execution completed successfully."),
            _ => {}
        }
    }

    let mut stdout = io::stdout();
    stdout.write_all(engine.output().as_bytes())?;
    stdout.flush()?;
    Ok(())
}
