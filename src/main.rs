use clap::Parser;
use std::error::Error;
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

use hp85662a::display::TermPlotter;
use hp85662a::input::{Input, KeyboardInput};
use hp85662a::{render, RecordingSink, RenderOptions, RenderReport, ScreenMemory, WordOrder};

#[derive(Parser, Debug)]
#[command(
    name = "hp85662a",
    about = "Render an HP85662A display-processor memory dump."
)]
struct Args {
    /// Raw screen memory dump: 4096 words, two bytes each.
    dump: PathBuf,

    /// Words in the dump are big-endian (default little-endian).
    #[arg(long)]
    big_endian: bool,

    /// JSON file with render options; missing fields keep their defaults.
    #[arg(long, value_name = "PATH")]
    options: Option<PathBuf>,

    /// Instructions per pass before giving up on a runaway program.
    #[arg(long)]
    max_steps: Option<u64>,

    /// Print the drawing calls instead of plotting in the terminal.
    #[arg(long)]
    calls: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let args = Args::parse();

    let order = if args.big_endian {
        WordOrder::Big
    } else {
        WordOrder::Little
    };
    let memory = ScreenMemory::load(&mut File::open(&args.dump)?, order)?;

    let mut options = match &args.options {
        Some(path) => RenderOptions::from_json(File::open(path)?)?,
        None => RenderOptions::default(),
    };
    if let Some(n) = args.max_steps {
        options.max_steps = n;
    }

    let report = if args.calls {
        let mut sink = RecordingSink::new();
        let report = render(&memory, &mut sink, &options)?;
        let stdout = io::stdout();
        let mut out = stdout.lock();
        for call in &sink.calls {
            writeln!(out, "{}", call)?;
        }
        report
    } else {
        // raw mode first, so the plotter's alternate screen is left before
        // the terminal is restored
        let mut input = KeyboardInput::new()?;
        let mut plotter = TermPlotter::new()?;
        let report = render(&memory, &mut plotter, &options)?;
        input.wait_for_quit()?;
        report
    };

    summarise(&report);
    Ok(())
}

fn summarise(report: &RenderReport) {
    log::info!(
        "rendered in {} steps ({} priming)",
        report.real.steps,
        report.priming.steps
    );
}
