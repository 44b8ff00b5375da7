//! Holy Diver runner (default binary).
//!
//! Interactive mode draws the world with the framebuffer renderer and waits
//! for one key per turn. `--headless` swaps the terminal for JSON lines on
//! stdin/stdout.

use std::fs::File;
use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event};

use holy_diver::core::rng::random_seed;
use holy_diver::core::{World, WorldSnapshot};
use holy_diver::headless;
use holy_diver::input::handle_key_event;
use holy_diver::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};

const LOG_ENV: &str = "HOLY_DIVER_LOG";

#[derive(Parser, Debug)]
#[command(about = "Turn-based underwater exploration in the terminal")]
struct Args {
    /// 20x20 map file; a map is generated when absent or unreadable
    #[arg(long, value_name = "PATH")]
    map: Option<PathBuf>,

    #[arg(long, help = "Random seed for enemies and map generation")]
    seed: Option<u64>,

    /// Read intents from stdin and write JSON observations to stdout
    #[arg(long)]
    headless: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging()?;

    let seed = args.seed.unwrap_or_else(random_seed);
    log::info!("seed: {seed}");

    let mut world = World::load(args.map.as_deref(), seed);

    if args.headless {
        let stats = headless::run(&mut world, io::stdin().lock(), io::stdout().lock())?;
        log::info!(
            "headless session done: {} observations, {} ignored lines",
            stats.observations,
            stats.ignored_lines
        );
        return Ok(());
    }

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut world);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

/// Logs go to the file named by `HOLY_DIVER_LOG`, never to the terminal.
fn init_logging() -> Result<()> {
    let Some(path) = std::env::var_os(LOG_ENV) else {
        return Ok(());
    };
    let file = File::create(&path)
        .with_context(|| format!("cannot open log file {}", PathBuf::from(&path).display()))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn run(term: &mut TerminalRenderer, world: &mut World) -> Result<()> {
    let view = GameView::default();
    let mut snap = WorldSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        world.snapshot_into(&mut snap);
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        match event::read()? {
            Event::Key(key) => {
                let Some(intent) = handle_key_event(key) else {
                    continue;
                };
                let report = world.step(intent);
                if report.quit() {
                    return Ok(());
                }
                log::debug!("{} -> {:?}", intent.as_str(), report.action);
            }
            Event::Resize(_, _) => term.invalidate(),
            _ => {}
        }
    }
}
