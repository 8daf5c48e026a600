//! Terminal driver for the piece supply (default binary).
//!
//! Shows the upcoming queue, the reserve and the tier menu, then applies one
//! command per key press until the player quits.

use std::fs::File;
use std::io::BufWriter;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tetris_supply::core::Supply;
use tetris_supply::input::{command_for_key, should_quit};
use tetris_supply::term::{status_line, SupplyView, TerminalRenderer, Viewport};
use tetris_supply::types::Command;
use tetris_supply::{flush_after, Journal, SessionConfig};

fn main() -> Result<()> {
    let config = SessionConfig::from_env();
    let mut journal = match &config.log_path {
        Some(path) => Some(Journal::open(path)?),
        None => None,
    };

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config, journal.as_mut());

    // Always try to restore terminal state.
    let _ = term.exit();

    let commands = flush_after(journal.as_mut(), result)?;
    println!(
        "[Supply] session ended after {} command(s) (tier {}, seed {})",
        commands,
        config.tier.as_str(),
        config.seed
    );
    if let Some(path) = &config.log_path {
        println!("[Supply] journal written to {path}");
    }
    Ok(())
}

/// Run the session loop; returns the number of commands applied.
fn run(
    term: &mut TerminalRenderer,
    config: &SessionConfig,
    mut journal: Option<&mut Journal<BufWriter<File>>>,
) -> Result<u64> {
    let mut supply = Supply::new(config.seed, config.tier);
    let view = SupplyView::default();
    let mut status = String::from("Pick an option");
    let mut failed = false;
    let mut applied = 0u64;

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let fb = view.render(&supply.snapshot(), &status, failed, Viewport::new(w, h));
        term.draw(&fb)?;

        let key = match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => key,
            Event::Resize(..) => {
                term.invalidate();
                continue;
            }
            _ => continue,
        };

        let command = if should_quit(key) {
            Command::Quit
        } else if let Some(command) = command_for_key(supply.tier(), key) {
            command
        } else {
            status = String::from("Invalid option, try again");
            failed = true;
            continue;
        };

        let result = supply.apply(command);
        applied += 1;
        status = status_line(&result);
        failed = result.is_err();

        if let Some(journal) = journal.as_deref_mut() {
            journal.record(command, &result, &supply.snapshot())?;
        }

        if command == Command::Quit {
            return Ok(applied);
        }
    }
}
