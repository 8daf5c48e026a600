//! SupplyView: maps a `SupplySnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{Outcome, Step, SupplySnapshot};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Command, Piece, PieceKind, SupplyError};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

const LABEL: CellStyle = CellStyle::fg(Rgb::new(220, 220, 220)).bold();
const TEXT: CellStyle = CellStyle::fg(Rgb::new(200, 200, 200));
const MUTED: CellStyle = CellStyle::fg(Rgb::new(140, 140, 150)).dim();
const ERROR: CellStyle = CellStyle::fg(Rgb::new(230, 90, 90)).bold();

/// Text layout of the upcoming queue, the reserve and the tier menu.
#[derive(Debug, Clone, Copy)]
pub struct SupplyView {
    /// Left margin in columns.
    margin: u16,
}

impl Default for SupplyView {
    fn default() -> Self {
        Self { margin: 2 }
    }
}

impl SupplyView {
    pub fn new(margin: u16) -> Self {
        Self { margin }
    }

    /// Render the session into an existing framebuffer.
    ///
    /// `status` is the one-line message for the last command; `failed` picks
    /// the error style for it.
    pub fn render_into(
        &self,
        snap: &SupplySnapshot,
        status: &str,
        failed: bool,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let x = self.margin;
        let mut y = 1;

        let end = fb.put_str(x, y, "PIECE SUPPLY", LABEL);
        fb.put_str(end + 2, y, "tier: ", MUTED);
        fb.put_str(end + 8, y, snap.tier.as_str(), TEXT);
        y += 2;

        fb.put_str(x, y, "Upcoming (front -> back)", LABEL);
        y += 1;
        self.draw_row(fb, x + 2, y, &snap.upcoming);
        y += 2;

        if snap.tier.allows(Command::Reserve) {
            fb.put_str(x, y, "Reserve (top -> base)", LABEL);
            y += 1;
            self.draw_row(fb, x + 2, y, &snap.reserve);
            y += 2;
        }

        fb.put_str(x, y, "Menu", LABEL);
        y += 1;
        for (digit, command) in snap.tier.commands() {
            let cx = fb.put_str(x + 2, y, &digit.to_string(), LABEL);
            fb.put_str(cx, y, " - ", MUTED);
            fb.put_str(cx + 3, y, command.label(), TEXT);
            y += 1;
        }
        y += 1;

        if !status.is_empty() {
            let style = if failed { ERROR } else { TEXT };
            let cx = fb.put_str(x, y, "> ", MUTED);
            fb.put_str(cx, y, status, style);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(
        &self,
        snap: &SupplySnapshot,
        status: &str,
        failed: bool,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, status, failed, viewport, &mut fb);
        fb
    }

    fn draw_row(&self, fb: &mut FrameBuffer, x: u16, y: u16, pieces: &[Piece]) {
        if pieces.is_empty() {
            fb.put_str(x, y, "(empty)", MUTED);
            return;
        }
        let mut cx = x;
        for piece in pieces {
            cx = fb.put_str(cx, y, &piece.to_string(), piece_style(piece.kind));
            cx = cx.saturating_add(1);
        }
    }
}

fn piece_style(kind: PieceKind) -> CellStyle {
    let fg = match kind {
        PieceKind::I => Rgb::new(80, 220, 220),
        PieceKind::O => Rgb::new(240, 220, 80),
        PieceKind::T => Rgb::new(200, 120, 220),
        PieceKind::L => Rgb::new(255, 165, 0),
    };
    CellStyle::fg(fg).bold()
}

/// User-facing message for the result of one command.
pub fn status_line(result: &Result<Step, SupplyError>) -> String {
    let step = match result {
        Ok(step) => step,
        Err(err) => return format!("Cannot do that: {err}"),
    };

    let mut line = match step.outcome {
        Outcome::Played(p) => format!("Played {p}"),
        Outcome::Inserted(p) => format!("Inserted {p}"),
        Outcome::Reserved(p) => format!("Reserved {p}"),
        Outcome::Used(p) => format!("Used reserved {p}"),
        Outcome::SwappedFront => "Swapped queue front with reserve top".to_string(),
        Outcome::SwappedBlock => "Swapped first 3 queued pieces with the reserve".to_string(),
        Outcome::Quit => "Leaving...".to_string(),
    };
    if let Some(p) = step.refill {
        line.push_str(&format!(", {p} joined the queue"));
    }
    line
}
