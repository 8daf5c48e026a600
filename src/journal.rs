//! Session journal - one JSON object per applied command
//!
//! Lines look like:
//!
//! ```text
//! {"seq":1,"ts":1700000000000,"tier":"master","command":"play","status":"ok","message":"Played [T 0], [I 5] joined the queue","refill":{"kind":"i","id":5},"upcoming":[...],"reserve":[]}
//! ```

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use serde::Serialize;

use crate::core::{Step, SupplySnapshot};
use crate::term::status_line;
use crate::types::{Command, Piece, SupplyError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PieceRecord {
    pub kind: &'static str,
    pub id: u64,
}

impl From<Piece> for PieceRecord {
    fn from(piece: Piece) -> Self {
        Self {
            kind: piece.kind.as_str(),
            id: piece.id,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordStatus {
    Ok,
    Error,
}

#[derive(Debug, Clone, Serialize)]
pub struct JournalRecord {
    pub seq: u64,
    pub ts: u64,
    pub tier: &'static str,
    pub command: &'static str,
    pub status: RecordStatus,
    pub message: String,
    pub refill: Option<PieceRecord>,
    pub upcoming: Vec<PieceRecord>,
    pub reserve: Vec<PieceRecord>,
}

impl JournalRecord {
    pub fn new(
        seq: u64,
        command: Command,
        result: &Result<Step, SupplyError>,
        snap: &SupplySnapshot,
    ) -> Self {
        Self {
            seq,
            ts: now_ms(),
            tier: snap.tier.as_str(),
            command: command.as_str(),
            status: if result.is_ok() {
                RecordStatus::Ok
            } else {
                RecordStatus::Error
            },
            message: status_line(result),
            refill: result
                .as_ref()
                .ok()
                .and_then(|step| step.refill)
                .map(PieceRecord::from),
            upcoming: snap.upcoming.iter().copied().map(PieceRecord::from).collect(),
            reserve: snap.reserve.iter().copied().map(PieceRecord::from).collect(),
        }
    }
}

/// Appends journal records as JSON lines.
pub struct Journal<W: Write> {
    out: W,
    seq: u64,
    buf: Vec<u8>,
}

impl Journal<BufWriter<File>> {
    /// Open (or create) `path` for appending.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("open journal {}", path.display()))?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> Journal<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            seq: 0,
            buf: Vec::with_capacity(1024),
        }
    }

    /// Number of records written so far.
    pub fn records(&self) -> u64 {
        self.seq
    }

    pub fn record(
        &mut self,
        command: Command,
        result: &Result<Step, SupplyError>,
        snap: &SupplySnapshot,
    ) -> Result<()> {
        self.seq += 1;
        let record = JournalRecord::new(self.seq, command, result, snap);

        self.buf.clear();
        serde_json::to_writer(&mut self.buf, &record)?;
        self.buf.push(b'\n');
        self.out.write_all(&self.buf)?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Flush `journal` once a session has ended with `outcome`.
///
/// A session error is reported ahead of a flush error.
pub fn flush_after<T, W: Write>(
    journal: Option<&mut Journal<W>>,
    outcome: Result<T>,
) -> Result<T> {
    let flushed = journal.map_or(Ok(()), |journal| journal.flush());
    let value = outcome?;
    flushed?;
    Ok(value)
}

fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
