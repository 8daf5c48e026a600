//! Terminal view of a supply session.
//!
//! Renders session snapshots into a simple framebuffer that is flushed to a
//! terminal backend. The engine never calls into this crate; the driver reads
//! a snapshot after each command and hands it to [`SupplyView`].
//!
//! Goals:
//! - Keep `core` free of any I/O
//! - Keep layout pure and unit-testable (`supply_view`)
//! - Only rewrite changed cells on each frame (`renderer`)

pub mod fb;
pub mod renderer;
pub mod supply_view;

pub use tetris_supply_core as core;
pub use tetris_supply_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use supply_view::{status_line, SupplyView, Viewport};
