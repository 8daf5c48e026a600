//! Core types module - shared data structures and constants
//!
//! This crate defines the values that flow through the supply engine: piece
//! kinds, pieces, the commands a driver can issue and the menu tiers that
//! decide which commands are available. It holds no logic beyond parsing and
//! formatting, so it can be shared by the engine, the terminal view and the
//! input mapping alike.
//!
//! # Capacities
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `QUEUE_CAPACITY` | 5 | Upcoming pieces kept in the circular queue |
//! | `RESERVE_CAPACITY` | 3 | Pieces that fit in the reserve stack |
//! | `BLOCK_SWAP_LEN` | 3 | Pieces moved by one block swap |
//!
//! # Examples
//!
//! ```
//! use tetris_supply_types::{Command, MenuTier, Piece, PieceKind};
//!
//! let piece = Piece::new(PieceKind::T, 3);
//! assert_eq!(piece.to_string(), "[T 3]");
//!
//! assert_eq!(PieceKind::from_str("l"), Some(PieceKind::L));
//! assert_eq!(Command::from_menu_digit(MenuTier::Master, 5), Some(Command::SwapBlock));
//! assert_eq!(Command::from_menu_digit(MenuTier::Novice, 2), Some(Command::Insert));
//! ```

use std::fmt;

mod error;

pub use error::{CapacityError, EmptyError, ExchangeError, SupplyError};

/// Number of upcoming pieces held by the circular queue.
pub const QUEUE_CAPACITY: usize = 5;

/// Number of pieces the reserve stack can hold.
pub const RESERVE_CAPACITY: usize = 3;

/// Number of pieces exchanged by a block swap.
///
/// Kept separate from [`RESERVE_CAPACITY`]: a block swap is only possible when
/// the reserve holds at least this many pieces.
pub const BLOCK_SWAP_LEN: usize = 3;

/// The four piece kinds dealt by the supply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    L,
}

impl PieceKind {
    /// All kinds in selection order.
    pub const ALL: [PieceKind; 4] = [PieceKind::I, PieceKind::O, PieceKind::T, PieceKind::L];

    /// Parse piece kind from string (case-insensitive)
    ///
    /// ```
    /// use tetris_supply_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("O"), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_str("s"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "o" => Some(PieceKind::O),
            "t" => Some(PieceKind::T),
            "l" => Some(PieceKind::L),
            _ => None,
        }
    }

    /// Single uppercase letter used in text output.
    pub fn as_char(&self) -> char {
        match self {
            PieceKind::I => 'I',
            PieceKind::O => 'O',
            PieceKind::T => 'T',
            PieceKind::L => 'L',
        }
    }

    /// Lowercase string form, used by the session journal.
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::O => "o",
            PieceKind::T => "t",
            PieceKind::L => "l",
        }
    }
}

/// A uniquely identified piece.
///
/// Pieces are plain values: exchanges move them between containers by copy and
/// never touch their ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub id: u64,
}

impl Piece {
    pub const fn new(kind: PieceKind, id: u64) -> Self {
        Self { kind, id }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} {}]", self.kind.as_char(), self.id)
    }
}

/// Which fixed-capacity container an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Container {
    /// The upcoming-piece queue.
    Queue,
    /// The reserve stack.
    Reserve,
}

impl Container {
    pub fn as_str(&self) -> &'static str {
        match self {
            Container::Queue => "queue",
            Container::Reserve => "reserve",
        }
    }
}

impl fmt::Display for Container {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Commands a driver can issue against a supply session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Take the piece at the front of the queue into play
    Play,
    /// Generate a piece and append it to the queue by hand (novice tier)
    Insert,
    /// Move the front piece of the queue onto the reserve stack
    Reserve,
    /// Take the top reserved piece into play
    UseReserved,
    /// Exchange the queue front with the reserve top
    SwapFront,
    /// Exchange the first three queued pieces with the top three reserved
    SwapBlock,
    /// End the session
    Quit,
}

impl Command {
    /// Parse a command name (case-insensitive), as written in the journal.
    ///
    /// ```
    /// use tetris_supply_types::Command;
    ///
    /// assert_eq!(Command::from_str("swapBlock"), Some(Command::SwapBlock));
    /// assert_eq!(Command::from_str("play"), Some(Command::Play));
    /// assert_eq!(Command::from_str("hold"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "play" => Some(Command::Play),
            "insert" => Some(Command::Insert),
            "reserve" => Some(Command::Reserve),
            "usereserved" => Some(Command::UseReserved),
            "swapfront" => Some(Command::SwapFront),
            "swapblock" => Some(Command::SwapBlock),
            "quit" => Some(Command::Quit),
            _ => None,
        }
    }

    /// camelCase name used by the journal.
    pub fn as_str(&self) -> &'static str {
        match self {
            Command::Play => "play",
            Command::Insert => "insert",
            Command::Reserve => "reserve",
            Command::UseReserved => "useReserved",
            Command::SwapFront => "swapFront",
            Command::SwapBlock => "swapBlock",
            Command::Quit => "quit",
        }
    }

    /// Menu label shown next to the command's digit.
    pub fn label(&self) -> &'static str {
        match self {
            Command::Play => "Play front piece",
            Command::Insert => "Insert new piece",
            Command::Reserve => "Reserve front piece",
            Command::UseReserved => "Use reserved piece",
            Command::SwapFront => "Swap front with reserve top",
            Command::SwapBlock => "Swap first 3 with reserve",
            Command::Quit => "Quit",
        }
    }

    /// Map a menu digit to a command, using the numbering of `tier`.
    ///
    /// Digits that are not on the tier's menu map to `None`.
    pub fn from_menu_digit(tier: MenuTier, digit: u8) -> Option<Self> {
        tier.commands()
            .iter()
            .find(|(d, _)| *d == digit)
            .map(|(_, command)| *command)
    }
}

/// Menu tiers, one per program variant.
///
/// - **Novice**: play and manual insert; the queue is not refilled automatically
/// - **Adventurer**: play, reserve and use reserved; auto-refill
/// - **Master**: everything in adventurer plus both exchanges; auto-refill
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MenuTier {
    Novice,
    Adventurer,
    #[default]
    Master,
}

const NOVICE_MENU: [(u8, Command); 3] = [
    (1, Command::Play),
    (2, Command::Insert),
    (0, Command::Quit),
];

const ADVENTURER_MENU: [(u8, Command); 4] = [
    (1, Command::Play),
    (2, Command::Reserve),
    (3, Command::UseReserved),
    (0, Command::Quit),
];

const MASTER_MENU: [(u8, Command); 6] = [
    (1, Command::Play),
    (2, Command::Reserve),
    (3, Command::UseReserved),
    (4, Command::SwapFront),
    (5, Command::SwapBlock),
    (0, Command::Quit),
];

impl MenuTier {
    /// Parse tier name (case-insensitive).
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "novice" => Some(MenuTier::Novice),
            "adventurer" => Some(MenuTier::Adventurer),
            "master" => Some(MenuTier::Master),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MenuTier::Novice => "novice",
            MenuTier::Adventurer => "adventurer",
            MenuTier::Master => "master",
        }
    }

    /// Menu entries in display order as `(digit, command)` pairs.
    pub fn commands(&self) -> &'static [(u8, Command)] {
        match self {
            MenuTier::Novice => &NOVICE_MENU,
            MenuTier::Adventurer => &ADVENTURER_MENU,
            MenuTier::Master => &MASTER_MENU,
        }
    }

    pub fn allows(&self, command: Command) -> bool {
        self.commands().iter().any(|(_, c)| *c == command)
    }

    /// Whether the supply policy tops the queue up after each command.
    pub fn auto_refill(&self) -> bool {
        !matches!(self, MenuTier::Novice)
    }
}
