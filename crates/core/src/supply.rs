//! Supply session - the containers plus the refill policy
//!
//! A [`Supply`] owns the upcoming queue, the reserve stack, a piece factory
//! and a kind source. Drivers hand it one [`Command`] at a time; after every
//! command except quit, a tier with auto-refill tops the queue back up with
//! exactly one fresh piece, so between commands the queue is always full.

use crate::exchange::{swap_block, swap_front_top};
use crate::factory::PieceFactory;
use crate::queue::UpcomingQueue;
use crate::rng::{KindSource, SimpleRng};
use crate::snapshot::SupplySnapshot;
use crate::stack::ReserveStack;
use crate::types::{CapacityError, Command, Container, EmptyError, MenuTier, Piece, SupplyError};

/// What a successful command did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Played(Piece),
    Inserted(Piece),
    Reserved(Piece),
    Used(Piece),
    SwappedFront,
    SwappedBlock,
    Quit,
}

/// Result of one applied command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub outcome: Outcome,
    /// Piece generated by the refill policy after the command, if any.
    pub refill: Option<Piece>,
}

/// Upcoming queue and reserve stack driven by menu commands.
#[derive(Debug, Clone)]
pub struct Supply<K: KindSource = SimpleRng> {
    queue: UpcomingQueue,
    reserve: ReserveStack,
    factory: PieceFactory,
    source: K,
    tier: MenuTier,
}

impl Supply<SimpleRng> {
    /// Create a session dealing kinds from a seeded [`SimpleRng`].
    pub fn new(seed: u32, tier: MenuTier) -> Self {
        Self::with_source(SimpleRng::new(seed), tier)
    }
}

impl<K: KindSource> Supply<K> {
    /// Create a session with an injected kind source.
    ///
    /// The queue starts full, holding ids `0..QUEUE_CAPACITY`.
    pub fn with_source(source: K, tier: MenuTier) -> Self {
        let mut supply = Self {
            queue: UpcomingQueue::new(),
            reserve: ReserveStack::new(),
            factory: PieceFactory::new(),
            source,
            tier,
        };
        while supply.refill_one().is_some() {}
        supply
    }

    pub fn tier(&self) -> MenuTier {
        self.tier
    }

    pub fn queue(&self) -> &UpcomingQueue {
        &self.queue
    }

    pub fn reserve(&self) -> &ReserveStack {
        &self.reserve
    }

    /// Number of pieces generated so far.
    pub fn issued(&self) -> u64 {
        self.factory.peek_id()
    }

    /// Apply one command, then run the refill policy.
    ///
    /// Commands outside the session's tier fail with
    /// [`SupplyError::Unavailable`] and change nothing. A failing command
    /// leaves both containers untouched; the refill policy still runs, which
    /// is a no-op while the queue is full.
    pub fn apply(&mut self, command: Command) -> Result<Step, SupplyError> {
        if !self.tier.allows(command) {
            return Err(SupplyError::Unavailable(command));
        }
        if command == Command::Quit {
            return Ok(Step {
                outcome: Outcome::Quit,
                refill: None,
            });
        }

        let result = self.execute(command);
        let refill = if self.tier.auto_refill() {
            self.refill_one()
        } else {
            None
        };
        result.map(|outcome| Step { outcome, refill })
    }

    fn execute(&mut self, command: Command) -> Result<Outcome, SupplyError> {
        let outcome = match command {
            Command::Play => Outcome::Played(self.queue.dequeue()?),
            Command::Insert => {
                let piece = self.refill_one().ok_or(CapacityError {
                    container: Container::Queue,
                    capacity: self.queue.capacity(),
                })?;
                Outcome::Inserted(piece)
            }
            Command::Reserve => {
                let piece = self.queue.peek_front().ok_or(EmptyError {
                    container: Container::Queue,
                })?;
                // Push first: it is the only step that can fail.
                self.reserve.push(piece)?;
                self.queue.dequeue()?;
                Outcome::Reserved(piece)
            }
            Command::UseReserved => Outcome::Used(self.reserve.pop()?),
            Command::SwapFront => {
                swap_front_top(&mut self.queue, &mut self.reserve)?;
                Outcome::SwappedFront
            }
            Command::SwapBlock => {
                swap_block(&mut self.queue, &mut self.reserve)?;
                Outcome::SwappedBlock
            }
            Command::Quit => Outcome::Quit,
        };
        Ok(outcome)
    }

    /// Enqueue one fresh piece if the queue has room.
    ///
    /// No id is allocated when the queue is full.
    fn refill_one(&mut self) -> Option<Piece> {
        if self.queue.is_full() {
            return None;
        }
        let piece = self.factory.issue(&mut self.source);
        self.queue.enqueue(piece).ok().map(|()| piece)
    }

    /// Copy session state into an existing snapshot.
    pub fn snapshot_into(&self, out: &mut SupplySnapshot) {
        out.upcoming = self.queue.snapshot();
        out.reserve = self.reserve.snapshot();
        out.next_id = self.factory.peek_id();
        out.tier = self.tier;
    }

    pub fn snapshot(&self) -> SupplySnapshot {
        let mut snap = SupplySnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }
}

impl Default for Supply<SimpleRng> {
    fn default() -> Self {
        Self::new(1, MenuTier::default())
    }
}
