//! Error types returned by the supply containers and the exchange engine.
//!
//! Every failing operation leaves both containers exactly as they were.

use thiserror::Error;

use crate::{Command, Container};

/// Insertion into a full fixed-capacity container.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("{container} is full (capacity {capacity})")]
pub struct CapacityError {
    pub container: Container,
    pub capacity: usize,
}

/// Removal from an empty container.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("{container} is empty")]
pub struct EmptyError {
    pub container: Container,
}

/// An exchange was requested without enough pieces on one or both sides.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ExchangeError {
    #[error("exchange needs {needed} piece(s) on each side (queue has {queue_len}, reserve has {reserve_len})")]
    InsufficientElements {
        needed: usize,
        queue_len: usize,
        reserve_len: usize,
    },
}

/// Failure of one command applied to a supply session.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum SupplyError {
    #[error(transparent)]
    Capacity(#[from] CapacityError),
    #[error(transparent)]
    Empty(#[from] EmptyError),
    #[error(transparent)]
    Exchange(#[from] ExchangeError),
    #[error("{} is not available at this tier", .0.as_str())]
    Unavailable(Command),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_container() {
        let full = CapacityError {
            container: Container::Reserve,
            capacity: 3,
        };
        assert_eq!(full.to_string(), "reserve is full (capacity 3)");

        let empty = EmptyError {
            container: Container::Queue,
        };
        assert_eq!(empty.to_string(), "queue is empty");
    }

    #[test]
    fn supply_error_wraps_transparently() {
        let err: SupplyError = ExchangeError::InsufficientElements {
            needed: 3,
            queue_len: 5,
            reserve_len: 2,
        }
        .into();
        assert_eq!(
            err.to_string(),
            "exchange needs 3 piece(s) on each side (queue has 5, reserve has 2)"
        );
        assert_eq!(
            SupplyError::Unavailable(Command::SwapBlock).to_string(),
            "swapBlock is not available at this tier"
        );
    }
}
