//! The two chemical species of the Gray-Scott model.

use std::fmt;

/// Selects one of the two concentration fields.
///
/// `A` is the substrate that is fed into the system; `B` is the
/// autocatalyst that consumes it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Species {
    /// Substrate (background value 1.0).
    A,
    /// Catalyst (background value 0.0).
    B,
}

impl Species {
    /// Both species, A first.
    pub const ALL: [Species; 2] = [Species::A, Species::B];

    /// Pick this species' component out of an `(a, b)` pair.
    pub fn select(self, pair: (f64, f64)) -> f64 {
        match self {
            Species::A => pair.0,
            Species::B => pair.1,
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Species::A => write!(f, "A"),
            Species::B => write!(f, "B"),
        }
    }
}
