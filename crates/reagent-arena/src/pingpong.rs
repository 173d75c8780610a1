//! Ping-pong pair of grids.
//!
//! The lifecycle per sub-step is:
//! 1. `split()` borrows the current grid read-only and the next grid
//!    mutably
//! 2. the stepper fills every cell of the next grid
//! 3. `swap()` makes the written grid current

use reagent_core::GridError;
use reagent_space::Grid;

/// Which of the two owned buffers is currently readable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BufferRole {
    /// Buffer A is current, B is the write target.
    ACurrent,
    /// Buffer B is current, A is the write target.
    BCurrent,
}

impl BufferRole {
    /// The other role.
    pub fn flipped(self) -> Self {
        match self {
            Self::ACurrent => Self::BCurrent,
            Self::BCurrent => Self::ACurrent,
        }
    }
}

/// Two same-shaped grids alternating between "current" and "next".
///
/// # Buffer layout
///
/// ```text
/// buffer_a: Grid  ←─── current (even swaps) / next (odd swaps)
/// buffer_b: Grid  ←─── next (even swaps) / current (odd swaps)
/// ```
#[derive(Clone, Debug)]
pub struct PingPongGrids {
    buffer_a: Grid,
    buffer_b: Grid,
    /// false = A current, true = B current.
    b_is_current: bool,
}

impl PingPongGrids {
    /// Take ownership of the initial grid and allocate a same-shaped
    /// write buffer at background state.
    pub fn new(initial: Grid) -> Result<Self, GridError> {
        let next = Grid::new(initial.width(), initial.height())?;
        Ok(Self {
            buffer_a: initial,
            buffer_b: next,
            b_is_current: false,
        })
    }

    /// The readable grid.
    pub fn current(&self) -> &Grid {
        if self.b_is_current {
            &self.buffer_b
        } else {
            &self.buffer_a
        }
    }

    /// Mutable access to the readable grid, for seeding between steps.
    pub fn current_mut(&mut self) -> &mut Grid {
        if self.b_is_current {
            &mut self.buffer_b
        } else {
            &mut self.buffer_a
        }
    }

    /// Borrow `(current, next)` for one sub-step.
    ///
    /// The borrow checker guarantees the current grid cannot be written
    /// while the next one is being filled.
    pub fn split(&mut self) -> (&Grid, &mut Grid) {
        if self.b_is_current {
            (&self.buffer_b, &mut self.buffer_a)
        } else {
            (&self.buffer_a, &mut self.buffer_b)
        }
    }

    /// Exchange roles. Constant time, no data movement.
    pub fn swap(&mut self) {
        self.b_is_current = !self.b_is_current;
    }

    /// Which buffer is current.
    pub fn role(&self) -> BufferRole {
        if self.b_is_current {
            BufferRole::BCurrent
        } else {
            BufferRole::ACurrent
        }
    }

    /// Replace the current grid's contents and reset roles.
    ///
    /// `grid` must have the same shape as the pair.
    pub fn reset(&mut self, grid: Grid) -> Result<(), GridError> {
        if !grid.same_shape(&self.buffer_a) {
            return Err(GridError::ShapeMismatch {
                expected: self.buffer_a.dims(),
                found: grid.dims(),
            });
        }
        self.buffer_a = grid;
        self.b_is_current = false;
        Ok(())
    }

    /// Consume the pair, returning the current grid.
    pub fn into_current(self) -> Grid {
        if self.b_is_current {
            self.buffer_b
        } else {
            self.buffer_a
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn marked() -> Grid {
        let mut g = Grid::new(3, 3).unwrap();
        g.set_point(1, 1, 0.0, 1.0).unwrap();
        g
    }

    #[test]
    fn starts_with_initial_as_current() {
        let pp = PingPongGrids::new(marked()).unwrap();
        assert_eq!(pp.role(), BufferRole::ACurrent);
        assert_eq!(pp.current(), &marked());
    }

    #[test]
    fn write_then_swap_publishes_next() {
        let mut pp = PingPongGrids::new(marked()).unwrap();
        {
            let (cur, next) = pp.split();
            assert_eq!(cur.get_point(1, 1), (0.0, 1.0));
            next.set_point(0, 0, 0.5, 0.5).unwrap();
        }
        pp.swap();
        assert_eq!(pp.role(), BufferRole::BCurrent);
        assert_eq!(pp.current().get_point(0, 0), (0.5, 0.5));
        // Old current is now the write target and still holds its data.
        let (_, next) = pp.split();
        assert_eq!(next.get_point(1, 1), (0.0, 1.0));
    }

    #[test]
    fn reset_restores_role_and_contents() {
        let mut pp = PingPongGrids::new(Grid::new(3, 3).unwrap()).unwrap();
        pp.swap();
        pp.reset(marked()).unwrap();
        assert_eq!(pp.role(), BufferRole::ACurrent);
        assert_eq!(pp.current(), &marked());
    }

    #[test]
    fn reset_rejects_other_shape() {
        let mut pp = PingPongGrids::new(Grid::new(3, 3).unwrap()).unwrap();
        assert_eq!(
            pp.reset(Grid::new(4, 3).unwrap()),
            Err(GridError::ShapeMismatch {
                expected: (3, 3),
                found: (4, 3)
            })
        );
    }

    #[test]
    fn into_current_follows_role() {
        let mut pp = PingPongGrids::new(Grid::new(2, 2).unwrap()).unwrap();
        pp.split().1.fill(0.25, 0.75);
        pp.swap();
        let g = pp.into_current();
        assert_eq!(g.get_point(0, 0), (0.25, 0.75));
    }

    proptest! {
        #[test]
        fn role_is_a_two_state_toggle(swaps in 0usize..64) {
            let mut pp = PingPongGrids::new(Grid::new(2, 2).unwrap()).unwrap();
            let mut expected = BufferRole::ACurrent;
            for _ in 0..swaps {
                pp.swap();
                expected = expected.flipped();
            }
            prop_assert_eq!(pp.role(), expected);
            let parity = if swaps % 2 == 0 { BufferRole::ACurrent } else { BufferRole::BCurrent };
            prop_assert_eq!(pp.role(), parity);
        }
    }
}
