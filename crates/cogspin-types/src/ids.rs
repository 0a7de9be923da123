//! Body identifiers.
//!
//! The simulation models exactly two rigid spheres. A closed enum
//! (rather than a raw index) prevents accidental out-of-range access
//! into the per-body arrays.

use serde::{Deserialize, Serialize};

/// Number of simulated bodies. Fixed by the model.
pub const BODY_COUNT: usize = 2;

/// Identifies one of the two gear spheres.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BodyId {
    /// The sphere that starts on the negative-x side and drives the approach.
    Left,
    /// The sphere that starts on the positive-x side.
    Right,
}

impl BodyId {
    /// Both bodies, in array order.
    pub const ALL: [BodyId; BODY_COUNT] = [BodyId::Left, BodyId::Right];

    /// Returns the raw index as `usize` for array indexing.
    #[inline]
    pub fn index(self) -> usize {
        match self {
            BodyId::Left => 0,
            BodyId::Right => 1,
        }
    }

    /// Returns the other body.
    #[inline]
    pub fn opposite(self) -> BodyId {
        match self {
            BodyId::Left => BodyId::Right,
            BodyId::Right => BodyId::Left,
        }
    }

    /// Short label for logs and HUD text.
    pub fn label(self) -> &'static str {
        match self {
            BodyId::Left => "L",
            BodyId::Right => "R",
        }
    }
}
