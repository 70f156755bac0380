//! Typed arena indices.

use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(usize);

        impl $name {
            #[inline]
            pub const fn new(index: usize) -> Self {
                $name(index)
            }

            /// Position in the owning arena.
            #[inline]
            pub const fn index(self) -> usize {
                self.0
            }
        }

        impl From<usize> for $name {
            fn from(index: usize) -> Self {
                $name(index)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "#{:02}", self.0)
            }
        }
    };
}

define_id!(
    /// Identifies a team; also its position in every combination.
    TeamId
);
define_id!(
    /// Identifies a candidate; the value stored in combination slots.
    CandidateId
);
define_id!(
    /// Identifies a requirement.
    RequirementId
);
define_id!(
    /// Identifies a decision.
    DecisionId
);
