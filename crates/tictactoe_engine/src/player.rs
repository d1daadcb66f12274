//! Player records.

use crate::Marker;
use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};

/// A named participant and the marker they play.
///
/// Created once when a game starts and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Getters, Serialize, Deserialize, new)]
pub struct Player {
    /// Display name.
    #[new(into)]
    name: String,
    /// Marker placed by this player.
    marker: Marker,
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.marker)
    }
}
