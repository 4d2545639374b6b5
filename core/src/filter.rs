//! The view filter selected through the `#/:filter` route.

use crate::item::Item;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// A route segment that names no filter
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown filter: {0}")]
pub struct UnknownFilter(pub String);

/// Which items the list shows
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Filter {
    /// Every item, in insertion order
    #[default]
    All,
    /// Items not yet completed
    Active,
    /// Completed items
    Completed,
}

impl Filter {
    /// All filters in footer link order
    pub const ALL: [Self; 3] = [Self::All, Self::Active, Self::Completed];

    /// Route segment / display name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Active => "active",
            Self::Completed => "completed",
        }
    }

    /// Lenient parse of a route segment; anything unrecognised shows everything
    #[must_use]
    pub fn from_segment(segment: &str) -> Self {
        segment.parse().unwrap_or_default()
    }

    /// Whether an item is visible under this filter
    #[must_use]
    pub const fn matches(self, item: &Item) -> bool {
        match self {
            Self::All => true,
            Self::Active => !item.completed,
            Self::Completed => item.completed,
        }
    }
}

impl std::fmt::Display for Filter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Filter {
    type Err = UnknownFilter;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Self::All),
            "active" => Ok(Self::Active),
            "completed" => Ok(Self::Completed),
            other => Err(UnknownFilter(other.to_string())),
        }
    }
}
