use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RefscaleError;

/// U.S. coins usable as a size reference.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Coin {
    Penny,
    Nickel,
    Dime,
    Quarter,
}

impl Coin {
    /// All coins, in the order the selection screen lists them.
    pub const ALL: [Coin; 4] = [Coin::Penny, Coin::Nickel, Coin::Dime, Coin::Quarter];

    pub fn name(&self) -> &'static str {
        match self {
            Coin::Penny => "Penny",
            Coin::Nickel => "Nickel",
            Coin::Dime => "Dime",
            Coin::Quarter => "Quarter",
        }
    }

    /// Minted diameter in millimeters.
    pub fn diameter_mm(&self) -> f32 {
        match self {
            Coin::Penny => 19.05,
            Coin::Nickel => 21.21,
            Coin::Dime => 17.91,
            Coin::Quarter => 24.26,
        }
    }

    /// Label shown once a coin is picked, e.g. `Selected: Dime (17.91 mm)`.
    pub fn selection_label(coin: Option<Coin>) -> String {
        match coin {
            Some(c) => format!("Selected: {} ({:.2} mm)", c.name(), c.diameter_mm()),
            None => "Selected: (none)".to_string(),
        }
    }
}

impl fmt::Display for Coin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Coin {
    type Err = RefscaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Coin::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| RefscaleError::InvalidParameter(format!("unknown coin: {s}")))
    }
}
