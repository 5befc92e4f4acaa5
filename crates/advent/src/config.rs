use serde::Deserialize;

use advent_core::puzzle::Part;

pub use advent_core::{dial::DialSpec, playground::WiringPlan, printing::CrowdingRule};

/// Application configuration loaded from TOML file
///
/// Every section and field is optional and falls back to the puzzle's
/// standard rules.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct AppConfig {
    /// Dial shape for the secret entrance
    #[serde(default)]
    pub dial: DialSpec,

    /// Battery counts for the lobby
    #[serde(default)]
    pub lobby: LobbyConfig,

    /// Crowding rule for the printing department
    #[serde(default)]
    pub printing: CrowdingRule,

    /// Wiring plan for the playground
    #[serde(default)]
    pub playground: WiringPlan,
}

/// Lobby configuration section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct LobbyConfig {
    /// Batteries turned on per bank in part one
    #[serde(default = "LobbyConfig::default_part_one")]
    pub part_one_batteries: usize,

    /// Batteries turned on per bank in part two
    #[serde(default = "LobbyConfig::default_part_two")]
    pub part_two_batteries: usize,
}

impl LobbyConfig {
    /// Batteries to turn on per bank for `part`.
    pub fn batteries(&self, part: Part) -> usize {
        match part {
            Part::One => self.part_one_batteries,
            Part::Two => self.part_two_batteries,
        }
    }

    fn default_part_one() -> usize {
        2
    }

    fn default_part_two() -> usize {
        12
    }
}

impl Default for LobbyConfig {
    fn default() -> Self {
        Self {
            part_one_batteries: Self::default_part_one(),
            part_two_batteries: Self::default_part_two(),
        }
    }
}
