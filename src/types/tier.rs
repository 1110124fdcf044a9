use std::fmt;

use serde::{Deserialize, Serialize};

/// Categorical broadband-speed bucket as reported by the provider dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Tier {
    #[serde(rename = "No Service")]
    NoService,
    #[serde(rename = "Basic")]
    Basic,
    #[serde(rename = "Standard")]
    Standard,
    #[serde(rename = "High Speed")]
    HighSpeed,
    #[serde(rename = "Gigabit")]
    Gigabit,
}

impl Tier {
    pub const ALL: [Tier; 5] = [Tier::NoService, Tier::Basic, Tier::Standard, Tier::HighSpeed, Tier::Gigabit];

    /// Label used in payloads and tabular exports.
    pub fn label(&self) -> &'static str {
        match self {
            Tier::NoService => "No Service",
            Tier::Basic => "Basic",
            Tier::Standard => "Standard",
            Tier::HighSpeed => "High Speed",
            Tier::Gigabit => "Gigabit",
        }
    }

    /// Legend text describing the speed range of the tier.
    pub fn legend(&self) -> &'static str {
        match self {
            Tier::NoService => "No Service (0 Mbps)",
            Tier::Basic => "Basic (<25 Mbps)",
            Tier::Standard => "Standard (25-100 Mbps)",
            Tier::HighSpeed => "High Speed (100-1000 Mbps)",
            Tier::Gigabit => "Gigabit (1000+ Mbps)",
        }
    }

    /// Bucket a measured download speed using the legend boundaries.
    pub fn classify(down_mbps: f64) -> Tier {
        match down_mbps {
            x if !(x > 0.0) => Tier::NoService,
            x if x < 25.0 => Tier::Basic,
            x if x < 100.0 => Tier::Standard,
            x if x < 1000.0 => Tier::HighSpeed,
            _ => Tier::Gigabit,
        }
    }

    /// Parse a payload label, tolerating case and separator differences.
    pub fn parse(label: &str) -> Option<Tier> {
        let key: String = label.chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .map(|c| c.to_ascii_lowercase())
            .collect();
        match key.as_str() {
            "noservice" | "none" => Some(Tier::NoService),
            "basic" => Some(Tier::Basic),
            "standard" => Some(Tier::Standard),
            "highspeed" => Some(Tier::HighSpeed),
            "gigabit" => Some(Tier::Gigabit),
            _ => None,
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
