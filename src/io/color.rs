//! Colour mapping for the broadband choropleth.

use std::fmt;

use crate::{broadband::EnrichedFeature, types::Tier};

/// Simple RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Rgb {
    pub(crate) r: u8,
    pub(crate) g: u8,
    pub(crate) b: u8,
}

impl Rgb {
    /// Parse `#rrggbb` or `#rgb`.
    pub(crate) fn parse_hex(s: &str) -> Option<Rgb> {
        let hex = s.trim().strip_prefix('#')?;
        let channel = |i: usize, width: usize| u8::from_str_radix(hex.get(i..i + width)?, 16).ok();
        match hex.len() {
            6 => Some(Rgb { r: channel(0, 2)?, g: channel(2, 2)?, b: channel(4, 2)? }),
            3 => {
                let (r, g, b) = (channel(0, 1)?, channel(1, 1)?, channel(2, 1)?);
                Some(Rgb { r: r * 17, g: g * 17, b: b * 17 })
            }
            _ => None,
        }
    }
}

impl fmt::Display for Rgb {
    /// Format as CSS hex: #rrggbb
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Fill for features without a metric match.
pub(crate) const MISSING_DATA: Rgb = Rgb { r: 0xcc, g: 0xcc, b: 0xcc };

/// Diverging ramp from no service (red) to gigabit (green).
pub(crate) fn tier_color(tier: Tier) -> Rgb {
    match tier {
        Tier::NoService => Rgb { r: 215, g:  48, b:  39 },
        Tier::Basic     => Rgb { r: 252, g: 141, b:  89 },
        Tier::Standard  => Rgb { r: 254, g: 224, b: 139 },
        Tier::HighSpeed => Rgb { r: 145, g: 207, b:  96 },
        Tier::Gigabit   => Rgb { r:  26, g: 152, b:  80 },
    }
}

/// Choropleth fill: the record's colour hint if it parses, else its tier colour,
/// else the missing-data gray.
pub(crate) fn fill_color(feature: &EnrichedFeature) -> Rgb {
    match &feature.metric {
        Some(metric) => metric.color_hint.as_deref()
            .and_then(Rgb::parse_hex)
            .unwrap_or_else(|| tier_color(metric.tier)),
        None => MISSING_DATA,
    }
}
