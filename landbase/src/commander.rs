//! Commander color identity tracking.
//!
//! Holds the active colors of the deck and names the combination after every
//! change. Colorless is the baseline and is always part of the identity.

use crate::models::Color;

/// Symbol for the colorless baseline, always present in the identity key
pub const COLORLESS: char = 'C';

/// Label returned when an identity key has no entry in [`COMBINATIONS`]
pub const UNKNOWN_COMBINATION: &str = "unknown";

/// Combination names keyed by the sorted symbols of the identity (colorless included)
pub const COMBINATIONS: [(&str, &str); 32] = [
    ("C", "COLORLESS"),
    ("CW", "MONOWHITE"),
    ("CU", "MONOBLUE"),
    ("BC", "MONOBLACK"),
    ("CR", "MONORED"),
    ("CG", "MONOGREEN"),
    ("CUW", "AZORIUS"),
    ("CRW", "BOROS"),
    ("BCU", "DIMIR"),
    ("BCG", "GOLGARI"),
    ("CGR", "GRUUL"),
    ("CRU", "IZZET"),
    ("BCW", "ORZHOV"),
    ("BCR", "RAKDOS"),
    ("CGW", "SELESNYA"),
    ("CGU", "SIMIC"),
    ("BCGW", "ABZAN"),
    ("CGUW", "BANT"),
    ("BCUW", "ESPER"),
    ("BCRU", "GRIXIS"),
    ("CRUW", "JESKAI"),
    ("BCGR", "JUND"),
    ("BCRW", "MARDU"),
    ("CGRW", "NAYA"),
    ("BCGU", "SULTAI"),
    ("CGRU", "TEMUR"),
    ("BCGRU", "SANS-WHITE (GLINT)"),
    ("BCGRW", "SANS-BLUE (DUNE)"),
    ("CGRUW", "SANS-BLACK (INK)"),
    ("BCGUW", "SANS-RED (WITCH)"),
    ("BCRUW", "SANS-GREEN (YORE)"),
    ("BCGRUW", "FIVE COLORS"),
];

/// Looks up the combination name for a sorted identity key
pub fn combination_name(key: &str) -> &'static str {
    COMBINATIONS
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, name)| *name)
        .unwrap_or(UNKNOWN_COMBINATION)
}

/// The deck's color identity and its derived combination name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commander {
    active: [bool; 5],
    combination: &'static str,
}

impl Default for Commander {
    fn default() -> Self {
        Self::new()
    }
}

impl Commander {
    /// Starts as a colorless identity
    pub fn new() -> Self {
        Self {
            active: [false; 5],
            combination: combination_name("C"),
        }
    }

    /// Builds an identity with the given colors switched on
    pub fn with_colors(colors: &[Color]) -> Self {
        let mut commander = Self::new();
        for &color in colors {
            commander.active[Self::slot(color)] = true;
        }
        commander.update();
        commander
    }

    /// Adds the color if absent, removes it if present, then renames the combination
    pub fn toggle(&mut self, color: Color) {
        let slot = Self::slot(color);
        self.active[slot] = !self.active[slot];
        self.update();
        log::debug!(
            "Toggled {} -> {} ({})",
            color,
            self.key(),
            self.combination
        );
    }

    pub fn contains(&self, color: Color) -> bool {
        self.active[Self::slot(color)]
    }

    /// Active colors in WUBRG order, colorless excluded
    pub fn colors(&self) -> Vec<Color> {
        Color::ALL
            .into_iter()
            .filter(|&color| self.contains(color))
            .collect()
    }

    /// Colors outside the identity, in WUBRG order
    pub fn forbidden_colors(&self) -> Vec<Color> {
        Color::ALL
            .into_iter()
            .filter(|&color| !self.contains(color))
            .collect()
    }

    /// Number of active colors, colorless excluded
    pub fn color_count(&self) -> usize {
        self.active.iter().filter(|&&on| on).count()
    }

    /// Sorted symbols of the identity including colorless, e.g. "CUW" for Azorius
    pub fn key(&self) -> String {
        let mut symbols: Vec<char> = self.colors().iter().map(Color::symbol).collect();
        symbols.push(COLORLESS);
        symbols.sort_unstable();
        symbols.into_iter().collect()
    }

    /// Combination name, e.g. "AZORIUS"
    pub fn combination(&self) -> &'static str {
        self.combination
    }

    /// Combination name decorated for the deck label, e.g. "*** AZORIUS ***"
    pub fn label(&self) -> String {
        format!("*** {} ***", self.combination)
    }

    fn update(&mut self) {
        self.combination = combination_name(&self.key());
    }

    fn slot(color: Color) -> usize {
        match color {
            Color::White => 0,
            Color::Blue => 1,
            Color::Black => 2,
            Color::Red => 3,
            Color::Green => 4,
        }
    }
}
