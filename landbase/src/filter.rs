//! Land selection rules.
//!
//! Builds the predicate a catalog land must satisfy for a given identity,
//! power tier and utility setting. The predicate is a small expression tree so
//! the same rules can run against SQLite (as a parameterized WHERE clause) or
//! against entries held in memory.
//!
//! A land qualifies when all of the following hold:
//! - it produces a color of the identity or is an Anyland, and produces no
//!   color outside the identity (fetch lands only need the first half);
//! - its `Power` field carries the tier marker;
//! - it is not a Utility land, unless utility lands are shown;
//! - its `Suit` field carries the deck's color count minus one.

use crate::commander::Commander;
use crate::models::{CatalogEntry, Color, PowerTier, TYPE_ANYLAND, TYPE_FETCH, TYPE_UTILITY};
use std::fmt;

/// A boolean condition over catalog columns
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Condition {
    /// Color flag equals the given value (`W = 1`, `B = 0`)
    Produces(Color, bool),
    /// `Type = value`
    TypeIs(String),
    /// `Type != value`
    TypeIsNot(String),
    /// `Power` contains the digit
    PowerHas(char),
    /// `Suit` contains the digit
    SuitHas(char),
    /// At least one holds; empty is false
    Any(Vec<Condition>),
    /// All hold; empty is true
    All(Vec<Condition>),
}

impl Condition {
    /// Evaluates the condition against an entry held in memory
    pub fn matches(&self, entry: &CatalogEntry) -> bool {
        match self {
            Condition::Produces(color, flag) => entry.produces(*color) == *flag,
            Condition::TypeIs(t) => entry.land_type == *t,
            Condition::TypeIsNot(t) => entry.land_type != *t,
            Condition::PowerHas(marker) => entry.power.contains(*marker),
            Condition::SuitHas(marker) => entry.suit.contains(*marker),
            Condition::Any(conds) => conds.iter().any(|c| c.matches(entry)),
            Condition::All(conds) => conds.iter().all(|c| c.matches(entry)),
        }
    }

    /// Renders the condition as SQL, pushing bound values onto `params`.
    ///
    /// Column names come from a closed set; every string value is bound as a
    /// `?` parameter.
    pub fn to_sql(&self, params: &mut Vec<String>) -> String {
        match self {
            Condition::Produces(color, flag) => {
                format!("{} = {}", color.column(), if *flag { 1 } else { 0 })
            }
            Condition::TypeIs(t) => {
                params.push(t.clone());
                "Type = ?".to_string()
            }
            Condition::TypeIsNot(t) => {
                params.push(t.clone());
                "Type != ?".to_string()
            }
            Condition::PowerHas(marker) => {
                params.push(format!("%{marker}%"));
                "Power LIKE ?".to_string()
            }
            Condition::SuitHas(marker) => {
                params.push(format!("%{marker}%"));
                "Suit LIKE ?".to_string()
            }
            Condition::Any(conds) if conds.is_empty() => "0".to_string(),
            Condition::All(conds) if conds.is_empty() => "1".to_string(),
            Condition::Any(conds) => Self::join_sql(conds, " OR ", params),
            Condition::All(conds) => Self::join_sql(conds, " AND ", params),
        }
    }

    fn join_sql(conds: &[Condition], sep: &str, params: &mut Vec<String>) -> String {
        let parts: Vec<String> = conds.iter().map(|c| c.to_sql(params)).collect();
        format!("({})", parts.join(sep))
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Condition::Produces(color, flag) => {
                write!(f, "{} = {}", color.column(), if *flag { 1 } else { 0 })
            }
            Condition::TypeIs(t) => write!(f, "Type = '{t}'"),
            Condition::TypeIsNot(t) => write!(f, "Type != '{t}'"),
            Condition::PowerHas(marker) => write!(f, "Power LIKE '%{marker}%'"),
            Condition::SuitHas(marker) => write!(f, "Suit LIKE '%{marker}%'"),
            Condition::Any(conds) if conds.is_empty() => f.write_str("FALSE"),
            Condition::All(conds) if conds.is_empty() => f.write_str("TRUE"),
            Condition::Any(conds) | Condition::All(conds) => {
                let sep = if matches!(self, Condition::Any(_)) {
                    " OR "
                } else {
                    " AND "
                };
                f.write_str("(")?;
                for (i, cond) in conds.iter().enumerate() {
                    if i > 0 {
                        f.write_str(sep)?;
                    }
                    write!(f, "{cond}")?;
                }
                f.write_str(")")
            }
        }
    }
}

/// The complete selection rule for one "show lands" request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterPredicate {
    root: Condition,
}

impl FilterPredicate {
    pub fn matches(&self, entry: &CatalogEntry) -> bool {
        self.root.matches(entry)
    }

    /// WHERE clause body and its bound parameters, in placeholder order
    pub fn to_sql(&self) -> (String, Vec<String>) {
        let mut params = Vec::new();
        let sql = self.root.to_sql(&mut params);
        (sql, params)
    }
}

impl fmt::Display for FilterPredicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.root)
    }
}

/// Lands producing an identity color, or lands of any color
pub fn allowed_colors(commander: &Commander) -> Condition {
    let mut conds: Vec<Condition> = commander
        .colors()
        .into_iter()
        .map(|color| Condition::Produces(color, true))
        .collect();
    conds.push(Condition::TypeIs(TYPE_ANYLAND.to_string()));
    Condition::Any(conds)
}

/// Lands producing no color outside the identity.
///
/// Returns `None` for five-color identities, which forbid nothing.
pub fn forbidden_colors(commander: &Commander) -> Option<Condition> {
    let forbidden = commander.forbidden_colors();
    if forbidden.is_empty() {
        return None;
    }
    Some(Condition::All(
        forbidden
            .into_iter()
            .map(|color| Condition::Produces(color, false))
            .collect(),
    ))
}

/// Fetch lands only need to reach one identity color
pub fn fetchland(commander: &Commander) -> Condition {
    Condition::All(vec![
        Condition::TypeIs(TYPE_FETCH.to_string()),
        allowed_colors(commander),
    ])
}

pub fn power_range(power: PowerTier) -> Condition {
    Condition::PowerHas(power.marker())
}

/// `None` when utility lands are shown
pub fn show_utility(show: bool) -> Option<Condition> {
    if show {
        None
    } else {
        Some(Condition::TypeIsNot(TYPE_UTILITY.to_string()))
    }
}

/// Lands suited to decks with this many colors.
///
/// The marker is the color count minus one; a colorless identity uses the
/// mono-color marker.
pub fn suit_deck(commander: &Commander) -> Condition {
    let marker = commander.color_count().saturating_sub(1);
    // color_count is at most 5, so the marker is a single digit
    let digit = char::from_digit(marker as u32, 10).unwrap_or('0');
    Condition::SuitHas(digit)
}

/// Builds the full selection rule
pub fn form_filter(commander: &Commander, power: PowerTier, utility: bool) -> FilterPredicate {
    let mut legal = vec![allowed_colors(commander)];
    if let Some(forbid) = forbidden_colors(commander) {
        legal.push(forbid);
    }
    let color_rule = Condition::Any(vec![Condition::All(legal), fetchland(commander)]);

    let mut conds = vec![color_rule, power_range(power)];
    if let Some(utility) = show_utility(utility) {
        conds.push(utility);
    }
    conds.push(suit_deck(commander));

    let predicate = FilterPredicate {
        root: Condition::All(conds),
    };
    log::debug!("Land filter for {}: {}", commander.key(), predicate);
    predicate
}
