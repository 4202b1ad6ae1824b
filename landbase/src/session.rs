//! Selection session.
//!
//! Owns the identity, power tier and utility setting for one user session and
//! pushes every change straight to the view.

use crate::catalog::LandCatalog;
use crate::commander::Commander;
use crate::error::Result;
use crate::filter::form_filter;
use crate::formatters::{format_lands, format_lands_verbose};
use crate::models::{Color, PowerTier};

/// Where the session shows its results. Each call replaces what was shown.
pub trait View {
    fn show_label(&mut self, label: &str);
    fn show_lands(&mut self, text: &str);
}

/// Current selection plus the last generated land list
#[derive(Debug, Clone)]
pub struct Session {
    commander: Commander,
    power: PowerTier,
    show_utility: bool,
    verbose: bool,
    output: String,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Colorless identity, Collector tier, utility lands shown
    pub fn new() -> Self {
        Self {
            commander: Commander::new(),
            power: PowerTier::default(),
            show_utility: true,
            verbose: false,
            output: String::new(),
        }
    }

    pub fn commander(&self) -> &Commander {
        &self.commander
    }

    pub fn power(&self) -> PowerTier {
        self.power
    }

    pub fn show_utility(&self) -> bool {
        self.show_utility
    }

    /// Text of the last land list
    pub fn output(&self) -> &str {
        &self.output
    }

    /// Toggles a color and refreshes the deck label
    pub fn toggle_color(&mut self, color: Color, view: &mut impl View) {
        self.commander.toggle(color);
        view.show_label(&self.commander.label());
    }

    pub fn set_power(&mut self, power: PowerTier) {
        self.power = power;
    }

    pub fn set_show_utility(&mut self, show: bool) {
        self.show_utility = show;
    }

    /// Lists each land with its type
    pub fn set_verbose(&mut self, verbose: bool) {
        self.verbose = verbose;
    }

    /// Runs the selection against the catalog and shows the result.
    ///
    /// Returns the number of lands listed.
    pub fn show_lands(&mut self, catalog: &impl LandCatalog, view: &mut impl View) -> Result<usize> {
        let filter = form_filter(&self.commander, self.power, self.show_utility);
        let lands = catalog.lookup(&filter)?;
        self.output = if self.verbose {
            format_lands_verbose(&lands)
        } else {
            format_lands(&lands)
        };
        log::info!(
            "Selected {} lands for {} ({})",
            lands.len(),
            self.commander.combination(),
            self.power
        );
        view.show_lands(&self.output);
        Ok(lands.len())
    }
}
