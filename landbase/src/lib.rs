//! Landbase - EDH land base builder
//!
//! Picks the lands for a Commander deck from a SQLite land catalog, given the
//! deck's color identity, power tier and whether utility lands are wanted.

pub mod catalog;
pub mod commander;
pub mod database;
pub mod error;
pub mod export;
pub mod filter;
pub mod formatters;
pub mod io;
pub mod models;
pub mod session;

pub use catalog::{LandCatalog, MemoryCatalog};
pub use commander::Commander;
pub use database::SqliteCatalog;
pub use error::{Error, Result};
pub use export::{
    save_and_open, ExportOutcome, FileOpener, FixedPath, LinePrompt, PathPrompt, SystemOpener,
};
pub use filter::{form_filter, Condition, FilterPredicate};
pub use formatters::{format_lands, format_lands_verbose};
pub use models::{parse_colors, CatalogEntry, Color, LandRow, PowerTier};
pub use session::{Session, View};
