//! Landbase - EDH land base builder
//!
//! Command-line front end: pick colors, power tier and utility setting, list the
//! matching lands and optionally save them as a text file.

use clap::{Parser, Subcommand};
use landbase::{
    parse_colors, save_and_open, ExportOutcome, FixedPath, LinePrompt, PowerTier, Session,
    SqliteCatalog, SystemOpener, View,
};
use std::path::{Path, PathBuf};

/// Land base builder for Commander decks
#[derive(Parser, Debug)]
#[command(name = "landbase")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the SQLite land catalog
    #[arg(short, long, default_value_t = default_db_path())]
    database: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Load lands from a CSV file (Name,Type,W,U,B,R,G,Power,Suit) into the catalog
    Import {
        /// CSV file to import
        csv: PathBuf,
    },
    /// Print the name of a color combination
    Label {
        /// Mana symbols of the identity, e.g. "WU" (empty for colorless)
        #[arg(short, long, default_value = "")]
        colors: String,
    },
    /// List the lands for a color identity
    Lands {
        /// Mana symbols of the identity, e.g. "WUB"
        #[arg(short, long, default_value = "")]
        colors: String,

        /// Power tier: Starter, Collector or Elite
        #[arg(short, long, default_value = "Collector")]
        power: String,

        /// Leave out utility lands
        #[arg(long, default_value_t = false)]
        hide_utility: bool,

        /// Show each land's type next to its name
        #[arg(short, long, default_value_t = false)]
        verbose: bool,

        /// Ask for a file name and save the list
        #[arg(long, default_value_t = false)]
        save: bool,

        /// Save the list to this file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Returns the default catalog path: ~/.local/share/landbase/MTG_landbase.db
fn default_db_path() -> String {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("landbase")
        .join("MTG_landbase.db")
        .to_string_lossy()
        .to_string()
}

/// Prints the deck label and land list to stdout
struct ConsoleView;

impl View for ConsoleView {
    fn show_label(&mut self, label: &str) {
        println!("{label}");
    }

    fn show_lands(&mut self, text: &str) {
        println!("{text}");
    }
}

fn main() {
    // Set RUST_LOG to control log level, e.g. RUST_LOG=landbase=debug
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let db_path = PathBuf::from(&args.database);

    if let Err(e) = run(&db_path, args.command) {
        log::error!("{e}");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(db_path: &Path, command: Command) -> landbase::Result<()> {
    match command {
        Command::Import { csv } => {
            let mut catalog = SqliteCatalog::open(db_path)?;
            let count = catalog.import_csv(&csv)?;
            log::info!(
                "Imported {} lands, catalog now holds {}",
                count,
                catalog.count()?
            );
        }
        Command::Label { colors } => {
            let mut session = Session::new();
            select_colors(&mut session, &colors)?;
            println!("{}", session.commander().label());
        }
        Command::Lands {
            colors,
            power,
            hide_utility,
            verbose,
            save,
            output,
        } => {
            let mut session = Session::new();
            select_colors(&mut session, &colors)?;
            session.set_power(power.parse::<PowerTier>()?);
            session.set_show_utility(!hide_utility);
            session.set_verbose(verbose);

            let catalog = SqliteCatalog::open(db_path)?;
            if catalog.count()? == 0 {
                log::warn!(
                    "Land catalog {} is empty, load one with `landbase import`",
                    db_path.display()
                );
            }
            let mut view = ConsoleView;
            view.show_label(&session.commander().label());
            session.show_lands(&catalog, &mut view)?;

            let outcome = if output.is_some() {
                Some(save_and_open(
                    session.output(),
                    &mut FixedPath(output),
                    &SystemOpener,
                )?)
            } else if save {
                let stdin = std::io::stdin();
                let mut prompt = LinePrompt::new(stdin.lock(), std::io::stderr());
                Some(save_and_open(session.output(), &mut prompt, &SystemOpener)?)
            } else {
                None
            };

            if let Some(ExportOutcome::Saved {
                path,
                open_warning: Some(warning),
            }) = outcome
            {
                eprintln!("Saved to {}, but: {}", path.display(), warning);
            }
        }
    }
    Ok(())
}

/// Switches on each color of the identity once
fn select_colors(session: &mut Session, colors: &str) -> landbase::Result<()> {
    let mut label = ConsoleLabelSink;
    for color in parse_colors(colors)? {
        if !session.commander().contains(color) {
            session.toggle_color(color, &mut label);
        }
    }
    Ok(())
}

/// Label updates while parsing arguments are only logged; the final label is
/// printed once the selection is complete.
struct ConsoleLabelSink;

impl View for ConsoleLabelSink {
    fn show_label(&mut self, label: &str) {
        log::debug!("Deck label: {label}");
    }

    fn show_lands(&mut self, _text: &str) {}
}
