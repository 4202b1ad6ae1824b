//! SQLite land catalog
//!
//! Lands live in a single `MTG_lands` table. Selection queries are built from a
//! [`FilterPredicate`] with bound parameters only; writes are transactional.

use crate::catalog::LandCatalog;
use crate::error::Result;
use crate::filter::FilterPredicate;
use crate::io::read_catalog_csv;
use crate::models::{CatalogEntry, LandRow};
use rusqlite::{params, params_from_iter, Connection, Transaction};
use std::path::Path;

/// Land catalog backed by a SQLite database
pub struct SqliteCatalog {
    conn: Connection,
}

impl SqliteCatalog {
    /// Opens (or creates) the catalog database and initialises the schema
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent)?;
                log::info!("Created directory: {}", parent.display());
            }
        }
        let conn = Connection::open(path)?;
        log::info!("Opened land catalog: {}", path.display());
        Self::from_connection(conn)
    }

    /// In-memory catalog, used by tests and one-off imports
    pub fn open_in_memory() -> Result<Self> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> Result<Self> {
        let catalog = Self { conn };
        catalog.init_schema()?;
        Ok(catalog)
    }

    /// Creates the `MTG_lands` table if it does not already exist
    pub fn init_schema(&self) -> Result<()> {
        self.conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS MTG_lands (
                Name  TEXT NOT NULL,
                Type  TEXT NOT NULL,
                W     INTEGER NOT NULL DEFAULT 0,
                U     INTEGER NOT NULL DEFAULT 0,
                B     INTEGER NOT NULL DEFAULT 0,
                R     INTEGER NOT NULL DEFAULT 0,
                G     INTEGER NOT NULL DEFAULT 0,
                Power TEXT NOT NULL,
                Suit  TEXT NOT NULL
            );

            CREATE UNIQUE INDEX IF NOT EXISTS idx_lands_name ON MTG_lands(Name);
            CREATE INDEX IF NOT EXISTS idx_lands_type ON MTG_lands(Type);",
        )?;
        log::debug!("Land catalog schema initialized");
        Ok(())
    }

    /// Upserts entries by name in a single transaction, returning how many were written.
    ///
    /// Re-importing a catalog updates lands in place and keeps their position.
    pub fn insert_entries(&mut self, entries: &[CatalogEntry]) -> Result<usize> {
        let tx = self.conn.transaction()?;
        let count = insert_entries_tx(&tx, entries)?;
        tx.commit()?;
        log::info!("Upserted {} lands into catalog", count);
        Ok(count)
    }

    /// Loads a catalog CSV (`Name,Type,W,U,B,R,G,Power,Suit`) into the table
    pub fn import_csv(&mut self, path: &Path) -> Result<usize> {
        let entries = read_catalog_csv(path)?;
        self.insert_entries(&entries)
    }

    /// Total number of lands in the catalog
    pub fn count(&self) -> Result<i64> {
        Ok(self
            .conn
            .query_row("SELECT COUNT(*) FROM MTG_lands", [], |row| row.get(0))?)
    }
}

fn insert_entries_tx(tx: &Transaction<'_>, entries: &[CatalogEntry]) -> Result<usize> {
    let mut stmt = tx.prepare_cached(
        "INSERT INTO MTG_lands (Name, Type, W, U, B, R, G, Power, Suit)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
         ON CONFLICT(Name) DO UPDATE SET
            Type  = excluded.Type,
            W     = excluded.W,
            U     = excluded.U,
            B     = excluded.B,
            R     = excluded.R,
            G     = excluded.G,
            Power = excluded.Power,
            Suit  = excluded.Suit",
    )?;

    let mut count = 0;
    for entry in entries {
        stmt.execute(params![
            &entry.name,
            &entry.land_type,
            entry.white,
            entry.blue,
            entry.black,
            entry.red,
            entry.green,
            &entry.power,
            &entry.suit,
        ])?;
        count += 1;
    }
    Ok(count)
}

impl LandCatalog for SqliteCatalog {
    fn lookup(&self, predicate: &FilterPredicate) -> Result<Vec<LandRow>> {
        let (clause, values) = predicate.to_sql();
        // rowid keeps lands of the same type in catalog order
        let sql = format!("SELECT Name, Type FROM MTG_lands WHERE {clause} ORDER BY Type, rowid");
        log::debug!("Catalog query: {} {:?}", sql, values);

        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt
            .query_map(params_from_iter(values.iter()), |row| {
                Ok(LandRow {
                    name: row.get(0)?,
                    land_type: row.get(1)?,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        log::debug!("Catalog returned {} lands", rows.len());
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commander::Commander;
    use crate::filter::form_filter;
    use crate::models::{Color, PowerTier};

    fn land(name: &str, land_type: &str, colors: &str, power: &str, suit: &str) -> CatalogEntry {
        CatalogEntry {
            name: name.to_string(),
            land_type: land_type.to_string(),
            white: colors.contains('W'),
            blue: colors.contains('U'),
            black: colors.contains('B'),
            red: colors.contains('R'),
            green: colors.contains('G'),
            power: power.to_string(),
            suit: suit.to_string(),
        }
    }

    /// In-memory catalog with a handful of lands
    fn test_db() -> SqliteCatalog {
        let mut catalog = SqliteCatalog::open_in_memory().unwrap();
        catalog
            .insert_entries(&[
                land("Plains", "Basic", "W", "123", "0123"),
                land("Island", "Basic", "U", "123", "0123"),
                land("Command Tower", "Anyland", "", "123", "1234"),
                land("Marsh Flats", "Fetch", "WB", "23", "01234"),
                land("Hallowed Fountain", "Shock", "WU", "23", "1234"),
                land("Godless Shrine", "Shock", "WB", "23", "1234"),
                land("Castle Ardenvale", "Utility", "W", "123", "0"),
                land("Mana Confluence", "Rainbow", "WUBRG", "3", "34"),
            ])
            .unwrap();
        catalog
    }

    fn names(rows: Vec<LandRow>) -> Vec<String> {
        rows.into_iter().map(|row| row.name).collect()
    }

    #[test]
    fn init_schema_creates_table() {
        let catalog = SqliteCatalog::open_in_memory().unwrap();
        let count: i64 = catalog
            .conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name='MTG_lands'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(count, 1);
    }

    #[test]
    fn init_schema_is_idempotent() {
        let catalog = test_db();
        catalog.init_schema().unwrap();
        assert_eq!(catalog.count().unwrap(), 8);
    }

    #[test]
    fn insert_entries_updates_existing_land() {
        let mut catalog = test_db();
        catalog
            .insert_entries(&[land("Plains", "Basic", "W", "3", "0")])
            .unwrap();

        assert_eq!(catalog.count().unwrap(), 8);
        let power: String = catalog
            .conn
            .query_row(
                "SELECT Power FROM MTG_lands WHERE Name = ?1",
                params!["Plains"],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(power, "3");
    }

    #[test]
    fn flags_are_stored_as_integers() {
        let catalog = test_db();
        let (w, b): (i64, i64) = catalog
            .conn
            .query_row(
                "SELECT W, B FROM MTG_lands WHERE Name = ?1",
                params!["Marsh Flats"],
                |row| Ok((row.get(0)?, row.get(1)?)),
            )
            .unwrap();
        assert_eq!((w, b), (1, 1));
    }

    #[test]
    fn mono_white_collector() {
        let catalog = test_db();
        let filter = form_filter(
            &Commander::with_colors(&[Color::White]),
            PowerTier::Collector,
            true,
        );
        let rows = catalog.lookup(&filter).unwrap();

        // ordered by type: Basic, Fetch, Utility
        assert_eq!(
            names(rows),
            vec!["Plains", "Marsh Flats", "Castle Ardenvale"]
        );
    }

    #[test]
    fn mono_white_starter_without_utility() {
        let catalog = test_db();
        let filter = form_filter(
            &Commander::with_colors(&[Color::White]),
            PowerTier::Starter,
            false,
        );
        assert_eq!(names(catalog.lookup(&filter).unwrap()), vec!["Plains"]);
    }

    #[test]
    fn azorius_matches_two_color_suit() {
        let catalog = test_db();
        let filter = form_filter(
            &Commander::with_colors(&[Color::White, Color::Blue]),
            PowerTier::Collector,
            false,
        );
        let rows = catalog.lookup(&filter).unwrap();
        assert_eq!(
            names(rows),
            vec![
                "Command Tower",
                "Plains",
                "Island",
                "Marsh Flats",
                "Hallowed Fountain"
            ]
        );
    }

    #[test]
    fn five_colors_admit_rainbow_lands() {
        let catalog = test_db();
        let filter = form_filter(
            &Commander::with_colors(&Color::ALL),
            PowerTier::Elite,
            true,
        );
        let rows = names(catalog.lookup(&filter).unwrap());
        assert!(rows.contains(&"Mana Confluence".to_string()));
        assert!(rows.contains(&"Godless Shrine".to_string()));
        assert!(!rows.contains(&"Plains".to_string()));
    }

    #[test]
    fn sqlite_agrees_with_memory_catalog() {
        use crate::catalog::MemoryCatalog;

        let sqlite = test_db();
        let entries = vec![
            land("Plains", "Basic", "W", "123", "0123"),
            land("Island", "Basic", "U", "123", "0123"),
            land("Command Tower", "Anyland", "", "123", "1234"),
            land("Marsh Flats", "Fetch", "WB", "23", "01234"),
            land("Hallowed Fountain", "Shock", "WU", "23", "1234"),
            land("Godless Shrine", "Shock", "WB", "23", "1234"),
            land("Castle Ardenvale", "Utility", "W", "123", "0"),
            land("Mana Confluence", "Rainbow", "WUBRG", "3", "34"),
        ];
        let memory = MemoryCatalog::from_entries(entries);

        for mask in 0u8..32 {
            let colors: Vec<Color> = Color::ALL
                .into_iter()
                .enumerate()
                .filter(|(i, _)| mask & (1 << i) != 0)
                .map(|(_, c)| c)
                .collect();
            let commander = Commander::with_colors(&colors);
            for tier in PowerTier::ALL {
                for utility in [true, false] {
                    let filter = form_filter(&commander, tier, utility);
                    let mut from_sql = names(sqlite.lookup(&filter).unwrap());
                    let mut from_mem = names(memory.lookup(&filter).unwrap());
                    from_sql.sort();
                    from_mem.sort();
                    assert_eq!(from_sql, from_mem, "{} {} {}", commander.key(), tier, utility);
                }
            }
        }
    }
}
