use crate::error::Result;
use crate::models::CatalogEntry;
use std::path::Path;

/// Reads a land catalog CSV with headers `Name,Type,W,U,B,R,G,Power,Suit`.
///
/// Rows without a name are skipped.
pub fn read_catalog_csv(path: &Path) -> Result<Vec<CatalogEntry>> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)?;

    let mut entries = Vec::new();
    for result in rdr.deserialize() {
        let entry: CatalogEntry = result?;
        if entry.name.is_empty() {
            log::warn!("Skipping catalog row without a name ({})", entry.land_type);
            continue;
        }
        entries.push(entry);
    }

    log::info!("Read {} lands from {}", entries.len(), path.display());
    Ok(entries)
}
