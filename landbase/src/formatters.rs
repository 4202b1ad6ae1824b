use crate::models::LandRow;

/// Land names, one per line, in catalog order
pub fn format_lands(lands: &[LandRow]) -> String {
    lands
        .iter()
        .map(|land| land.name.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}

/// `Name - Type` per line, for checking which rule admitted a land
pub fn format_lands_verbose(lands: &[LandRow]) -> String {
    lands
        .iter()
        .map(|land| format!("{} - {}", land.name, land.land_type))
        .collect::<Vec<_>>()
        .join("\n")
}
