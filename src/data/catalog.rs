use crate::models::plant::PlantKind;

/// Display data for one plant kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    pub kind: PlantKind,
    pub name: &'static str,
    pub emoji: &'static str,
}

/// The plants a visitor can choose from, in selector order.
pub static CATALOG: [CatalogEntry; 6] = [
    CatalogEntry {
        kind: PlantKind::Sunflower,
        name: "Sunflower",
        emoji: "🌻",
    },
    CatalogEntry {
        kind: PlantKind::Rose,
        name: "Rose",
        emoji: "🌹",
    },
    CatalogEntry {
        kind: PlantKind::Tulip,
        name: "Tulip",
        emoji: "🌷",
    },
    CatalogEntry {
        kind: PlantKind::Cactus,
        name: "Cactus",
        emoji: "🌵",
    },
    CatalogEntry {
        kind: PlantKind::Tree,
        name: "Tree",
        emoji: "🌳",
    },
    CatalogEntry {
        kind: PlantKind::Mushroom,
        name: "Mushroom",
        emoji: "🍄",
    },
];

/// Returns all catalog entries in selector order.
pub fn get_all_plant_kinds() -> &'static [CatalogEntry] {
    &CATALOG
}

/// Looks up a plant kind by display name, ignoring case and surrounding whitespace.
pub fn get_plant_kind_by_name(name: &str) -> Option<PlantKind> {
    let name = name.trim();
    CATALOG
        .iter()
        .find(|entry| entry.name.eq_ignore_ascii_case(name))
        .map(|entry| entry.kind)
}

pub(crate) fn entry(kind: PlantKind) -> &'static CatalogEntry {
    // CATALOG is declared in the same order as the PlantKind variants.
    &CATALOG[kind as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_six_distinct_kinds() {
        let all = get_all_plant_kinds();
        assert_eq!(all.len(), 6);
        let names: std::collections::HashSet<_> = all.iter().map(|e| e.name).collect();
        let emojis: std::collections::HashSet<_> = all.iter().map(|e| e.emoji).collect();
        assert_eq!(names.len(), 6);
        assert_eq!(emojis.len(), 6);
    }

    #[test]
    fn test_entry_matches_variant() {
        for e in get_all_plant_kinds() {
            assert_eq!(entry(e.kind), e, "catalog order must follow PlantKind order");
        }
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert_eq!(get_plant_kind_by_name("rose"), Some(PlantKind::Rose));
        assert_eq!(get_plant_kind_by_name("  MUSHROOM "), Some(PlantKind::Mushroom));
        assert_eq!(get_plant_kind_by_name("daisy"), None);
    }

    #[test]
    fn test_first_entry_is_sunflower() {
        assert_eq!(CATALOG[0].kind, PlantKind::Sunflower);
        assert_eq!(CATALOG[0].emoji, "🌻");
    }
}
