use std::{fmt, str::FromStr};

use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    data::catalog::{self, get_plant_kind_by_name},
    error::UnknownPlantKind,
    models::Coordinate,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum PlantKind {
    #[default]
    Sunflower,
    Rose,
    Tulip,
    Cactus,
    Tree,
    Mushroom,
}

impl PlantKind {
    pub const ALL: [PlantKind; 6] = [
        PlantKind::Sunflower,
        PlantKind::Rose,
        PlantKind::Tulip,
        PlantKind::Cactus,
        PlantKind::Tree,
        PlantKind::Mushroom,
    ];

    pub fn name(self) -> &'static str {
        catalog::entry(self).name
    }

    pub fn emoji(self) -> &'static str {
        catalog::entry(self).emoji
    }
}

impl fmt::Display for PlantKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PlantKind {
    type Err = UnknownPlantKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        get_plant_kind_by_name(s).ok_or_else(|| UnknownPlantKind(s.to_string()))
    }
}

/// A plant placed on the board. Stored as
/// `{"id": "row-col", "type": "Rose", "emoji": "🌹", "plantedAt": <epoch millis>}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plant {
    pub id: Coordinate,
    /// Display name of the kind at planting time.
    #[serde(rename = "type")]
    pub kind: String,
    pub emoji: String,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub planted_at: DateTime<Utc>,
}

impl Plant {
    /// The timestamp is truncated to whole milliseconds, the stored precision.
    pub fn new(id: Coordinate, kind: PlantKind, planted_at: DateTime<Utc>) -> Self {
        Self {
            id,
            kind: kind.name().to_string(),
            emoji: kind.emoji().to_string(),
            planted_at: planted_at.trunc_subsecs(3),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn test_kind_names_and_emoji() {
        assert_eq!(PlantKind::Sunflower.name(), "Sunflower");
        assert_eq!(PlantKind::Sunflower.emoji(), "🌻");
        assert_eq!(PlantKind::Tree.emoji(), "🌳");
        assert_eq!(PlantKind::default(), PlantKind::Sunflower);
    }

    #[test]
    fn test_kind_from_str() {
        assert_eq!("tulip".parse::<PlantKind>(), Ok(PlantKind::Tulip));
        assert_eq!(
            "fern".parse::<PlantKind>(),
            Err(UnknownPlantKind("fern".into()))
        );
    }

    #[test]
    fn test_plant_json_shape() {
        let at = Utc.timestamp_millis_opt(1_700_000_000_123).unwrap();
        let plant = Plant::new(Coordinate::new(0, 0).unwrap(), PlantKind::Sunflower, at);
        let json = serde_json::to_value(&plant).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": "0-0",
                "type": "Sunflower",
                "emoji": "🌻",
                "plantedAt": 1_700_000_000_123_i64,
            })
        );
    }

    #[test]
    fn test_planted_at_truncated_to_millis() {
        let at = Utc.timestamp_opt(1_700_000_000, 123_456_789).unwrap();
        let plant = Plant::new(Coordinate::new(1, 2).unwrap(), PlantKind::Rose, at);
        assert_eq!(plant.planted_at.timestamp_subsec_nanos(), 123_000_000);

        let raw = serde_json::to_string(&plant).unwrap();
        let back: Plant = serde_json::from_str(&raw).unwrap();
        assert_eq!(back, plant);
    }

    #[test]
    fn test_unknown_type_name_still_decodes() {
        let raw = r#"{"id":"4-4","type":"Daisy","emoji":"🌼","plantedAt":1}"#;
        let plant: Plant = serde_json::from_str(raw).unwrap();
        assert_eq!(plant.kind, "Daisy");
        assert_eq!(plant.id.to_string(), "4-4");
    }
}
