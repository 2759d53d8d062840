use crate::{
    data::catalog::get_all_plant_kinds,
    logic::widget::GardenWidget,
    models::{plant::PlantKind, GRID_SIZE},
    notify::Notifier,
    storage::Storage,
};

/// Marker drawn on an empty plot.
pub const EMPTY_PLOT: &str = "·";

/// Draws the selector, the counters and the board.
pub fn render<S: Storage, N: Notifier>(widget: &GardenWidget<S, N>) -> String {
    let mut lines = vec![
        format!("Select your plant: {}", selector(widget.selected_kind())),
        format!(
            "🌱 Plants: {}   👥 Visitors: {}",
            widget.plant_count(),
            widget.visitors()
        ),
        String::new(),
    ];

    let header: Vec<String> = (0..GRID_SIZE).map(|c| format!("{c:^2}")).collect();
    lines.push(format!("   {}", header.join(" ")));

    let grid = widget.grid();
    for (r, row) in grid.cells.iter().enumerate() {
        let plots: Vec<&str> = row
            .iter()
            .map(|cell| cell.plant.as_ref().map_or(EMPTY_PLOT, |p| p.emoji.as_str()))
            .collect();
        lines.push(format!("{r:>2} {}", plots.join("  ")));
    }
    lines.join("\n")
}

/// All kinds in catalog order, the selected one in brackets.
pub fn selector(selected: PlantKind) -> String {
    get_all_plant_kinds()
        .iter()
        .map(|entry| {
            if entry.kind == selected {
                format!("[{} {}]", entry.emoji, entry.name)
            } else {
                format!("{} {}", entry.emoji, entry.name)
            }
        })
        .collect::<Vec<_>>()
        .join("  ")
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, TimeZone, Utc};
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;
    use crate::{
        notify::RecordingNotifier,
        storage::{MemoryStorage, MINES_KEY},
    };

    fn clock() -> DateTime<Utc> {
        Utc.timestamp_millis_opt(0).unwrap()
    }

    #[test]
    fn test_selector_highlights_choice() {
        let line = selector(PlantKind::Rose);
        assert!(line.contains("[🌹 Rose]"));
        assert!(line.contains("🌻 Sunflower"));
        assert!(!line.contains("[🌻"));
        assert!(line.starts_with("🌻 Sunflower"));
    }

    #[test]
    fn test_render_board() {
        let mut storage = MemoryStorage::new();
        storage
            .set(MINES_KEY, r#"["0-1","1-2","2-3","3-4","4-5","5-0"]"#)
            .unwrap();
        let mut widget = GardenWidget::mount_with(
            storage,
            RecordingNotifier::new(true),
            StdRng::seed_from_u64(0),
            clock,
        );
        widget.select_plant_kind(PlantKind::Cactus);
        widget.plant_seed(2, 2);

        let out = render(&widget);
        let lines: Vec<&str> = out.lines().collect();
        assert!(lines[0].contains("[🌵 Cactus]"));
        assert_eq!(lines[1], "🌱 Plants: 1   👥 Visitors: 1");
        assert_eq!(lines.len(), 4 + GRID_SIZE);
        assert_eq!(lines[6], " 2 ·  ·  🌵  ·  ·  ·");
        assert_eq!(lines[4], " 0 ·  ·  ·  ·  ·  ·", "mines stay hidden");
    }
}
