//! Testing utilities for gardenplan
//!
//! This module provides small fixture catalogs and a helper for reading
//! rendered ratatui buffers back as text.
//!
//! Only available when compiled with `cfg(test)`.

use crate::catalog::{Catalog, PlantRecord};
use ratatui::buffer::Buffer;

/// A handful of records in a deliberately unsorted order
///
/// Contains the `Basil` / `basilisk fern` pair that differs only by case
/// and suffix, a record without a description, and plain entries.
pub fn sample_plants() -> Vec<PlantRecord> {
    vec![
        PlantRecord::new("Carrot", "🥕", "root vegetable")
            .with_description("Crunchy taproot that prefers loose soil.")
            .with_season("Spring")
            .with_difficulty("Easy"),
        PlantRecord::new("Basil", "🌿", "herb")
            .with_description("Aromatic herb that loves heat.")
            .with_season("Summer"),
        PlantRecord::new("basilisk fern", "🌿", "fern"),
        PlantRecord::new("Kale", "🥬", "leafy green").with_difficulty("Easy"),
        PlantRecord::new("Mint", "🌿", "herb")
            .with_description("Vigorous spreader best kept in a container."),
    ]
}

/// Catalog built from [`sample_plants`]
///
/// # Panics
/// Panics if the fixture stops validating, which would be a test bug.
pub fn sample_catalog() -> Catalog {
    Catalog::new(sample_plants()).expect("sample catalog is valid")
}

/// Render a buffer's cells as text, one line per row
///
/// Wide glyphs occupy two cells, so the text after an emoji may carry an
/// extra blank compared to the terminal. Match on substrings, not positions.
pub fn buffer_text(buffer: &Buffer) -> String {
    let area = buffer.area;
    (area.top()..area.bottom())
        .map(|y| {
            (area.left()..area.right())
                .map(|x| buffer[(x, y)].symbol())
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}
