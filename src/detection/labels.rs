use std::collections::HashMap;

use image::Rgb;

/// Color used for classes without a table entry.
pub const DEFAULT_COLOR: Rgb<u8> = Rgb([255, 255, 255]);

/// Class display tables: localized names and box colors.
///
/// Both lookups are total. An unmapped key resolves to the key itself and to
/// white; lookups never fail and never mutate anything. Keys match
/// case-insensitively.
pub struct LabelTable {
    names: HashMap<&'static str, &'static str>,
    colors: HashMap<&'static str, Rgb<u8>>,
}

impl LabelTable {
    /// French display names, the deployed UI language.
    pub fn french() -> Self {
        let names = HashMap::from([
            ("gun", "pistolet"),
            ("knife", "couteau"),
            ("wrench", "clé"),
            ("pliers", "pince"),
            ("scissors", "ciseaux"),
        ]);
        Self {
            names,
            colors: class_colors(),
        }
    }

    /// No name table: every class displays as its raw key.
    pub fn english() -> Self {
        Self {
            names: HashMap::new(),
            colors: class_colors(),
        }
    }

    /// Display name for a class key, falling back to the key itself.
    pub fn display_name(&self, key: &str) -> String {
        let key = key.to_lowercase();
        match self.names.get(key.as_str()) {
            Some(name) => (*name).to_string(),
            None => key,
        }
    }

    /// Display color for a class key, falling back to white.
    pub fn color(&self, key: &str) -> Rgb<u8> {
        self.colors
            .get(key.to_lowercase().as_str())
            .copied()
            .unwrap_or(DEFAULT_COLOR)
    }
}

impl Default for LabelTable {
    fn default() -> Self {
        Self::french()
    }
}

fn class_colors() -> HashMap<&'static str, Rgb<u8>> {
    HashMap::from([
        ("gun", Rgb([255, 0, 0])),        // red
        ("knife", Rgb([204, 0, 204])),    // purple
        ("wrench", Rgb([51, 51, 255])),   // blue
        ("pliers", Rgb([0, 255, 255])),   // cyan
        ("scissors", Rgb([255, 255, 0])), // yellow
    ])
}
