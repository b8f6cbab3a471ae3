use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ObjectId(pub i64);

/// Opaque key for a bundled visual asset. Only the presentation layer knows
/// how to resolve it; resolution failure falls back to the category glyph.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ImageRef(pub String);

impl ImageRef {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn key(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Planet,
    Moon,
    Star,
    Galaxy,
    Nebula,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Planet,
        Category::Moon,
        Category::Star,
        Category::Galaxy,
        Category::Nebula,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::Planet => "Planet",
            Category::Moon => "Moon",
            Category::Star => "Star",
            Category::Galaxy => "Galaxy",
            Category::Nebula => "Nebula",
        }
    }

    /// Placeholder shown when an [`ImageRef`] cannot be resolved to an asset.
    pub fn glyph(self) -> &'static str {
        match self {
            Category::Planet => "🪐",
            Category::Moon => "🌕",
            Category::Star => "⭐",
            Category::Galaxy => "🌌",
            Category::Nebula => "✨",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CelestialObject {
    pub id: ObjectId,
    pub name: String,
    pub category: Category,
    pub description: String,
    pub distance_from_earth: String,
    pub discovery_year: i32,
    pub image_ref: ImageRef,
    pub facts: Vec<String>,
}

impl CelestialObject {
    /// Negative discovery years stand for antiquity and must never render as
    /// a literal negative number.
    pub fn discovery_label(&self) -> String {
        if self.discovery_year < 0 {
            "Ancient Times".to_string()
        } else {
            self.discovery_year.to_string()
        }
    }
}
