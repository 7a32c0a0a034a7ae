//! Fixed category registry.
//!
//! The five categories are defined at build time, not derived from catalog
//! data. Their order here drives both the home tile layout and the picker
//! option order. Identifiers double as display labels, matching the data
//! source convention.

/// A fixed named grouping with a display label and a symbolic icon name.
///
/// The icon name is resolved to a terminal glyph by the home view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    /// Stable key that item records reference.
    pub id: &'static str,
    /// Display text for tiles, picker entries, and result titles.
    pub label: &'static str,
    /// Symbolic icon name.
    pub icon: &'static str,
}

/// Registry entries in display order.
const CATEGORIES: [Category; 5] = [
    Category {
        id: "Reputation",
        label: "Reputation",
        icon: "scales",
    },
    Category {
        id: "Press Mailing",
        label: "Press Mailing",
        icon: "envelope",
    },
    Category {
        id: "Sponsored Content",
        label: "Sponsored Content",
        icon: "newspaper",
    },
    Category {
        id: "Social Listening",
        label: "Social Listening",
        icon: "headphones",
    },
    Category {
        id: "Influencer Marketing",
        label: "Influencer Marketing",
        icon: "people",
    },
];

/// All categories in fixed display order.
pub fn all() -> &'static [Category] {
    &CATEGORIES
}

/// Look up a category by its identifier (exact match).
pub fn by_id(id: &str) -> Option<&'static Category> {
    CATEGORIES.iter().find(|c| c.id == id)
}
