//! Alignment values read from container properties.
//!
//! Parsing is lenient: unknown strings fall back to `Start`, and the
//! kebab-case / `flex-*` spellings are accepted as aliases.

use kryon_core::PropertyBag;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MainAxisAlignment {
    #[default]
    Start,
    Center,
    End,
    SpaceBetween,
    SpaceAround,
    SpaceEvenly,
}

impl MainAxisAlignment {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "start" | "flex-start" => Some(Self::Start),
            "center" => Some(Self::Center),
            "end" | "flex-end" => Some(Self::End),
            "spaceBetween" | "space-between" => Some(Self::SpaceBetween),
            "spaceAround" | "space-around" => Some(Self::SpaceAround),
            "spaceEvenly" | "space-evenly" => Some(Self::SpaceEvenly),
            _ => None,
        }
    }

    /// Reads `mainAxisAlignment`, falling back to the legacy `mainAxis`.
    pub fn from_properties(properties: &PropertyBag) -> Self {
        properties
            .string("mainAxisAlignment")
            .or_else(|| properties.string("mainAxis"))
            .and_then(Self::parse)
            .unwrap_or_default()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CrossAxisAlignment {
    #[default]
    Start,
    Center,
    End,
    Stretch,
}

impl CrossAxisAlignment {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "start" | "flex-start" => Some(Self::Start),
            "center" => Some(Self::Center),
            "end" | "flex-end" => Some(Self::End),
            "stretch" => Some(Self::Stretch),
            _ => None,
        }
    }

    /// Reads `crossAxisAlignment`, falling back to the legacy `crossAxis`.
    pub fn from_properties(properties: &PropertyBag) -> Self {
        properties
            .string("crossAxisAlignment")
            .or_else(|| properties.string("crossAxis"))
            .and_then(Self::parse)
            .unwrap_or_default()
    }

    /// Offset of a child of extent `size` inside `available` cross space.
    pub fn offset(self, available: f32, size: f32) -> f32 {
        match self {
            CrossAxisAlignment::Start | CrossAxisAlignment::Stretch => 0.0,
            CrossAxisAlignment::Center => (available - size) / 2.0,
            CrossAxisAlignment::End => available - size,
        }
    }
}

/// Placement of each child inside a box container's content area.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ContentAlignment {
    #[default]
    Start,
    Center,
    End,
    /// Centered horizontally, top aligned.
    CenterX,
    /// Centered vertically, start aligned.
    CenterY,
}

impl ContentAlignment {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "start" | "flex-start" => Some(Self::Start),
            "center" => Some(Self::Center),
            "end" | "flex-end" => Some(Self::End),
            "centerX" => Some(Self::CenterX),
            "centerY" => Some(Self::CenterY),
            _ => None,
        }
    }

    pub fn from_properties(properties: &PropertyBag) -> Self {
        properties
            .string("contentAlignment")
            .and_then(Self::parse)
            .unwrap_or_default()
    }

    /// `(dx, dy)` of a `child` sized box inside an `available` sized box.
    pub fn offset(self, available: (f32, f32), child: (f32, f32)) -> (f32, f32) {
        let center = ((available.0 - child.0) / 2.0, (available.1 - child.1) / 2.0);
        let end = (available.0 - child.0, available.1 - child.1);
        match self {
            ContentAlignment::Start => (0.0, 0.0),
            ContentAlignment::Center => center,
            ContentAlignment::End => end,
            ContentAlignment::CenterX => (center.0, 0.0),
            ContentAlignment::CenterY => (0.0, center.1),
        }
    }
}
