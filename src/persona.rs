//! Narrator personas selectable at briefing creation time.
//!
//! DESIGN
//! ======
//! Personas form a closed set with an explicit default-mapping rule: an
//! unknown id coming off the wire resolves to the default persona instead of
//! falling through a string-keyed lookup. Adding a persona means adding a
//! variant here and a row in each accessor.

#[cfg(test)]
#[path = "persona_test.rs"]
mod persona_test;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A named narration style for generated briefings.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Persona {
    #[default]
    Streetwise,
    Optimist,
    Skeptic,
}

impl Persona {
    /// All personas, in selector display order.
    pub const ALL: [Persona; 3] = [Persona::Streetwise, Persona::Optimist, Persona::Skeptic];

    /// Wire identifier sent to the API.
    pub fn id(self) -> &'static str {
        match self {
            Persona::Streetwise => "streetwise",
            Persona::Optimist => "optimist",
            Persona::Skeptic => "skeptic",
        }
    }

    /// Display name.
    pub fn label(self) -> &'static str {
        match self {
            Persona::Streetwise => "Streetwise",
            Persona::Optimist => "Optimist",
            Persona::Skeptic => "Skeptic",
        }
    }

    /// One-line tagline shown in the selector.
    pub fn description(self) -> &'static str {
        match self {
            Persona::Streetwise => "Real talk, no BS",
            Persona::Optimist => "See the bright side",
            Persona::Skeptic => "Question everything",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Persona::Streetwise => "\u{1F6E3}\u{FE0F}",
            Persona::Optimist => "\u{2600}\u{FE0F}",
            Persona::Skeptic => "\u{1F914}",
        }
    }

    /// Accent color as a `#RRGGBB` hex string.
    pub fn color(self) -> &'static str {
        match self {
            Persona::Streetwise => "#FF6B6B",
            Persona::Optimist => "#4ECDC4",
            Persona::Skeptic => "#45B7D1",
        }
    }

    /// Resolve a wire id. Unknown ids map to the default persona so that
    /// briefings created with personas this build does not know about still
    /// render deterministically.
    pub fn from_id(id: &str) -> Persona {
        Persona::ALL
            .into_iter()
            .find(|p| p.id() == id)
            .unwrap_or_default()
    }
}

impl Serialize for Persona {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.id())
    }
}

impl<'de> Deserialize<'de> for Persona {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Persona::from_id(&raw))
    }
}
