//! Superskill Topics
//!
//! The ten fixed topics. Each one is backed by exactly one reflection record.

use serde::{Deserialize, Serialize};

/// One of the ten reflection topics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Superskill {
    Kontextalisierung,
    #[serde(rename = "Ästhetik")]
    Aesthetik,
    Konsistenz,
    Inklusion,
    #[serde(rename = "Kreativität")]
    Kreativitaet,
    Emotion,
    #[serde(rename = "Irrationalität")]
    Irrationalitaet,
    Bedeutung,
    Kognition,
    #[serde(rename = "Dimensionalität")]
    Dimensionalitaet,
}

impl Superskill {
    /// All topics in display (and map) order
    pub const ALL: [Superskill; 10] = [
        Superskill::Kontextalisierung,
        Superskill::Aesthetik,
        Superskill::Konsistenz,
        Superskill::Inklusion,
        Superskill::Kreativitaet,
        Superskill::Emotion,
        Superskill::Irrationalitaet,
        Superskill::Bedeutung,
        Superskill::Kognition,
        Superskill::Dimensionalitaet,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Superskill::Kontextalisierung => "Kontextalisierung",
            Superskill::Aesthetik => "Ästhetik",
            Superskill::Konsistenz => "Konsistenz",
            Superskill::Inklusion => "Inklusion",
            Superskill::Kreativitaet => "Kreativität",
            Superskill::Emotion => "Emotion",
            Superskill::Irrationalitaet => "Irrationalität",
            Superskill::Bedeutung => "Bedeutung",
            Superskill::Kognition => "Kognition",
            Superskill::Dimensionalitaet => "Dimensionalität",
        }
    }

    /// Resolve a stored topic name. Unknown names yield `None`.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|s| s.as_str() == name)
    }

    /// Position in [`Superskill::ALL`], also the record id of a fresh record
    pub fn index(&self) -> usize {
        Self::ALL
            .iter()
            .position(|s| s == self)
            .unwrap_or_default()
    }
}

impl std::fmt::Display for Superskill {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip() {
        for skill in Superskill::ALL {
            assert_eq!(Superskill::from_name(skill.as_str()), Some(skill));
        }
        assert_eq!(Superskill::from_name("Ausdauer"), None);
    }

    #[test]
    fn test_index_follows_fixed_order() {
        assert_eq!(Superskill::Kontextalisierung.index(), 0);
        assert_eq!(Superskill::Dimensionalitaet.index(), 9);
    }

    #[test]
    fn test_serializes_as_display_name() {
        let json = serde_json::to_string(&Superskill::Aesthetik).unwrap();
        assert_eq!(json, "\"Ästhetik\"");
    }
}
