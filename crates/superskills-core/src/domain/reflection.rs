//! Reflection Entity
//!
//! One structured reflection per superskill: four text sections plus the
//! visualisation fields shown on the map.

use serde::{Deserialize, Serialize};

use super::field::ReflectionField;
use super::superskill::Superskill;

/// "Eigene Ausgangslage"
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Ausgangslage {
    pub verstaendnis: String,
    pub situationen: String,
    pub literatur: String,
}

/// "Anwendung" - the only section with photo slots
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Anwendung {
    pub titel: String,
    pub photo1: String,
    pub beschreibung: String,
    pub erkenntnisse: String,
    pub photo2: String,
    pub photo3: String,
    pub photo4: String,
}

/// "Bewertung & Reflexion"
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Bewertung {
    pub funktioniert: String,
    pub uebersehen: String,
    pub veraenderung: String,
}

/// "Transfer & Ausblick"
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Transfer {
    pub zukunft: String,
    pub tools: String,
    pub selbstverstaendnis: String,
}

/// A reflection record
///
/// The visualisation fields were added after the first documents were
/// written, so they (like every other string) default to empty on read.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reflection {
    pub id: u32,
    pub superskill: String,
    #[serde(default)]
    pub wallpaper_url: String,
    #[serde(default)]
    pub image_description: String,
    #[serde(default)]
    pub image_description_title: String,
    #[serde(default)]
    pub ausgangslage: Ausgangslage,
    #[serde(default)]
    pub anwendung: Anwendung,
    #[serde(default)]
    pub bewertung: Bewertung,
    #[serde(default)]
    pub transfer: Transfer,
}

/// Filled vs. total count of progress-relevant fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub filled: usize,
    pub total: usize,
}

impl Progress {
    /// Rounded percentage, 0 when there is nothing to fill
    pub fn percent(&self) -> u8 {
        if self.total == 0 {
            return 0;
        }
        ((self.filled as f64 / self.total as f64) * 100.0).round() as u8
    }
}

impl Reflection {
    /// Blank record for a topic
    pub fn empty(id: u32, superskill: Superskill) -> Self {
        Self {
            id,
            superskill: superskill.as_str().to_string(),
            ..Default::default()
        }
    }

    /// Topic this record belongs to, if its name is one of the fixed ten
    pub fn topic(&self) -> Option<Superskill> {
        Superskill::from_name(&self.superskill)
    }

    pub fn field(&self, field: ReflectionField) -> &str {
        use ReflectionField as F;
        match field {
            F::Verstaendnis => &self.ausgangslage.verstaendnis,
            F::Situationen => &self.ausgangslage.situationen,
            F::Literatur => &self.ausgangslage.literatur,
            F::Titel => &self.anwendung.titel,
            F::Photo1 => &self.anwendung.photo1,
            F::Beschreibung => &self.anwendung.beschreibung,
            F::Erkenntnisse => &self.anwendung.erkenntnisse,
            F::Photo2 => &self.anwendung.photo2,
            F::Photo3 => &self.anwendung.photo3,
            F::Photo4 => &self.anwendung.photo4,
            F::Funktioniert => &self.bewertung.funktioniert,
            F::Uebersehen => &self.bewertung.uebersehen,
            F::Veraenderung => &self.bewertung.veraenderung,
            F::Zukunft => &self.transfer.zukunft,
            F::Tools => &self.transfer.tools,
            F::Selbstverstaendnis => &self.transfer.selbstverstaendnis,
            F::WallpaperUrl => &self.wallpaper_url,
            F::ImageDescription => &self.image_description,
            F::ImageDescriptionTitle => &self.image_description_title,
        }
    }

    fn field_mut(&mut self, field: ReflectionField) -> &mut String {
        use ReflectionField as F;
        match field {
            F::Verstaendnis => &mut self.ausgangslage.verstaendnis,
            F::Situationen => &mut self.ausgangslage.situationen,
            F::Literatur => &mut self.ausgangslage.literatur,
            F::Titel => &mut self.anwendung.titel,
            F::Photo1 => &mut self.anwendung.photo1,
            F::Beschreibung => &mut self.anwendung.beschreibung,
            F::Erkenntnisse => &mut self.anwendung.erkenntnisse,
            F::Photo2 => &mut self.anwendung.photo2,
            F::Photo3 => &mut self.anwendung.photo3,
            F::Photo4 => &mut self.anwendung.photo4,
            F::Funktioniert => &mut self.bewertung.funktioniert,
            F::Uebersehen => &mut self.bewertung.uebersehen,
            F::Veraenderung => &mut self.bewertung.veraenderung,
            F::Zukunft => &mut self.transfer.zukunft,
            F::Tools => &mut self.transfer.tools,
            F::Selbstverstaendnis => &mut self.transfer.selbstverstaendnis,
            F::WallpaperUrl => &mut self.wallpaper_url,
            F::ImageDescription => &mut self.image_description,
            F::ImageDescriptionTitle => &mut self.image_description_title,
        }
    }

    pub fn set_field(&mut self, field: ReflectionField, value: impl Into<String>) {
        *self.field_mut(field) = value.into();
    }

    /// Copy of this record with one field replaced
    pub fn with_field(&self, field: ReflectionField, value: impl Into<String>) -> Self {
        let mut updated = self.clone();
        updated.set_field(field, value);
        updated
    }

    /// Non-blank section fields (photos excluded) out of all section fields
    pub fn progress(&self) -> Progress {
        let relevant = ReflectionField::ALL
            .iter()
            .filter(|f| f.counts_toward_progress());
        let mut progress = Progress { filled: 0, total: 0 };
        for field in relevant {
            progress.total += 1;
            if !self.field(*field).trim().is_empty() {
                progress.filled += 1;
            }
        }
        progress
    }

    /// Total characters across the progress-relevant fields
    pub fn text_length(&self) -> usize {
        ReflectionField::ALL
            .iter()
            .filter(|f| f.counts_toward_progress())
            .map(|f| self.field(*f).chars().count())
            .sum()
    }

    /// Image description heading, falling back to "<topic> - Bildbeschreibung"
    pub fn description_heading(&self) -> String {
        if self.image_description_title.is_empty() {
            format!("{} - Bildbeschreibung", self.superskill)
        } else {
            self.image_description_title.clone()
        }
    }

    pub fn has_image_description(&self) -> bool {
        !self.image_description.is_empty() || !self.image_description_title.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_record() {
        let reflection = Reflection::empty(3, Superskill::Inklusion);
        assert_eq!(reflection.id, 3);
        assert_eq!(reflection.superskill, "Inklusion");
        assert_eq!(reflection.topic(), Some(Superskill::Inklusion));
        assert_eq!(reflection.progress(), Progress { filled: 0, total: 12 });
        assert_eq!(reflection.progress().percent(), 0);
    }

    #[test]
    fn test_progress_ignores_photos_and_whitespace() {
        let reflection = Reflection::empty(0, Superskill::Kontextalisierung)
            .with_field(ReflectionField::Photo1, "https://example.org/a.jpg")
            .with_field(ReflectionField::Beschreibung, "   ")
            .with_field(ReflectionField::Tools, "Miro");
        assert_eq!(reflection.progress(), Progress { filled: 1, total: 12 });
        assert_eq!(reflection.progress().percent(), 8);
    }

    #[test]
    fn test_three_fields_in_first_section() {
        let reflection = Reflection::empty(0, Superskill::Kontextalisierung)
            .with_field(ReflectionField::Verstaendnis, "a")
            .with_field(ReflectionField::Situationen, "b")
            .with_field(ReflectionField::Literatur, "c");
        assert_eq!(reflection.progress().percent(), 25);
    }

    #[test]
    fn test_half_rounds_up() {
        let progress = Progress { filled: 1, total: 8 };
        assert_eq!(progress.percent(), 13);
    }

    #[test]
    fn test_backfills_missing_visual_fields() {
        let json = r#"{
            "id": 1,
            "superskill": "Ästhetik",
            "ausgangslage": {"verstaendnis": "x", "situationen": "", "literatur": ""},
            "anwendung": {"titel": "", "photo1": "", "beschreibung": "", "erkenntnisse": "", "photo2": "", "photo3": "", "photo4": ""},
            "bewertung": {"funktioniert": "", "uebersehen": "", "veraenderung": ""},
            "transfer": {"zukunft": "", "tools": "", "selbstverstaendnis": ""}
        }"#;
        let reflection: Reflection = serde_json::from_str(json).unwrap();
        assert_eq!(reflection.wallpaper_url, "");
        assert_eq!(reflection.image_description, "");
        assert_eq!(reflection.image_description_title, "");
        assert_eq!(reflection.ausgangslage.verstaendnis, "x");

        let value = serde_json::to_value(&reflection).unwrap();
        assert_eq!(value["wallpaperUrl"], "");
        assert_eq!(value["imageDescriptionTitle"], "");
    }

    #[test]
    fn test_description_heading_fallback() {
        let reflection = Reflection::empty(5, Superskill::Emotion);
        assert_eq!(reflection.description_heading(), "Emotion - Bildbeschreibung");
        assert!(!reflection.has_image_description());

        let titled = reflection.with_field(ReflectionField::ImageDescriptionTitle, "Nebel");
        assert_eq!(titled.description_heading(), "Nebel");
        assert!(titled.has_image_description());
    }

    #[test]
    fn test_text_length_counts_characters() {
        let reflection = Reflection::empty(1, Superskill::Aesthetik)
            .with_field(ReflectionField::Zukunft, "Äöü")
            .with_field(ReflectionField::Photo2, "ignored");
        assert_eq!(reflection.text_length(), 3);
    }
}
