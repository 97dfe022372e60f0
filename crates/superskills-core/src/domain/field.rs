//! Reflection Fields
//!
//! Every editable string of a reflection as an explicit (section, field) tag,
//! so editors bind inputs without string-keyed property access.

/// Text sections of a reflection, in editor tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Ausgangslage,
    Anwendung,
    Bewertung,
    Transfer,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Ausgangslage,
        Section::Anwendung,
        Section::Bewertung,
        Section::Transfer,
    ];

    /// Tab label
    pub fn tab_label(&self) -> &'static str {
        match self {
            Section::Ausgangslage => "Ausgangslage",
            Section::Anwendung => "Anwendung",
            Section::Bewertung => "Bewertung",
            Section::Transfer => "Transfer",
        }
    }

    /// Card heading
    pub fn title(&self) -> &'static str {
        match self {
            Section::Ausgangslage => "Eigene Ausgangslage",
            Section::Anwendung => "Anwendung",
            Section::Bewertung => "Bewertung & Reflexion",
            Section::Transfer => "Transfer & Ausblick",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Section::Ausgangslage => "Reflektiere über dein bisheriges Verständnis und deine Erfahrungen mit diesem Superskill.",
            Section::Anwendung => "Dokumentiere deine praktische Anwendung dieses Superskills.",
            Section::Bewertung => "Bewerte deine Erfahrungen mit diesem Superskill.",
            Section::Transfer => "Reflektiere über zukünftige Anwendungen dieses Superskills.",
        }
    }

    /// Fields of this section in form order
    pub fn fields(&self) -> Vec<ReflectionField> {
        ReflectionField::ALL
            .iter()
            .copied()
            .filter(|f| f.section() == Some(*self))
            .collect()
    }
}

/// One editable string of a reflection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReflectionField {
    // Ausgangslage
    Verstaendnis,
    Situationen,
    Literatur,
    // Anwendung
    Titel,
    Photo1,
    Beschreibung,
    Erkenntnisse,
    Photo2,
    Photo3,
    Photo4,
    // Bewertung
    Funktioniert,
    Uebersehen,
    Veraenderung,
    // Transfer
    Zukunft,
    Tools,
    Selbstverstaendnis,
    // Visualisierung (not part of a section)
    WallpaperUrl,
    ImageDescription,
    ImageDescriptionTitle,
}

impl ReflectionField {
    pub const ALL: [ReflectionField; 19] = [
        ReflectionField::Verstaendnis,
        ReflectionField::Situationen,
        ReflectionField::Literatur,
        ReflectionField::Titel,
        ReflectionField::Photo1,
        ReflectionField::Beschreibung,
        ReflectionField::Erkenntnisse,
        ReflectionField::Photo2,
        ReflectionField::Photo3,
        ReflectionField::Photo4,
        ReflectionField::Funktioniert,
        ReflectionField::Uebersehen,
        ReflectionField::Veraenderung,
        ReflectionField::Zukunft,
        ReflectionField::Tools,
        ReflectionField::Selbstverstaendnis,
        ReflectionField::WallpaperUrl,
        ReflectionField::ImageDescription,
        ReflectionField::ImageDescriptionTitle,
    ];

    /// Standalone fields edited on the "Visualisierung" tab
    pub const VISUAL: [ReflectionField; 3] = [
        ReflectionField::WallpaperUrl,
        ReflectionField::ImageDescriptionTitle,
        ReflectionField::ImageDescription,
    ];

    pub fn section(&self) -> Option<Section> {
        use ReflectionField as F;
        match self {
            F::Verstaendnis | F::Situationen | F::Literatur => Some(Section::Ausgangslage),
            F::Titel
            | F::Photo1
            | F::Beschreibung
            | F::Erkenntnisse
            | F::Photo2
            | F::Photo3
            | F::Photo4 => Some(Section::Anwendung),
            F::Funktioniert | F::Uebersehen | F::Veraenderung => Some(Section::Bewertung),
            F::Zukunft | F::Tools | F::Selbstverstaendnis => Some(Section::Transfer),
            F::WallpaperUrl | F::ImageDescription | F::ImageDescriptionTitle => None,
        }
    }

    /// Wire key inside its section (or on the record for standalone fields)
    pub fn key(&self) -> &'static str {
        use ReflectionField as F;
        match self {
            F::Verstaendnis => "verstaendnis",
            F::Situationen => "situationen",
            F::Literatur => "literatur",
            F::Titel => "titel",
            F::Photo1 => "photo1",
            F::Beschreibung => "beschreibung",
            F::Erkenntnisse => "erkenntnisse",
            F::Photo2 => "photo2",
            F::Photo3 => "photo3",
            F::Photo4 => "photo4",
            F::Funktioniert => "funktioniert",
            F::Uebersehen => "uebersehen",
            F::Veraenderung => "veraenderung",
            F::Zukunft => "zukunft",
            F::Tools => "tools",
            F::Selbstverstaendnis => "selbstverstaendnis",
            F::WallpaperUrl => "wallpaperUrl",
            F::ImageDescription => "imageDescription",
            F::ImageDescriptionTitle => "imageDescriptionTitle",
        }
    }

    /// Editor prompt
    pub fn label(&self) -> &'static str {
        use ReflectionField as F;
        match self {
            F::Verstaendnis => "Was habe ich bisher unter diesem Superskill verstanden?",
            F::Situationen => "In welchen Situationen habe ich intuitiv oder bewusst damit gearbeitet?",
            F::Literatur => "Welche spannende Literatur oder Bemerkenswertes gibt es zu diesem Superskill?",
            F::Titel => "Titel",
            F::Photo1 => "Photo 1 (S3 URL)",
            F::Beschreibung => "Beschreibung",
            F::Erkenntnisse => "Erkenntnisse",
            F::Photo2 => "Photo 2 (S3 URL)",
            F::Photo3 => "Photo 3 (S3 URL)",
            F::Photo4 => "Photo 4 (S3 URL)",
            F::Funktioniert => "Was funktioniert gut?",
            F::Uebersehen => "Was habe ich übersehen oder unterschätzt?",
            F::Veraenderung => "Wie hat sich mein Verständnis im Verlauf der Zeit verändert?",
            F::Zukunft => "Wie kann ich diesen Superskill zukünftig gezielter einsetzen?",
            F::Tools => "Welche Tools, Fragen oder Methoden nehme ich mit?",
            F::Selbstverstaendnis => "Wie stärkt dieser Superskill mein Selbstverständnis als Designer?",
            F::WallpaperUrl => "Hintergrundbild für diesen Superskill (URL)",
            F::ImageDescription => "Bildbeschreibung",
            F::ImageDescriptionTitle => "Titel der Bildbeschreibung",
        }
    }

    /// Shorter heading used in read-only previews
    pub fn preview_label(&self) -> &'static str {
        use ReflectionField as F;
        match self {
            F::Situationen => "In welchen Situationen habe ich damit gearbeitet?",
            F::Literatur => "Literatur und Bemerkenswertes",
            F::Veraenderung => "Wie hat sich mein Verständnis verändert?",
            F::Zukunft => "Zukünftiger Einsatz",
            F::Tools => "Tools, Fragen und Methoden",
            F::Selbstverstaendnis => "Stärkung des Selbstverständnisses als Designer",
            other => other.label(),
        }
    }

    pub fn placeholder(&self) -> &'static str {
        use ReflectionField as F;
        match self {
            F::Verstaendnis => "Beschreibe dein bisheriges Verständnis...",
            F::Situationen => "Beschreibe relevante Situationen...",
            F::Literatur => "Füge Literaturhinweise oder Bemerkenswertes hinzu...",
            F::Titel => "Gib deiner Anwendung einen Titel...",
            F::Photo1 | F::Photo2 | F::Photo3 | F::Photo4 => "Füge einen direkten S3-Link ein...",
            F::Beschreibung => "Beschreibe deine Anwendung...",
            F::Erkenntnisse => "Welche Erkenntnisse hast du gewonnen?",
            F::Funktioniert => "Was funktioniert besonders gut?",
            F::Uebersehen => "Was hättest du anders machen können?",
            F::Veraenderung => "Beschreibe die Veränderung deines Verständnisses...",
            F::Zukunft => "Wie möchtest du diesen Skill in Zukunft einsetzen?",
            F::Tools => "Welche praktischen Tools und Methoden nimmst du mit?",
            F::Selbstverstaendnis => "Wie verändert dieser Skill dein Selbstverständnis als Designer?",
            F::WallpaperUrl => "URL des Hintergrundbilds eingeben...",
            F::ImageDescription => "Beschreibe das Hintergrundbild und seine Bedeutung für diesen Superskill...",
            F::ImageDescriptionTitle => "z.B. 'Inspiration für Kreativität' oder 'Ästhetische Prinzipien'",
        }
    }

    pub fn is_photo(&self) -> bool {
        matches!(
            self,
            ReflectionField::Photo1
                | ReflectionField::Photo2
                | ReflectionField::Photo3
                | ReflectionField::Photo4
        )
    }

    /// Single-line inputs; everything else is a textarea
    pub fn is_single_line(&self) -> bool {
        self.is_photo()
            || matches!(
                self,
                ReflectionField::Titel
                    | ReflectionField::WallpaperUrl
                    | ReflectionField::ImageDescriptionTitle
            )
    }

    /// Section text that is not a photo slot
    pub fn counts_toward_progress(&self) -> bool {
        self.section().is_some() && !self.is_photo()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_field_counts() {
        assert_eq!(Section::Ausgangslage.fields().len(), 3);
        assert_eq!(Section::Anwendung.fields().len(), 7);
        assert_eq!(Section::Bewertung.fields().len(), 3);
        assert_eq!(Section::Transfer.fields().len(), 3);
    }

    #[test]
    fn test_progress_relevant_fields() {
        let relevant = ReflectionField::ALL
            .iter()
            .filter(|f| f.counts_toward_progress())
            .count();
        assert_eq!(relevant, 12);
        assert!(!ReflectionField::Photo3.counts_toward_progress());
        assert!(!ReflectionField::WallpaperUrl.counts_toward_progress());
    }

    #[test]
    fn test_visual_fields_have_no_section() {
        for field in ReflectionField::VISUAL {
            assert_eq!(field.section(), None);
        }
    }

    #[test]
    fn test_keys_are_unique() {
        let mut keys: Vec<_> = ReflectionField::ALL.iter().map(|f| f.key()).collect();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), ReflectionField::ALL.len());
    }
}
