//! Document Snapshot
//!
//! `Snapshot` is what the session edits and compares; `Document` is the
//! same content plus metadata as exchanged with the remote store.

use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use super::reflection::Reflection;
use super::settings::PageSettings;
use super::superskill::Superskill;

/// Format tag written with every save
pub const CURRENT_VERSION: u32 = 1;

/// Editable state: all reflections plus page settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub reflections: Vec<Reflection>,
    pub settings: PageSettings,
}

impl Default for Snapshot {
    fn default() -> Self {
        Self {
            reflections: Superskill::ALL
                .iter()
                .map(|s| Reflection::empty(s.index() as u32, *s))
                .collect(),
            settings: PageSettings::default(),
        }
    }
}

impl Snapshot {
    pub fn reflection(&self, topic: Superskill) -> Option<&Reflection> {
        self.reflections
            .iter()
            .find(|r| r.superskill == topic.as_str())
    }

    pub fn find_by_name(&self, name: &str) -> Option<&Reflection> {
        self.reflections.iter().find(|r| r.superskill == name)
    }

    pub fn reflection_mut(&mut self, topic: Superskill) -> Option<&mut Reflection> {
        self.reflections
            .iter_mut()
            .find(|r| r.superskill == topic.as_str())
    }

    /// Wire document stamped with a save time
    pub fn to_document(&self, last_updated: DateTime<Utc>) -> Document {
        Document {
            reflections: self.reflections.clone(),
            settings: self.settings.clone(),
            last_updated: Some(last_updated),
            version: CURRENT_VERSION,
        }
    }
}

/// The stored document, always read and written whole
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    #[serde(default)]
    pub reflections: Vec<Reflection>,
    #[serde(flatten)]
    pub settings: PageSettings,
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub last_updated: Option<DateTime<Utc>>,
    #[serde(default = "default_version")]
    pub version: u32,
}

fn default_version() -> u32 {
    CURRENT_VERSION
}

/// Unparseable timestamps read as "never saved" instead of failing the load
fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.and_then(|s| {
        DateTime::parse_from_rfc3339(&s)
            .map(|t| t.with_timezone(&Utc))
            .ok()
    }))
}

/// Save timestamp at the precision the store round-trips (milliseconds)
pub fn save_timestamp() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(3)
}

impl Document {
    /// Version tag to write: absent or zero becomes the current version
    pub fn effective_version(&self) -> u32 {
        if self.version == 0 {
            CURRENT_VERSION
        } else {
            self.version
        }
    }

    /// Normalize into the fixed topic set
    ///
    /// Each topic appears exactly once, in fixed order. Missing topics get a
    /// blank record; unknown or duplicate topic names are dropped.
    pub fn into_snapshot(self) -> Snapshot {
        let mut loaded = self.reflections;
        let mut reflections = Vec::with_capacity(Superskill::ALL.len());

        for topic in Superskill::ALL {
            match loaded.iter().position(|r| r.superskill == topic.as_str()) {
                Some(pos) => reflections.push(loaded.remove(pos)),
                None => {
                    log::warn!("document has no record for '{}', using a blank one", topic);
                    reflections.push(Reflection::empty(topic.index() as u32, topic));
                }
            }
        }

        for dropped in &loaded {
            log::warn!(
                "dropping record {} with unknown or duplicate topic '{}'",
                dropped.id,
                dropped.superskill
            );
        }

        Snapshot {
            reflections,
            settings: self.settings.with_defaults(),
        }
    }
}
