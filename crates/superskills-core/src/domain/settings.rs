//! Page Settings
//!
//! Page-level values stored alongside the reflections.

use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE_TITLE: &str = "Visual Superskills";
pub const DEFAULT_PAGE_DESCRIPTION: &str = "Hier siehst du eine visuelle Übersicht aller deiner Reflektionen zu den verschiedenen Superskills. Wähle ein Element an, um die Details einzusehen.";

/// Page settings, serialized flat into the stored document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PageSettings {
    /// Footer link target
    pub custom_link: String,
    /// Footer link text
    pub custom_link_title: String,
    /// Map background image
    pub wallpaper_url: String,
    pub page_title: String,
    pub page_description: String,
}

impl Default for PageSettings {
    fn default() -> Self {
        Self {
            custom_link: String::new(),
            custom_link_title: String::new(),
            wallpaper_url: String::new(),
            page_title: DEFAULT_PAGE_TITLE.to_string(),
            page_description: DEFAULT_PAGE_DESCRIPTION.to_string(),
        }
    }
}

/// Setter tag for a single page setting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingField {
    CustomLink,
    CustomLinkTitle,
    WallpaperUrl,
    PageTitle,
    PageDescription,
}

impl PageSettings {
    pub fn get(&self, field: SettingField) -> &str {
        match field {
            SettingField::CustomLink => &self.custom_link,
            SettingField::CustomLinkTitle => &self.custom_link_title,
            SettingField::WallpaperUrl => &self.wallpaper_url,
            SettingField::PageTitle => &self.page_title,
            SettingField::PageDescription => &self.page_description,
        }
    }

    pub fn set(&mut self, field: SettingField, value: impl Into<String>) {
        let value = value.into();
        match field {
            SettingField::CustomLink => self.custom_link = value,
            SettingField::CustomLinkTitle => self.custom_link_title = value,
            SettingField::WallpaperUrl => self.wallpaper_url = value,
            SettingField::PageTitle => self.page_title = value,
            SettingField::PageDescription => self.page_description = value,
        }
    }

    /// Blank title and description fall back to the defaults
    pub fn with_defaults(mut self) -> Self {
        if self.page_title.is_empty() {
            self.page_title = DEFAULT_PAGE_TITLE.to_string();
        }
        if self.page_description.is_empty() {
            self.page_description = DEFAULT_PAGE_DESCRIPTION.to_string();
        }
        self
    }

    /// Footer href; bare hosts get an https scheme
    pub fn footer_href(&self) -> Option<String> {
        if self.custom_link.is_empty() {
            None
        } else if self.custom_link.starts_with("http") {
            Some(self.custom_link.clone())
        } else {
            Some(format!("https://{}", self.custom_link))
        }
    }

    pub fn footer_text(&self) -> &str {
        if self.custom_link_title.is_empty() {
            "Custom Link"
        } else {
            &self.custom_link_title
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_title_falls_back() {
        let settings = PageSettings {
            page_title: String::new(),
            page_description: String::new(),
            ..Default::default()
        }
        .with_defaults();
        assert_eq!(settings.page_title, DEFAULT_PAGE_TITLE);
        assert_eq!(settings.page_description, DEFAULT_PAGE_DESCRIPTION);
    }

    #[test]
    fn test_footer_href() {
        let mut settings = PageSettings::default();
        assert_eq!(settings.footer_href(), None);

        settings.set(SettingField::CustomLink, "example.org/portfolio");
        assert_eq!(settings.footer_href().as_deref(), Some("https://example.org/portfolio"));

        settings.set(SettingField::CustomLink, "http://example.org");
        assert_eq!(settings.footer_href().as_deref(), Some("http://example.org"));
        assert_eq!(settings.footer_text(), "Custom Link");
    }

    #[test]
    fn test_get_set() {
        let mut settings = PageSettings::default();
        settings.set(SettingField::WallpaperUrl, "https://img");
        assert_eq!(settings.get(SettingField::WallpaperUrl), "https://img");
    }
}
