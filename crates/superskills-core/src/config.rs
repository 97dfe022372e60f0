//! Remote Store Configuration
//!
//! Endpoint, document id and credentials are fixed at build time.

/// Debounce delay between the last edit and an autosave
pub const AUTOSAVE_DELAY_MS: u32 = 3000;

/// Query parameter mirroring the document id into the page location
pub const DOCUMENT_QUERY_PARAM: &str = "bin";

const DEFAULT_API_URL: &str = "https://api.jsonbin.io/v3/b";
const DEFAULT_DOCUMENT_ID: &str = "683428ea8561e97a501b9c77";

/// Where the document lives and how to authenticate against it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteConfig {
    /// Collection endpoint, without trailing slash
    pub api_url: String,
    pub document_id: String,
    /// Read-scoped credential, sent on GET
    pub access_key: String,
    /// Write-scoped credential, sent on PUT
    pub master_key: String,
}

impl RemoteConfig {
    /// Values baked in through `SUPERSKILLS_*` variables at compile time
    pub fn from_build_env() -> Self {
        Self {
            api_url: option_env!("SUPERSKILLS_API_URL")
                .unwrap_or(DEFAULT_API_URL)
                .trim_end_matches('/')
                .to_string(),
            document_id: option_env!("SUPERSKILLS_DOCUMENT_ID")
                .unwrap_or(DEFAULT_DOCUMENT_ID)
                .to_string(),
            access_key: option_env!("SUPERSKILLS_ACCESS_KEY").unwrap_or_default().to_string(),
            master_key: option_env!("SUPERSKILLS_MASTER_KEY").unwrap_or_default().to_string(),
        }
    }

    /// GET target for the latest revision
    pub fn latest_url(&self) -> String {
        format!("{}/{}/latest", self.api_url, self.document_id)
    }

    /// PUT target
    pub fn document_url(&self) -> String {
        format!("{}/{}", self.api_url, self.document_id)
    }
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self::from_build_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints() {
        let config = RemoteConfig {
            api_url: "https://store.test/v3/b".to_string(),
            document_id: "abc".to_string(),
            access_key: String::new(),
            master_key: String::new(),
        };
        assert_eq!(config.latest_url(), "https://store.test/v3/b/abc/latest");
        assert_eq!(config.document_url(), "https://store.test/v3/b/abc");
    }

    #[test]
    fn test_build_env_has_document_id() {
        let config = RemoteConfig::from_build_env();
        assert!(!config.document_id.is_empty());
        assert!(!config.api_url.ends_with('/'));
    }
}
