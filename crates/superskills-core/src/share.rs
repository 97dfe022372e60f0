//! Location Mirroring
//!
//! The document id is mirrored into the page URL so the address can be
//! copied. Purely cosmetic; it never changes which document is used.

use reqwest::Url;

use crate::config::DOCUMENT_QUERY_PARAM;

/// `href` with the document parameter set to `document_id`
///
/// An existing parameter is replaced, other query pairs and the fragment are
/// kept. Returns `None` for unparseable input.
pub fn mirror_document_id(href: &str, document_id: &str) -> Option<String> {
    let mut url = Url::parse(href).ok()?;
    let kept: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(key, _)| key != DOCUMENT_QUERY_PARAM)
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect();

    {
        let mut pairs = url.query_pairs_mut();
        pairs.clear();
        for (key, value) in &kept {
            pairs.append_pair(key, value);
        }
        pairs.append_pair(DOCUMENT_QUERY_PARAM, document_id);
    }
    Some(url.to_string())
}

/// Link to the app root carrying the document id
pub fn shareable_url(origin: &str, document_id: &str) -> Option<String> {
    let mut url = Url::parse(origin).ok()?;
    url.set_path("/");
    url.set_fragment(None);
    url.set_query(None);
    url.query_pairs_mut()
        .append_pair(DOCUMENT_QUERY_PARAM, document_id);
    Some(url.to_string())
}
