//! Share links that carry the raw quiz text in a `quiz` query parameter.
//!
//! The text is stored as URL-safe base64 without padding. Decoding also
//! accepts the standard alphabet and padding, including a `+` that query
//! decoding turned into a space.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use thiserror::Error;
use url::Url;

/// Query parameter holding the encoded quiz.
pub const QUERY_KEY: &str = "quiz";

#[derive(Debug, Error)]
pub enum ShareError {
    #[error("No quiz text to share")]
    EmptyText,
    #[error("Invalid base URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("Link has no \"quiz\" parameter")]
    MissingParameter,
    #[error("Invalid link payload: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("Link payload is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Encode quiz text for a link.
pub fn encode_quiz(text: &str) -> String {
    URL_SAFE_NO_PAD.encode(text.as_bytes())
}

/// Decode a payload produced by [`encode_quiz`] or by a standard base64
/// encoder.
pub fn decode_quiz(encoded: &str) -> Result<String, ShareError> {
    let payload: String = encoded
        .trim()
        .chars()
        .filter_map(|c| match c {
            ' ' | '+' => Some('-'),
            '/' => Some('_'),
            '=' => None,
            c => Some(c),
        })
        .collect();

    let bytes = URL_SAFE_NO_PAD.decode(payload)?;
    Ok(String::from_utf8(bytes)?)
}

/// Build a share link for `text` under `base_url`.
///
/// Existing query parameters and fragments of `base_url` are kept.
pub fn share_link(base_url: &str, text: &str) -> Result<String, ShareError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(ShareError::EmptyText);
    }

    let mut url = Url::parse(base_url)?;
    url.query_pairs_mut()
        .append_pair(QUERY_KEY, &encode_quiz(text));
    Ok(url.into())
}

/// Pull the encoded payload out of a full link, or accept a bare
/// (possibly percent-escaped) payload.
pub fn extract_encoded(link: &str) -> Result<String, ShareError> {
    let link = link.trim();

    match Url::parse(link) {
        Ok(url) => url
            .query_pairs()
            .find(|(key, _)| key == QUERY_KEY)
            .map(|(_, value)| value.into_owned())
            .ok_or(ShareError::MissingParameter),
        Err(_) => {
            let payload = link
                .strip_prefix(QUERY_KEY)
                .and_then(|rest| rest.strip_prefix('='))
                .unwrap_or(link);
            Ok(urlencoding::decode(payload)?.into_owned())
        }
    }
}
