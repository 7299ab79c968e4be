//! Strict `application/x-www-form-urlencoded` decoding for form handlers.
//!
//! axum's `Form` extractor decodes leniently: a broken escape such as `%zz`
//! is kept as literal text. Handlers here need broken escapes and `;`
//! separators rejected, repeated keys resolved to their first value, and
//! query-string values merged after the body values.

use axum::http::header::CONTENT_TYPE;
use axum::http::HeaderMap;

/// Why a form could not be decoded.
#[derive(Debug, thiserror::Error)]
pub enum FormError {
    /// A `%` not followed by two hex digits.
    #[error("invalid URL escape {0:?}")]
    InvalidEscape(String),

    #[error("invalid semicolon separator")]
    InvalidSemicolon,

    #[error(transparent)]
    Decode(#[from] serde_urlencoded::de::Error),
}

/// Decoded form pairs in lookup order: body pairs first, then query pairs.
#[derive(Debug, Default)]
pub struct FormValues {
    pairs: Vec<(String, String)>,
}

impl FormValues {
    /// Decode the request body (when its content type is a urlencoded form)
    /// followed by the raw query string. Bodies of any other content type
    /// are ignored.
    pub fn from_request(
        headers: &HeaderMap,
        query: Option<&str>,
        body: &[u8],
    ) -> Result<Self, FormError> {
        let mut pairs = Vec::new();

        if is_urlencoded(headers) {
            pairs.extend(decode(body)?);
        }
        if let Some(query) = query {
            pairs.extend(decode(query.as_bytes())?);
        }

        Ok(Self { pairs })
    }

    /// First value for `key`, or `""` when the key is absent.
    pub fn get(&self, key: &str) -> &str {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
            .unwrap_or("")
    }
}

fn is_urlencoded(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .is_some_and(|mime| {
            mime.trim()
                .eq_ignore_ascii_case("application/x-www-form-urlencoded")
        })
}

/// Validate the raw encoding, then decode into ordered pairs.
fn decode(raw: &[u8]) -> Result<Vec<(String, String)>, FormError> {
    validate(raw)?;
    Ok(serde_urlencoded::from_bytes(raw)?)
}

fn validate(raw: &[u8]) -> Result<(), FormError> {
    for (i, &byte) in raw.iter().enumerate() {
        match byte {
            b';' => return Err(FormError::InvalidSemicolon),
            b'%' => {
                let escape = raw.get(i + 1..i + 3).unwrap_or(&raw[i + 1..]);
                if escape.len() != 2 || !escape.iter().all(u8::is_ascii_hexdigit) {
                    let shown = String::from_utf8_lossy(&raw[i..i + 1 + escape.len()]);
                    return Err(FormError::InvalidEscape(shown.into_owned()));
                }
            }
            _ => {}
        }
    }
    Ok(())
}
