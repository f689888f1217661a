//! OAuth 1.0a request signing.
//!
//! The X API requires OAuth 1.0a signatures for user-context requests.
//! This module generates the `Authorization` header value.

use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use hmac::{Hmac, Mac};
use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

use crate::config::Credentials;
use crate::error::{XbotError, XbotResult};

/// Characters that must be percent-encoded in OAuth signatures.
/// RFC 3986 unreserved characters: ALPHA / DIGIT / "-" / "." / "_" / "~"
const OAUTH_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'!')
    .add(b'"')
    .add(b'#')
    .add(b'$')
    .add(b'%')
    .add(b'&')
    .add(b'\'')
    .add(b'(')
    .add(b')')
    .add(b'*')
    .add(b'+')
    .add(b',')
    .add(b'/')
    .add(b':')
    .add(b';')
    .add(b'<')
    .add(b'=')
    .add(b'>')
    .add(b'?')
    .add(b'@')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// OAuth 1.0a signer for API requests.
#[derive(Debug)]
pub struct OAuthSigner {
    api_key: String,
    api_secret_key: String,
    access_token: String,
    access_token_secret: String,
}

impl OAuthSigner {
    /// Create a new signer from credentials.
    #[must_use]
    pub fn new(credentials: &Credentials) -> Self {
        Self {
            api_key: credentials.api_key.clone(),
            api_secret_key: credentials.api_secret_key.clone(),
            access_token: credentials.access_token.clone(),
            access_token_secret: credentials.access_token_secret.clone(),
        }
    }

    /// Generate the OAuth 1.0a `Authorization` header value.
    ///
    /// `url` is the request URL without query parameters; `params` carries
    /// the query parameters that take part in the signature. JSON and
    /// multipart bodies are excluded from signing per the OAuth spec.
    pub fn sign(
        &self,
        method: &str,
        url: &str,
        params: &[(String, String)],
    ) -> XbotResult<String> {
        let timestamp = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_err(|e| XbotError::OAuth(format!("failed to get timestamp: {e}")))?
            .as_secs()
            .to_string();

        let mut oauth_params = vec![
            ("oauth_consumer_key".to_string(), self.api_key.clone()),
            ("oauth_nonce".to_string(), generate_nonce()),
            (
                "oauth_signature_method".to_string(),
                "HMAC-SHA1".to_string(),
            ),
            ("oauth_timestamp".to_string(), timestamp),
            ("oauth_token".to_string(), self.access_token.clone()),
            ("oauth_version".to_string(), "1.0".to_string()),
        ];

        // OAuth params and request params are signed together, sorted.
        let mut all_params = oauth_params.clone();
        all_params.extend(params.iter().cloned());
        all_params.sort_unstable_by(|a, b| a.0.cmp(&b.0).then_with(|| a.1.cmp(&b.1)));

        let param_string = all_params
            .iter()
            .map(|(k, v)| format!("{}={}", percent_encode(k), percent_encode(v)))
            .collect::<Vec<_>>()
            .join("&");

        let base_string = format!(
            "{}&{}&{}",
            method.to_uppercase(),
            percent_encode(url),
            percent_encode(&param_string)
        );

        let signing_key = format!(
            "{}&{}",
            percent_encode(&self.api_secret_key),
            percent_encode(&self.access_token_secret)
        );

        let signature = hmac_sha1(&signing_key, &base_string)?;
        oauth_params.push(("oauth_signature".to_string(), signature));

        let header = oauth_params
            .iter()
            .map(|(k, v)| format!("{}=\"{}\"", percent_encode(k), percent_encode(v)))
            .collect::<Vec<_>>()
            .join(", ");

        Ok(format!("OAuth {header}"))
    }
}

/// Percent-encode a string according to RFC 3986.
fn percent_encode(s: &str) -> String {
    utf8_percent_encode(s, OAUTH_ENCODE_SET).to_string()
}

/// Generate a random nonce.
fn generate_nonce() -> String {
    use rand::RngCore;
    let mut bytes = [0u8; 16];
    rand::thread_rng().fill_bytes(&mut bytes);
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

/// Compute HMAC-SHA1 and return the base64-encoded result.
fn hmac_sha1(key: &str, data: &str) -> XbotResult<String> {
    type HmacSha1 = Hmac<sha1::Sha1>;

    let mut mac =
        HmacSha1::new_from_slice(key.as_bytes()).map_err(|e| XbotError::OAuth(e.to_string()))?;
    mac.update(data.as_bytes());
    Ok(BASE64.encode(mac.finalize().into_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_credentials() -> Credentials {
        Credentials {
            api_key: "test_api_key".into(),
            api_secret_key: "test_api_secret_key".into(),
            bearer_token: None,
            access_token: "test_access_token".into(),
            access_token_secret: "test_access_token_secret".into(),
        }
    }

    #[test]
    fn test_percent_encode() {
        assert_eq!(percent_encode("hello world"), "hello%20world");
        assert_eq!(percent_encode("foo=bar&baz"), "foo%3Dbar%26baz");
        assert_eq!(percent_encode("query-value_123.txt"), "query-value_123.txt");
        assert_eq!(percent_encode("~tilde"), "~tilde");
    }

    #[test]
    fn test_generate_nonce() {
        let nonce1 = generate_nonce();
        let nonce2 = generate_nonce();

        assert_ne!(nonce1, nonce2);
        assert_eq!(nonce1.len(), 32);
        assert!(nonce1.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_sign_produces_valid_header() {
        let signer = OAuthSigner::new(&test_credentials());
        let header = signer
            .sign("GET", "https://api.twitter.com/2/users/me", &[])
            .unwrap();

        assert!(header.starts_with("OAuth "));
        assert!(header.contains("oauth_consumer_key="));
        assert!(header.contains("oauth_signature="));
        assert!(header.contains("oauth_timestamp="));
        assert!(header.contains("oauth_nonce="));
    }

    #[test]
    fn test_sign_includes_query_params_in_signature() {
        let signer = OAuthSigner::new(&test_credentials());
        let no_params = signer
            .sign("GET", "https://api.twitter.com/2/tweets/search/recent", &[])
            .unwrap();
        let with_params = signer
            .sign(
                "GET",
                "https://api.twitter.com/2/tweets/search/recent",
                &[("query".to_string(), "rust".to_string())],
            )
            .unwrap();

        // The query param only participates in the signature, never the header.
        assert!(!with_params.contains("query="));
        assert!(no_params.starts_with("OAuth "));
        assert!(with_params.starts_with("OAuth "));
    }
}
