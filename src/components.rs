use crate::character_sets::{is_valid_path, is_valid_scheme};
use crate::compat::{String, Vec};
use crate::error::BuildError;
use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

/// WHATWG query percent-encode set: C0 controls + space, ", #, <, >
const QUERY_SET: &AsciiSet = &CONTROLS.add(b' ').add(b'"').add(b'#').add(b'<').add(b'>');

/// Query set extended with &, = and + so the name=value pair structure stays
/// unambiguous. : and / pass through, keeping callback URL values readable.
const QUERY_PAIR_SET: &AsciiSet = &QUERY_SET.add(b'&').add(b'=').add(b'+');

/// Intermediate representation of an x-callback-url just before
/// serialization: validated scheme, fixed host, normalized path, and the
/// fully ordered query list (reserved parameters first).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XCallbackComponents {
    pub scheme: String,
    pub host: String,
    pub path: String,
    pub query: Vec<(String, String)>,
}

impl XCallbackComponents {
    /// Serialize into the final URL string.
    /// Re-checks the component invariants so a malformed intermediate can
    /// never leak out as a garbage URL; a violation surfaces as
    /// `InvalidUrlComponents` carrying the components themselves.
    pub fn serialize(&self) -> Result<String, BuildError> {
        if !is_valid_scheme(&self.scheme)
            || self.host.is_empty()
            || !self.path.starts_with('/')
            || !is_valid_path(&self.path)
        {
            return Err(BuildError::InvalidUrlComponents(self.clone()));
        }

        let mut url = String::with_capacity(
            self.scheme.len() + 3 + self.host.len() + self.path.len() + 16 * self.query.len(),
        );
        url.push_str(&self.scheme);
        url.push_str("://");
        url.push_str(&self.host);
        url.push_str(&self.path);

        for (i, (name, value)) in self.query.iter().enumerate() {
            url.push(if i == 0 { '?' } else { '&' });
            encode_into(&mut url, name);
            url.push('=');
            encode_into(&mut url, value);
        }

        Ok(url)
    }
}

/// Percent-encode one query name or value directly into the buffer.
fn encode_into(buffer: &mut String, input: &str) {
    for chunk in utf8_percent_encode(input, QUERY_PAIR_SET) {
        buffer.push_str(chunk);
    }
}
