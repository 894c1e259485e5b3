use crate::action::Action;
use crate::callbacks::Callbacks;
use crate::character_sets::is_valid_scheme;
use crate::compat::{String, ToString, Vec};
use crate::components::XCallbackComponents;
use crate::error::BuildError;
use crate::reserved::{RESERVED_HOST, ReservedParam};

/// Build an x-callback-url according to the
/// [x-callback-url specification](https://x-callback-url.com/specification/).
///
/// The result has the structure
/// `<scheme>://x-callback-url/<action>?<reserved params>&<action params>`:
/// reserved parameters always come first, in the fixed order `x-source`,
/// `x-success`, `x-error`, `x-cancel` (absent ones skipped), followed by the
/// action's own parameters in their original order.
///
/// Fails with a typed [`BuildError`] on the first violated rule; no partial
/// URL is ever returned.
pub fn xcallback_url(
    scheme: &str,
    action: &Action,
    callbacks: &Callbacks,
) -> crate::Result<String> {
    if !is_valid_scheme(scheme) {
        return Err(BuildError::InvalidScheme);
    }

    // Exactly one leading slash, never doubled
    let mut path = String::with_capacity(action.name().len() + 1);
    path.push('/');
    path.push_str(action.name().trim_start_matches('/'));

    let mut query: Vec<(String, String)> = Vec::new();
    for param in ReservedParam::ALL {
        let value = match param {
            ReservedParam::Source => callbacks.source().filter(|s| !s.is_empty()).map(str::to_string),
            ReservedParam::Success => callbacks.success().map(|c| c.url().to_string()),
            ReservedParam::Error => callbacks.error().map(|c| c.url().to_string()),
            ReservedParam::Cancel => callbacks.cancel().map(|c| c.url().to_string()),
        };
        if let Some(value) = value {
            query.push((param.as_str().to_string(), value));
        }
    }
    query.extend(action.parameters().iter().cloned());

    let components = XCallbackComponents {
        scheme: scheme.to_string(),
        host: RESERVED_HOST.to_string(),
        path,
        query,
    };
    components.serialize()
}
