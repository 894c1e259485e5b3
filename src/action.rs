use crate::character_sets::is_valid_path;
use crate::compat::{String, Vec};
use crate::error::BuildError;
use crate::reserved::RESERVED_PREFIX;

/// An action to be executed by the target app, carried as the path segment
/// of the assembled URL, with optional action-specific query parameters.
///
/// The name must be non-empty and consist of valid URL path characters.
/// Parameter names must not start with `x-`, the prefix reserved for
/// x-callback-url parameters; both rules are enforced at construction so an
/// `Action` value is always assemblable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action {
    name: String,
    parameters: Vec<(String, String)>,
}

impl Action {
    pub fn new(name: impl Into<String>) -> Result<Self, BuildError> {
        Self::with_parameters(name, Vec::new())
    }

    pub fn with_parameters(
        name: impl Into<String>,
        parameters: Vec<(String, String)>,
    ) -> Result<Self, BuildError> {
        let name = name.into();
        if name.is_empty() || !is_valid_path(&name) {
            return Err(BuildError::InvalidAction(name));
        }
        check_reserved_prefix(&parameters)?;
        Ok(Self { name, parameters })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parameters(&self) -> &[(String, String)] {
        &self.parameters
    }
}

/// Reject caller-supplied parameter names that use the reserved `x-` prefix.
/// Collects every offender in input order, duplicates preserved, so the error
/// reports the full set rather than the first hit.
pub(crate) fn check_reserved_prefix(parameters: &[(String, String)]) -> Result<(), BuildError> {
    let denied: Vec<String> = parameters
        .iter()
        .filter(|(name, _)| name.starts_with(RESERVED_PREFIX))
        .map(|(name, _)| name.clone())
        .collect();
    if denied.is_empty() {
        Ok(())
    } else {
        Err(BuildError::DeniedParameterNames(denied))
    }
}
