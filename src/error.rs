use crate::compat::{String, Vec};
use crate::components::XCallbackComponents;

/// Errors that can occur while assembling an x-callback-url
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    /// Scheme is empty or fails the scheme character rules
    InvalidScheme,
    /// Action name is empty or contains a character not allowed in a URL path,
    /// carries the offending action string
    InvalidAction(String),
    /// One or more caller-supplied parameter names start with the reserved
    /// `x-` prefix, carries the offending names in input order
    DeniedParameterNames(Vec<String>),
    /// The intermediate components could not be serialized into a valid URL
    InvalidUrlComponents(XCallbackComponents),
}

impl core::fmt::Display for BuildError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidScheme => f.write_str("Invalid scheme"),
            Self::InvalidAction(action) => write!(f, "Invalid action: {action:?}"),
            Self::DeniedParameterNames(names) => {
                f.write_str("Parameter names use the reserved x- prefix:")?;
                for name in names {
                    write!(f, " {name:?}")?;
                }
                Ok(())
            }
            Self::InvalidUrlComponents(components) => {
                write!(f, "Components do not form a valid URL: {components:?}")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BuildError {}

/// Errors that can occur while validating a callback destination URL
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallbackError {
    /// The destination URL has no scheme
    MissingScheme,
    /// The destination URL has no host
    MissingHost,
}

impl core::fmt::Display for CallbackError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            Self::MissingScheme => "Callback URL is missing a scheme",
            Self::MissingHost => "Callback URL is missing a host",
        };
        f.write_str(msg)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CallbackError {}
