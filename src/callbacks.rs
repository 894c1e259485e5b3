use crate::callback::Callback;
use crate::compat::String;

/// The reserved x-callback-url parameters of a request: an optional source
/// app identifier and optional success/error/cancel callbacks.
///
/// An all-empty set is a valid value; the assembled URL then simply carries
/// no reserved query parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Callbacks {
    source: Option<String>,
    on_success: Option<Callback>,
    on_error: Option<Callback>,
    on_cancel: Option<Callback>,
}

impl Callbacks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the friendly name of the calling app, carried as `x-source`.
    /// An empty source is accepted but never serialized.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    #[must_use]
    pub fn on_success(mut self, callback: Callback) -> Self {
        self.on_success = Some(callback);
        self
    }

    #[must_use]
    pub fn on_error(mut self, callback: Callback) -> Self {
        self.on_error = Some(callback);
        self
    }

    #[must_use]
    pub fn on_cancel(mut self, callback: Callback) -> Self {
        self.on_cancel = Some(callback);
        self
    }

    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    pub fn success(&self) -> Option<&Callback> {
        self.on_success.as_ref()
    }

    pub fn error(&self) -> Option<&Callback> {
        self.on_error.as_ref()
    }

    pub fn cancel(&self) -> Option<&Callback> {
        self.on_cancel.as_ref()
    }
}
