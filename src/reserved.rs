/// Fixed host of every x-callback-url: `<scheme>://x-callback-url/<action>`
pub const RESERVED_HOST: &str = "x-callback-url";

/// Prefix reserved for x-callback-url query parameters.
/// Caller-supplied parameter names must not start with it.
pub const RESERVED_PREFIX: &str = "x-";

/// The four reserved query parameters defined by the x-callback-url
/// convention. Closed set; `ALL` fixes the order they appear in a
/// generated query string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReservedParam {
    Source,
    Success,
    Error,
    Cancel,
}

impl ReservedParam {
    /// Serialization order of reserved parameters in the query string.
    pub const ALL: [Self; 4] = [Self::Source, Self::Success, Self::Error, Self::Cancel];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Source => "x-source",
            Self::Success => "x-success",
            Self::Error => "x-error",
            Self::Cancel => "x-cancel",
        }
    }
}
