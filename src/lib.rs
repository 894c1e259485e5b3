#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Compatibility layer for std/no_std
mod compat;

// Internal modules (not public API)
mod action;
mod builder;
mod callback;
mod callbacks;
mod character_sets;
mod components;
mod error;
mod reserved;

// Public API
pub use action::Action;
pub use builder::xcallback_url;
pub use callback::Callback;
pub use callbacks::Callbacks;
pub use components::XCallbackComponents;
pub use error::{BuildError, CallbackError};
pub use reserved::{RESERVED_HOST, RESERVED_PREFIX, ReservedParam};

pub type Result<T> = core::result::Result<T, BuildError>;
