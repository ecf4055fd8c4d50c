//! Email checks and the verdict that combines them.
//!
//! The syntax, domain and disposable checks are pure functions over the
//! input string. [`verdict::assemble`] adds the MX signal from
//! [`crate::dns::MxResolver`] and builds the response record.

/// Disposable-provider lookup against a fixed domain list.
pub mod disposable;

/// Domain extraction from an address.
pub mod domain;

/// Regex-based structural check of an address.
pub mod syntax;

pub mod verdict;
