//! Shared helpers for the in-crate property tests.

pub(crate) mod quick;
