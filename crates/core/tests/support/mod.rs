//! Shared test helpers for `contactsync-core` integration tests.
//!
//! In-memory gateways that return canned replies and record every call so
//! façade tests can assert on what was sent.

#![allow(dead_code)]

pub mod gateways;
