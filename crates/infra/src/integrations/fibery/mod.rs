//! Fibery workspace integration (command-dispatch API)

pub mod client;

pub use client::FiberyClient;
