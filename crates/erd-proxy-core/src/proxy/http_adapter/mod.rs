//! Blocking HTTP client for the Elrond proxy.
//!
//! Implements [`Provider`](super::Provider) over `reqwest::blocking`.
//! Responses are read as text, decoded into the proxy's envelope, checked
//! for HTTP and application-level failures, and only then mapped into
//! public types.

mod client;
mod connection;
mod payload;
mod protocol;

pub use client::ProxyProvider;
