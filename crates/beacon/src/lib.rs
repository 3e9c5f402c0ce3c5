// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Fire-and-forget analytics hit client.
//!
//! This crate provides:
//! - A [`Beacon`] client that merges per-hit parameters over a default hit
//!   and POSTs the result as a form-encoded body
//! - Synchronous and bounded-concurrency asynchronous posting, with a
//!   swallow-all delivery policy (telemetry never breaks the host)
//! - A pluggable [`Transport`] seam with a reqwest default
//! - Best-effort local per-hit-type counters
//!
//! # Example
//!
//! ```no_run
//! use beacon::{Beacon, Hit};
//!
//! # async fn example() -> beacon::Result<()> {
//! let client = Beacon::for_app("UA-00000000-1", "Example App", "1.0.0")?;
//!
//! // Fire and forget.
//! client.post_async(Hit::event("signup", "completed"));
//!
//! // Or wait and inspect the outcome.
//! let response = client.post(&Hit::pageview("https://example.com/", "Home")).await;
//! if !response.was_sent() {
//!     // The hit was dropped; no error was raised.
//! }
//! client.close();
//! # Ok(())
//! # }
//! ```

mod client;
mod config;
mod discover;
mod error;
mod response;
mod stats;
mod transport;

pub use beacon_core::{merge, Hit, HitType, Param, ParseHitTypeError};
pub use client::{Beacon, BeaconBuilder, PostHandle};
pub use config::{Config, ProxyConfig, DEFAULT_ENDPOINT};
pub use discover::{EnvironmentDiscoverer, ParameterDiscoverer};
pub use error::{BeaconError, Result};
pub use response::Response;
pub use stats::StatsSnapshot;
pub use transport::{HttpTransport, Transport};
