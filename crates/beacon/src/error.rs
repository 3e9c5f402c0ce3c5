// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Error types for the beacon client.
//!
//! Errors surface from construction and from the transport seam only.
//! `post` and `post_async` never return one: delivery failures are logged
//! and swallowed so telemetry can never break the host application.

use thiserror::Error;

/// Beacon client errors.
#[derive(Debug, Error)]
pub enum BeaconError {
	/// The configured endpoint is not a valid URL.
	#[error("invalid endpoint URL: {0}")]
	InvalidEndpoint(#[from] url::ParseError),

	/// The proxy configuration was rejected by the HTTP client.
	#[error("invalid proxy configuration: {0}")]
	InvalidProxy(String),

	/// The HTTP client could not be constructed.
	#[error("failed to build HTTP client: {0}")]
	ClientBuild(#[source] reqwest::Error),

	/// The HTTP request failed in flight.
	#[error("HTTP request failed: {0}")]
	Http(#[from] reqwest::Error),

	/// A custom transport implementation failed to deliver the hit.
	#[error("transport error: {0}")]
	Transport(String),
}

/// Result type alias for beacon operations.
pub type Result<T> = std::result::Result<T, BeaconError>;
