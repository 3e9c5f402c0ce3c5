// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Client configuration.

use std::time::Duration;

use url::Url;

use crate::error::Result;

/// Default public collection endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://www.google-analytics.com/collect";

const DEFAULT_MAX_CONCURRENT_POSTS: usize = 4;
const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Configuration for a [`Beacon`](crate::Beacon) client.
///
/// Plain data; construct with struct update syntax or the fluent helpers.
/// `enabled` and `gather_stats` seed runtime-mutable toggles on the client.
#[derive(Debug, Clone)]
pub struct Config {
	/// When false, every post is a silent no-op that never touches the
	/// network.
	pub enabled: bool,
	/// Collection endpoint to POST hits to.
	pub endpoint: Url,
	/// Upper bound on concurrently in-flight async posts. Also drives HTTP
	/// connection pool sizing, one slot per potential in-flight post.
	pub max_concurrent_posts: usize,
	/// Per-request timeout applied by the HTTP transport.
	pub request_timeout: Duration,
	/// Optional User-Agent header for outgoing requests.
	pub user_agent: Option<String>,
	/// Optional HTTP proxy.
	pub proxy: Option<ProxyConfig>,
	/// When true, posted hits increment local per-hit-type counters.
	pub gather_stats: bool,
	/// When true, the parameter discoverer backfills empty default-hit
	/// fields at construction.
	pub discover_parameters: bool,
}

impl Default for Config {
	fn default() -> Self {
		Self {
			enabled: true,
			endpoint: Url::parse(DEFAULT_ENDPOINT).expect("default endpoint is a valid URL"),
			max_concurrent_posts: DEFAULT_MAX_CONCURRENT_POSTS,
			request_timeout: DEFAULT_REQUEST_TIMEOUT,
			user_agent: None,
			proxy: None,
			gather_stats: false,
			discover_parameters: true,
		}
	}
}

impl Config {
	/// Sets the collection endpoint from a URL string.
	pub fn with_endpoint(mut self, endpoint: &str) -> Result<Self> {
		self.endpoint = Url::parse(endpoint)?;
		Ok(self)
	}

	/// Sets the concurrency limit for async posts.
	#[must_use]
	pub fn with_max_concurrent_posts(mut self, max: usize) -> Self {
		self.max_concurrent_posts = max;
		self
	}

	/// Sets the User-Agent header.
	#[must_use]
	pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
		self.user_agent = Some(user_agent.into());
		self
	}

	/// Sets the HTTP proxy.
	#[must_use]
	pub fn with_proxy(mut self, proxy: ProxyConfig) -> Self {
		self.proxy = Some(proxy);
		self
	}

	/// Enables or disables local stats gathering.
	#[must_use]
	pub fn with_gather_stats(mut self, gather: bool) -> Self {
		self.gather_stats = gather;
		self
	}

	/// Enables or disables the client as a whole.
	#[must_use]
	pub fn with_enabled(mut self, enabled: bool) -> Self {
		self.enabled = enabled;
		self
	}

	/// Enables or disables parameter discovery at construction.
	#[must_use]
	pub fn with_discover_parameters(mut self, discover: bool) -> Self {
		self.discover_parameters = discover;
		self
	}

	/// The connection pool / concurrency slot count, never below one.
	pub fn effective_pool_size(&self) -> usize {
		self.max_concurrent_posts.max(1)
	}
}

/// HTTP proxy settings, with optional basic-auth credentials.
#[derive(Debug, Clone)]
pub struct ProxyConfig {
	pub host: String,
	pub port: u16,
	pub username: Option<String>,
	pub password: Option<String>,
}

impl ProxyConfig {
	/// Creates a proxy config for `host:port` with no credentials.
	pub fn new(host: impl Into<String>, port: u16) -> Self {
		Self {
			host: host.into(),
			port,
			username: None,
			password: None,
		}
	}

	/// Attaches basic-auth credentials.
	#[must_use]
	pub fn with_credentials(
		mut self,
		username: impl Into<String>,
		password: impl Into<String>,
	) -> Self {
		self.username = Some(username.into());
		self.password = Some(password.into());
		self
	}

	/// The proxy URL handed to the HTTP client.
	pub fn url(&self) -> String {
		format!("http://{}:{}", self.host, self.port)
	}
}
