// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The transport seam: one form-encoded POST per hit.
//!
//! Implementations are injected at client construction; [`HttpTransport`]
//! is the reqwest-backed default. Tests swap in a recording fake.

use std::collections::BTreeMap;

use async_trait::async_trait;
use url::Url;

use crate::config::Config;
use crate::error::{BeaconError, Result};

/// Sends one hit's posted parameters to the collection endpoint.
#[async_trait]
pub trait Transport: Send + Sync {
	/// POSTs `params` as an `application/x-www-form-urlencoded` body and
	/// returns the HTTP status code.
	async fn send(&self, params: &BTreeMap<String, String>) -> Result<u16>;
}

/// Default transport backed by a shared reqwest client.
///
/// The client (and its connection pool) is built once per `Beacon`
/// instance; pool sizing follows the configured concurrency limit so each
/// potential in-flight post has a connection slot.
pub struct HttpTransport {
	client: reqwest::Client,
	endpoint: Url,
}

impl HttpTransport {
	/// Builds the transport from client configuration.
	pub fn from_config(config: &Config) -> Result<Self> {
		let mut builder = reqwest::Client::builder()
			.pool_max_idle_per_host(config.effective_pool_size())
			.timeout(config.request_timeout);

		if let Some(user_agent) = &config.user_agent {
			builder = builder.user_agent(user_agent.clone());
		}

		if let Some(proxy) = &config.proxy {
			let mut http_proxy = reqwest::Proxy::all(proxy.url())
				.map_err(|e| BeaconError::InvalidProxy(e.to_string()))?;
			if let Some(username) = &proxy.username {
				http_proxy =
					http_proxy.basic_auth(username, proxy.password.as_deref().unwrap_or(""));
			}
			builder = builder.proxy(http_proxy);
		}

		let client = builder.build().map_err(BeaconError::ClientBuild)?;
		Ok(Self {
			client,
			endpoint: config.endpoint.clone(),
		})
	}
}

#[async_trait]
impl Transport for HttpTransport {
	async fn send(&self, params: &BTreeMap<String, String>) -> Result<u16> {
		let response = self
			.client
			.post(self.endpoint.clone())
			.form(params)
			.send()
			.await?;
		Ok(response.status().as_u16())
	}
}
