// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The analytics client: merge, dispatch, swallow.
//!
//! `post` and `post_async` never fail from the caller's point of view.
//! Delivery problems are logged at warn level and reflected only in the
//! returned [`Response`] (a missing status code). The guiding rule is that
//! telemetry must never affect the host application's control flow.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use beacon_core::{merge, Hit, Param};
use parking_lot::RwLock;
use tokio::sync::Semaphore;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::discover::{EnvironmentDiscoverer, ParameterDiscoverer};
use crate::error::Result;
use crate::response::Response;
use crate::stats::{Stats, StatsSnapshot};
use crate::transport::{HttpTransport, Transport};

/// The analytics client.
///
/// Cheap to clone; all clones share the same transport, default hit,
/// stats, and concurrency limiter. Create one per tracking id and reuse it
/// for the life of the process, then [`close`](Beacon::close) it.
///
/// # Example
///
/// ```no_run
/// use beacon::{Beacon, Hit};
///
/// # async fn example() -> beacon::Result<()> {
/// let client = Beacon::new("UA-00000000-1")?;
/// let response = client.post(&Hit::pageview("https://example.com/", "Home")).await;
/// assert!(response.was_sent());
/// client.close();
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Beacon {
	inner: Arc<Inner>,
}

struct Inner {
	config: Config,
	enabled: AtomicBool,
	gather_stats: AtomicBool,
	closed: AtomicBool,
	defaults: RwLock<Hit>,
	stats: RwLock<Arc<Stats>>,
	transport: Arc<dyn Transport>,
	limiter: Arc<Semaphore>,
}

impl Beacon {
	/// Starts a builder for the given tracking id.
	pub fn builder(tracking_id: impl Into<String>) -> BeaconBuilder {
		BeaconBuilder::new(tracking_id)
	}

	/// Creates a client with default configuration.
	pub fn new(tracking_id: impl Into<String>) -> Result<Self> {
		Self::builder(tracking_id).build()
	}

	/// Creates a client whose default hit carries an application name and
	/// version.
	pub fn for_app(
		tracking_id: impl Into<String>,
		app_name: impl Into<String>,
		app_version: impl Into<String>,
	) -> Result<Self> {
		Self::builder(tracking_id)
			.with_defaults(
				Hit::defaults()
					.application_name(app_name)
					.application_version(app_version),
			)
			.build()
	}

	/// Returns the configuration this client was built with.
	pub fn config(&self) -> &Config {
		&self.inner.config
	}

	/// Returns a copy of the current default hit.
	pub fn default_hit(&self) -> Hit {
		self.inner.defaults.read().clone()
	}

	/// Replaces the default hit used as the fallback value source.
	///
	/// Takes effect for every post that merges after the swap; posts
	/// already mid-merge keep the old defaults.
	pub fn set_default_hit(&self, defaults: Hit) {
		*self.inner.defaults.write() = defaults;
	}

	/// Enables or disables posting at runtime.
	pub fn set_enabled(&self, enabled: bool) {
		self.inner.enabled.store(enabled, Ordering::SeqCst);
	}

	/// True when the client will attempt delivery.
	pub fn is_enabled(&self) -> bool {
		self.inner.enabled.load(Ordering::SeqCst)
	}

	/// Enables or disables local stats gathering at runtime.
	pub fn set_gather_stats(&self, gather: bool) {
		self.inner.gather_stats.store(gather, Ordering::SeqCst);
	}

	/// True once [`close`](Beacon::close) has been called.
	pub fn is_closed(&self) -> bool {
		self.inner.closed.load(Ordering::SeqCst)
	}

	/// Closes the client. Idempotent.
	///
	/// Subsequent posts become silent no-ops; posts already scheduled run
	/// to completion. The HTTP connection pool is torn down when the last
	/// clone (and last in-flight task) drops its handle.
	pub fn close(&self) {
		if !self.inner.closed.swap(true, Ordering::SeqCst) {
			info!("analytics client closed");
		}
	}

	/// Posts one hit and waits for the outcome.
	///
	/// Never returns an error: a disabled or closed client yields an empty
	/// [`Response`], and transport failures yield a response carrying the
	/// merged parameters but no status code.
	pub async fn post(&self, hit: &Hit) -> Response {
		if self.is_closed() {
			return Response::empty();
		}
		self.post_inner(hit).await
	}

	/// Schedules one hit for delivery without waiting.
	///
	/// At most `max_concurrent_posts` deliveries run at once; the rest
	/// queue on the limiter. No ordering is guaranteed between concurrent
	/// posts. The returned handle can be awaited for the outcome or
	/// dropped for fire-and-forget.
	pub fn post_async(&self, hit: Hit) -> PostHandle {
		if !self.is_enabled() || self.is_closed() {
			return PostHandle::ready(None);
		}

		let client = self.clone();
		let limiter = Arc::clone(&self.inner.limiter);
		PostHandle::task(tokio::spawn(async move {
			let _permit = match limiter.acquire_owned().await {
				Ok(permit) => permit,
				Err(_) => return None,
			};
			Some(client.post_inner(&hit).await)
		}))
	}

	/// Like [`post_async`](Beacon::post_async), but the hit is produced by
	/// `provide` on the worker.
	///
	/// A failing provider is logged and the handle resolves to `None`;
	/// nothing is posted.
	pub fn post_async_with<F, E>(&self, provide: F) -> PostHandle
	where
		F: FnOnce() -> std::result::Result<Hit, E> + Send + 'static,
		E: std::fmt::Display + Send + 'static,
	{
		if !self.is_enabled() || self.is_closed() {
			return PostHandle::ready(None);
		}

		let client = self.clone();
		let limiter = Arc::clone(&self.inner.limiter);
		PostHandle::task(tokio::spawn(async move {
			let _permit = match limiter.acquire_owned().await {
				Ok(permit) => permit,
				Err(_) => return None,
			};
			match provide() {
				Ok(hit) => Some(client.post_inner(&hit).await),
				Err(e) => {
					warn!(error = %e, "hit provider failed; nothing was posted");
					None
				}
			}
		}))
	}

	/// Returns a snapshot of the local hit counters.
	pub fn stats(&self) -> StatsSnapshot {
		self.inner.stats.read().snapshot()
	}

	/// Replaces the whole counter set with a fresh one.
	///
	/// Increments racing the swap land on the retired set and are lost;
	/// the counters are best-effort diagnostics.
	pub fn reset_stats(&self) {
		*self.inner.stats.write() = Arc::new(Stats::default());
	}

	async fn post_inner(&self, hit: &Hit) -> Response {
		if !self.is_enabled() {
			return Response::empty();
		}

		let posted = {
			let defaults = self.inner.defaults.read();
			merge(&defaults, hit)
		};

		debug!(
			hit_type = %hit.hit_type(),
			params = posted.len(),
			"posting analytics hit"
		);

		match self.inner.transport.send(&posted).await {
			Ok(status) => {
				// Only delivered hits count.
				if self.inner.gather_stats.load(Ordering::SeqCst) {
					let stats = Arc::clone(&self.inner.stats.read());
					stats.record(hit.hit_type());
				}
				Response::sent(status, posted)
			}
			Err(e) => {
				warn!(error = %e, hit_type = %hit.hit_type(), "failed to post analytics hit");
				Response::unsent(posted)
			}
		}
	}
}

/// Handle to an asynchronously scheduled post.
///
/// Await via [`wait`](PostHandle::wait); `None` means nothing was posted
/// (client disabled or closed, or the hit provider failed).
#[derive(Debug)]
pub struct PostHandle {
	inner: HandleInner,
}

#[derive(Debug)]
enum HandleInner {
	Ready(Option<Response>),
	Task(JoinHandle<Option<Response>>),
}

impl PostHandle {
	fn ready(response: Option<Response>) -> Self {
		Self {
			inner: HandleInner::Ready(response),
		}
	}

	fn task(handle: JoinHandle<Option<Response>>) -> Self {
		Self {
			inner: HandleInner::Task(handle),
		}
	}

	/// Waits for the post to finish.
	pub async fn wait(self) -> Option<Response> {
		match self.inner {
			HandleInner::Ready(response) => response,
			HandleInner::Task(handle) => handle.await.unwrap_or_else(|e| {
				warn!(error = %e, "async post task failed");
				None
			}),
		}
	}
}

/// Builder for [`Beacon`].
pub struct BeaconBuilder {
	tracking_id: String,
	config: Config,
	defaults: Option<Hit>,
	transport: Option<Arc<dyn Transport>>,
	discoverer: Option<Box<dyn ParameterDiscoverer>>,
}

impl BeaconBuilder {
	/// Starts a builder for the given tracking id.
	pub fn new(tracking_id: impl Into<String>) -> Self {
		Self {
			tracking_id: tracking_id.into(),
			config: Config::default(),
			defaults: None,
			transport: None,
			discoverer: None,
		}
	}

	/// Uses the given configuration.
	#[must_use]
	pub fn with_config(mut self, config: Config) -> Self {
		self.config = config;
		self
	}

	/// Uses the given default hit as the fallback value source.
	///
	/// The builder's tracking id is applied to it when it carries none.
	#[must_use]
	pub fn with_defaults(mut self, defaults: Hit) -> Self {
		self.defaults = Some(defaults);
		self
	}

	/// Injects a transport, replacing the reqwest default.
	#[must_use]
	pub fn with_transport(mut self, transport: Arc<dyn Transport>) -> Self {
		self.transport = Some(transport);
		self
	}

	/// Injects a parameter discoverer, replacing [`EnvironmentDiscoverer`].
	#[must_use]
	pub fn with_discoverer(mut self, discoverer: Box<dyn ParameterDiscoverer>) -> Self {
		self.discoverer = Some(discoverer);
		self
	}

	/// Builds the client: runs discovery once and constructs the HTTP
	/// transport (unless one was injected).
	pub fn build(self) -> Result<Beacon> {
		let mut defaults = self.defaults.unwrap_or_else(Hit::defaults);

		if defaults.param(Param::TrackingId).is_none_or(str::is_empty) {
			defaults.set(Param::TrackingId, self.tracking_id);
		}

		if self.config.discover_parameters {
			let discoverer = self
				.discoverer
				.unwrap_or_else(|| Box::new(EnvironmentDiscoverer));
			discoverer.discover(&mut defaults);
		}

		let transport = match self.transport {
			Some(transport) => transport,
			None => Arc::new(HttpTransport::from_config(&self.config)?),
		};

		info!(
			endpoint = %self.config.endpoint,
			enabled = self.config.enabled,
			max_concurrent_posts = self.config.effective_pool_size(),
			"initializing analytics client"
		);

		let limiter = Arc::new(Semaphore::new(self.config.effective_pool_size()));
		Ok(Beacon {
			inner: Arc::new(Inner {
				enabled: AtomicBool::new(self.config.enabled),
				gather_stats: AtomicBool::new(self.config.gather_stats),
				closed: AtomicBool::new(false),
				defaults: RwLock::new(defaults),
				stats: RwLock::new(Arc::new(Stats::default())),
				transport,
				limiter,
				config: self.config,
			}),
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::error::BeaconError;
	use crate::transport::Transport;
	use async_trait::async_trait;
	use parking_lot::Mutex;
	use std::collections::BTreeMap;

	struct MockTransport {
		status: u16,
		fail: AtomicBool,
		calls: Mutex<Vec<BTreeMap<String, String>>>,
	}

	impl MockTransport {
		fn new() -> Arc<Self> {
			Arc::new(Self {
				status: 200,
				fail: AtomicBool::new(false),
				calls: Mutex::new(Vec::new()),
			})
		}

		fn call_count(&self) -> usize {
			self.calls.lock().len()
		}

		fn last_call(&self) -> BTreeMap<String, String> {
			self.calls.lock().last().cloned().unwrap_or_default()
		}

		fn set_fail(&self, fail: bool) {
			self.fail.store(fail, Ordering::SeqCst);
		}
	}

	#[async_trait]
	impl Transport for MockTransport {
		async fn send(&self, params: &BTreeMap<String, String>) -> crate::error::Result<u16> {
			self.calls.lock().push(params.clone());
			if self.fail.load(Ordering::SeqCst) {
				return Err(BeaconError::Transport("connection refused".to_string()));
			}
			Ok(self.status)
		}
	}

	fn test_client(transport: Arc<MockTransport>, config: Config) -> Beacon {
		Beacon::builder("UA-44034973-2")
			.with_config(config)
			.with_transport(transport)
			.build()
			.expect("client builds")
	}

	#[tokio::test]
	async fn post_returns_status_and_posted_params() {
		let transport = MockTransport::new();
		let client = test_client(transport.clone(), Config::default());

		let response = client
			.post(&Hit::pageview("https://www.google.com", "Search"))
			.await;

		assert_eq!(response.status(), Some(200));
		assert!(response.was_sent());
		assert_eq!(
			response.posted_params().get("t").map(String::as_str),
			Some("pageview")
		);
		assert_eq!(
			response.posted_params().get("tid").map(String::as_str),
			Some("UA-44034973-2")
		);
		assert_eq!(transport.call_count(), 1);
	}

	#[tokio::test]
	async fn disabled_client_posts_nothing() {
		let transport = MockTransport::new();
		let client = test_client(transport.clone(), Config::default().with_enabled(false));

		let response = client.post(&Hit::appview()).await;

		assert_eq!(response.status(), None);
		assert!(response.posted_params().is_empty());
		assert_eq!(transport.call_count(), 0);
	}

	#[tokio::test]
	async fn transport_failure_is_swallowed() {
		let transport = MockTransport::new();
		transport.set_fail(true);
		let client = test_client(transport.clone(), Config::default());

		let response = client.post(&Hit::appview()).await;

		assert_eq!(response.status(), None);
		assert!(!response.was_sent());
		// Merged params are still reported for inspection.
		assert_eq!(
			response.posted_params().get("t").map(String::as_str),
			Some("appview")
		);
		assert_eq!(transport.call_count(), 1);
	}

	#[tokio::test]
	async fn default_hit_fills_in_user_details() {
		let transport = MockTransport::new();
		let client = test_client(transport.clone(), Config::default());
		client.set_default_hit(Hit::defaults().client_id("1234").user_id("user1"));

		let response = client
			.post(&Hit::pageview("https://www.google.com", "Search"))
			.await;
		assert_eq!(
			response.posted_params().get("cid").map(String::as_str),
			Some("1234")
		);
		assert_eq!(
			response.posted_params().get("uid").map(String::as_str),
			Some("user1")
		);

		let response = client
			.post(
				&Hit::pageview("https://www.google.com", "Search")
					.client_id("12345")
					.user_id("user2"),
			)
			.await;
		assert_eq!(
			response.posted_params().get("cid").map(String::as_str),
			Some("12345")
		);
		assert_eq!(
			response.posted_params().get("uid").map(String::as_str),
			Some("user2")
		);
	}

	#[tokio::test]
	async fn default_hit_seeds_a_client_id() {
		let transport = MockTransport::new();
		let client = test_client(transport.clone(), Config::default());

		let response = client
			.post(&Hit::pageview("https://www.google.com", "Search"))
			.await;
		assert!(response.posted_params().contains_key("cid"));
	}

	#[tokio::test]
	async fn custom_dimensions_merge_with_hit_winning() {
		let transport = MockTransport::new();
		let client = test_client(transport.clone(), Config::default());
		client.set_default_hit(
			Hit::defaults()
				.custom_dimension(1, "foo")
				.custom_dimension(5, "bar"),
		);

		let response = client
			.post(
				&Hit::pageview("https://www.google.com", "Search")
					.custom_dimension(2, "bob")
					.custom_dimension(5, "alice"),
			)
			.await;

		let posted = response.posted_params();
		assert_eq!(posted.get("cd1").map(String::as_str), Some("foo"));
		assert_eq!(posted.get("cd2").map(String::as_str), Some("bob"));
		assert_eq!(posted.get("cd5").map(String::as_str), Some("alice"));
	}

	#[tokio::test]
	async fn stats_gathering_respects_the_toggle() {
		let transport = MockTransport::new();
		let client = test_client(transport.clone(), Config::default());

		client.set_gather_stats(false);
		client.reset_stats();
		for _ in 0..3 {
			client.post(&Hit::pageview("https://example.com/", "Home")).await;
		}
		client.post(&Hit::appview()).await;
		assert_eq!(client.stats(), StatsSnapshot::default());

		client.set_gather_stats(true);
		client.reset_stats();
		for _ in 0..3 {
			client.post(&Hit::pageview("https://example.com/", "Home")).await;
		}
		for _ in 0..2 {
			client.post(&Hit::appview()).await;
		}
		client.post(&Hit::item("tx1", "widget")).await;

		let stats = client.stats();
		assert_eq!(stats.pageviews, 3);
		assert_eq!(stats.appviews, 2);
		assert_eq!(stats.items, 1);
	}

	#[tokio::test]
	async fn failed_posts_are_not_counted() {
		let transport = MockTransport::new();
		transport.set_fail(true);
		let client = test_client(
			transport.clone(),
			Config::default().with_gather_stats(true),
		);

		client
			.post(&Hit::pageview("https://www.google.com", "Search"))
			.await;
		assert_eq!(client.stats().pageviews, 0);
		assert_eq!(client.stats(), StatsSnapshot::default());

		transport.set_fail(false);
		client
			.post(&Hit::pageview("https://www.google.com", "Search"))
			.await;
		assert_eq!(client.stats().pageviews, 1);
	}

	#[tokio::test]
	async fn reset_stats_zeroes_all_counters() {
		let transport = MockTransport::new();
		let client = test_client(
			transport.clone(),
			Config::default().with_gather_stats(true),
		);

		client.post(&Hit::social("Twitter", "Repost", "Post")).await;
		assert_eq!(client.stats().socials, 1);

		client.reset_stats();
		assert_eq!(client.stats(), StatsSnapshot::default());
	}

	#[tokio::test]
	async fn exception_hits_do_not_touch_counters() {
		let transport = MockTransport::new();
		let client = test_client(
			transport.clone(),
			Config::default().with_gather_stats(true),
		);

		client.post(&Hit::exception("boom")).await;
		assert_eq!(client.stats(), StatsSnapshot::default());
		assert_eq!(transport.call_count(), 1);
	}

	#[tokio::test]
	async fn concurrent_async_posts_do_not_cross_contaminate() {
		let transport = MockTransport::new();
		let client = test_client(transport.clone(), Config::default());
		client.set_default_hit(Hit::defaults().client_id("shared"));

		let first = client.post_async(Hit::event("video", "play").event_label("one"));
		let second = client.post_async(Hit::event("video", "stop").event_label("two"));

		let first = first.wait().await.expect("first post completes");
		let second = second.wait().await.expect("second post completes");

		assert_eq!(
			first.posted_params().get("el").map(String::as_str),
			Some("one")
		);
		assert_eq!(
			second.posted_params().get("el").map(String::as_str),
			Some("two")
		);
		assert_eq!(
			first.posted_params().get("cid").map(String::as_str),
			Some("shared")
		);
		assert_eq!(
			second.posted_params().get("cid").map(String::as_str),
			Some("shared")
		);
		assert_eq!(transport.call_count(), 2);
	}

	#[tokio::test]
	async fn post_async_on_disabled_client_resolves_immediately() {
		let transport = MockTransport::new();
		let client = test_client(transport.clone(), Config::default().with_enabled(false));

		let handle = client.post_async(Hit::appview());
		assert_eq!(handle.wait().await, None);
		assert_eq!(transport.call_count(), 0);
	}

	#[tokio::test]
	async fn post_async_with_provider_failure_posts_nothing() {
		let transport = MockTransport::new();
		let client = test_client(transport.clone(), Config::default());

		let handle =
			client.post_async_with(|| Err::<Hit, String>("could not build hit".to_string()));
		assert_eq!(handle.wait().await, None);
		assert_eq!(transport.call_count(), 0);
	}

	#[tokio::test]
	async fn post_async_with_provider_success_posts_the_hit() {
		let transport = MockTransport::new();
		let client = test_client(transport.clone(), Config::default());

		let handle = client
			.post_async_with(|| Ok::<Hit, String>(Hit::timing().user_timing_time(1500)));
		let response = handle.wait().await.expect("post completes");

		assert_eq!(response.status(), Some(200));
		assert_eq!(
			transport.last_call().get("utt").map(String::as_str),
			Some("1500")
		);
	}

	#[tokio::test]
	async fn closed_client_refuses_new_posts() {
		let transport = MockTransport::new();
		let client = test_client(transport.clone(), Config::default());

		client.close();
		assert!(client.is_closed());

		let response = client.post(&Hit::appview()).await;
		assert_eq!(response, Response::empty());

		let handle = client.post_async(Hit::appview());
		assert_eq!(handle.wait().await, None);
		assert_eq!(transport.call_count(), 0);

		// Idempotent.
		client.close();
	}

	#[tokio::test]
	async fn builder_applies_tracking_id_to_supplied_defaults() {
		let transport = MockTransport::new();
		let client = Beacon::builder("UA-1")
			.with_defaults(Hit::defaults().user_id("user1"))
			.with_transport(transport.clone())
			.build()
			.expect("client builds");

		let response = client.post(&Hit::appview()).await;
		assert_eq!(
			response.posted_params().get("tid").map(String::as_str),
			Some("UA-1")
		);
		assert_eq!(
			response.posted_params().get("uid").map(String::as_str),
			Some("user1")
		);
	}

	#[tokio::test]
	async fn builder_keeps_explicit_tracking_id_on_defaults() {
		let transport = MockTransport::new();
		let client = Beacon::builder("UA-ignored")
			.with_defaults(Hit::defaults().tracking_id("UA-explicit"))
			.with_transport(transport.clone())
			.build()
			.expect("client builds");

		let response = client.post(&Hit::appview()).await;
		assert_eq!(
			response.posted_params().get("tid").map(String::as_str),
			Some("UA-explicit")
		);
	}

	#[test]
	fn for_app_seeds_application_fields() {
		let client =
			Beacon::for_app("UA-1", "Example App", "1.0.0").expect("client builds");

		let defaults = client.default_hit();
		assert_eq!(defaults.param(Param::ApplicationName), Some("Example App"));
		assert_eq!(defaults.param(Param::ApplicationVersion), Some("1.0.0"));
		assert_eq!(defaults.param(Param::TrackingId), Some("UA-1"));
	}
}
