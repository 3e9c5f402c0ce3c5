// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! End-to-end tests for the reqwest transport against a stub server.

use beacon::{Beacon, Config, Hit};
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn client_for(server: &MockServer, config: Config) -> Beacon {
	let config = config
		.with_endpoint(&format!("{}/collect", server.uri()))
		.expect("mock server URI is valid");
	Beacon::builder("UA-44034973-2")
		.with_config(config)
		.build()
		.expect("client builds")
}

#[tokio::test]
async fn posts_form_encoded_hit_and_surfaces_status() {
	let server = MockServer::start().await;
	Mock::given(method("POST"))
		.and(path("/collect"))
		.and(header(
			"content-type",
			"application/x-www-form-urlencoded",
		))
		.and(body_string_contains("t=pageview"))
		.and(body_string_contains("tid=UA-44034973-2"))
		.and(body_string_contains("dt=Search"))
		.respond_with(ResponseTemplate::new(200))
		.mount(&server)
		.await;

	let client = client_for(&server, Config::default()).await;
	let response = client
		.post(&Hit::pageview("https://www.google.com", "Search"))
		.await;

	assert_eq!(response.status(), Some(200));
	assert!(response.was_sent());
}

#[tokio::test]
async fn custom_dimensions_reach_the_wire() {
	let server = MockServer::start().await;
	Mock::given(method("POST"))
		.and(path("/collect"))
		.and(body_string_contains("cd1=foo"))
		.and(body_string_contains("cd5=alice"))
		.and(body_string_contains("cm2=42"))
		.respond_with(ResponseTemplate::new(200))
		.mount(&server)
		.await;

	let client = client_for(&server, Config::default()).await;
	client.set_default_hit(Hit::defaults().custom_dimension(1, "foo"));

	let response = client
		.post(
			&Hit::appview()
				.custom_dimension(5, "alice")
				.custom_metric(2, "42"),
		)
		.await;

	assert_eq!(response.status(), Some(200));
}

#[tokio::test]
async fn server_error_status_is_reported_not_raised() {
	let server = MockServer::start().await;
	Mock::given(method("POST"))
		.and(path("/collect"))
		.respond_with(ResponseTemplate::new(500))
		.mount(&server)
		.await;

	let client = client_for(&server, Config::default()).await;
	let response = client.post(&Hit::appview()).await;

	// A 5xx is still a completed exchange; the swallow policy applies to
	// transport failures, not unhappy status codes.
	assert_eq!(response.status(), Some(500));
}

#[tokio::test]
async fn unreachable_endpoint_yields_unsent_response() {
	// Nothing listens on this port; reqwest fails to connect.
	let config = Config::default()
		.with_endpoint("http://127.0.0.1:9/collect")
		.expect("static URL parses");
	let client = Beacon::builder("UA-1")
		.with_config(config)
		.build()
		.expect("client builds");

	let response = client.post(&Hit::appview()).await;

	assert_eq!(response.status(), None);
	assert!(!response.was_sent());
	assert!(!response.posted_params().is_empty());
}

#[tokio::test]
async fn configured_user_agent_is_sent() {
	let server = MockServer::start().await;
	Mock::given(method("POST"))
		.and(path("/collect"))
		.and(header("user-agent", "beacon-test/1.0"))
		.respond_with(ResponseTemplate::new(200))
		.mount(&server)
		.await;

	let client = client_for(
		&server,
		Config::default().with_user_agent("beacon-test/1.0"),
	)
	.await;
	let response = client.post(&Hit::appview()).await;

	assert_eq!(response.status(), Some(200));
}

#[tokio::test]
async fn concurrent_async_posts_all_arrive() {
	let server = MockServer::start().await;
	Mock::given(method("POST"))
		.and(path("/collect"))
		.respond_with(ResponseTemplate::new(200))
		.expect(8)
		.mount(&server)
		.await;

	let client = client_for(
		&server,
		Config::default().with_max_concurrent_posts(2),
	)
	.await;

	let handles: Vec<_> = (0..8)
		.map(|i| client.post_async(Hit::event("load", "test").event_value(i)))
		.collect();
	for handle in handles {
		let response = handle.wait().await.expect("post completes");
		assert_eq!(response.status(), Some(200));
	}
}
