// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The `Hit` builder: one analytics event waiting to be posted.
//!
//! A hit is a bag of [`Param`] values plus free-form custom dimension and
//! metric maps. Values are plain strings on the wire, so the typed setters
//! here are conveniences, not validation. An empty string is treated the
//! same as an absent value by the merge engine.

use std::collections::{BTreeMap, HashMap};

use uuid::Uuid;

use crate::hit_type::HitType;
use crate::param::Param;

/// One analytics event, built fluently and consumed by `post`.
///
/// # Example
///
/// ```
/// use beacon_core::Hit;
///
/// let hit = Hit::pageview("https://example.com/pricing", "Pricing")
///     .client_id("5c3e")
///     .custom_dimension(2, "beta-cohort");
/// ```
#[derive(Debug, Clone)]
pub struct Hit {
	hit_type: HitType,
	params: HashMap<Param, String>,
	dimensions: BTreeMap<u32, String>,
	metrics: BTreeMap<u32, String>,
}

impl Hit {
	/// Creates a hit of the given type, seeding the protocol version and
	/// the `t` parameter.
	pub fn new(hit_type: HitType) -> Self {
		let mut params = HashMap::new();
		params.insert(Param::ProtocolVersion, "1".to_string());
		params.insert(Param::HitType, hit_type.wire_value().to_string());
		Self {
			hit_type,
			params,
			dimensions: BTreeMap::new(),
			metrics: BTreeMap::new(),
		}
	}

	/// Creates the fallback hit held by the client.
	///
	/// Defaults carry no `t` parameter of their own (the per-hit value is
	/// always present and wins) and seed a random UUID client id, so hosts
	/// that never assign ids still produce distinguishable sessions.
	pub fn defaults() -> Self {
		let mut params = HashMap::new();
		params.insert(Param::ProtocolVersion, "1".to_string());
		params.insert(Param::ClientId, Uuid::new_v4().to_string());
		Self {
			hit_type: HitType::Pageview,
			params,
			dimensions: BTreeMap::new(),
			metrics: BTreeMap::new(),
		}
	}

	/// A pageview hit for the given document URL and title.
	pub fn pageview(url: impl Into<String>, title: impl Into<String>) -> Self {
		Self::new(HitType::Pageview)
			.document_url(url)
			.document_title(title)
	}

	/// An appview hit; pair with [`Hit::application_name`] and friends.
	pub fn appview() -> Self {
		Self::new(HitType::Appview)
	}

	/// An event hit with the given category and action.
	pub fn event(category: impl Into<String>, action: impl Into<String>) -> Self {
		Self::new(HitType::Event)
			.event_category(category)
			.event_action(action)
	}

	/// An e-commerce item hit tied to a transaction.
	pub fn item(transaction_id: impl Into<String>, name: impl Into<String>) -> Self {
		Self::new(HitType::Item)
			.transaction_id(transaction_id)
			.item_name(name)
	}

	/// An e-commerce transaction hit.
	pub fn transaction(transaction_id: impl Into<String>) -> Self {
		Self::new(HitType::Transaction).transaction_id(transaction_id)
	}

	/// A social interaction hit.
	pub fn social(
		network: impl Into<String>,
		action: impl Into<String>,
		target: impl Into<String>,
	) -> Self {
		Self::new(HitType::Social)
			.social_network(network)
			.social_action(action)
			.social_action_target(target)
	}

	/// A user timing hit.
	pub fn timing() -> Self {
		Self::new(HitType::Timing)
	}

	/// An exception hit with the given description.
	pub fn exception(description: impl Into<String>) -> Self {
		Self::new(HitType::Exception).exception_description(description)
	}

	/// Returns the hit type assigned at construction.
	pub fn hit_type(&self) -> HitType {
		self.hit_type
	}

	/// Returns the value of a parameter, if present.
	pub fn param(&self, param: Param) -> Option<&str> {
		self.params.get(&param).map(String::as_str)
	}

	/// Returns the full parameter map.
	pub fn params(&self) -> &HashMap<Param, String> {
		&self.params
	}

	/// Returns the custom dimension map (index, value).
	pub fn custom_dimensions(&self) -> &BTreeMap<u32, String> {
		&self.dimensions
	}

	/// Returns the custom metric map (index, value).
	pub fn custom_metrics(&self) -> &BTreeMap<u32, String> {
		&self.metrics
	}

	/// Sets a parameter in place.
	pub fn set(&mut self, param: Param, value: impl Into<String>) {
		self.params.insert(param, value.into());
	}

	/// Sets a parameter, fluent form.
	pub fn with(mut self, param: Param, value: impl Into<String>) -> Self {
		self.set(param, value);
		self
	}

	/// Sets the custom dimension at `index`, posted as `cd<index>`.
	pub fn custom_dimension(mut self, index: u32, value: impl Into<String>) -> Self {
		self.dimensions.insert(index, value.into());
		self
	}

	/// Sets the custom metric at `index`, posted as `cm<index>`.
	pub fn custom_metric(mut self, index: u32, value: impl Into<String>) -> Self {
		self.metrics.insert(index, value.into());
		self
	}

	/// Sets the tracking id (`tid`).
	pub fn tracking_id(self, value: impl Into<String>) -> Self {
		self.with(Param::TrackingId, value)
	}

	/// Sets the client id (`cid`).
	pub fn client_id(self, value: impl Into<String>) -> Self {
		self.with(Param::ClientId, value)
	}

	/// Sets the user id (`uid`).
	pub fn user_id(self, value: impl Into<String>) -> Self {
		self.with(Param::UserId, value)
	}

	/// Sets the originating IP address (`uip`).
	pub fn user_ip(self, value: impl Into<String>) -> Self {
		self.with(Param::UserIp, value)
	}

	/// Sets the user agent override (`ua`).
	pub fn user_agent(self, value: impl Into<String>) -> Self {
		self.with(Param::UserAgent, value)
	}

	/// Requests IP anonymization (`aip`).
	pub fn anonymize_ip(self, value: bool) -> Self {
		self.with(Param::AnonymizeIp, if value { "1" } else { "0" })
	}

	/// Sets the queue time in milliseconds (`qt`).
	pub fn queue_time(self, millis: u64) -> Self {
		self.with(Param::QueueTime, millis.to_string())
	}

	/// Sets the cache buster (`z`).
	pub fn cache_buster(self, value: impl Into<String>) -> Self {
		self.with(Param::CacheBuster, value)
	}

	/// Sets the document referrer (`dr`).
	pub fn document_referrer(self, value: impl Into<String>) -> Self {
		self.with(Param::DocumentReferrer, value)
	}

	/// Sets the full document URL (`dl`).
	pub fn document_url(self, value: impl Into<String>) -> Self {
		self.with(Param::DocumentUrl, value)
	}

	/// Sets the document host name (`dh`).
	pub fn document_host_name(self, value: impl Into<String>) -> Self {
		self.with(Param::DocumentHostName, value)
	}

	/// Sets the document path (`dp`).
	pub fn document_path(self, value: impl Into<String>) -> Self {
		self.with(Param::DocumentPath, value)
	}

	/// Sets the document title (`dt`).
	pub fn document_title(self, value: impl Into<String>) -> Self {
		self.with(Param::DocumentTitle, value)
	}

	/// Sets the screen name (`cd`).
	pub fn screen_name(self, value: impl Into<String>) -> Self {
		self.with(Param::ScreenName, value)
	}

	/// Sets the screen resolution (`sr`).
	pub fn screen_resolution(self, value: impl Into<String>) -> Self {
		self.with(Param::ScreenResolution, value)
	}

	/// Sets the viewport size (`vp`).
	pub fn viewport_size(self, value: impl Into<String>) -> Self {
		self.with(Param::ViewportSize, value)
	}

	/// Sets the document encoding (`de`).
	pub fn document_encoding(self, value: impl Into<String>) -> Self {
		self.with(Param::DocumentEncoding, value)
	}

	/// Sets the user language (`ul`).
	pub fn user_language(self, value: impl Into<String>) -> Self {
		self.with(Param::UserLanguage, value)
	}

	/// Sets the application name (`an`).
	pub fn application_name(self, value: impl Into<String>) -> Self {
		self.with(Param::ApplicationName, value)
	}

	/// Sets the application version (`av`).
	pub fn application_version(self, value: impl Into<String>) -> Self {
		self.with(Param::ApplicationVersion, value)
	}

	/// Sets the application id (`aid`).
	pub fn application_id(self, value: impl Into<String>) -> Self {
		self.with(Param::ApplicationId, value)
	}

	/// Sets the event category (`ec`).
	pub fn event_category(self, value: impl Into<String>) -> Self {
		self.with(Param::EventCategory, value)
	}

	/// Sets the event action (`ea`).
	pub fn event_action(self, value: impl Into<String>) -> Self {
		self.with(Param::EventAction, value)
	}

	/// Sets the event label (`el`).
	pub fn event_label(self, value: impl Into<String>) -> Self {
		self.with(Param::EventLabel, value)
	}

	/// Sets the event value (`ev`).
	pub fn event_value(self, value: i64) -> Self {
		self.with(Param::EventValue, value.to_string())
	}

	/// Sets the transaction id (`ti`).
	pub fn transaction_id(self, value: impl Into<String>) -> Self {
		self.with(Param::TransactionId, value)
	}

	/// Sets the transaction affiliation (`ta`).
	pub fn transaction_affiliation(self, value: impl Into<String>) -> Self {
		self.with(Param::TransactionAffiliation, value)
	}

	/// Sets the transaction revenue (`tr`).
	pub fn transaction_revenue(self, value: f64) -> Self {
		self.with(Param::TransactionRevenue, value.to_string())
	}

	/// Sets the transaction shipping cost (`ts`).
	pub fn transaction_shipping(self, value: f64) -> Self {
		self.with(Param::TransactionShipping, value.to_string())
	}

	/// Sets the transaction tax (`tt`).
	pub fn transaction_tax(self, value: f64) -> Self {
		self.with(Param::TransactionTax, value.to_string())
	}

	/// Sets the currency code (`cu`).
	pub fn currency_code(self, value: impl Into<String>) -> Self {
		self.with(Param::CurrencyCode, value)
	}

	/// Sets the item name (`in`).
	pub fn item_name(self, value: impl Into<String>) -> Self {
		self.with(Param::ItemName, value)
	}

	/// Sets the item unit price (`ip`).
	pub fn item_price(self, value: f64) -> Self {
		self.with(Param::ItemPrice, value.to_string())
	}

	/// Sets the item quantity (`iq`).
	pub fn item_quantity(self, value: u64) -> Self {
		self.with(Param::ItemQuantity, value.to_string())
	}

	/// Sets the item code / SKU (`ic`).
	pub fn item_code(self, value: impl Into<String>) -> Self {
		self.with(Param::ItemCode, value)
	}

	/// Sets the item category (`iv`).
	pub fn item_category(self, value: impl Into<String>) -> Self {
		self.with(Param::ItemCategory, value)
	}

	/// Sets the social network (`sn`).
	pub fn social_network(self, value: impl Into<String>) -> Self {
		self.with(Param::SocialNetwork, value)
	}

	/// Sets the social action (`sa`).
	pub fn social_action(self, value: impl Into<String>) -> Self {
		self.with(Param::SocialAction, value)
	}

	/// Sets the social action target (`st`).
	pub fn social_action_target(self, value: impl Into<String>) -> Self {
		self.with(Param::SocialActionTarget, value)
	}

	/// Sets the user timing category (`utc`).
	pub fn user_timing_category(self, value: impl Into<String>) -> Self {
		self.with(Param::UserTimingCategory, value)
	}

	/// Sets the user timing variable name (`utv`).
	pub fn user_timing_variable_name(self, value: impl Into<String>) -> Self {
		self.with(Param::UserTimingVariableName, value)
	}

	/// Sets the user timing duration in milliseconds (`utt`).
	pub fn user_timing_time(self, millis: u64) -> Self {
		self.with(Param::UserTimingTime, millis.to_string())
	}

	/// Sets the user timing label (`utl`).
	pub fn user_timing_label(self, value: impl Into<String>) -> Self {
		self.with(Param::UserTimingLabel, value)
	}

	/// Sets the exception description (`exd`).
	pub fn exception_description(self, value: impl Into<String>) -> Self {
		self.with(Param::ExceptionDescription, value)
	}

	/// Marks the exception as fatal or not (`exf`).
	pub fn exception_fatal(self, value: bool) -> Self {
		self.with(Param::IsExceptionFatal, if value { "1" } else { "0" })
	}

	/// Marks the hit as non-interactive (`ni`).
	pub fn non_interaction(self, value: bool) -> Self {
		self.with(Param::NonInteractionHit, if value { "1" } else { "0" })
	}

	/// Sets the campaign name (`cn`).
	pub fn campaign_name(self, value: impl Into<String>) -> Self {
		self.with(Param::CampaignName, value)
	}

	/// Sets the campaign source (`cs`).
	pub fn campaign_source(self, value: impl Into<String>) -> Self {
		self.with(Param::CampaignSource, value)
	}

	/// Sets the campaign medium (`cm`).
	pub fn campaign_medium(self, value: impl Into<String>) -> Self {
		self.with(Param::CampaignMedium, value)
	}
}
