// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The closed set of wire parameters understood by the collection endpoint.
//!
//! Every parameter carries a short wire name (e.g. `ClientId` is sent as
//! `cid`). Custom dimensions and metrics are not parameters; they are
//! namespaced separately as `cd<N>` / `cm<N>` by the merge engine.

/// A named analytics parameter with a fixed wire name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Param {
	// General
	ProtocolVersion,
	TrackingId,
	AnonymizeIp,
	QueueTime,
	CacheBuster,

	// User
	ClientId,
	UserId,
	SessionControl,
	UserIp,
	UserAgent,

	// Traffic sources
	DocumentReferrer,
	CampaignName,
	CampaignSource,
	CampaignMedium,
	CampaignKeyword,
	CampaignContent,
	CampaignId,
	AdwordsId,
	DisplayAdsId,

	// System info
	ScreenResolution,
	ViewportSize,
	DocumentEncoding,
	ScreenColors,
	UserLanguage,
	JavaEnabled,
	FlashVersion,

	// Hit
	HitType,
	NonInteractionHit,

	// Content information
	DocumentUrl,
	DocumentHostName,
	DocumentPath,
	DocumentTitle,
	ScreenName,
	LinkId,

	// App tracking
	ApplicationName,
	ApplicationVersion,
	ApplicationId,

	// Event tracking
	EventCategory,
	EventAction,
	EventLabel,
	EventValue,

	// E-commerce
	TransactionId,
	TransactionAffiliation,
	TransactionRevenue,
	TransactionShipping,
	TransactionTax,
	ItemName,
	ItemPrice,
	ItemQuantity,
	ItemCode,
	ItemCategory,
	CurrencyCode,

	// Social interactions
	SocialNetwork,
	SocialAction,
	SocialActionTarget,

	// Timing
	UserTimingCategory,
	UserTimingVariableName,
	UserTimingTime,
	UserTimingLabel,
	PageLoadTime,
	DnsTime,
	PageDownloadTime,
	RedirectResponseTime,
	TcpConnectTime,
	ServerResponseTime,

	// Exceptions
	ExceptionDescription,
	IsExceptionFatal,

	// Experiments
	ExperimentId,
	ExperimentVariant,
}

impl Param {
	/// Every parameter, in declaration order.
	pub const ALL: &'static [Param] = &[
		Param::ProtocolVersion,
		Param::TrackingId,
		Param::AnonymizeIp,
		Param::QueueTime,
		Param::CacheBuster,
		Param::ClientId,
		Param::UserId,
		Param::SessionControl,
		Param::UserIp,
		Param::UserAgent,
		Param::DocumentReferrer,
		Param::CampaignName,
		Param::CampaignSource,
		Param::CampaignMedium,
		Param::CampaignKeyword,
		Param::CampaignContent,
		Param::CampaignId,
		Param::AdwordsId,
		Param::DisplayAdsId,
		Param::ScreenResolution,
		Param::ViewportSize,
		Param::DocumentEncoding,
		Param::ScreenColors,
		Param::UserLanguage,
		Param::JavaEnabled,
		Param::FlashVersion,
		Param::HitType,
		Param::NonInteractionHit,
		Param::DocumentUrl,
		Param::DocumentHostName,
		Param::DocumentPath,
		Param::DocumentTitle,
		Param::ScreenName,
		Param::LinkId,
		Param::ApplicationName,
		Param::ApplicationVersion,
		Param::ApplicationId,
		Param::EventCategory,
		Param::EventAction,
		Param::EventLabel,
		Param::EventValue,
		Param::TransactionId,
		Param::TransactionAffiliation,
		Param::TransactionRevenue,
		Param::TransactionShipping,
		Param::TransactionTax,
		Param::ItemName,
		Param::ItemPrice,
		Param::ItemQuantity,
		Param::ItemCode,
		Param::ItemCategory,
		Param::CurrencyCode,
		Param::SocialNetwork,
		Param::SocialAction,
		Param::SocialActionTarget,
		Param::UserTimingCategory,
		Param::UserTimingVariableName,
		Param::UserTimingTime,
		Param::UserTimingLabel,
		Param::PageLoadTime,
		Param::DnsTime,
		Param::PageDownloadTime,
		Param::RedirectResponseTime,
		Param::TcpConnectTime,
		Param::ServerResponseTime,
		Param::ExceptionDescription,
		Param::IsExceptionFatal,
		Param::ExperimentId,
		Param::ExperimentVariant,
	];

	/// Returns the short wire name this parameter is posted under.
	pub fn wire_name(self) -> &'static str {
		match self {
			Param::ProtocolVersion => "v",
			Param::TrackingId => "tid",
			Param::AnonymizeIp => "aip",
			Param::QueueTime => "qt",
			Param::CacheBuster => "z",
			Param::ClientId => "cid",
			Param::UserId => "uid",
			Param::SessionControl => "sc",
			Param::UserIp => "uip",
			Param::UserAgent => "ua",
			Param::DocumentReferrer => "dr",
			Param::CampaignName => "cn",
			Param::CampaignSource => "cs",
			Param::CampaignMedium => "cm",
			Param::CampaignKeyword => "ck",
			Param::CampaignContent => "cc",
			Param::CampaignId => "ci",
			Param::AdwordsId => "gclid",
			Param::DisplayAdsId => "dclid",
			Param::ScreenResolution => "sr",
			Param::ViewportSize => "vp",
			Param::DocumentEncoding => "de",
			Param::ScreenColors => "sd",
			Param::UserLanguage => "ul",
			Param::JavaEnabled => "je",
			Param::FlashVersion => "fl",
			Param::HitType => "t",
			Param::NonInteractionHit => "ni",
			Param::DocumentUrl => "dl",
			Param::DocumentHostName => "dh",
			Param::DocumentPath => "dp",
			Param::DocumentTitle => "dt",
			Param::ScreenName => "cd",
			Param::LinkId => "linkid",
			Param::ApplicationName => "an",
			Param::ApplicationVersion => "av",
			Param::ApplicationId => "aid",
			Param::EventCategory => "ec",
			Param::EventAction => "ea",
			Param::EventLabel => "el",
			Param::EventValue => "ev",
			Param::TransactionId => "ti",
			Param::TransactionAffiliation => "ta",
			Param::TransactionRevenue => "tr",
			Param::TransactionShipping => "ts",
			Param::TransactionTax => "tt",
			Param::ItemName => "in",
			Param::ItemPrice => "ip",
			Param::ItemQuantity => "iq",
			Param::ItemCode => "ic",
			Param::ItemCategory => "iv",
			Param::CurrencyCode => "cu",
			Param::SocialNetwork => "sn",
			Param::SocialAction => "sa",
			Param::SocialActionTarget => "st",
			Param::UserTimingCategory => "utc",
			Param::UserTimingVariableName => "utv",
			Param::UserTimingTime => "utt",
			Param::UserTimingLabel => "utl",
			Param::PageLoadTime => "plt",
			Param::DnsTime => "dns",
			Param::PageDownloadTime => "pdt",
			Param::RedirectResponseTime => "rrt",
			Param::TcpConnectTime => "tcp",
			Param::ServerResponseTime => "srt",
			Param::ExceptionDescription => "exd",
			Param::IsExceptionFatal => "exf",
			Param::ExperimentId => "xid",
			Param::ExperimentVariant => "xvar",
		}
	}
}

impl std::fmt::Display for Param {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.wire_name())
	}
}
