// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Best-effort local hit counters.
//!
//! Seven counters, one per countable hit type. Reset swaps in a whole new
//! instance, so increments racing a reset land on the retired set and are
//! lost. These are diagnostics, not an accounting ledger.

use std::sync::atomic::{AtomicU64, Ordering};

use beacon_core::HitType;
use serde::{Deserialize, Serialize};

/// Monotonically increasing per-hit-type counters.
#[derive(Debug, Default)]
pub(crate) struct Stats {
	pageviews: AtomicU64,
	appviews: AtomicU64,
	events: AtomicU64,
	items: AtomicU64,
	transactions: AtomicU64,
	socials: AtomicU64,
	timings: AtomicU64,
}

impl Stats {
	/// Increments the counter for `hit_type`. Types without a counter are
	/// ignored.
	pub(crate) fn record(&self, hit_type: HitType) {
		let counter = match hit_type {
			HitType::Pageview => &self.pageviews,
			HitType::Appview => &self.appviews,
			HitType::Event => &self.events,
			HitType::Item => &self.items,
			HitType::Transaction => &self.transactions,
			HitType::Social => &self.socials,
			HitType::Timing => &self.timings,
			HitType::Exception => return,
		};
		counter.fetch_add(1, Ordering::Relaxed);
	}

	/// Reads all counters as one snapshot.
	pub(crate) fn snapshot(&self) -> StatsSnapshot {
		StatsSnapshot {
			pageviews: self.pageviews.load(Ordering::Relaxed),
			appviews: self.appviews.load(Ordering::Relaxed),
			events: self.events.load(Ordering::Relaxed),
			items: self.items.load(Ordering::Relaxed),
			transactions: self.transactions.load(Ordering::Relaxed),
			socials: self.socials.load(Ordering::Relaxed),
			timings: self.timings.load(Ordering::Relaxed),
		}
	}
}

/// A point-in-time copy of the stats counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsSnapshot {
	pub pageviews: u64,
	pub appviews: u64,
	pub events: u64,
	pub items: u64,
	pub transactions: u64,
	pub socials: u64,
	pub timings: u64,
}
