//! Pure projections from the latest server state to what each region shows.

use crate::api::{Hero, Stats};

/// Shown wherever a list has no entries.
pub const EMPTY_PLACEHOLDER: &str = "None";

/// One row of the top-connected ranking.
#[derive(Clone, Debug, PartialEq)]
pub struct RankedHero {
	/// `"{emoji} {name}"`.
	pub label: String,
	/// `"{n} connections"`.
	pub connections: String,
}

/// Everything the stats region prints.
#[derive(Clone, Debug, PartialEq)]
pub struct StatsSummary {
	/// Heroes in the network.
	pub total_heroes: u64,
	/// Friendships in the network.
	pub total_connections: u64,
	/// Recent names joined by `", "`, or [`EMPTY_PLACEHOLDER`].
	pub recently_added: String,
	/// Ranking rows, best-connected first.
	pub top_connected: Vec<RankedHero>,
}

impl From<&Stats> for StatsSummary {
	fn from(stats: &Stats) -> Self {
		let recently_added = if stats.recent_heroes.is_empty() {
			EMPTY_PLACEHOLDER.to_string()
		} else {
			stats.recent_heroes.join(", ")
		};
		Self {
			total_heroes: stats.total_heroes,
			total_connections: stats.total_connections,
			recently_added,
			top_connected: stats
				.top_connected
				.iter()
				.map(|h| RankedHero {
					label: format!("{} {}", h.emoji, h.name),
					connections: format!("{} connections", h.connections),
				})
				.collect(),
		}
	}
}

/// A hero's friends as printed in the search card.
#[derive(Clone, Debug, PartialEq)]
pub enum FriendList {
	/// No friends; the card prints [`EMPTY_PLACEHOLDER`].
	Empty,
	/// `"{emoji} {name}"` per friend.
	Names(Vec<String>),
}

/// A found hero, ready for the search card.
#[derive(Clone, Debug, PartialEq)]
pub struct HeroDetails {
	/// Bare name, used in the success toast.
	pub name: String,
	/// `"{emoji} {name}"`.
	pub heading: String,
	/// Creation date exactly as the server sent it.
	pub added_on: String,
	/// Friend names, or empty.
	pub friends: FriendList,
}

impl From<&Hero> for HeroDetails {
	fn from(hero: &Hero) -> Self {
		let friends = if hero.friends.is_empty() {
			FriendList::Empty
		} else {
			FriendList::Names(
				hero.friends
					.iter()
					.map(|f| format!("{} {}", f.emoji, f.name))
					.collect(),
			)
		};
		Self {
			name: hero.name.clone(),
			heading: format!("{} {}", hero.emoji, hero.name),
			added_on: hero.created_at.clone().unwrap_or_default(),
			friends,
		}
	}
}

/// Content of the search result region.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum SearchView {
	/// Nothing searched yet.
	#[default]
	Idle,
	/// A request is in flight.
	Searching,
	/// The server answered `null`.
	NotFound,
	/// The server found the hero.
	Found(HeroDetails),
	/// The request failed; holds the error text.
	Failed(String),
}

impl SearchView {
	/// Projects a `/api/hero` answer.
	pub fn from_response(hero: Option<&Hero>) -> Self {
		match hero {
			Some(hero) => SearchView::Found(hero.into()),
			None => SearchView::NotFound,
		}
	}
}

/// Content of the stats region.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum StatsView {
	/// Nothing loaded yet.
	#[default]
	Loading,
	/// Latest successful load.
	Ready(StatsSummary),
	/// The first load failed; holds the error text.
	Failed(String),
}

impl StatsView {
	/// State after a failed load. Loaded stats stay on screen; only a region
	/// that never showed any leaves its loading placeholder.
	pub fn after_failure(self, reason: String) -> Self {
		match self {
			StatsView::Ready(summary) => StatsView::Ready(summary),
			StatsView::Loading | StatsView::Failed(_) => StatsView::Failed(reason),
		}
	}
}

/// Which of the two graph views occupies the graph area.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GraphMode {
	/// Force-layout canvas.
	#[default]
	Interactive,
	/// Server-rendered image.
	Static,
}

impl GraphMode {
	/// Whether the force-layout canvas is visible.
	pub fn shows_canvas(self) -> bool {
		self == GraphMode::Interactive
	}

	/// Whether the server-rendered image is visible.
	pub fn shows_image(self) -> bool {
		self == GraphMode::Static
	}
}

/// Progress of the interactive graph fetch.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum GraphStatus {
	/// Fetch in flight.
	#[default]
	Loading,
	/// The layout holds the latest graph.
	Ready,
	/// The fetch failed; holds the error text.
	Failed(String),
}

/// Lifecycle of the server-rendered image.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum ImageState {
	/// No image requested yet.
	#[default]
	Empty,
	/// Waiting for the server.
	Generating,
	/// Object url assigned, waiting for the image to load.
	Decoding(String),
	/// The image element finished loading this object url.
	Shown(String),
	/// The fetch failed.
	Failed,
}

impl ImageState {
	/// Object url to put on the image element.
	pub fn src(&self) -> Option<&str> {
		match self {
			ImageState::Decoding(url) | ImageState::Shown(url) => Some(url),
			_ => None,
		}
	}

	/// Whether the generating indicator is up.
	pub fn is_loading(&self) -> bool {
		matches!(self, ImageState::Generating | ImageState::Decoding(_))
	}

	/// Whether the failed placeholder replaces the image.
	pub fn is_failed(&self) -> bool {
		matches!(self, ImageState::Failed)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::api::{FriendRef, TopHero};

	fn hero(friends: Vec<FriendRef>) -> Hero {
		Hero {
			id: None,
			name: "dataiskole".into(),
			emoji: "📊".into(),
			created_at: Some("2024-05-01".into()),
			friends,
		}
	}

	#[test]
	fn empty_stats_render_placeholder_and_empty_ranking() {
		let stats = Stats {
			total_heroes: 5,
			total_connections: 3,
			recent_heroes: vec![],
			top_connected: vec![],
		};
		let summary = StatsSummary::from(&stats);
		assert_eq!(summary.total_heroes, 5);
		assert_eq!(summary.total_connections, 3);
		assert_eq!(summary.recently_added, "None");
		assert!(summary.top_connected.is_empty());
	}

	#[test]
	fn stats_join_recent_names_and_rank_top_heroes() {
		let stats = Stats {
			total_heroes: 3,
			total_connections: 2,
			recent_heroes: vec!["Thor".into(), "Hulk".into()],
			top_connected: vec![TopHero {
				name: "Iron Man".into(),
				emoji: "🤖".into(),
				connections: 4,
			}],
		};
		let summary = StatsSummary::from(&stats);
		assert_eq!(summary.recently_added, "Thor, Hulk");
		assert_eq!(
			summary.top_connected,
			vec![RankedHero {
				label: "🤖 Iron Man".into(),
				connections: "4 connections".into(),
			}]
		);
	}

	#[test]
	fn null_search_result_is_not_found() {
		assert_eq!(SearchView::from_response(None), SearchView::NotFound);
	}

	#[test]
	fn found_hero_renders_fields_verbatim() {
		let hero = hero(vec![
			FriendRef {
				id: None,
				name: "Thor".into(),
				emoji: "⚡".into(),
			},
			FriendRef {
				id: None,
				name: "Hulk".into(),
				emoji: "💪".into(),
			},
		]);
		let SearchView::Found(details) = SearchView::from_response(Some(&hero)) else {
			panic!("expected details");
		};
		assert_eq!(details.heading, "📊 dataiskole");
		assert_eq!(details.added_on, "2024-05-01");
		assert_eq!(
			details.friends,
			FriendList::Names(vec!["⚡ Thor".into(), "💪 Hulk".into()])
		);
	}

	#[test]
	fn hero_without_friends_gets_empty_list() {
		let details = HeroDetails::from(&hero(vec![]));
		assert_eq!(details.friends, FriendList::Empty);
		assert_eq!(EMPTY_PLACEHOLDER, "None");
	}

	#[test]
	fn graph_modes_are_exclusive() {
		for mode in [GraphMode::Interactive, GraphMode::Static] {
			assert_ne!(mode.shows_canvas(), mode.shows_image());
		}
	}

	#[test]
	fn image_indicator_clears_once_shown() {
		assert!(ImageState::Generating.is_loading());
		let decoding = ImageState::Decoding("blob:1".into());
		assert!(decoding.is_loading());
		assert_eq!(decoding.src(), Some("blob:1"));
		let shown = ImageState::Shown("blob:1".into());
		assert!(!shown.is_loading());
		assert_eq!(shown.src(), Some("blob:1"));
		assert_eq!(ImageState::Failed.src(), None);
	}

	#[test]
	fn failed_image_shows_placeholder_instead_of_spinner() {
		let failed = ImageState::Failed;
		assert!(failed.is_failed());
		assert!(!failed.is_loading());
		assert!(!ImageState::Generating.is_failed());
		assert!(!ImageState::Shown("blob:1".into()).is_failed());
	}

	#[test]
	fn first_stats_failure_replaces_loading_placeholder() {
		let view = StatsView::Loading.after_failure("HTTP 500".into());
		assert_eq!(view, StatsView::Failed("HTTP 500".into()));

		let again = view.after_failure("HTTP 502".into());
		assert_eq!(again, StatsView::Failed("HTTP 502".into()));
	}

	#[test]
	fn stats_failure_keeps_loaded_summary() {
		let summary = StatsSummary {
			total_heroes: 5,
			total_connections: 3,
			recently_added: EMPTY_PLACEHOLDER.into(),
			top_connected: vec![],
		};
		let view = StatsView::Ready(summary.clone()).after_failure("HTTP 500".into());
		assert_eq!(view, StatsView::Ready(summary));
	}
}
