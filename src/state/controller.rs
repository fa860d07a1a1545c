use leptos::prelude::*;
use leptos::task::spawn_local;
use log::{debug, error, info, warn};

use super::dialog::{DialogChoice, Dialogs};
use super::forms::{self, MutationOutcome};
use super::sequence::{RequestSequence, Ticket};
use super::toast::{Toast, ToastKind, ToastSlot};
use super::view::{GraphMode, GraphStatus, ImageState, SearchView, StatsSummary, StatsView};
use crate::api::{ApiClient, GraphData, Hero, ImageFormat, Stats};
use crate::browser;
use crate::config::AppConfig;
use crate::error::Result;

/// Text bound to the page's inputs.
#[derive(Clone, Copy)]
pub struct FormFields {
	/// Search box.
	pub search: RwSignal<String>,
	/// Name field of the add-hero form.
	pub new_hero_name: RwSignal<String>,
	/// Optional date field of the add-hero form.
	pub new_hero_date: RwSignal<String>,
	/// First hero of the add-connection form.
	pub connection_source: RwSignal<String>,
	/// Second hero of the add-connection form.
	pub connection_target: RwSignal<String>,
}

impl FormFields {
	fn new() -> Self {
		Self {
			search: RwSignal::new(String::new()),
			new_hero_name: RwSignal::new(String::new()),
			new_hero_date: RwSignal::new(String::new()),
			connection_source: RwSignal::new(String::new()),
			connection_target: RwSignal::new(String::new()),
		}
	}
}

/// Requests issued per region since the controller was created.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RequestCounts {
	/// `/api/stats` loads.
	pub stats: u64,
	/// Hero lookups.
	pub search: u64,
	/// `/api/graph` loads.
	pub graph: u64,
	/// Static image renders.
	pub image: u64,
}

/// Owns every view region and the requests that fill them.
///
/// Each region keeps its own [`RequestSequence`]; a completion that is not
/// the region's latest request is dropped instead of overwriting newer data.
#[derive(Clone, Copy)]
pub struct ViewController {
	client: StoredValue<ApiClient>,
	config: StoredValue<AppConfig>,
	/// Input fields of the search and mutation forms.
	pub forms: FormFields,
	/// The modal dialog host's state.
	pub dialogs: Dialogs,
	/// Stats region.
	pub stats: RwSignal<StatsView>,
	/// Search result region.
	pub search: RwSignal<SearchView>,
	/// Data behind the interactive layout; every change rebuilds it.
	pub graph: RwSignal<GraphData>,
	/// Progress of the latest graph fetch.
	pub graph_status: RwSignal<GraphStatus>,
	/// Which graph view is visible.
	pub graph_mode: RwSignal<GraphMode>,
	/// The static image view.
	pub image: RwSignal<ImageState>,
	toast: RwSignal<ToastSlot>,
	stats_seq: StoredValue<RequestSequence>,
	search_seq: StoredValue<RequestSequence>,
	graph_seq: StoredValue<RequestSequence>,
	image_seq: StoredValue<RequestSequence>,
}

fn issue(seq: StoredValue<RequestSequence>) -> Option<Ticket> {
	seq.try_update_value(|s| s.issue())
}

fn is_current(seq: StoredValue<RequestSequence>, ticket: Ticket, region: &str) -> bool {
	let current = seq.try_with_value(|s| s.is_current(ticket)).unwrap_or(false);
	if !current {
		warn!("dropping stale {region} response");
	}
	current
}

fn issued(seq: StoredValue<RequestSequence>) -> u64 {
	seq.try_with_value(RequestSequence::issued).unwrap_or(0)
}

impl ViewController {
	/// Controller with every region in its initial state. Requests nothing.
	pub fn new(config: AppConfig) -> Self {
		Self {
			client: StoredValue::new(ApiClient::new(config.clone())),
			config: StoredValue::new(config),
			forms: FormFields::new(),
			dialogs: Dialogs::new(),
			stats: RwSignal::new(StatsView::default()),
			search: RwSignal::new(SearchView::default()),
			graph: RwSignal::new(GraphData::default()),
			graph_status: RwSignal::new(GraphStatus::default()),
			graph_mode: RwSignal::new(GraphMode::default()),
			image: RwSignal::new(ImageState::default()),
			toast: RwSignal::new(ToastSlot::default()),
			stats_seq: StoredValue::new(RequestSequence::default()),
			search_seq: StoredValue::new(RequestSequence::default()),
			graph_seq: StoredValue::new(RequestSequence::default()),
			image_seq: StoredValue::new(RequestSequence::default()),
		}
	}

	/// Settings this controller was built with.
	pub fn config(&self) -> AppConfig {
		self.config.get_value()
	}

	fn client(&self) -> ApiClient {
		self.client.get_value()
	}

	/// How many requests each region has issued.
	pub fn requests_issued(&self) -> RequestCounts {
		RequestCounts {
			stats: issued(self.stats_seq),
			search: issued(self.search_seq),
			graph: issued(self.graph_seq),
			image: issued(self.image_seq),
		}
	}

	/// The visible toast, tracked.
	pub fn toast(&self) -> Option<Toast> {
		self.toast.with(|slot| slot.current().cloned())
	}

	/// Shows a toast, replacing any visible one and restarting the hide timer.
	pub fn notify(&self, message: impl Into<String>, kind: ToastKind) {
		let toast = Toast {
			message: message.into(),
			kind,
		};
		let Some(generation) = self.toast.try_update(|slot| slot.show(toast)) else {
			return;
		};
		let slot = self.toast;
		set_timeout(
			move || slot.update(|s| s.expire(generation)),
			self.config.with_value(|c| c.toast_duration),
		);
	}

	/// Reloads the stats region.
	pub fn load_stats(&self) {
		let Some(ticket) = issue(self.stats_seq) else {
			return;
		};
		let this = *self;
		spawn_local(async move {
			let result = this.client().stats().await;
			this.finish_stats(ticket, result);
		});
	}

	fn finish_stats(&self, ticket: Ticket, result: Result<Stats>) {
		if !is_current(self.stats_seq, ticket, "stats") {
			return;
		}
		match result {
			Ok(stats) => {
				info!("stats loaded: {} heroes", stats.total_heroes);
				self.stats.set(StatsView::Ready(StatsSummary::from(&stats)));
			}
			Err(e) => {
				error!("loading stats failed: {e}");
				let reason = e.to_string();
				self.stats.update(|view| *view = std::mem::take(view).after_failure(reason));
				self.notify(format!("Could not load stats: {e}"), ToastKind::Error);
			}
		}
	}

	/// Looks up `raw` after trimming; blank input only warns.
	pub fn search_hero(&self, raw: &str) {
		let name = match forms::search_query(raw) {
			Ok(name) => name,
			Err(e) => {
				warn!("search skipped: {e}");
				self.notify(e.to_string(), ToastKind::Warning);
				return;
			}
		};
		let Some(ticket) = issue(self.search_seq) else {
			return;
		};
		self.search.set(SearchView::Searching);
		let this = *self;
		spawn_local(async move {
			let result = this.client().hero(&name).await;
			this.finish_search(ticket, &name, result);
		});
	}

	fn finish_search(&self, ticket: Ticket, name: &str, result: Result<Option<Hero>>) {
		if !is_current(self.search_seq, ticket, "search") {
			return;
		}
		match result {
			Ok(hero) => {
				self.search.set(SearchView::from_response(hero.as_ref()));
				match hero {
					Some(hero) => self.notify(format!("Found {}!", hero.name), ToastKind::Success),
					None => self.notify("Hero not found", ToastKind::Error),
				}
			}
			Err(e) => {
				error!("searching {name} failed: {e}");
				self.search.set(SearchView::Failed(e.to_string()));
				self.notify(format!("Search failed: {e}"), ToastKind::Error);
			}
		}
	}

	/// Fetches the graph and swaps in a fresh interactive layout.
	pub fn render_graph(&self) {
		let Some(ticket) = issue(self.graph_seq) else {
			return;
		};
		self.graph_mode.set(GraphMode::Interactive);
		self.graph_status.set(GraphStatus::Loading);
		let this = *self;
		spawn_local(async move {
			let result = this.client().graph().await;
			this.finish_graph(ticket, result);
		});
	}

	fn finish_graph(&self, ticket: Ticket, result: Result<GraphData>) {
		if !is_current(self.graph_seq, ticket, "graph") {
			return;
		}
		match result {
			Ok(data) => {
				info!("graph loaded: {} nodes, {} links", data.nodes.len(), data.links.len());
				self.graph.set(data);
				self.graph_status.set(GraphStatus::Ready);
				self.notify("Interactive graph loaded!", ToastKind::Success);
			}
			Err(e) => {
				error!("loading graph failed: {e}");
				self.graph_status.set(GraphStatus::Failed(e.to_string()));
				self.notify(format!("Could not load graph: {e}"), ToastKind::Error);
			}
		}
	}

	/// Switches to the static view and asks the server for a fresh render.
	pub fn show_static_image(&self) {
		let Some(ticket) = issue(self.image_seq) else {
			return;
		};
		self.graph_mode.set(GraphMode::Static);
		self.replace_image(ImageState::Generating);
		let this = *self;
		spawn_local(async move {
			let result = this.client().network_image(ImageFormat::Png).await;
			if !is_current(this.image_seq, ticket, "image") {
				return;
			}
			let url = result.and_then(|bytes| browser::object_url(&bytes, ImageFormat::Png.mime()));
			this.finish_image(ticket, url);
		});
	}

	fn finish_image(&self, ticket: Ticket, url: Result<String>) {
		if !is_current(self.image_seq, ticket, "image") {
			if let Ok(url) = url {
				browser::revoke_object_url(&url);
			}
			return;
		}
		match url {
			Ok(url) => {
				debug!("network image ready at {url}");
				self.replace_image(ImageState::Decoding(url));
			}
			Err(e) => {
				error!("generating network image failed: {e}");
				self.replace_image(ImageState::Failed);
				self.notify(format!("Could not generate image: {e}"), ToastKind::Error);
			}
		}
	}

	/// Called when the image element finished loading its source.
	pub fn image_loaded(&self) {
		let mut shown = false;
		self.image.update(|state| {
			if let ImageState::Decoding(url) = state {
				let url = std::mem::take(url);
				*state = ImageState::Shown(url);
				shown = true;
			}
		});
		if shown {
			self.notify("Network image generated!", ToastKind::Success);
		}
	}

	fn replace_image(&self, next: ImageState) {
		let previous = self.image.try_update(|state| std::mem::replace(state, next));
		if let Some(url) = previous.as_ref().and_then(ImageState::src) {
			browser::revoke_object_url(url);
		}
	}

	/// Asks for a format, then saves the render under the configured file name.
	pub fn download_image(&self) {
		let this = *self;
		spawn_local(async move {
			let format = match this.dialogs.ask(forms::download_prompt()).await {
				DialogChoice::Confirmed => ImageFormat::Png,
				DialogChoice::Denied => ImageFormat::Svg,
				DialogChoice::Dismissed => return,
			};
			let file_name = this.config.with_value(|c| match format {
				ImageFormat::Png => c.png_file_name.clone(),
				ImageFormat::Svg => c.svg_file_name.clone(),
			});
			let saved = match this.client().network_image(format).await {
				Ok(bytes) => browser::download_bytes(&file_name, &bytes, format.mime()),
				Err(e) => Err(e),
			};
			match saved {
				Ok(()) => {
					info!("saved {file_name}");
					this.notify(format!("Image downloaded as {}!", format.name()), ToastKind::Success);
				}
				Err(e) => {
					error!("downloading {file_name} failed: {e}");
					this.notify(format!("Download failed: {e}"), ToastKind::Error);
				}
			}
		});
	}

	/// Validates, confirms, then posts a new hero.
	pub fn add_hero(&self, name: &str, date: &str) {
		let req = match forms::hero_input(name, date) {
			Ok(req) => req,
			Err(e) => {
				warn!("add hero skipped: {e}");
				self.notify(e.to_string(), ToastKind::Warning);
				return;
			}
		};
		let this = *self;
		spawn_local(async move {
			if this.dialogs.ask(forms::confirm_add_hero(&req)).await != DialogChoice::Confirmed {
				return;
			}
			match this.client().add_hero(&req).await {
				Ok(resp) => {
					let outcome = forms::hero_added(&req, &resp);
					if outcome.refresh {
						info!("added hero {}", req.name);
					}
					this.apply_mutation_outcome(
						outcome,
						[this.forms.new_hero_name, this.forms.new_hero_date],
					);
				}
				Err(e) => {
					error!("adding hero {} failed: {e}", req.name);
					this.notify(format!("Could not add hero: {e}"), ToastKind::Error);
				}
			}
		});
	}

	/// Validates, confirms, then posts a friendship between two heroes.
	pub fn add_connection(&self, source: &str, target: &str) {
		let req = match forms::connection_input(source, target) {
			Ok(req) => req,
			Err(e) => {
				warn!("add connection skipped: {e}");
				self.notify(e.to_string(), ToastKind::Warning);
				return;
			}
		};
		let this = *self;
		spawn_local(async move {
			if this.dialogs.ask(forms::confirm_add_connection(&req)).await != DialogChoice::Confirmed {
				return;
			}
			match this.client().add_connection(&req).await {
				Ok(resp) => {
					let outcome = forms::connection_added(&req, &resp);
					if outcome.refresh {
						info!("connected {} and {}", req.source, req.target);
					}
					this.apply_mutation_outcome(
						outcome,
						[this.forms.connection_source, this.forms.connection_target],
					);
				}
				Err(e) => {
					error!("connecting {} and {} failed: {e}", req.source, req.target);
					this.notify(format!("Could not add connection: {e}"), ToastKind::Error);
				}
			}
		});
	}

	/// Reports a mutation reply. A success clears `fields` and reloads stats
	/// and graph once each; a failure leaves the form and both regions alone.
	pub fn apply_mutation_outcome(&self, outcome: MutationOutcome, fields: [RwSignal<String>; 2]) {
		self.dialogs.alert(outcome.dialog);
		if outcome.refresh {
			for field in fields {
				field.set(String::new());
			}
			self.refresh();
		}
	}

	/// Reloads stats and graph once each.
	pub fn refresh(&self) {
		self.load_stats();
		self.render_graph();
		debug!("refresh issued, totals now {:?}", self.requests_issued());
	}
}

/// Creates the controller and provides it as context.
pub fn provide_view_controller(config: AppConfig) -> ViewController {
	let controller = ViewController::new(config);
	provide_context(controller);
	controller
}

/// The controller provided by [`provide_view_controller`].
pub fn use_view_controller() -> ViewController {
	expect_context::<ViewController>()
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::api::{GraphLink, GraphNode, NodeId};

	fn stats(total_heroes: u64) -> Stats {
		Stats {
			total_heroes,
			total_connections: 0,
			recent_heroes: vec![],
			top_connected: vec![],
		}
	}

	fn graph(names: &[&str]) -> GraphData {
		GraphData {
			nodes: names
				.iter()
				.enumerate()
				.map(|(i, name)| GraphNode {
					id: NodeId::Int(i as i64 + 1),
					name: (*name).into(),
					emoji: "🦸".into(),
					connections: None,
				})
				.collect(),
			links: vec![GraphLink {
				source: NodeId::Int(1),
				target: NodeId::Int(2),
			}],
		}
	}

	fn total_heroes(controller: &ViewController) -> Option<u64> {
		match controller.stats.get_untracked() {
			StatsView::Ready(summary) => Some(summary.total_heroes),
			_ => None,
		}
	}

	#[test]
	fn late_stats_reply_does_not_overwrite_newer_one() {
		Owner::new().with(|| {
			let controller = ViewController::new(AppConfig::default());
			let slow = issue(controller.stats_seq).unwrap();
			let fast = issue(controller.stats_seq).unwrap();

			controller.finish_stats(fast, Ok(stats(6)));
			controller.finish_stats(slow, Ok(stats(5)));

			assert_eq!(total_heroes(&controller), Some(6));
			assert_eq!(controller.requests_issued().stats, 2);
		});
	}

	#[test]
	fn current_stats_reply_is_applied() {
		Owner::new().with(|| {
			let controller = ViewController::new(AppConfig::default());
			let ticket = issue(controller.stats_seq).unwrap();
			controller.finish_stats(ticket, Ok(stats(5)));
			assert_eq!(total_heroes(&controller), Some(5));
		});
	}

	#[test]
	fn late_graph_reply_keeps_newer_request_pending() {
		Owner::new().with(|| {
			let controller = ViewController::new(AppConfig::default());
			let slow = issue(controller.graph_seq).unwrap();
			let _fast = issue(controller.graph_seq).unwrap();

			controller.finish_graph(slow, Ok(graph(&["Thor", "Hulk"])));

			assert!(controller.graph.get_untracked().nodes.is_empty());
			assert_eq!(controller.graph_status.get_untracked(), GraphStatus::Loading);
		});
	}

	#[test]
	fn late_search_reply_leaves_region_alone() {
		Owner::new().with(|| {
			let controller = ViewController::new(AppConfig::default());
			let slow = issue(controller.search_seq).unwrap();
			let _fast = issue(controller.search_seq).unwrap();
			controller.search.set(SearchView::Searching);

			controller.finish_search(slow, "Thor", Ok(None));

			assert_eq!(controller.search.get_untracked(), SearchView::Searching);
			assert!(controller.toast.get_untracked().current().is_none());
		});
	}

	#[test]
	fn late_image_reply_leaves_indicator_up() {
		Owner::new().with(|| {
			let controller = ViewController::new(AppConfig::default());
			let slow = issue(controller.image_seq).unwrap();
			let _fast = issue(controller.image_seq).unwrap();
			controller.image.set(ImageState::Generating);

			controller.finish_image(slow, Err(crate::error::Error::browser("blob")));

			assert_eq!(controller.image.get_untracked(), ImageState::Generating);
		});
	}

	#[test]
	fn counts_start_at_zero_per_region() {
		Owner::new().with(|| {
			let controller = ViewController::new(AppConfig::default());
			issue(controller.search_seq);
			assert_eq!(
				controller.requests_issued(),
				RequestCounts {
					search: 1,
					..RequestCounts::default()
				}
			);
		});
	}
}
