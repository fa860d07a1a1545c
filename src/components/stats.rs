use leptos::prelude::*;

use crate::state::use_view_controller;
use crate::state::view::{StatsSummary, StatsView};

#[component]
pub fn StatsPanel() -> impl IntoView {
	let stats = use_view_controller().stats;

	view! {
		<div id="stats-container">
			{move || match stats.get() {
				StatsView::Loading => view! { <div class="loading-spinner">"Loading stats..."</div> }.into_any(),
				StatsView::Ready(summary) => view! { <StatsSummaryView summary=summary /> }.into_any(),
				StatsView::Failed(reason) => view! { <div class="error">"Could not load stats: " {reason}</div> }.into_any(),
			}}
		</div>
	}
}

#[component]
fn StatsSummaryView(summary: StatsSummary) -> impl IntoView {
	view! {
		<div class="stat-item">
			<strong>"Total Superheroes: "</strong>
			<span class="stat-value">{summary.total_heroes}</span>
		</div>
		<div class="stat-item">
			<strong>"Total Connections: "</strong>
			<span class="stat-value">{summary.total_connections}</span>
		</div>
		<div class="stat-item">
			<strong>"Recently Added: "</strong>
			<span class="stat-value">{summary.recently_added}</span>
		</div>
		<div class="stat-item">
			<strong>"Top Connected:"</strong>
			<ul class="top-list">
				{summary
					.top_connected
					.into_iter()
					.map(|hero| {
						view! {
							<li>
								<span class="hero-name">{hero.label}</span>
								<span class="connection-count">{hero.connections}</span>
							</li>
						}
					})
					.collect_view()}
			</ul>
		</div>
	}
}
