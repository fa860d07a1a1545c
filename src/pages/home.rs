use leptos::prelude::*;

use crate::components::clock::Clock;
use crate::components::dialog::DialogHost;
use crate::components::forms::{AddConnectionForm, AddHeroForm};
use crate::components::graph_panel::GraphPanel;
use crate::components::search::HeroSearch;
use crate::components::stats::StatsPanel;
use crate::components::toast::ToastBanner;
use crate::state::use_view_controller;

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
	let controller = use_view_controller();
	Effect::new(move |_| untrack(|| controller.refresh()));

	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>
			<header class="page-header">
				<h1>"Superhero Friendship Network"</h1>
				<p class="subtitle">"Last updated: " <Clock /></p>
			</header>

			<main class="dashboard">
				<section class="card">
					<h2>"Network Stats"</h2>
					<StatsPanel />
				</section>
				<section class="card">
					<h2>"Find a Hero"</h2>
					<HeroSearch />
				</section>
				<section class="card">
					<h2>"Add a Hero"</h2>
					<AddHeroForm />
				</section>
				<section class="card">
					<h2>"Connect Heroes"</h2>
					<AddConnectionForm />
				</section>
				<section class="card graph-card">
					<h2>"Network Graph"</h2>
					<p class="subtitle">"Drag nodes to reposition. Scroll to zoom. Drag background to pan."</p>
					<GraphPanel />
				</section>
			</main>

			<ToastBanner />
			<DialogHost />
		</ErrorBoundary>
	}
}
