use leptos::prelude::*;

use super::force_graph::ForceGraphCanvas;
use crate::state::use_view_controller;
use crate::state::view::GraphStatus;

fn display(visible: bool) -> &'static str {
	if visible { "block" } else { "none" }
}

/// Graph area: the interactive canvas or the server-rendered image, never both.
#[component]
pub fn GraphPanel() -> impl IntoView {
	let controller = use_view_controller();
	let mode = controller.graph_mode;
	let image = controller.image;
	let zoom_range = controller.config().zoom_range;

	view! {
		<div class="graph-actions">
			<button on:click=move |_| controller.render_graph()>"Interactive Graph"</button>
			<button on:click=move |_| controller.show_static_image()>"Static Image"</button>
			<button on:click=move |_| controller.download_image()>"Download Image"</button>
		</div>
		<div class="graph-container">
			<div class="graph-view" style:display=move || display(mode.get().shows_canvas())>
				<ForceGraphCanvas data=controller.graph zoom_range=zoom_range />
				{move || match controller.graph_status.get() {
					GraphStatus::Loading => Some(view! {
						<div class="graph-placeholder">"Loading interactive graph..."</div>
					}.into_any()),
					GraphStatus::Failed(reason) => Some(view! {
						<div class="graph-placeholder">"Could not load graph: " {reason}</div>
					}.into_any()),
					GraphStatus::Ready => None,
				}}
			</div>
			<div class="static-view" style:display=move || display(mode.get().shows_image())>
				<img
					id="static-graph"
					alt="Superhero network"
					src=move || image.with(|i| i.src().map(str::to_string))
					on:load=move |_| controller.image_loaded()
				/>
				<Show when=move || image.with(|i| i.is_loading())>
					<div id="image-loading" class="loading-spinner">"Generating image..."</div>
				</Show>
				<Show when=move || image.with(|i| i.is_failed())>
					<div class="graph-placeholder">"Image could not be generated."</div>
				</Show>
			</div>
		</div>
	}
}
