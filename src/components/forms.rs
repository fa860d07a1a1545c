use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use crate::state::use_view_controller;

#[component]
fn TextField(
	id: &'static str,
	#[prop(default = "text")] kind: &'static str,
	#[prop(default = "")] placeholder: &'static str,
	value: RwSignal<String>,
) -> impl IntoView {
	view! {
		<input
			id=id
			type=kind
			placeholder=placeholder
			prop:value=move || value.get()
			on:input=move |ev| value.set(event_target_value(&ev))
		/>
	}
}

#[component]
pub fn AddHeroForm() -> impl IntoView {
	let controller = use_view_controller();
	let forms = controller.forms;

	let on_submit = move |ev: SubmitEvent| {
		ev.prevent_default();
		controller.add_hero(
			&forms.new_hero_name.get_untracked(),
			&forms.new_hero_date.get_untracked(),
		);
	};

	view! {
		<form class="add-hero-form" on:submit=on_submit>
			<TextField id="new-hero-name" placeholder="Hero name" value=forms.new_hero_name />
			<TextField id="new-hero-date" kind="date" value=forms.new_hero_date />
			<button type="submit">"Add Hero"</button>
		</form>
	}
}

#[component]
pub fn AddConnectionForm() -> impl IntoView {
	let controller = use_view_controller();
	let forms = controller.forms;

	let on_submit = move |ev: SubmitEvent| {
		ev.prevent_default();
		controller.add_connection(
			&forms.connection_source.get_untracked(),
			&forms.connection_target.get_untracked(),
		);
	};

	view! {
		<form class="add-connection-form" on:submit=on_submit>
			<TextField id="connection-source" placeholder="Source hero" value=forms.connection_source />
			<TextField id="connection-target" placeholder="Target hero" value=forms.connection_target />
			<button type="submit">"Connect"</button>
		</form>
	}
}
