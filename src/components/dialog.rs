use leptos::prelude::*;

use crate::state::{DialogChoice, DialogSpec, use_view_controller};

/// Renders the controller's open dialog, if any.
#[component]
pub fn DialogHost() -> impl IntoView {
	let dialogs = use_view_controller().dialogs;
	let active = Memo::new(move |_| dialogs.active());

	move || {
		active.get().map(|spec| {
			view! {
				<div class="dialog-backdrop" on:click=move |_| dialogs.resolve(DialogChoice::Dismissed)>
					<div class="dialog" role="dialog" on:click=|ev| ev.stop_propagation()>
						<DialogBody spec=spec />
					</div>
				</div>
			}
		})
	}
}

#[component]
fn DialogBody(spec: DialogSpec) -> impl IntoView {
	let dialogs = use_view_controller().dialogs;

	let confirm = view! {
		<button class="btn-confirm" on:click=move |_| dialogs.resolve(DialogChoice::Confirmed)>
			{spec.confirm_label}
		</button>
	};
	let deny = spec.deny_label.map(|label| {
		view! {
			<button class="btn-deny" on:click=move |_| dialogs.resolve(DialogChoice::Denied)>
				{label}
			</button>
		}
	});
	let cancel = spec.cancel_label.map(|label| {
		view! {
			<button class="btn-cancel" on:click=move |_| dialogs.resolve(DialogChoice::Dismissed)>
				{label}
			</button>
		}
	});

	let actions = if spec.reverse_buttons {
		view! { {cancel} {deny} {confirm} }.into_any()
	} else {
		view! { {confirm} {deny} {cancel} }.into_any()
	};

	view! {
		<div class=spec.icon.class()>{spec.icon.glyph()}</div>
		<h2 class="dialog-title">{spec.title}</h2>
		<p class="dialog-text">{spec.text}</p>
		<div class="dialog-actions">{actions}</div>
	}
}
