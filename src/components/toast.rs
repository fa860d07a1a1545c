use leptos::prelude::*;

use crate::state::use_view_controller;

#[component]
pub fn ToastBanner() -> impl IntoView {
	let controller = use_view_controller();
	let toast = Memo::new(move |_| controller.toast());

	view! {
		<div
			id="toast"
			role="alert"
			class=move || if toast.get().is_some() { "toast show" } else { "toast" }
			style:background-color=move || toast.get().map(|t| t.kind.color()).unwrap_or("")
		>
			{move || toast.get().map(|t| t.message)}
		</div>
	}
}
