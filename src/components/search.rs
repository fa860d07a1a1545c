use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use crate::state::use_view_controller;
use crate::state::view::{EMPTY_PLACEHOLDER, FriendList, HeroDetails, SearchView};

#[component]
pub fn HeroSearch() -> impl IntoView {
	let controller = use_view_controller();
	let query = controller.forms.search;

	let on_submit = move |ev: SubmitEvent| {
		ev.prevent_default();
		controller.search_hero(&query.get_untracked());
	};

	view! {
		<form class="search-form" on:submit=on_submit>
			<input
				id="hero-search"
				type="text"
				placeholder="Hero name"
				prop:value=move || query.get()
				on:input=move |ev| query.set(event_target_value(&ev))
			/>
			<button type="submit">"Search"</button>
		</form>
		<div id="hero-info-container">
			{move || match controller.search.get() {
				SearchView::Idle => ().into_any(),
				SearchView::Searching => {
					view! { <div class="loading-spinner">"Searching..."</div> }.into_any()
				}
				SearchView::NotFound => {
					view! { <div class="no-result">"Hero not found"</div> }.into_any()
				}
				SearchView::Failed(reason) => {
					view! { <div class="no-result">"Search failed: " {reason}</div> }.into_any()
				}
				SearchView::Found(details) => view! { <HeroCard details=details /> }.into_any(),
			}}
		</div>
	}
}

#[component]
fn HeroCard(details: HeroDetails) -> impl IntoView {
	let friends = match details.friends {
		FriendList::Empty => view! { <span class="no-friends">{EMPTY_PLACEHOLDER}</span> }.into_any(),
		FriendList::Names(names) => view! {
			<ul class="friends-list">
				{names.into_iter().map(|name| view! { <li>{name}</li> }).collect_view()}
			</ul>
		}
		.into_any(),
	};

	view! {
		<div class="hero-details">
			<h3>{details.heading}</h3>
			<p>
				<strong>"Added on: "</strong>
				{details.added_on}
			</p>
			<div class="friends-section">
				<strong>"Friends: "</strong>
				{friends}
			</div>
		</div>
	}
}
