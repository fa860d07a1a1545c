use chrono::Local;
use leptos::prelude::*;

use crate::state::use_view_controller;

const CLOCK_FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";

fn now() -> String {
	Local::now().format(CLOCK_FORMAT).to_string()
}

/// Local time of the last refresh, updated on the configured interval.
#[component]
pub fn Clock() -> impl IntoView {
	let refresh = use_view_controller().config().clock_refresh;
	let (time, set_time) = signal(now());
	set_interval(move || set_time.set(now()), refresh);

	view! { <span id="update-time">{time}</span> }
}
