//! Runtime settings for the visualizer.

use std::time::Duration;

/// Build-time override for the api origin, e.g. `http://localhost:5000`.
const API_BASE_ENV: Option<&str> = option_env!("HERO_NETWORK_API_BASE");

/// Settings shared by the controller and the views.
#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
	/// Prefix for every request path. Empty means same origin.
	pub api_base: String,
	/// How often the header clock redraws.
	pub clock_refresh: Duration,
	/// How long a toast stays visible.
	pub toast_duration: Duration,
	/// Lower and upper bound of the graph zoom factor.
	pub zoom_range: (f64, f64),
	/// Download name of the PNG export.
	pub png_file_name: String,
	/// Download name of the SVG export.
	pub svg_file_name: String,
}

impl Default for AppConfig {
	fn default() -> Self {
		Self {
			api_base: String::new(),
			clock_refresh: Duration::from_secs(60),
			toast_duration: Duration::from_secs(3),
			zoom_range: (0.5, 5.0),
			png_file_name: "superhero_network.png".into(),
			svg_file_name: "superhero_network.svg".into(),
		}
	}
}

impl AppConfig {
	/// Defaults with the build-time api override applied.
	pub fn from_env() -> Self {
		Self::with_api_base(API_BASE_ENV)
	}

	fn with_api_base(base: Option<&str>) -> Self {
		let mut config = Self::default();
		if let Some(base) = base.map(str::trim).filter(|b| !b.is_empty()) {
			config.api_base = base.trim_end_matches('/').to_string();
		}
		config
	}

	/// Absolute or same-origin url for `path`.
	pub fn url(&self, path: &str) -> String {
		format!("{}{}", self.api_base, path)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn defaults_match_the_page_contract() {
		let config = AppConfig::default();
		assert_eq!(config.clock_refresh, Duration::from_secs(60));
		assert_eq!(config.toast_duration, Duration::from_secs(3));
		assert_eq!(config.zoom_range, (0.5, 5.0));
		assert_eq!(config.url("/api/stats"), "/api/stats");
	}

	#[test]
	fn api_base_override_drops_trailing_slash() {
		let config = AppConfig::with_api_base(Some("http://localhost:5000/"));
		assert_eq!(config.url("/api/graph"), "http://localhost:5000/api/graph");
	}

	#[test]
	fn blank_override_keeps_same_origin() {
		assert_eq!(AppConfig::with_api_base(Some("  ")).api_base, "");
		assert_eq!(AppConfig::with_api_base(None).api_base, "");
	}
}
