use gloo_net::http::{Request, Response};
use log::debug;
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::types::{
	AddConnectionRequest, AddHeroRequest, GraphData, Hero, MutationResponse, Stats,
};
use crate::config::AppConfig;
use crate::error::{Error, Result};

/// Dashboard totals and rankings.
pub const STATS_PATH: &str = "/api/stats";
/// Hero lookup; the url-encoded name follows.
pub const HERO_PATH: &str = "/api/hero/";
/// Nodes and links for the interactive layout.
pub const GRAPH_PATH: &str = "/api/graph";
/// Creates a hero.
pub const ADD_HERO_PATH: &str = "/api/add_hero";
/// Links two heroes.
pub const ADD_CONNECTION_PATH: &str = "/api/add_connection";
/// Server-rendered PNG of the whole network.
pub const PNG_IMAGE_PATH: &str = "/network_image";
/// Server-rendered SVG of the whole network.
pub const SVG_IMAGE_PATH: &str = "/network_image/svg";

/// Server-rendered image formats.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImageFormat {
	/// Raster render, also shown inline.
	Png,
	/// Vector render, download only.
	Svg,
}

impl ImageFormat {
	/// Request path of this render.
	pub fn path(self) -> &'static str {
		match self {
			ImageFormat::Png => PNG_IMAGE_PATH,
			ImageFormat::Svg => SVG_IMAGE_PATH,
		}
	}

	/// Mime type of the returned bytes.
	pub fn mime(self) -> &'static str {
		match self {
			ImageFormat::Png => "image/png",
			ImageFormat::Svg => "image/svg+xml",
		}
	}

	/// Upper-case name used in toasts.
	pub fn name(self) -> &'static str {
		match self {
			ImageFormat::Png => "PNG",
			ImageFormat::Svg => "SVG",
		}
	}
}

/// Thin client over the visualizer's json api.
#[derive(Clone, Debug)]
pub struct ApiClient {
	config: AppConfig,
}

impl ApiClient {
	/// Client sending every request under `config.api_base`.
	pub fn new(config: AppConfig) -> Self {
		Self { config }
	}

	/// GET the dashboard stats.
	pub async fn stats(&self) -> Result<Stats> {
		self.get_json(STATS_PATH).await
	}

	/// `None` when no hero carries that exact name.
	pub async fn hero(&self, name: &str) -> Result<Option<Hero>> {
		self.get_json(&hero_path(name)).await
	}

	/// GET the whole graph.
	pub async fn graph(&self) -> Result<GraphData> {
		self.get_json(GRAPH_PATH).await
	}

	/// POST a new hero. Refusals come back as a failed [`MutationResponse`].
	pub async fn add_hero(&self, req: &AddHeroRequest) -> Result<MutationResponse> {
		self.post_json(ADD_HERO_PATH, req).await
	}

	/// POST a new friendship. Refusals come back as a failed [`MutationResponse`].
	pub async fn add_connection(&self, req: &AddConnectionRequest) -> Result<MutationResponse> {
		self.post_json(ADD_CONNECTION_PATH, req).await
	}

	/// GET the rendered network image as raw bytes.
	pub async fn network_image(&self, format: ImageFormat) -> Result<Vec<u8>> {
		let url = self.config.url(format.path());
		debug!("GET {url}");
		let resp = checked(Request::get(&url).send().await?, &url)?;
		Ok(resp.binary().await?)
	}

	async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
		let url = self.config.url(path);
		debug!("GET {url}");
		let resp = checked(Request::get(&url).send().await?, &url)?;
		decode(resp, &url).await
	}

	/// Mutation replies carry their outcome in the body, even on a 400.
	async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T>
	where
		B: Serialize,
		T: DeserializeOwned,
	{
		let url = self.config.url(path);
		debug!("POST {url}");
		let resp = Request::post(&url).json(body)?.send().await?;
		let status = resp.status();
		match decode(resp, &url).await {
			Err(Error::Decode { .. }) if !(200..300).contains(&status) => {
				Err(Error::Status { url, status })
			}
			other => other,
		}
	}
}

fn hero_path(name: &str) -> String {
	format!("{HERO_PATH}{}", String::from(js_sys::encode_uri_component(name)))
}

fn checked(resp: Response, url: &str) -> Result<Response> {
	if resp.ok() {
		Ok(resp)
	} else {
		Err(Error::Status {
			url: url.to_string(),
			status: resp.status(),
		})
	}
}

async fn decode<T: DeserializeOwned>(resp: Response, url: &str) -> Result<T> {
	resp.json::<T>().await.map_err(|err| match err {
		gloo_net::Error::SerdeError(e) => Error::Decode {
			url: url.to_string(),
			reason: e.to_string(),
		},
		other => Error::Transport(other),
	})
}
