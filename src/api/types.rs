use std::fmt;

use serde::{Deserialize, Serialize};

/// Server-assigned node identifier. Integers in practice, strings tolerated.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NodeId {
	/// Database row id.
	Int(i64),
	/// Any non-numeric id.
	Text(String),
}

impl fmt::Display for NodeId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			NodeId::Int(id) => write!(f, "{id}"),
			NodeId::Text(id) => f.write_str(id),
		}
	}
}

/// `/api/stats` payload.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Stats {
	/// Heroes in the network.
	pub total_heroes: u64,
	/// Friendships in the network.
	pub total_connections: u64,
	/// Names of the latest additions, newest first.
	#[serde(default)]
	pub recent_heroes: Vec<String>,
	/// Best-connected heroes, most connections first.
	#[serde(default)]
	pub top_connected: Vec<TopHero>,
}

/// One entry of [`Stats::top_connected`].
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct TopHero {
	/// Display name, unique per hero.
	pub name: String,
	/// Emoji shown before the name.
	pub emoji: String,
	/// Number of friends.
	pub connections: u64,
}

/// `/api/hero/{name}` payload.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Hero {
	/// Row id, when the server sends it.
	#[serde(default)]
	pub id: Option<NodeId>,
	/// Display name, unique per hero.
	pub name: String,
	/// Emoji shown before the name.
	pub emoji: String,
	/// Creation date as the server formats it.
	#[serde(default)]
	pub created_at: Option<String>,
	/// Everyone linked to this hero.
	#[serde(default)]
	pub friends: Vec<FriendRef>,
}

/// A friend listed on a [`Hero`].
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct FriendRef {
	/// Row id, when the server sends it.
	#[serde(default)]
	pub id: Option<NodeId>,
	/// Display name, unique per hero.
	pub name: String,
	/// Emoji shown before the name.
	pub emoji: String,
}

/// A hero in the `/api/graph` payload.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct GraphNode {
	/// Identifier that links refer to.
	pub id: NodeId,
	/// Display name, unique per hero.
	pub name: String,
	/// Emoji shown before the name.
	pub emoji: String,
	/// Degree of the node; sizes it in the layout.
	#[serde(default)]
	pub connections: Option<u64>,
}

impl GraphNode {
	/// `"{emoji} {name}"`, drawn above the node.
	pub fn label(&self) -> String {
		format!("{} {}", self.emoji, self.name)
	}
}

/// An undirected friendship between two [`GraphNode`]s.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct GraphLink {
	/// One end of the friendship.
	pub source: NodeId,
	/// The other end.
	pub target: NodeId,
}

/// `/api/graph` payload.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct GraphData {
	/// Every hero, in server order.
	#[serde(default)]
	pub nodes: Vec<GraphNode>,
	/// Links naming an unknown node are ignored by the layout.
	#[serde(default)]
	pub links: Vec<GraphLink>,
}

/// Body of `POST /api/add_hero`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AddHeroRequest {
	/// Display name, unique per hero.
	pub name: String,
	/// `None` lets the server use today.
	pub created_at: Option<String>,
}

/// Body of `POST /api/add_connection`; both ends are hero names.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AddConnectionRequest {
	/// Name of the first hero.
	pub source: String,
	/// Name of the second hero.
	pub target: String,
}

/// Reply to either mutation. The server sends `{error}` alone on a 400.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct MutationResponse {
	/// Whether the change was stored.
	#[serde(default)]
	pub success: bool,
	/// Id of the created hero.
	#[serde(default)]
	pub id: Option<NodeId>,
	/// Explanation sent with a refusal.
	#[serde(default)]
	pub message: Option<String>,
	/// Error text sent on a 400.
	#[serde(default)]
	pub error: Option<String>,
}

impl MutationResponse {
	/// Server-supplied explanation, if any.
	pub fn reason(&self) -> Option<&str> {
		self.message
			.as_deref()
			.or(self.error.as_deref())
			.filter(|m| !m.trim().is_empty())
	}
}
