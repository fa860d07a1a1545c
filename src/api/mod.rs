//! Json client for the hero network server.

mod client;
mod types;

pub use client::{ApiClient, ImageFormat};
pub use types::{
	AddConnectionRequest, AddHeroRequest, FriendRef, GraphData, GraphLink, GraphNode, Hero,
	MutationResponse, NodeId, Stats, TopHero,
};
