use std::collections::HashMap;
use std::f64::consts::PI;

use force_graph::{DefaultNodeIdx, EdgeData, ForceGraph, NodeData, SimulationParameters};

use crate::api::GraphData;

const COLORS: &[&str] = &[
	"#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2", "#7f7f7f",
	"#bcbd22", "#17becf",
];

pub const NODE_RADIUS: f64 = 8.0;
pub const HOVER_RADIUS: f64 = 15.0;
/// Extra radius per connection, capped so hubs stay under the hover size.
const DEGREE_RADIUS: f64 = 0.75;
const MAX_DEGREE_BONUS: u64 = 8;
pub const HIT_RADIUS: f64 = 12.0;
pub const EDGE_OPACITY: f64 = 0.6;

const INITIAL_RING: f64 = 100.0;
/// Pull toward the origin per second of simulated time, scaled by alpha.
const CENTER_STRENGTH: f64 = 0.1;

const ALPHA_MIN: f64 = 0.001;
const ALPHA_DECAY: f64 = 0.0228;
const DRAG_ALPHA_TARGET: f64 = 0.3;

const FADE_SECS: f64 = 1.0;
const LABEL_DELAY_SECS: f64 = 0.5;

fn ease_cubic_in_out(t: f64) -> f64 {
	let t = t.clamp(0.0, 1.0);
	if t < 0.5 {
		4.0 * t * t * t
	} else {
		1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
	}
}

fn progress(elapsed: f64, delay: f64) -> f64 {
	ease_cubic_in_out((elapsed - delay) / FADE_SECS)
}

/// Edge opacity during the intro.
pub fn intro_edge_opacity(elapsed: f64) -> f64 {
	EDGE_OPACITY * progress(elapsed, 0.0)
}

/// Fraction of its full radius a node has grown to during the intro.
pub fn intro_node_scale(elapsed: f64) -> f64 {
	progress(elapsed, 0.0)
}

/// Full radius of a node with `connections` links.
pub fn base_radius(connections: Option<u64>) -> f64 {
	NODE_RADIUS + connections.unwrap_or(0).min(MAX_DEGREE_BONUS) as f64 * DEGREE_RADIUS
}

/// Label opacity during the intro; labels start after the nodes.
pub fn intro_label_opacity(elapsed: f64) -> f64 {
	progress(elapsed, LABEL_DELAY_SECS)
}

#[derive(Clone, Debug, Default)]
pub struct NodeInfo {
	pub label: String,
	pub color: String,
	pub radius: f64,
}

#[derive(Clone, Debug, Default)]
pub struct ViewTransform {
	pub x: f64,
	pub y: f64,
	pub k: f64,
}

#[derive(Clone, Debug, Default)]
pub struct DragState {
	pub active: bool,
	pub node_idx: Option<DefaultNodeIdx>,
	pub start_x: f64,
	pub start_y: f64,
	pub node_start_x: f32,
	pub node_start_y: f32,
}

#[derive(Clone, Debug, Default)]
pub struct PanState {
	pub active: bool,
	pub start_x: f64,
	pub start_y: f64,
	pub transform_start_x: f64,
	pub transform_start_y: f64,
}

/// Simulation energy. Physics steps scale with `alpha`, which decays toward
/// `alpha_target` every tick and stops the simulation under [`ALPHA_MIN`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cooling {
	pub alpha: f64,
	pub alpha_target: f64,
}

impl Default for Cooling {
	fn default() -> Self {
		Self {
			alpha: 1.0,
			alpha_target: 0.0,
		}
	}
}

impl Cooling {
	pub fn is_running(&self) -> bool {
		self.alpha >= ALPHA_MIN
	}

	fn cool(&mut self) {
		self.alpha += (self.alpha_target - self.alpha) * ALPHA_DECAY;
	}

	fn reheat(&mut self, target: f64) {
		self.alpha_target = target;
		self.alpha = self.alpha.max(ALPHA_MIN);
	}
}

pub struct ForceGraphState {
	pub graph: ForceGraph<NodeInfo, ()>,
	pub transform: ViewTransform,
	pub drag: DragState,
	pub pan: PanState,
	pub hover: Option<DefaultNodeIdx>,
	pub cooling: Cooling,
	pub width: f64,
	pub height: f64,
	/// Seconds since the layout was built.
	pub elapsed: f64,
	zoom_range: (f64, f64),
}

impl ForceGraphState {
	pub fn new(data: &GraphData, width: f64, height: f64, zoom_range: (f64, f64)) -> Self {
		let mut graph = ForceGraph::new(SimulationParameters {
			force_charge: 500.0,
			force_spring: 0.05,
			force_max: 100.0,
			node_speed: 3000.0,
			damping_factor: 0.9,
		});
		let mut id_to_idx = HashMap::new();

		for (i, node) in data.nodes.iter().enumerate() {
			let angle = (i as f64) * 2.0 * PI / data.nodes.len() as f64;
			let idx = graph.add_node(NodeData {
				x: (INITIAL_RING * angle.cos()) as f32,
				y: (INITIAL_RING * angle.sin()) as f32,
				mass: 10.0,
				is_anchor: false,
				user_data: NodeInfo {
					label: node.label(),
					color: COLORS[i % COLORS.len()].into(),
					radius: base_radius(node.connections),
				},
			});
			id_to_idx.insert(node.id.clone(), idx);
		}

		for link in &data.links {
			if let (Some(&src), Some(&tgt)) =
				(id_to_idx.get(&link.source), id_to_idx.get(&link.target))
			{
				graph.add_edge(src, tgt, EdgeData::default());
			}
		}

		Self {
			graph,
			transform: ViewTransform {
				x: width / 2.0,
				y: height / 2.0,
				k: 1.0,
			},
			drag: DragState::default(),
			pan: PanState::default(),
			hover: None,
			cooling: Cooling::default(),
			width,
			height,
			elapsed: 0.0,
			zoom_range,
		}
	}

	pub fn screen_to_graph(&self, sx: f64, sy: f64) -> (f64, f64) {
		(
			(sx - self.transform.x) / self.transform.k,
			(sy - self.transform.y) / self.transform.k,
		)
	}

	pub fn node_at_position(&self, sx: f64, sy: f64) -> Option<DefaultNodeIdx> {
		let (gx, gy) = self.screen_to_graph(sx, sy);
		let mut found = None;
		self.graph.visit_nodes(|node| {
			let (dx, dy) = (node.x() as f64 - gx, node.y() as f64 - gy);
			// HIT_RADIUS is in world-space, scales with zoom like nodes
			if (dx * dx + dy * dy).sqrt() < HIT_RADIUS {
				found = Some(node.index());
			}
		});
		found
	}

	pub fn set_hover(&mut self, node: Option<DefaultNodeIdx>) {
		self.hover = node;
	}

	pub fn hovered_label(&self) -> Option<String> {
		let idx = self.hover?;
		let mut label = None;
		self.graph.visit_nodes(|node| {
			if node.index() == idx {
				label = Some(node.data.user_data.label.clone());
			}
		});
		label
	}

	pub fn node_radius(&self, idx: DefaultNodeIdx) -> f64 {
		if self.hover == Some(idx) {
			return HOVER_RADIUS;
		}
		let mut radius = NODE_RADIUS;
		self.graph.visit_nodes(|node| {
			if node.index() == idx {
				radius = node.data.user_data.radius;
			}
		});
		radius * intro_node_scale(self.elapsed)
	}

	fn set_anchor(&mut self, idx: DefaultNodeIdx, anchored: bool) {
		self.graph.visit_nodes_mut(|node| {
			if node.index() == idx {
				node.data.is_anchor = anchored;
			}
		});
	}

	/// Pins `idx` under the pointer and reheats the layout.
	pub fn begin_drag(&mut self, idx: DefaultNodeIdx, sx: f64, sy: f64) {
		self.drag.active = true;
		self.drag.node_idx = Some(idx);
		self.drag.start_x = sx;
		self.drag.start_y = sy;
		let (mut nx, mut ny) = (0.0, 0.0);
		self.graph.visit_nodes(|node| {
			if node.index() == idx {
				(nx, ny) = (node.x(), node.y());
			}
		});
		self.drag.node_start_x = nx;
		self.drag.node_start_y = ny;
		self.set_anchor(idx, true);
		self.cooling.reheat(DRAG_ALPHA_TARGET);
	}

	pub fn drag_to(&mut self, sx: f64, sy: f64) {
		let Some(idx) = self.drag.node_idx.filter(|_| self.drag.active) else {
			return;
		};
		let (dx, dy) = (
			(sx - self.drag.start_x) / self.transform.k,
			(sy - self.drag.start_y) / self.transform.k,
		);
		let (nx, ny) = (
			self.drag.node_start_x + dx as f32,
			self.drag.node_start_y + dy as f32,
		);
		self.graph.visit_nodes_mut(|node| {
			if node.index() == idx {
				node.data.x = nx;
				node.data.y = ny;
			}
		});
	}

	/// Releases the pinned node and lets the layout cool again.
	pub fn end_drag(&mut self) {
		if let Some(idx) = self.drag.node_idx.take() {
			self.set_anchor(idx, false);
			self.cooling.alpha_target = 0.0;
		}
		self.drag.active = false;
	}

	pub fn begin_pan(&mut self, sx: f64, sy: f64) {
		self.pan.active = true;
		self.pan.start_x = sx;
		self.pan.start_y = sy;
		self.pan.transform_start_x = self.transform.x;
		self.pan.transform_start_y = self.transform.y;
	}

	pub fn pan_to(&mut self, sx: f64, sy: f64) {
		if self.pan.active {
			self.transform.x = self.pan.transform_start_x + (sx - self.pan.start_x);
			self.transform.y = self.pan.transform_start_y + (sy - self.pan.start_y);
		}
	}

	pub fn end_pan(&mut self) {
		self.pan.active = false;
	}

	/// Zooms around the pointer, keeping the scale inside the zoom range.
	pub fn zoom_at(&mut self, sx: f64, sy: f64, delta_y: f64) {
		if delta_y == 0.0 {
			return;
		}
		let factor = if delta_y > 0.0 { 0.9 } else { 1.1 };
		let (min_k, max_k) = self.zoom_range;
		let new_k = (self.transform.k * factor).clamp(min_k, max_k);
		let ratio = new_k / self.transform.k;
		self.transform.x = sx - (sx - self.transform.x) * ratio;
		self.transform.y = sy - (sy - self.transform.y) * ratio;
		self.transform.k = new_k;
	}

	/// Re-centers the layout on the origin and pulls free nodes inward by
	/// `CENTER_STRENGTH * alpha * dt` of their offset.
	fn center(&mut self, dt: f64) {
		let (mut sx, mut sy, mut n) = (0.0f64, 0.0f64, 0usize);
		self.graph.visit_nodes(|node| {
			sx += node.x() as f64;
			sy += node.y() as f64;
			n += 1;
		});
		if n == 0 {
			return;
		}
		let (cx, cy) = (sx / n as f64, sy / n as f64);
		let keep = 1.0 - CENTER_STRENGTH * self.cooling.alpha * dt;
		self.graph.visit_nodes_mut(|node| {
			if node.data.is_anchor {
				return;
			}
			node.data.x = ((node.data.x as f64 - cx) * keep) as f32;
			node.data.y = ((node.data.y as f64 - cy) * keep) as f32;
		});
	}

	pub fn tick(&mut self, dt: f32) {
		self.elapsed += dt as f64;
		if !self.cooling.is_running() {
			return;
		}
		self.graph.update(dt * self.cooling.alpha as f32);
		self.center(dt as f64);
		self.cooling.cool();
	}

	pub fn resize(&mut self, width: f64, height: f64) {
		self.transform.x += (width - self.width) / 2.0;
		self.transform.y += (height - self.height) / 2.0;
		self.width = width;
		self.height = height;
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::api::{GraphLink, GraphNode, NodeId};

	const W: f64 = 800.0;
	const H: f64 = 600.0;

	fn node(id: i64, name: &str) -> GraphNode {
		GraphNode {
			id: NodeId::Int(id),
			name: name.into(),
			emoji: "🦸".into(),
			connections: None,
		}
	}

	fn link(source: i64, target: i64) -> GraphLink {
		GraphLink {
			source: NodeId::Int(source),
			target: NodeId::Int(target),
		}
	}

	fn triangle() -> GraphData {
		GraphData {
			nodes: vec![node(1, "Thor"), node(2, "Hulk"), node(3, "Ant-Man")],
			links: vec![link(1, 2), link(2, 3), link(3, 9)],
		}
	}

	fn count_edges(state: &ForceGraphState) -> usize {
		let mut n = 0;
		state.graph.visit_edges(|_, _, _| n += 1);
		n
	}

	#[test]
	fn links_to_unknown_nodes_are_dropped() {
		let state = ForceGraphState::new(&triangle(), W, H, (0.5, 5.0));
		assert_eq!(count_edges(&state), 2);
		assert!(state.cooling.is_running());
	}

	#[test]
	fn first_node_starts_right_of_center() {
		let state = ForceGraphState::new(&triangle(), W, H, (0.5, 5.0));
		let hit = state.node_at_position(W / 2.0 + INITIAL_RING, H / 2.0);
		assert!(hit.is_some());
		assert_eq!(state.node_at_position(W / 2.0, H / 2.0), None);
	}

	#[test]
	fn zoom_stays_inside_range() {
		let mut state = ForceGraphState::new(&triangle(), W, H, (0.5, 5.0));
		for _ in 0..100 {
			state.zoom_at(10.0, 10.0, -1.0);
		}
		assert_eq!(state.transform.k, 5.0);
		for _ in 0..200 {
			state.zoom_at(10.0, 10.0, 1.0);
		}
		assert_eq!(state.transform.k, 0.5);
	}

	#[test]
	fn drag_pins_node_until_release() {
		let mut state = ForceGraphState::new(&triangle(), W, H, (0.5, 5.0));
		let (sx, sy) = (W / 2.0 + INITIAL_RING, H / 2.0);
		let idx = state.node_at_position(sx, sy).unwrap();

		state.begin_drag(idx, sx, sy);
		assert_eq!(state.cooling.alpha_target, DRAG_ALPHA_TARGET);
		state.drag_to(sx + 40.0, sy - 20.0);
		for _ in 0..10 {
			state.tick(0.016);
		}
		let mut pinned = None;
		state.graph.visit_nodes(|n| {
			if n.index() == idx {
				pinned = Some((n.x(), n.y(), n.data.is_anchor));
			}
		});
		let (x, y, anchored) = pinned.unwrap();
		assert!(anchored);
		assert!((x as f64 - (INITIAL_RING + 40.0)).abs() < 1e-3);
		assert!((y as f64 + 20.0).abs() < 1e-3);

		state.end_drag();
		let mut released = None;
		state.graph.visit_nodes(|n| {
			if n.index() == idx {
				released = Some(n.data.is_anchor);
			}
		});
		assert_eq!(released, Some(false));
		assert_eq!(state.cooling.alpha_target, 0.0);
		assert!(!state.drag.active);
	}

	#[test]
	fn simulation_cools_to_a_stop_and_drag_restarts_it() {
		let mut state = ForceGraphState::new(&triangle(), W, H, (0.5, 5.0));
		for _ in 0..400 {
			state.tick(0.016);
		}
		assert!(!state.cooling.is_running());

		let (mut sx, mut sy) = (0.0, 0.0);
		state.graph.visit_nodes(|n| {
			if n.data.user_data.label.ends_with("Thor") {
				sx = n.x() as f64 * state.transform.k + state.transform.x;
				sy = n.y() as f64 * state.transform.k + state.transform.y;
			}
		});
		let idx = state.node_at_position(sx, sy).unwrap();
		state.begin_drag(idx, sx, sy);
		assert!(state.cooling.is_running());
		for _ in 0..50 {
			state.tick(0.016);
		}
		assert!(state.cooling.alpha > 0.1);
	}

	#[test]
	fn centering_keeps_layout_near_origin() {
		let mut state = ForceGraphState::new(&triangle(), W, H, (0.5, 5.0));
		for _ in 0..120 {
			state.tick(0.016);
		}
		let (mut sx, mut sy, mut n) = (0.0, 0.0, 0.0);
		state.graph.visit_nodes(|node| {
			sx += node.x() as f64;
			sy += node.y() as f64;
			n += 1.0;
		});
		assert!((sx / n).abs() < 1.0);
		assert!((sy / n).abs() < 1.0);
	}

	fn roster() -> GraphData {
		let names = [
			"Spider-Man",
			"Iron Man",
			"Thor",
			"Hulk",
			"Captain America",
			"Black Widow",
			"Doctor Strange",
			"Black Panther",
			"Scarlet Witch",
			"Ant-Man",
			"Wasp",
		];
		GraphData {
			nodes: names
				.iter()
				.enumerate()
				.map(|(i, name)| node(i as i64 + 1, name))
				.collect(),
			links: vec![
				link(1, 2),
				link(2, 3),
				link(3, 4),
				link(4, 5),
				link(5, 6),
				link(1, 7),
				link(8, 9),
				link(10, 11),
			],
		}
	}

	fn positions(state: &ForceGraphState) -> Vec<(f64, f64)> {
		let mut out = Vec::new();
		state
			.graph
			.visit_nodes(|n| out.push((n.x() as f64, n.y() as f64)));
		out
	}

	#[test]
	fn settled_layout_keeps_nodes_apart() {
		let mut state = ForceGraphState::new(&roster(), W, H, (0.5, 5.0));
		for _ in 0..400 {
			state.tick(0.016);
		}
		let points = positions(&state);
		let mut closest = f64::MAX;
		for (i, a) in points.iter().enumerate() {
			for b in &points[i + 1..] {
				closest = closest.min(((a.0 - b.0).powi(2) + (a.1 - b.1).powi(2)).sqrt());
			}
		}
		assert!(
			closest > 2.0 * NODE_RADIUS,
			"nodes overlap: closest pair {closest}"
		);
		let spread = points
			.iter()
			.map(|(x, y)| (x * x + y * y).sqrt())
			.fold(0.0, f64::max);
		assert!(spread > INITIAL_RING / 2.0, "layout collapsed: spread {spread}");
	}

	#[test]
	fn sideways_scroll_does_not_zoom() {
		let mut state = ForceGraphState::new(&triangle(), W, H, (0.5, 5.0));
		state.zoom_at(100.0, 100.0, 0.0);
		assert_eq!(state.transform.k, 1.0);
		assert_eq!(state.transform.x, W / 2.0);
	}

	#[test]
	fn well_connected_nodes_draw_larger() {
		assert_eq!(base_radius(None), NODE_RADIUS);
		assert_eq!(base_radius(Some(4)), NODE_RADIUS + 3.0);
		assert!(base_radius(Some(100)) < HOVER_RADIUS);

		let mut data = triangle();
		data.nodes[0].connections = Some(4);
		let mut state = ForceGraphState::new(&data, W, H, (0.5, 5.0));
		state.elapsed = 2.0;
		let idx = state
			.node_at_position(W / 2.0 + INITIAL_RING, H / 2.0)
			.unwrap();
		assert_eq!(state.node_radius(idx), NODE_RADIUS + 3.0);
	}

	#[test]
	fn hover_enlarges_only_the_hovered_node() {
		let mut state = ForceGraphState::new(&triangle(), W, H, (0.5, 5.0));
		state.elapsed = 2.0;
		let idx = state
			.node_at_position(W / 2.0 + INITIAL_RING, H / 2.0)
			.unwrap();
		state.set_hover(Some(idx));
		assert_eq!(state.node_radius(idx), HOVER_RADIUS);
		assert_eq!(state.hovered_label().as_deref(), Some("🦸 Thor"));

		state.set_hover(None);
		assert_eq!(state.node_radius(idx), NODE_RADIUS);
	}

	#[test]
	fn intro_is_staggered() {
		assert_eq!(intro_edge_opacity(0.0), 0.0);
		assert_eq!(intro_node_scale(0.0), 0.0);
		assert_eq!(intro_label_opacity(0.5), 0.0);
		assert!(intro_label_opacity(1.0) > 0.0);
		assert!(intro_label_opacity(1.0) < 1.0);
		assert_eq!(intro_edge_opacity(1.0), EDGE_OPACITY);
		assert_eq!(intro_node_scale(1.0), 1.0);
		assert_eq!(intro_label_opacity(1.5), 1.0);
	}

	#[test]
	fn resize_keeps_origin_centered() {
		let mut state = ForceGraphState::new(&triangle(), W, H, (0.5, 5.0));
		state.resize(1000.0, 700.0);
		assert_eq!(state.transform.x, 500.0);
		assert_eq!(state.transform.y, 350.0);
	}
}
