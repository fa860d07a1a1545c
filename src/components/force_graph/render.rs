use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::state::{
	ForceGraphState, intro_edge_opacity, intro_label_opacity,
};

const BACKGROUND: &str = "#fff";
const EDGE_WIDTH: f64 = 2.0;
const LABEL_LIFT: f64 = 10.0;

pub fn render(state: &ForceGraphState, ctx: &CanvasRenderingContext2d) {
	ctx.set_fill_style_str(BACKGROUND);
	ctx.fill_rect(0.0, 0.0, state.width, state.height);
	ctx.save();
	let _ = ctx.translate(state.transform.x, state.transform.y);
	let _ = ctx.scale(state.transform.k, state.transform.k);
	draw_edges(state, ctx);
	draw_nodes(state, ctx);
	draw_labels(state, ctx);
	ctx.restore();
}

fn draw_edges(state: &ForceGraphState, ctx: &CanvasRenderingContext2d) {
	ctx.set_stroke_style_str(&format!(
		"rgba(153, 153, 153, {})",
		intro_edge_opacity(state.elapsed)
	));
	ctx.set_line_width(EDGE_WIDTH);
	state.graph.visit_edges(|n1, n2, _| {
		ctx.begin_path();
		ctx.move_to(n1.x() as f64, n1.y() as f64);
		ctx.line_to(n2.x() as f64, n2.y() as f64);
		ctx.stroke();
	});
}

fn draw_nodes(state: &ForceGraphState, ctx: &CanvasRenderingContext2d) {
	state.graph.visit_nodes(|node| {
		let radius = state.node_radius(node.index());
		if radius <= 0.0 {
			return;
		}
		ctx.begin_path();
		let _ = ctx.arc(node.x() as f64, node.y() as f64, radius, 0.0, 2.0 * PI);
		ctx.set_fill_style_str(&node.data.user_data.color);
		ctx.fill();
	});
}

fn draw_labels(state: &ForceGraphState, ctx: &CanvasRenderingContext2d) {
	let alpha = intro_label_opacity(state.elapsed);
	if alpha <= 0.0 {
		return;
	}
	ctx.set_fill_style_str(&format!("rgba(51, 51, 51, {})", alpha));
	ctx.set_font("14px sans-serif");
	ctx.set_text_align("center");
	state.graph.visit_nodes(|node| {
		let _ = ctx.fill_text(
			&node.data.user_data.label,
			node.x() as f64,
			node.y() as f64 - LABEL_LIFT,
		);
	});
}
