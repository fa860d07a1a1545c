pub mod clock;
pub mod dialog;
pub mod force_graph;
pub mod forms;
pub mod graph_panel;
pub mod search;
pub mod stats;
pub mod toast;
