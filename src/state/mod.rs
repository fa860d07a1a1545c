//! Client-side view state and the controller that keeps it in sync with the server.

mod controller;
mod dialog;
pub mod forms;
mod sequence;
mod toast;
pub mod view;

pub use controller::{
	FormFields, RequestCounts, ViewController, provide_view_controller, use_view_controller,
};
pub use dialog::{DialogChoice, DialogIcon, DialogSpec, Dialogs};
pub use sequence::{RequestSequence, Ticket};
pub use toast::{Toast, ToastKind, ToastSlot};
