/// Toast severity; picks the banner color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
	/// A request or action completed.
	Success,
	/// Input was rejected before any request.
	Warning,
	/// A request failed or found nothing.
	Error,
}

impl ToastKind {
	/// Banner background color.
	pub fn color(self) -> &'static str {
		match self {
			ToastKind::Success => "#4caf50",
			ToastKind::Warning => "#ff9800",
			ToastKind::Error => "#f44336",
		}
	}
}

/// One message shown in the banner.
#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
	/// Banner text.
	pub message: String,
	/// Severity of the message.
	pub kind: ToastKind,
}

/// The single toast banner. A newer toast replaces the visible one, and
/// only the hide timer of the newest toast may clear it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastSlot {
	current: Option<Toast>,
	generation: u64,
}

impl ToastSlot {
	/// Shows `toast` and returns the generation its hide timer must present.
	pub fn show(&mut self, toast: Toast) -> u64 {
		self.generation += 1;
		self.current = Some(toast);
		self.generation
	}

	/// Hides the toast if `generation` still names the visible one.
	pub fn expire(&mut self, generation: u64) {
		if generation == self.generation {
			self.current = None;
		}
	}

	/// The visible toast, if any.
	pub fn current(&self) -> Option<&Toast> {
		self.current.as_ref()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn toast(message: &str, kind: ToastKind) -> Toast {
		Toast {
			message: message.into(),
			kind,
		}
	}

	#[test]
	fn expiring_hides_the_toast() {
		let mut slot = ToastSlot::default();
		let generation = slot.show(toast("Found Thor!", ToastKind::Success));
		assert_eq!(slot.current().map(|t| t.message.as_str()), Some("Found Thor!"));

		slot.expire(generation);
		assert!(slot.current().is_none());
	}

	#[test]
	fn superseded_timer_leaves_newer_toast_visible() {
		let mut slot = ToastSlot::default();
		let old = slot.show(toast("Hero not found", ToastKind::Error));
		let new = slot.show(toast("Please enter a hero name", ToastKind::Warning));

		slot.expire(old);
		assert_eq!(slot.current().map(|t| t.kind), Some(ToastKind::Warning));

		slot.expire(new);
		assert!(slot.current().is_none());
	}

	#[test]
	fn kinds_map_to_banner_colors() {
		assert_eq!(ToastKind::Success.color(), "#4caf50");
		assert_eq!(ToastKind::Warning.color(), "#ff9800");
		assert_eq!(ToastKind::Error.color(), "#f44336");
	}
}
