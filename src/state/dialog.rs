use futures::channel::oneshot;
use leptos::prelude::*;

/// Icon shown above a dialog's title.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DialogIcon {
	/// Confirmation prompts.
	Question,
	/// Completed mutation.
	Success,
	/// Refused mutation.
	Error,
	/// Neutral notice.
	Info,
}

impl DialogIcon {
	/// Character drawn inside the icon circle.
	pub fn glyph(self) -> &'static str {
		match self {
			DialogIcon::Question => "?",
			DialogIcon::Success => "✓",
			DialogIcon::Error => "✕",
			DialogIcon::Info => "i",
		}
	}

	/// Css classes of the icon element.
	pub fn class(self) -> &'static str {
		match self {
			DialogIcon::Question => "dialog-icon question",
			DialogIcon::Success => "dialog-icon success",
			DialogIcon::Error => "dialog-icon error",
			DialogIcon::Info => "dialog-icon info",
		}
	}
}

/// Which button closed the dialog.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DialogChoice {
	/// The confirm button.
	Confirmed,
	/// The deny button.
	Denied,
	/// Cancelled, or replaced by a newer dialog.
	Dismissed,
}

/// Content and buttons of one dialog.
#[derive(Clone, Debug, PartialEq)]
pub struct DialogSpec {
	/// Heading line.
	pub title: String,
	/// Body text.
	pub text: String,
	/// Icon above the title.
	pub icon: DialogIcon,
	/// Label of the button answering [`DialogChoice::Confirmed`].
	pub confirm_label: String,
	/// Second answer button, answering [`DialogChoice::Denied`].
	pub deny_label: Option<String>,
	/// Cancel button, answering [`DialogChoice::Dismissed`].
	pub cancel_label: Option<String>,
	/// Cancel is laid out before confirm.
	pub reverse_buttons: bool,
}

impl DialogSpec {
	/// Single-button notice.
	pub fn alert(title: impl Into<String>, text: impl Into<String>, icon: DialogIcon) -> Self {
		Self {
			title: title.into(),
			text: text.into(),
			icon,
			confirm_label: "OK".into(),
			deny_label: None,
			cancel_label: None,
			reverse_buttons: false,
		}
	}

	/// Yes/cancel question.
	pub fn confirm(
		title: impl Into<String>,
		text: impl Into<String>,
		confirm_label: impl Into<String>,
	) -> Self {
		Self {
			title: title.into(),
			text: text.into(),
			icon: DialogIcon::Question,
			confirm_label: confirm_label.into(),
			deny_label: None,
			cancel_label: Some("Cancel".into()),
			reverse_buttons: true,
		}
	}

	/// Adds a deny button labelled `label`.
	pub fn with_deny(mut self, label: impl Into<String>) -> Self {
		self.deny_label = Some(label.into());
		self
	}

	/// Lays cancel out before confirm when `reverse` is set.
	pub fn with_reverse_buttons(mut self, reverse: bool) -> Self {
		self.reverse_buttons = reverse;
		self
	}
}

/// The page's one modal dialog. `ask` resolves when a button is pressed.
#[derive(Clone, Copy)]
pub struct Dialogs {
	active: RwSignal<Option<DialogSpec>>,
	pending: StoredValue<Option<oneshot::Sender<DialogChoice>>>,
}

impl Default for Dialogs {
	fn default() -> Self {
		Self::new()
	}
}

impl Dialogs {
	/// No dialog open.
	pub fn new() -> Self {
		Self {
			active: RwSignal::new(None),
			pending: StoredValue::new(None),
		}
	}

	/// The open dialog, tracked.
	pub fn active(&self) -> Option<DialogSpec> {
		self.active.get()
	}

	/// Shows `spec` at once, dismissing whatever dialog was still waiting.
	fn open(&self, spec: DialogSpec) -> oneshot::Receiver<DialogChoice> {
		let (tx, rx) = oneshot::channel();
		if let Some(previous) = self.pending.try_update_value(|p| p.replace(tx)).flatten() {
			let _ = previous.send(DialogChoice::Dismissed);
		}
		self.active.set(Some(spec));
		rx
	}

	/// Opens `spec` and waits for the button that closes it.
	pub async fn ask(&self, spec: DialogSpec) -> DialogChoice {
		self.open(spec).await.unwrap_or(DialogChoice::Dismissed)
	}

	/// Opens `spec` without waiting for an answer.
	pub fn alert(&self, spec: DialogSpec) {
		drop(self.open(spec));
	}

	/// Closes the open dialog, answering its waiter with `choice`.
	pub fn resolve(&self, choice: DialogChoice) {
		self.active.set(None);
		if let Some(tx) = self.pending.try_update_value(Option::take).flatten() {
			let _ = tx.send(choice);
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn confirm_offers_cancel_first() {
		let spec = DialogSpec::confirm("Add New Superhero?", "text", "Yes, add it!");
		assert_eq!(spec.icon, DialogIcon::Question);
		assert_eq!(spec.cancel_label.as_deref(), Some("Cancel"));
		assert!(spec.reverse_buttons);
		assert!(spec.deny_label.is_none());
	}

	#[test]
	fn alert_has_a_single_button() {
		let spec = DialogSpec::alert("Added!", "done", DialogIcon::Success);
		assert_eq!(spec.confirm_label, "OK");
		assert!(spec.cancel_label.is_none());
		assert!(spec.deny_label.is_none());
	}

	#[test]
	fn deny_button_is_opt_in() {
		let spec = DialogSpec::confirm("t", "x", "PNG").with_deny("SVG");
		assert_eq!(spec.deny_label.as_deref(), Some("SVG"));
	}

	#[test]
	fn alert_opens_before_returning() {
		Owner::new().with(|| {
			let dialogs = Dialogs::new();
			dialogs.alert(DialogSpec::alert("Oops!", "Already connected", DialogIcon::Info));
			assert_eq!(
				dialogs.active().map(|d| d.text).as_deref(),
				Some("Already connected")
			);

			dialogs.resolve(DialogChoice::Confirmed);
			assert!(dialogs.active().is_none());
		});
	}
}
