//! Input validation, confirmation prompts and mutation outcomes.

use super::dialog::{DialogIcon, DialogSpec};
use crate::api::{AddConnectionRequest, AddHeroRequest, MutationResponse};
use crate::error::InputError;

const ADD_HERO_FALLBACK: &str = "There was an error adding the hero.";
const ADD_CONNECTION_FALLBACK: &str = "These heroes are already connected or not found.";

fn required(raw: &str) -> Option<String> {
	let trimmed = raw.trim();
	(!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Trimmed search text; blank input is rejected.
pub fn search_query(raw: &str) -> Result<String, InputError> {
	required(raw).ok_or(InputError::MissingHeroName)
}

/// An empty date lets the server stamp today.
pub fn hero_input(name: &str, date: &str) -> Result<AddHeroRequest, InputError> {
	let name = required(name).ok_or(InputError::MissingHeroName)?;
	Ok(AddHeroRequest {
		name,
		created_at: required(date),
	})
}

/// Both ends are required after trimming.
pub fn connection_input(source: &str, target: &str) -> Result<AddConnectionRequest, InputError> {
	match (required(source), required(target)) {
		(Some(source), Some(target)) => Ok(AddConnectionRequest { source, target }),
		_ => Err(InputError::MissingConnectionEnds),
	}
}

/// Question shown before a hero is posted.
pub fn confirm_add_hero(req: &AddHeroRequest) -> DialogSpec {
	DialogSpec::confirm(
		"Add New Superhero?",
		format!("You are about to add {} to the network.", req.name),
		"Yes, add it!",
	)
}

/// Question shown before a connection is posted.
pub fn confirm_add_connection(req: &AddConnectionRequest) -> DialogSpec {
	DialogSpec::confirm(
		"Add New Connection?",
		format!("You are about to connect {} and {}.", req.source, req.target),
		"Yes, connect them!",
	)
}

/// Format choice: confirm for PNG, deny for SVG.
pub fn download_prompt() -> DialogSpec {
	DialogSpec::confirm(
		"Download Network Image",
		"Choose the image format you want to download",
		"PNG",
	)
	.with_deny("SVG")
	.with_reverse_buttons(false)
}

/// What the page does once a mutation reply arrives.
#[derive(Clone, Debug, PartialEq)]
pub struct MutationOutcome {
	/// Notice reporting the reply.
	pub dialog: DialogSpec,
	/// Clear the form and reload stats and graph once each.
	pub refresh: bool,
}

/// Outcome of an add-hero reply.
pub fn hero_added(req: &AddHeroRequest, resp: &MutationResponse) -> MutationOutcome {
	if resp.success {
		let id = resp.id.as_ref().map(ToString::to_string).unwrap_or_default();
		MutationOutcome {
			dialog: DialogSpec::alert(
				"Added!",
				format!("Hero {} has been added with ID {}.", req.name, id),
				DialogIcon::Success,
			),
			refresh: true,
		}
	} else {
		MutationOutcome {
			dialog: DialogSpec::alert(
				"Error!",
				resp.reason().unwrap_or(ADD_HERO_FALLBACK),
				DialogIcon::Error,
			),
			refresh: false,
		}
	}
}

/// Outcome of an add-connection reply.
pub fn connection_added(req: &AddConnectionRequest, resp: &MutationResponse) -> MutationOutcome {
	if resp.success {
		MutationOutcome {
			dialog: DialogSpec::alert(
				"Connected!",
				format!("{} and {} are now friends.", req.source, req.target),
				DialogIcon::Success,
			),
			refresh: true,
		}
	} else {
		MutationOutcome {
			dialog: DialogSpec::alert(
				"Oops!",
				resp.reason().unwrap_or(ADD_CONNECTION_FALLBACK),
				DialogIcon::Info,
			),
			refresh: false,
		}
	}
}
