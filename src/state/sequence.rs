/// Ticket handed out when a region issues a request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket(u64);

/// Orders the requests of one view region so only the latest one may write.
#[derive(Clone, Copy, Debug, Default)]
pub struct RequestSequence {
	issued: u64,
}

impl RequestSequence {
	/// Starts a new request, making every earlier ticket stale.
	pub fn issue(&mut self) -> Ticket {
		self.issued += 1;
		Ticket(self.issued)
	}

	/// Whether `ticket` belongs to the latest request.
	pub fn is_current(&self, ticket: Ticket) -> bool {
		ticket.0 == self.issued
	}

	/// Number of requests issued so far.
	pub fn issued(&self) -> u64 {
		self.issued
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn only_the_latest_ticket_is_current() {
		let mut seq = RequestSequence::default();
		let first = seq.issue();
		assert!(seq.is_current(first));

		let second = seq.issue();
		assert!(!seq.is_current(first));
		assert!(seq.is_current(second));
		assert_eq!(seq.issued(), 2);
	}

	#[test]
	fn late_completion_of_an_older_request_is_stale() {
		let mut seq = RequestSequence::default();
		let slow = seq.issue();
		let fast = seq.issue();
		// fast completes first and writes, slow arrives afterwards
		assert!(seq.is_current(fast));
		assert!(!seq.is_current(slow));
	}
}
