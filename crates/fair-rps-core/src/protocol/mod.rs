//! Single-round protocol: commit, play, reveal, audit.

mod messages;
mod round;
mod types;

pub use messages::{CommitAnnouncement, RevealMessage};
pub use round::{audit, Round, RoundOutcome};
pub use types::RoundId;
