//! Pure stages over already-fetched data: evidence assembly, anti-cheat
//! rules and the weighted score.

pub mod anti_cheat;
pub mod evidence;
pub mod scoring;

pub use anti_cheat::detect;
pub use evidence::{build_evidence, EvidenceInput};
pub use scoring::score;
