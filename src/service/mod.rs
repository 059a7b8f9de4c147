//! Business logic between the Discord adapter and the repositories.
//!
//! Services decide what should happen to a member (which roles to add or
//! remove, which nickname to set, what to reply) but never call Discord
//! themselves. The `bot` module applies their decisions.

pub mod guild;
pub mod pronoun;
pub mod verification;

pub use guild::GuildService;
pub use pronoun::PronounService;
pub use verification::{VerificationOutcome, VerificationService};
