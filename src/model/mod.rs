//! Domain models.
//!
//! These types are what the service layer works with. The data layer converts
//! the on-disk JSON records into them (`from_entry`) at the repository boundary
//! so that string snowflakes and one-character strings never leak past it.

pub mod claim;
pub mod guild;
pub mod pronoun;
pub mod roster;
pub mod student;

pub use claim::{IdentityClaim, VerificationRequest};
pub use guild::{GuildConfig, InitializeParam};
pub use pronoun::{PronounOption, PronounRole, RoleChanges};
pub use roster::RosterIndex;
pub use student::StudentRecord;
