//! Factories for roster students and guild registry entries.
//!
//! Each factory starts from unique defaults and produces the JSON value the
//! corresponding file record would hold.

pub mod guild;
pub mod helpers;
pub mod student;

pub use guild::GuildFactory;
pub use student::StudentFactory;
