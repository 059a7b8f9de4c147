//! Flat-file repository layer.
//!
//! The roster and the guild registry are JSON documents on disk. Repositories
//! read them into domain models from `model/` and, for the guild registry,
//! write the whole document back on every change. Nothing outside this module
//! touches the on-disk record types.

pub mod guild;
pub mod json;
pub mod roster;

pub use guild::GuildRepository;
pub use roster::RosterRepository;

#[cfg(test)]
mod test;
