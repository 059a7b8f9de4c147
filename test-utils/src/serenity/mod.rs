//! Test factories for creating Serenity API objects.
//!
//! These factories create valid Serenity structs by deserializing JSON,
//! simulating what Discord's API would put in an interaction payload.
//!
//! # Available Factories
//!
//! - `member::create_test_member` - Create Serenity Member objects

pub mod member;

pub use member::create_test_member;
