//! Checkpoint Test Utils
//!
//! Provides shared testing utilities for the checkpoint bot. Tests describe the
//! roster and guild registry they need with a builder, and get back a temporary
//! directory holding the corresponding JSON files.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for the roster and guild files
//! - **TestContext**: Temporary directory plus the paths of the written files
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Builders for roster students and guild registry entries
//! - **serenity**: Serenity model objects deserialized from JSON
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory::{GuildFactory, StudentFactory}};
//!
//! #[tokio::test]
//! async fn verifies_student() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_student(StudentFactory::new().initials("J", "S").grade(9))
//!         .with_guild(GuildFactory::new().guild_id(1))
//!         .build()?;
//!
//!     let roster = RosterRepository::new(&test.roster_path).load().await?;
//!     // ...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod serenity;
