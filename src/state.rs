//! Shared state handed to the Discord event handler.
//!
//! Replaces process-wide roster and registry globals: startup builds one
//! `AppState` and every interaction borrows from it.

use std::sync::Arc;

use crate::{data::GuildRepository, model::RosterIndex};

/// Cheap-to-clone handle on the loaded roster and guild registry.
#[derive(Clone)]
pub struct AppState {
    /// Read-only after startup, shared without locking.
    pub roster: Arc<RosterIndex>,

    /// Guild registry, internally locked for `/initialize` writes.
    pub guilds: Arc<GuildRepository>,
}

impl AppState {
    pub fn new(roster: RosterIndex, guilds: GuildRepository) -> Self {
        Self {
            roster: Arc::new(roster),
            guilds: Arc::new(guilds),
        }
    }
}
