//! Session domain module.
//!
//! This module contains the session model, the gateway interface the store
//! refreshes from, and the store itself.
//!
//! # Module Structure
//!
//! - `model`: Core session value (`Session`, `SessionStatus`)
//! - `gateway`: Gateway trait for the external identity endpoint (`IdentityGateway`)
//! - `store`: Session lifecycle management (`SessionStore`)

mod gateway;
mod model;
mod store;

// Re-export public API
pub use gateway::IdentityGateway;
pub use model::{Session, SessionStatus};
pub use store::SessionStore;
