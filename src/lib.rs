//! Library exports for reusing sketchpad subsystems.
//!
//! Exposes the drawing session, history, and configuration data structures
//! alongside the supporting modules they rely on so that external front ends
//! (and the bundled replay binary) can share the same engine, validation
//! logic, and serialization code.

pub mod config;
pub mod draw;
pub mod export;
pub mod history;
pub mod input;
pub mod layout;
pub mod notification;
pub mod script;
pub mod session;
pub mod util;

pub use config::Config;
pub use session::Session;
