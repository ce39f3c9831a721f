//! Service layer for finboard
//!
//! Sits between the storage layer and the presentation layer: the unlock
//! state machine owns the loaded datasets and publishes them once readable.

pub mod unlock;

pub use unlock::{Dashboard, Phase};
