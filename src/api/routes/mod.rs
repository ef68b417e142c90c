//! API Routes
//!
//! Route handlers organized by functionality.

pub mod collections;
pub mod health;
