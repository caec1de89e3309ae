//! API Routes
//!
//! Route handlers organized by functionality.

pub mod catalog;
pub mod health;
