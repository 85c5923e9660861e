//! # quarry-core
//!
//! Core types shared by every Quarry crate:
//! - Entity structs for organizations, groups, users, and data sources
//! - Group type enum
//! - Cross-cutting error types
//! - Password hashing helpers
//! - Comma-separated list parsing for command arguments

pub mod entities;
pub mod enums;
pub mod errors;
pub mod lists;
pub mod password;
