//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Password policy checking and hashing (Argon2id, salted, constant-time verify)
//! - Cookie management

pub mod cookie;
pub mod password;
