//! Shared utilities and common types for the Potia backend.
//!
//! This crate provides common functionality used across all other crates:
//! - Cryptographic utilities (hashing, session token generation)
//! - Password hashing with Argon2id
//! - HS256 access tokens
//! - Page-number pagination

pub mod crypto;
pub mod jwt;
pub mod pagination;
pub mod password;
