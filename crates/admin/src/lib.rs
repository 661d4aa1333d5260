//! Tidepool Admin - internal content-management service.
//!
//! This crate serves the admin panel API on port 3001.
//!
//! # Architecture
//!
//! - Axum web framework with `PostgreSQL`-backed sessions
//! - External identity provider asserts who the caller is; the local
//!   `admin_user` table decides what they may do
//! - Content assistant backed by the Anthropic Messages API
//! - Role-gated JSON API consumed by the admin frontend
//!
//! Exposed as a library so the CLI can reuse the repositories and
//! configuration; the binary lives in `main.rs`.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod assistant;
pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
