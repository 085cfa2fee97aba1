//! Snaplink - a minimalist URL shortener with access analytics
//!
//! This library provides the core functionality for the Snaplink service:
//! short-link creation with optional custom slugs and TTLs, 307
//! redirection with per-entry analytics (access count, referrers, coarse
//! browser buckets), QR code payloads, and whole-file JSON persistence.
//!
//! # Architecture
//! - `registry`: in-memory URL table and its create/lookup/expiry semantics
//! - `storage`: single-document JSON persistence
//! - `services`: HTTP handlers (shorten, redirect, stats, health) and the
//!   QR encoder collaborator
//! - `runtime`: server wiring and the background expiry sweeper
//! - `config`: environment-driven configuration
//! - `system`: logging setup
//! - `errors`: crate-wide error taxonomy

pub mod config;
pub mod errors;
pub mod registry;
pub mod runtime;
pub mod services;
pub mod storage;
pub mod system;
pub mod utils;
