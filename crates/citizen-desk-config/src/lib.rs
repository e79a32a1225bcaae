// crates/citizen-desk-config/src/lib.rs
// ============================================================================
// Module: Citizen Desk Config Library
// Description: Canonical config model and validation.
// Purpose: Single source of truth for citizen-desk.toml semantics.
// Dependencies: citizen-desk-core, citizen-desk-i18n, serde, toml
// ============================================================================

//! ## Overview
//! `citizen-desk-config` defines the configuration model for the Citizen Desk
//! server and CLI. Loading is strict and fail-closed: oversized, non-UTF-8,
//! or inconsistent files are rejected before any component starts.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod config;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use config::*;
