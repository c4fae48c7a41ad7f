//! Core domain logic for licmatch
//!
//! This module contains pure business logic with no I/O dependencies.
//! Pluggable behavior is abstracted through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (`LicenseNode`, `ComponentRevision`, match evidence)
//! - `expression/` - Parsing, normalization and the DNF algebra
//! - `services/` - License matcher, policies and harvest strategies
//! - `ports/` - Trait definitions for pluggable behavior

pub mod expression;
pub mod models;
pub mod ports;
pub mod services;
