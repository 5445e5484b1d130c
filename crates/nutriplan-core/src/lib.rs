// ABOUTME: Core types and constants for the pattern-based nutrition plan engine
// ABOUTME: Foundation crate with error handling, policy constants, and the plan data model
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Nutriplan Core
//!
//! Foundation crate providing shared types and constants for pattern-based
//! nutrition plan assembly. This crate is designed to change infrequently,
//! enabling incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and the
//!   structural `AssemblyError` raised by the engine
//! - **constants**: Tolerance policy, calendar labels, and energy factors
//! - **models**: Day patterns, assembled weeks, plans, and the upstream/downstream
//!   wire contracts

/// Unified error handling system with standard error codes
pub mod errors;

/// Policy constants organized by domain
pub mod constants;

/// Core data models (patterns, assembled plans, agent outputs)
pub mod models;
