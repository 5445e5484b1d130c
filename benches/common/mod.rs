// ABOUTME: Common benchmark utilities and fixtures for plan assembly benchmarks
// ABOUTME: Provides deterministic pattern catalogs and assembler input generators
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Common benchmark utilities and fixtures.

pub mod fixtures;
