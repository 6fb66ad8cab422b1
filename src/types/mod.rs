// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Strong types for type safety across aavescan.
//!
//! This module provides newtype wrappers for the subgraph's numeric encodings:
//! - Token amounts, decimals and their normalized forms
//! - Oracle prices and USD valuations
//! - Ray-scaled interest rates

pub mod rate;
pub mod tokens;

// Note: Public types are re-exported from lib.rs, not here
