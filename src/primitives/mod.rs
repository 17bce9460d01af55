//! Layer 1: Primitives
//!
//! # Purpose
//!
//! Fundamental types shared by every other layer: errors, coefficient
//! records, parameter bounds, and the float trait bound.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Terms
//!   ↓
//! Layer 3: Engine
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Error type for all fallible operations.
pub mod errors;

/// Real and complex coefficient records.
pub mod coefficients;

/// Per-parameter bounds.
pub mod bounds;

/// Float trait bound.
pub mod float;
