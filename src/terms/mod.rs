//! Layer 4: Terms
//!
//! # Purpose
//!
//! Kernel terms and the interfaces a GP solver or optimizer uses to consume
//! them.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Terms ← You are here
//!   ↓
//! Layer 3: Engine
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// `Term` and `Parameterized` traits.
pub mod term;

/// Base SHO decomposition.
pub mod sho;

/// Exposure-corrected SHO term.
pub mod attenuated;
