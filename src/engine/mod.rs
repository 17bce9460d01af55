//! Layer 3: Engine
//!
//! # Purpose
//!
//! Validation of hyperparameters and the element-wise application of the
//! attenuation formulas to a decomposition.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Terms
//!   ↓
//! Layer 3: Engine ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Fail-fast input validation.
pub mod validator;

/// Order-preserving coefficient correction.
pub mod correction;
