//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides the pure mathematical functions behind the exposure
//! correction:
//! - Cardinal hyperbolic/trigonometric functions (`sinh(h)/h`, `sin(h)/h`)
//! - Real and complex attenuation factors
//!
//! These are reusable mathematical building blocks with no term-specific logic.
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
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Cardinal `sinh(h)/h` and `sin(h)/h`.
pub mod hyperbolic;

/// Boxcar attenuation factors.
pub mod attenuation;
