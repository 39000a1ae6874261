//! Layer 3: Engine
//!
//! # Purpose
//!
//! This layer provides input and parameter validation shared by every
//! estimator entry point. It sits below the algorithms so that regridding
//! can gate its own inputs.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Algorithms
//!   ↓
//! Layer 3: Engine ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Input and parameter validation.
pub mod validator;
