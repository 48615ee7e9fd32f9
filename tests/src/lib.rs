//! # Reward-Grid Test Suite
//!
//! Unified test crate containing:
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! ├── integration/      # Cross-subsystem flows (resolver → engine)
//! └── properties/       # Property suites for the distribution contract
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p rg-tests
//!
//! # By category
//! cargo test -p rg-tests integration::
//! cargo test -p rg-tests properties::
//! ```

#![allow(dead_code)]

pub mod fixtures;
pub mod properties;
