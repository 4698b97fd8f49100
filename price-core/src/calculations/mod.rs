//! Price calculation modules.
//!
//! This module provides the fixed-weight estimator along with the rounding
//! and parsing helpers it shares with the form layer.

pub mod common;
pub mod estimator;

pub use estimator::{Estimator, EstimatorConfig, EstimatorError};
