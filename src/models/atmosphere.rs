//! Atmospheric boundary-layer models.
//!
//! This module contains diagnostics computed from vertical profiles of the
//! atmospheric boundary layer.

pub mod boundary_layer;
