//! # ABL Models
//!
//! Atmospheric boundary-layer models and diagnostics for
//! [Twine](https://github.com/isentropic-dev/twine).
//!
//! The crate supports comparing a reduced (RANS) boundary-layer model against
//! reference large-eddy simulations (LES) of conventionally neutral boundary
//! layers. Its central diagnostic is the boundary-layer height, estimated as
//! the height of maximum potential-temperature gradient.
//!
//! ## Crate layout
//!
//! - [`models`]: Domain-specific [`twine_core::Model`] implementations.
//! - [`study`]: Typed column records and the case-by-case comparison runner.
//! - [`support`]: Supporting utilities used by models.
//!
//! ## Utility code lifecycle
//!
//! Modules in [`support`] are part of the public API because they're useful,
//! but their APIs are not stable. Breaking changes may occur as needed.
//!
//! Utility code starts in a model's internal `core` module and moves to
//! [`support`] once it is useful across models or outside this crate.
//!
//! ## Logging
//!
//! Diagnostics are emitted through [`tracing`]. The crate never installs a
//! subscriber; applications decide where events go.

pub mod models;
pub mod study;
pub mod support;
