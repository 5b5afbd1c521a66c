//! # u-grv
//!
//! Scalar Gaussian random variables with first-order uncertainty
//! propagation.
//!
//! A [`Grv`] carries an estimate as `(mean, variance)`. Arithmetic and
//! elementary functions return new estimates whose variance follows the
//! delta method, so every intermediate quantity in a sensor-fusion or
//! Kalman-style pipeline keeps a tracked confidence measure.
//!
//! ## Modules
//!
//! - [`grv`] — The [`Grv`] value type, its operators and distribution queries
//! - [`func`] — Elementary functions, `atan2`, and inverse-variance fusion
//! - [`special`] — Standard normal pdf, cdf and quantile
//! - [`num`] — Generic numeric helpers
//!
//! ## Example
//!
//! ```
//! use u_grv::{func, Grv};
//!
//! // Two noisy range readings of the same target.
//! let lidar = Grv::new(10.2, 0.04);
//! let radar = Grv::new(9.8, 0.16);
//! let range = func::fuse(lidar, radar);
//! assert!((range.mean - 10.12).abs() < 1e-4);
//! assert!(range.var < lidar.var);
//!
//! // Project onto the x axis through an uncertain bearing.
//! let bearing = Grv::new(0.3, 1e-4);
//! let x = range * func::cos(bearing);
//! assert!(x.var > 0.0);
//! ```
//!
//! ## Design Philosophy
//!
//! - **Independence assumed**: operands are treated as uncorrelated; there
//!   are no covariance terms
//! - **No guards**: domain violations and singular inputs propagate as IEEE
//!   NaN/±∞ rather than being clamped or reported
//! - **Named exponentiation**: [`Grv::powf`] and [`Grv::pow`] instead of an
//!   overloaded `^`
//! - **Property-based testing**: algebraic invariants verified via proptest

pub mod func;
pub mod grv;
pub mod num;
pub mod special;

pub use grv::{Grv, GrvError};
