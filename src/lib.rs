//! Standalone numerical-methods routines.
//!
//! Each module is independently usable:
//!
//! * `solver` — root finding on a bracketing interval: bisection and a
//!   hybrid secant-bisection method.
//! * `bracket` — interval type and sign-change scanning to locate brackets.
//! * `convergence` — shared termination criteria for the solvers.
//! * `histogram` — linear and logarithmic bin edges plus bin abscissas.
//! * `triangle` — triangular-matrix aggregation and vector shifting.
//! * `quadrature` — Gauss-Legendre integration, with nodes located through
//!   the root-finding solvers.
//!
//! The routines are synchronous and keep no state across calls; concurrent
//! use with independent arguments needs no coordination.
//!
//! # Examples
//!
//! ```
//! use mathstuff::convergence::Criteria;
//! use mathstuff::solver::hybrid_secant_bisection;
//!
//! let f = |x: f64| x * x * x - x - 2.0;
//! let root = hybrid_secant_bisection(&f, 1.0, 2.0, &Criteria::default()).expect("root");
//! assert!((root - 1.5213797).abs() < 1e-6);
//! ```

pub mod bracket;
pub mod convergence;
pub mod histogram;
pub mod quadrature;
pub mod solver;
pub mod triangle;
