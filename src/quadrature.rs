//! Gauss-Legendre quadrature.
//!
//! Integration nodes are the roots of the Legendre polynomial P_n, located
//! at runtime: a windowed scan over [-1, 1] brackets each root, then the
//! hybrid secant-bisection solver pins it down.  The root finder is treated
//! as an opaque oracle; any failure it reports is wrapped and surfaced.
//!
//! # Examples
//!
//! ```
//! use mathstuff::quadrature::integrate_legendre;
//!
//! let val = integrate_legendre(&|x: f64| x * x, 5, 0.0, 1.0).expect("integral");
//! assert!((val - 1.0 / 3.0).abs() < 1e-9);
//! ```

use thiserror::Error;

use crate::bracket::{Bounds, BracketGenerator};
use crate::convergence::Criteria;
use crate::solver::{hybrid_secant_bisection, RootError};

/// Quadrature failure conditions.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum QuadratureError {
    /// Order zero has no nodes to integrate with.
    #[error("quadrature order must be at least 1")]
    InvalidOrder,

    /// The root finder failed while locating a quadrature node.
    #[error("failed to locate quadrature node: {0}")]
    NodeSearch(#[from] RootError),
}

/// Evaluates the order-n Legendre polynomial at `x`.
///
/// Three-term recurrence: `(k+1) P_{k+1} = (2k+1) x P_k - k P_{k-1}`.
pub fn legendre(n: u32, x: f64) -> f64 {
    match n {
        0 => 1.0,
        1 => x,
        _ => {
            let mut p_prev = 1.0;
            let mut p = x;
            for k in 1..n {
                let kf = f64::from(k);
                let p_next = ((2.0 * kf + 1.0) * x * p - kf * p_prev) / (kf + 1.0);
                p_prev = p;
                p = p_next;
            }
            p
        }
    }
}

/// One bracket per root of P_n on [-1, 1].
///
/// P_n has exactly n simple roots there.  Scan with k*n equal windows,
/// refining k until every root lands in its own window.
fn node_brackets(n: u32) -> Vec<Bounds> {
    let poly = |x: f64| legendre(n, x);
    let mut k = 1u32;
    loop {
        let window_size = 2.0 / f64::from(k * n);
        let found: Vec<Bounds> =
            BracketGenerator::new(&poly, Bounds::new(-1.0, 1.0), window_size).collect();
        if found.len() == n as usize {
            return found;
        }
        k += 1;
    }
}

/// Roots of P_n on (-1, 1) in ascending order.
///
/// These are the Gauss-Legendre integration nodes for order n.
pub fn nodes(n: u32) -> Result<Vec<f64>, QuadratureError> {
    if n == 0 {
        return Err(QuadratureError::InvalidOrder);
    }

    let poly = |x: f64| legendre(n, x);
    let criteria = Criteria::default();
    node_brackets(n)
        .into_iter()
        .map(|w| hybrid_secant_bisection(&poly, w.a, w.b, &criteria).map_err(Into::into))
        .collect()
}

/// Integrates `f` over `[a, b]` with order-n Gauss-Legendre quadrature.
///
/// Exact (up to roundoff and node accuracy) for polynomials of degree
/// `2n - 1` or less.
pub fn integrate_legendre<F>(f: &F, n: u32, a: f64, b: f64) -> Result<f64, QuadratureError>
where
    F: Fn(f64) -> f64,
{
    let roots = nodes(n)?;

    let mut total = 0.0;
    for root in roots {
        let weight =
            2.0 * (1.0 - root * root) / (f64::from(n) * legendre(n - 1, root)).powi(2);
        // map the node from [-1, 1] onto [a, b]
        let x = 0.5 * ((b - a) * root + a + b);
        total += weight * f(x);
    }
    Ok(0.5 * (b - a) * total)
}
