//! Root finding algorithms.
//!
//! Both solvers take a bracketing interval: endpoints where the function
//! has opposite sign, so the Intermediate Value Theorem guarantees a root in
//! between.  Use the `bracket` module to scan for one.
//!
//! Termination thresholds come from `convergence::Criteria`.  Caller misuse
//! (empty interval, no sign change) and budget exhaustion are reported as
//! `RootError` values rather than panics.
//!
//! # Examples
//! Using the bisection method:
//!
//! ```
//! use mathstuff::convergence::Criteria;
//! use mathstuff::solver::bisect;
//!
//! // root at sqrt(2)
//! let f = |x: f64| x * x - 2.0;
//!
//! let root = bisect(&f, 0.0, 2.0, &Criteria::default()).expect("root");
//! assert!((root - 1.41421356237).abs() < 1e-9);
//! ```
//!
//! Using the hybrid secant-bisection method:
//!
//! ```
//! use mathstuff::convergence::Criteria;
//! use mathstuff::solver::hybrid_secant_bisection;
//!
//! // root at pi/2
//! let f = |x: f64| x.cos();
//!
//! let root = hybrid_secant_bisection(&f, 0.0, 3.0, &Criteria::default()).expect("root");
//! assert!((root - std::f64::consts::FRAC_PI_2).abs() < 1e-9);
//! ```

use thiserror::Error;

use crate::bracket::{is_sign_change, Bounds};
use crate::convergence::Criteria;

/// Root finding error conditions.
///
/// The misuse variants surface immediately, before any iteration.  Budget
/// exhaustion carries the best estimate seen so callers can decide whether
/// an approximate answer is acceptable.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum RootError {
    /// The endpoints do not form an interval.
    #[error("invalid bracket: expected a < b, got a = {a}, b = {b}")]
    InvalidBracket { a: f64, b: f64 },

    /// The function has the same sign at both endpoints, so no root is
    /// guaranteed to lie between them.
    #[error("root not bracketed on [{a}, {b}]: f(a) = {f_a} and f(b) = {f_b} have the same sign")]
    NoSignChange { a: f64, b: f64, f_a: f64, f_b: f64 },

    /// Iteration budget exhausted before meeting either tolerance.
    #[error(
        "no convergence within {iterations} iterations: best x = {best} with residual {residual:e}"
    )]
    IterationLimit {
        best: f64,
        iterations: usize,
        residual: f64,
    },
}

/// Lowest-residual point evaluated so far.  Reported on budget exhaustion.
#[derive(Clone, Copy, Debug)]
struct Estimate {
    x: f64,
    residual: f64,
}

impl Estimate {
    fn new(x: f64, f_x: f64) -> Estimate {
        Estimate {
            x,
            residual: f_x.abs(),
        }
    }

    fn offer(&mut self, x: f64, f_x: f64) {
        if f_x.abs() < self.residual {
            self.x = x;
            self.residual = f_x.abs();
        }
    }
}

/// Validated starting state for a bracketing solver.
enum Checked {
    /// An endpoint already meets the residual tolerance.
    Root(f64),
    /// Proper bracket with opposite-sign endpoint values.
    Bracket { window: Bounds, f_a: f64, f_b: f64 },
}

/// Precondition checks shared by both solvers.
///
/// Requires `a < b`.  An endpoint whose residual already meets `f_tol`
/// (an exact root included) is accepted without iterating.  Otherwise the
/// endpoint values must straddle zero.
fn check_bracket<F>(f: &F, a: f64, b: f64, criteria: &Criteria) -> Result<Checked, RootError>
where
    F: Fn(f64) -> f64,
{
    if !(a < b) {
        return Err(RootError::InvalidBracket { a, b });
    }

    let f_a = f(a);
    if criteria.residual_converged(f_a) {
        return Ok(Checked::Root(a));
    }
    let f_b = f(b);
    if criteria.residual_converged(f_b) {
        return Ok(Checked::Root(b));
    }

    if !is_sign_change(f_a, f_b) {
        return Err(RootError::NoSignChange { a, b, f_a, f_b });
    }
    Ok(Checked::Bracket {
        window: Bounds::new(a, b),
        f_a,
        f_b,
    })
}

/// Root finding via the bisection method.
///
/// The bracket width halves every iteration, so convergence within
/// `ceil(log2((b - a) / x_tol))` iterations is guaranteed for any valid
/// bracket.  Convergence is linear but unconditional; no smoothness beyond
/// continuity is assumed.  Exactly one new function evaluation per
/// iteration.
pub fn bisect<F>(f: &F, a: f64, b: f64, criteria: &Criteria) -> Result<f64, RootError>
where
    F: Fn(f64) -> f64,
{
    let (mut window, mut f_a, f_b) = match check_bracket(f, a, b, criteria)? {
        Checked::Root(x) => return Ok(x),
        Checked::Bracket { window, f_a, f_b } => (window, f_a, f_b),
    };

    let mut best = Estimate::new(window.a, f_a);
    best.offer(window.b, f_b);

    for _ in 0..criteria.max_iter {
        if criteria.width_converged(window.size()) {
            return Ok(window.middle());
        }

        let mid = window.middle();
        let f_mid = f(mid);
        best.offer(mid, f_mid);

        if criteria.residual_converged(f_mid) {
            return Ok(mid);
        }

        // sign-change update keeps the root inside the window
        if is_sign_change(f_a, f_mid) {
            window.b = mid;
        } else {
            window.a = mid;
            f_a = f_mid;
        }
    }
    Err(RootError::IterationLimit {
        best: best.x,
        iterations: criteria.max_iter,
        residual: best.residual,
    })
}

/// Root finding via the hybrid secant-bisection method.
///
/// Each iteration proposes a secant step over the last two evaluated
/// points.  The step is taken only when it lands strictly inside the
/// current bracket; otherwise the iteration falls back to the bisection
/// midpoint.  A zero secant denominator also falls back, never faults.
///
/// Progress guard: when the bracket has not at least halved across the two
/// most recent iterations, the next step is forced to bisection.  Worst
/// case therefore degrades to bisection-like convergence, while smooth
/// functions with a simple root get superlinear secant steps.
///
/// Like `bisect`, exactly one new function evaluation per iteration.
pub fn hybrid_secant_bisection<F>(
    f: &F,
    a: f64,
    b: f64,
    criteria: &Criteria,
) -> Result<f64, RootError>
where
    F: Fn(f64) -> f64,
{
    let (mut window, mut f_a, f_b) = match check_bracket(f, a, b, criteria)? {
        Checked::Root(x) => return Ok(x),
        Checked::Bracket { window, f_a, f_b } => (window, f_a, f_b),
    };

    let mut best = Estimate::new(window.a, f_a);
    best.offer(window.b, f_b);

    // secant memory starts on the bracket endpoints
    let (mut x0, mut f0) = (window.a, f_a);
    let (mut x1, mut f1) = (window.b, f_b);

    // window sizes from the two previous iterations, for the progress guard
    let mut size_pre2 = window.size();
    let mut size_pre = window.size();
    let mut force_bisect = false;

    for _ in 0..criteria.max_iter {
        if criteria.width_converged(window.size()) {
            return Ok(window.middle());
        }

        let x2 = if force_bisect || f1 == f0 {
            window.middle()
        } else {
            let secant = x1 - f1 * (x1 - x0) / (f1 - f0);
            // strictly inside the open interval, else the step overshot
            // or stalled on an endpoint
            if window.a < secant && secant < window.b {
                secant
            } else {
                window.middle()
            }
        };
        force_bisect = false;

        let f2 = f(x2);
        best.offer(x2, f2);

        if criteria.residual_converged(f2) {
            return Ok(x2);
        }

        // slide secant memory
        x0 = x1;
        f0 = f1;
        x1 = x2;
        f1 = f2;

        // same sign-change update as bisection
        if is_sign_change(f_a, f2) {
            window.b = x2;
        } else {
            window.a = x2;
            f_a = f2;
        }

        // insufficient shrinkage over two iterations forces bisection next
        let size_cur = window.size();
        if size_cur > 0.5 * size_pre2 {
            force_bisect = true;
        }
        size_pre2 = size_pre;
        size_pre = size_cur;
    }
    Err(RootError::IterationLimit {
        best: best.x,
        iterations: criteria.max_iter,
        residual: best.residual,
    })
}
