//! Termination criteria for the iterative solvers.

/// Stopping thresholds shared by both root finders.
///
/// Checked in a fixed order each iteration: function residual first, then
/// bracket width, then the iteration budget.
#[derive(Clone, Debug, PartialEq)]
pub struct Criteria {
    /// Absolute bracket-width convergence threshold.
    pub x_tol: f64,
    /// Absolute function-value convergence threshold.
    pub f_tol: f64,
    /// Hard iteration cap.
    pub max_iter: usize,
}

impl Criteria {
    /// New criteria set.  Panics on non-positive or non-finite tolerances
    /// and on a zero iteration budget; those are programmer errors.
    pub fn new(x_tol: f64, f_tol: f64, max_iter: usize) -> Criteria {
        assert!(x_tol > 0.0 && x_tol.is_finite());
        assert!(f_tol > 0.0 && f_tol.is_finite());
        assert!(max_iter > 0);
        Criteria {
            x_tol,
            f_tol,
            max_iter,
        }
    }

    /// Whether `f_x` is small enough to accept its abscissa as a root.
    pub fn residual_converged(&self, f_x: f64) -> bool {
        f_x.abs() <= self.f_tol
    }

    /// Whether a bracket of width `size` pins the root tightly enough.
    pub fn width_converged(&self, size: f64) -> bool {
        size <= self.x_tol
    }
}

impl Default for Criteria {
    fn default() -> Criteria {
        Criteria {
            x_tol: 1e-10,
            f_tol: 1e-10,
            max_iter: 100,
        }
    }
}
