//! Interval brackets and sign-change scanning.
//!
//! A bracket is an interval known to contain a root because the function
//! changes sign between its endpoints.  The solvers in the `solver` module
//! require one; `BracketGenerator` helps find them.

/// Bounds represents the closed interval [a,b].
#[derive(Clone, Debug, PartialEq)]
pub struct Bounds {
    pub a: f64,
    pub b: f64,
}

impl Bounds {
    /// New closed interval.  Panics if `a > b` or either endpoint is not
    /// finite; those are programmer errors, not data errors.
    pub fn new(a: f64, b: f64) -> Bounds {
        assert!(a <= b);
        assert!(a.is_finite() && b.is_finite());
        Bounds { a, b }
    }

    /// Interval midpoint.
    pub fn middle(&self) -> f64 {
        self.a + (self.b - self.a) / 2.0
    }

    /// Interval width.
    pub fn size(&self) -> f64 {
        self.b - self.a
    }

    /// Whether `x` lies inside the closed interval.
    pub fn contains(&self, x: f64) -> bool {
        self.a <= x && x <= self.b
    }
}

/// Whether signs of values differ, properly handling float underflow.
///
/// A naive `lhs * rhs < 0.0` test underflows to zero for small operands.
pub fn is_sign_change(lhs: f64, rhs: f64) -> bool {
    lhs.signum() != rhs.signum()
}

/// Scans interval [a,b] and emits the first window containing a sign change.
///
/// For a continuous function the Intermediate Value Theorem guarantees that
/// the window contains at least one root.  Without a continuity guarantee, it
/// might hold a singularity instead.
pub fn first_bracket<F>(f: &F, bounds: &Bounds, window_size: f64) -> Option<Bounds>
where
    F: Fn(f64) -> f64,
{
    assert!(window_size > 0.0);

    let mut win = Bounds {
        a: bounds.a,
        b: (bounds.a + window_size).min(bounds.b),
    };

    let mut f_a = f(win.a);
    while win.a < bounds.b {
        let f_b = f(win.b);

        // found root or singularity
        if is_sign_change(f_a, f_b) {
            return Some(win);
        }

        f_a = f_b;
        win.a = win.b;
        win.b = (win.b + window_size).min(bounds.b);
    }
    None
}

/// Iterator yielding every sign-change window in an interval.
///
/// The scan advances one fixed-size window at a time, so a window holding an
/// even number of roots is passed over silently.  Shrink `window_size` to
/// separate closely spaced roots.
///
/// # Examples
///
/// ```
/// use mathstuff::bracket::{Bounds, BracketGenerator};
///
/// // roots at 0, pi, 2pi
/// let f = |x: f64| x.sin();
/// let brackets: Vec<Bounds> =
///     BracketGenerator::new(&f, Bounds::new(-0.1, 6.3), 0.1).collect();
/// assert_eq!(brackets.len(), 3);
/// ```
#[derive(Debug)]
pub struct BracketGenerator<'a, F> {
    f: &'a F,
    remaining: Option<Bounds>,
    window_size: f64,
}

impl<'a, F> BracketGenerator<'a, F>
where
    F: Fn(f64) -> f64,
{
    pub fn new(f: &'a F, bounds: Bounds, window_size: f64) -> BracketGenerator<'a, F> {
        BracketGenerator {
            f,
            remaining: Some(bounds),
            window_size,
        }
    }
}

impl<F> Iterator for BracketGenerator<'_, F>
where
    F: Fn(f64) -> f64,
{
    type Item = Bounds;

    fn next(&mut self) -> Option<Bounds> {
        let bounds = self.remaining.take()?;
        let hit = first_bracket(self.f, &bounds, self.window_size);

        if let Some(ref win) = hit {
            if win.b < bounds.b {
                self.remaining = Some(Bounds::new(win.b, bounds.b));
            }
        }
        hit
    }
}
