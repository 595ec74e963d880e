// Square root by Newton's method, with an error for inputs outside the
// real domain of the function.
//
// want to find the solution to z^2 - x = f(z) --> 0
// f'(z) = 2*z
// Newton step is:  z - f(z) / f'(z)

use thiserror::Error;

/// Number of Newton steps taken by `compute_root`. There is no convergence
/// check: the result is whatever this many steps produce.
pub const ITERATION_COUNT: usize = 10;

/// Initial guess for every root computation.
pub const INITIAL_GUESS: f64 = 1.0;

/// Returned when asked for the square root of a negative number.
/// Carries the offending input.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
#[error("cannot compute square root of negative number: {0}")]
pub struct DomainError(pub f64);

impl DomainError {
    pub fn value(&self) -> f64 {
        self.0
    }
}

#[inline]
fn newton_step(z: f64, x: f64) -> f64 {
    z - (z * z - x) / (2.0 * z)
}

/// Infinite sequence of Newton iterates `z_1, z_2, ...` for the root of
/// `z^2 - x`, starting from `INITIAL_GUESS`. The starting guess itself is
/// not yielded.
#[derive(Debug, Clone)]
pub struct NewtonIterates {
    x: f64,
    z: f64,
}

impl NewtonIterates {
    pub fn new(x: f64) -> NewtonIterates {
        NewtonIterates {
            x,
            z: INITIAL_GUESS,
        }
    }

    /// Current value of the iteration variable.
    pub fn current(&self) -> f64 {
        self.z
    }
}

impl Iterator for NewtonIterates {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        self.z = newton_step(self.z, self.x);
        Some(self.z)
    }
}

/// Approximate square root of `x` after exactly `ITERATION_COUNT` Newton steps.
pub fn compute_root(x: f64) -> Result<f64, DomainError> {
    if x < 0.0 {
        return Err(DomainError(x));
    }
    let mut iterates = NewtonIterates::new(x);
    for (iteration, z) in iterates.by_ref().take(ITERATION_COUNT).enumerate() {
        tracing::trace!(iteration, z, "newton step");
    }
    Ok(iterates.current())
}
