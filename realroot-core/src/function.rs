/// A real-valued function of one real variable.
///
/// This is the evaluator contract shared by every search kernel: the kernels
/// only ever ask for `f(x)`, so anything that can be evaluated at a point can
/// be searched. Closures implement it automatically.
///
/// Evaluation is infallible. Non-finite results (NaN, infinities) propagate as
/// values and are interpreted by the caller.
pub trait Function {
    /// Evaluates the function at `x`.
    fn call(&self, x: f64) -> f64;
}

impl<F> Function for F
where
    F: Fn(f64) -> f64,
{
    fn call(&self, x: f64) -> f64 {
        self(x)
    }
}
