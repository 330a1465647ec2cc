/// Defines a scalar equation problem to be solved.
///
/// An equation problem maps the solver variable to a model input, then
/// computes a residual from the model input and output. Solvers search for
/// the `x` that drives the residual to zero.
pub trait EquationProblem {
    type Input;
    type Output;
    type InputError: std::error::Error + Send + Sync + 'static;
    type ResidualError: std::error::Error + Send + Sync + 'static;

    /// Maps the solver variable `x` into a model input.
    ///
    /// # Errors
    ///
    /// Returns [`Self::InputError`] if the input cannot be constructed
    /// from `x`.
    fn input(&self, x: f64) -> Result<Self::Input, Self::InputError>;

    /// Computes the residual from model input/output.
    ///
    /// Solvers search for the input that drives this residual to zero.
    ///
    /// # Errors
    ///
    /// Returns [`Self::ResidualError`] if the residual cannot be computed.
    fn residual(
        &self,
        input: &Self::Input,
        output: &Self::Output,
    ) -> Result<f64, Self::ResidualError>;
}
