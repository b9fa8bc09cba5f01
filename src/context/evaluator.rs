//! Evaluators that derive context values before condition matching.

use super::Parameters;

/// Computes or augments parameter values before any condition is evaluated.
///
/// The evaluator runs once per query on a copy of the context's
/// parameters; the context itself is left untouched.
///
/// Closures of the right shape are evaluators:
///
/// ```rust
/// use statusflow::context::{ParameterEvaluator, Parameters};
///
/// let default_orgao = |params: &mut Parameters| {
///     if !params.contains("Orgao") {
///         params.insert("Orgao", ["1"]);
///     }
/// };
///
/// let mut params = Parameters::new();
/// default_orgao.evaluate(&mut params);
/// assert!(params.contains("Orgao"));
/// ```
pub trait ParameterEvaluator: Send + Sync {
    fn evaluate(&self, parameters: &mut Parameters);
}

impl<F> ParameterEvaluator for F
where
    F: Fn(&mut Parameters) + Send + Sync,
{
    fn evaluate(&self, parameters: &mut Parameters) {
        self(parameters)
    }
}
