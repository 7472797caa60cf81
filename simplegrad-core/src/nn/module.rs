use crate::autograd::value::Value;
use crate::error::SimplegradError;

/// The base trait for every network component that owns parameters.
///
/// Lifetimes tie a module to the [`Graph`](crate::Graph) its parameters live
/// in; inputs passed to [`forward`](Module::forward) must come from the same
/// graph.
pub trait Module<'g> {
    type Output;

    /// Performs a forward pass, recording new nodes in the graph.
    ///
    /// # Errors
    /// Returns [`SimplegradError::ShapeMismatch`] when `inputs` has the wrong
    /// length.
    fn forward(&self, inputs: &[Value<'g>]) -> Result<Self::Output, SimplegradError>;

    /// All trainable parameters, in a deterministic order.
    fn parameters(&self) -> Vec<Value<'g>>;

    fn num_parameters(&self) -> usize {
        self.parameters().len()
    }

    /// Resets the gradient of every parameter to zero.
    fn zero_grad(&self) {
        for param in self.parameters() {
            param.zero_grad();
        }
    }
}
