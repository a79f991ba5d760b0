/// Applies the sigmoid (logistic) function to the input value.
///
/// The sigmoid function transforms any real-valued number into a value
/// between 0 and 1, computed as `1 / (1 + e^(-z))`.
///
/// # Parameters
///
/// * `z` - The input value
///
/// # Returns
///
/// - `f64` - The sigmoid of the input, in the range (0, 1)
///
/// # Examples
/// ```rust
/// use fnnet::math::sigmoid;
///
/// assert_eq!(sigmoid(0.0), 0.5);
/// assert!(sigmoid(4.0) > 0.9);
/// assert!(sigmoid(-4.0) < 0.1);
/// ```
#[inline]
pub fn sigmoid(z: f64) -> f64 {
    // Use numerically stable computation for extreme values
    const MAX_SIGMOID_INPUT: f64 = 500.0;
    const MIN_SIGMOID_INPUT: f64 = -500.0;

    if z > MAX_SIGMOID_INPUT {
        // For very large positive values, sigmoid(z) approaches 1
        return 1.0;
    } else if z < MIN_SIGMOID_INPUT {
        // For very large negative values, sigmoid(z) approaches 0
        return 0.0;
    }

    // Standard computation for normal range
    1.0 / (1.0 + (-z).exp())
}

/// Calculates the derivative of the sigmoid function from its output.
///
/// For `y = sigmoid(z)`, the derivative with respect to `z` is `y * (1 - y)`.
/// Taking the already-activated output instead of the raw input lets the
/// backpropagation pass reuse stored activations without recomputing the
/// exponential.
///
/// # Parameters
///
/// * `y` - The sigmoid output, expected in the range (0, 1)
///
/// # Returns
///
/// - `f64` - The derivative value, maximal (0.25) at `y = 0.5`
///
/// # Examples
/// ```rust
/// use fnnet::math::sigmoid_derivative;
///
/// assert_eq!(sigmoid_derivative(0.5), 0.25);
/// assert!(sigmoid_derivative(0.99) < 0.01);
/// ```
#[inline]
pub fn sigmoid_derivative(y: f64) -> f64 {
    y * (1.0 - y)
}
