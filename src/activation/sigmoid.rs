/// Logistic activation, mapping the reals to the open interval (0, 1).
pub fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

/// Derivative of the sigmoid expressed through its own output.
///
/// Given `a = sigmoid(z)`, returns `dσ/dz = a * (1 - a)`. Backpropagation only
/// ever has the activation at hand, so the pre-activation is never needed.
pub fn sigmoid_derivative(activation: f64) -> f64 {
    activation * (1.0 - activation)
}
