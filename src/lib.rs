/// Error types that can occur during network operations
///
/// # Variants
///
/// - `InputValidationError` - indicates the input provided does not meet the expected format or validation rules
/// - `AllocationError` - indicates the allocator could not satisfy the request for the network's memory block
#[derive(Debug, Clone, PartialEq)]
pub enum ModelError {
    InputValidationError(String),
    AllocationError(String),
}

impl std::fmt::Display for ModelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ModelError::InputValidationError(msg) => write!(f, "Input validation error: {}", msg),
            ModelError::AllocationError(msg) => write!(f, "Allocation error: {}", msg),
        }
    }
}

/// Implements the standard error trait for ModelError
impl std::error::Error for ModelError {}

/// A macro that generates a getter method for any field.
///
/// This macro creates a public getter method that returns the value
/// of the specified field. The generated method includes appropriate documentation
/// describing the field being accessed.
///
/// # Parameters
///
/// - `$method_name` - The name of the getter method (e.g., get_num_input)
/// - `$field_name` - The name of the field to access (e.g., num_input)
/// - `$return_type` - The return type of the getter method
macro_rules! get_field {
    ($method_name:ident, $field_name:ident, $return_type:ty) => {
        #[doc = concat!("Gets the `", stringify!($field_name), "` field.\n\n")]
        #[doc = "# Returns\n\n"]
        #[doc = concat!("* `", stringify!($return_type), "` - The value of the `", stringify!($field_name), "` field")]
        pub fn $method_name(&self) -> $return_type {
            self.$field_name
        }
    };
}

/// Module `math` contains the scalar activation mathematics shared by the network engine.
///
/// # Core Functions
///
/// - `sigmoid` - The logistic activation function applied to every hidden and output neuron
/// - `sigmoid_derivative` - The sigmoid derivative expressed in terms of the activated output,
///   the form consumed by the backpropagation error gradients
///
/// # Example
/// ```rust
/// use fnnet::math::{sigmoid, sigmoid_derivative};
///
/// let y = sigmoid(0.0);
/// assert_eq!(y, 0.5);
/// assert_eq!(sigmoid_derivative(y), 0.25);
/// ```
pub mod math;

/// Module `network` provides the fixed-topology feedforward neural network engine.
///
/// The engine packs every weight and working buffer of a single-hidden-layer
/// network into one contiguous allocation, partitioned into five regions:
/// hidden activations, the two momentum delta regions, and the two weight
/// regions (each weight region carries a trailing bias row driven by a
/// constant activation of −1).
///
/// # Core Components
///
/// - **RegionLayout**: partitions the allocation and computes its exact byte size
/// - **FeedForwardNetwork**: the network itself - construction, zero/seeded
///   initialization, forward propagation, mean-squared-deviation evaluation,
///   and one-example-at-a-time backpropagation training with momentum
///
/// # Examples
/// ```rust
/// use fnnet::prelude::*;
/// use ndarray::array;
///
/// // A network with 2 inputs, 3 hidden neurons and 1 output
/// let mut network = FeedForwardNetwork::new(2, 3, 1).unwrap();
/// network.randomize(42);
///
/// let input = array![0.25, -0.5];
/// let target = array![0.75];
///
/// // Train on a single example until the prediction settles near the target
/// for _ in 0..1000 {
///     network.train(input.view(), target.view(), 0.5, 0.9);
/// }
///
/// let prediction = network.feedforward(input.view());
/// assert!((prediction[0] - 0.75).abs() < 0.05);
/// ```
pub mod network;

/// A convenience module that re-exports the most commonly used types and functions from this crate.
///
/// # Examples
/// ```rust
/// use fnnet::prelude::*;
///
/// let network = FeedForwardNetwork::new(4, 8, 2).unwrap();
/// assert_eq!(network.get_num_hidden(), 8);
/// ```
pub mod prelude;
