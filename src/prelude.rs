pub use crate::ModelError;
pub use crate::math::{sigmoid, sigmoid_derivative};
pub use crate::network::{
    BIAS_ACTIVATION, FeedForwardNetwork, Neuron, RegionLayout, output_error_gradient,
};
