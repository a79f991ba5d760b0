/// Module that contains the packed region layout planner
pub mod layout;

/// Module that contains the feedforward network, its initializers and the forward engine
pub mod feed_forward;

/// Module that contains backpropagation training with momentum
pub mod train;

pub use feed_forward::*;
pub use layout::*;
pub use train::*;

/// Numeric element type used for every activation, delta and weight in the network
pub type Neuron = f64;

/// Activation of the bias unit wired to every hidden and output neuron.
///
/// The bias weight occupies the trailing row of each weight region and is
/// multiplied by this constant, letting the activation threshold be learned
/// like any other weight.
pub const BIAS_ACTIVATION: Neuron = -1.0;
