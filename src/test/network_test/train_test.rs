use super::*;

#[test]
fn test_output_error_gradient_values() {
    // output * (1 - output) * (target - output)
    assert_eq!(output_error_gradient(1.0, 0.5), 0.125);
    assert_eq!(output_error_gradient(0.5, 0.5), 0.0);
    assert_abs_diff_eq!(output_error_gradient(0.0, 0.8), -0.128, epsilon = 1e-12);
}

#[test]
fn test_single_training_step_hand_computed() {
    // On a zeroed 1-1-1 network every value below is a dyadic rational, so the
    // whole step is exact in binary floating point.
    let mut network = FeedForwardNetwork::new(1, 1, 1).unwrap();
    let prediction = network.train(array![1.0].view(), array![1.0].view(), 0.5, 0.0);

    // Zero weights predict sigmoid(0) = 0.5
    assert_eq!(prediction[0], 0.5);
    assert_eq!(network.hidden_activations()[0], 0.5);

    // Output gradient: 0.5 * 0.5 * (1 - 0.5) = 0.125
    // Weight delta:    0.5 * 0.5 * 0.125    = 0.03125
    // Bias delta:      0.5 * (-1) * 0.125   = -0.0625
    assert_abs_diff_eq!(network.hidden_weights()[[0, 0]], 0.03125, epsilon = 1e-15);
    assert_abs_diff_eq!(network.hidden_weights()[[1, 0]], -0.0625, epsilon = 1e-15);
    assert_abs_diff_eq!(network.delta_hidden_output()[[0, 0]], 0.03125, epsilon = 1e-15);
    assert_abs_diff_eq!(network.delta_hidden_output()[[1, 0]], -0.0625, epsilon = 1e-15);

    // The hidden gradient reads the hidden->output weights after the output
    // layer was corrected: 0.25 * (0.03125 * 0.125) = 0.0009765625, giving an
    // input-weight delta of 0.5 * 1.0 * 0.0009765625 = 0.00048828125.
    assert_abs_diff_eq!(network.input_weights()[[0, 0]], 0.00048828125, epsilon = 1e-15);
    assert_abs_diff_eq!(network.input_weights()[[1, 0]], -0.00048828125, epsilon = 1e-15);
    assert_abs_diff_eq!(network.delta_input_hidden()[[0, 0]], 0.00048828125, epsilon = 1e-15);
    assert_abs_diff_eq!(network.delta_input_hidden()[[1, 0]], -0.00048828125, epsilon = 1e-15);
}

#[test]
fn test_one_step_moves_prediction_toward_target() {
    // Zero-initialized 2-2-1 network: input [1, 0] must predict exactly 0.5;
    // a single step toward target 1.0 leaves nonzero output weights and a
    // strictly larger next prediction.
    let mut network = FeedForwardNetwork::new(2, 2, 1).unwrap();
    let input = array![1.0, 0.0];

    let before = network.feedforward(input.view());
    assert_eq!(before[0], 0.5);

    let training_prediction = network.train(input.view(), array![1.0].view(), 0.5, 0.0);
    assert_eq!(training_prediction[0], 0.5);

    assert!(network.hidden_weights().iter().any(|&w| w != 0.0));
    let after = network.feedforward(input.view());
    assert!(
        after[0] > 0.5,
        "prediction {} should exceed 0.5 after one step toward 1.0",
        after[0]
    );
}

#[test]
fn test_repeated_training_strictly_shrinks_error() {
    let mut network = FeedForwardNetwork::new(1, 1, 1).unwrap();
    network.randomize(42);

    let input = array![0.3];
    let target = array![0.8];

    let mut errors = Vec::new();
    for _ in 0..6 {
        let prediction = network.train(input.view(), target.view(), 0.5, 0.0);
        errors.push((prediction[0] - target[0]).abs());
    }
    for pair in errors.windows(2) {
        assert!(
            pair[1] < pair[0],
            "error should strictly decrease: {:?}",
            errors
        );
    }

    // And with enough steps the single example is fit closely
    for _ in 0..500 {
        network.train(input.view(), target.view(), 0.5, 0.0);
    }
    let final_prediction = network.feedforward(input.view());
    assert!(
        (final_prediction[0] - target[0]).abs() < 0.05,
        "prediction {} should settle near 0.8",
        final_prediction[0]
    );
}

#[test]
fn test_momentum_carries_the_previous_delta() {
    let mut network = FeedForwardNetwork::new(1, 1, 1).unwrap();
    let input = array![1.0];
    let target = array![1.0];

    network.train(input.view(), target.view(), 0.5, 0.9);
    let previous_delta = network.delta_hidden_output()[[0, 0]];

    let prediction = network.train(input.view(), target.view(), 0.5, 0.9);
    let activation = network.hidden_activations()[0];
    let gradient = output_error_gradient(target[0], prediction[0]);

    let expected = 0.5 * activation * gradient + 0.9 * previous_delta;
    assert_abs_diff_eq!(
        network.delta_hidden_output()[[0, 0]],
        expected,
        epsilon = 1e-12
    );
}

#[test]
fn test_zero_momentum_ignores_the_previous_delta() {
    // With momentum 0 the delta is exactly the fresh gradient contribution
    let mut network = FeedForwardNetwork::new(1, 1, 1).unwrap();
    let input = array![1.0];
    let target = array![1.0];

    network.train(input.view(), target.view(), 0.5, 0.0);
    let prediction = network.train(input.view(), target.view(), 0.5, 0.0);

    let activation = network.hidden_activations()[0];
    let gradient = output_error_gradient(target[0], prediction[0]);
    assert_abs_diff_eq!(
        network.delta_hidden_output()[[0, 0]],
        0.5 * activation * gradient,
        epsilon = 1e-12
    );
}

#[test]
fn test_training_is_deterministic() {
    let mut a = FeedForwardNetwork::new(2, 4, 2).unwrap();
    let mut b = FeedForwardNetwork::new(2, 4, 2).unwrap();
    a.randomize(7);
    b.randomize(7);

    let inputs = array![[0.0, 1.0], [1.0, 0.0], [0.5, -0.5]];
    let targets = array![[0.9, 0.1], [0.1, 0.9], [0.5, 0.5]];

    for _ in 0..20 {
        for (input, target) in inputs.rows().into_iter().zip(targets.rows()) {
            a.train(input, target, 0.5, 0.9);
            b.train(input, target, 0.5, 0.9);
        }
    }

    assert_eq!(a.input_weights(), b.input_weights());
    assert_eq!(a.hidden_weights(), b.hidden_weights());
    assert_eq!(a.delta_input_hidden(), b.delta_input_hidden());
    assert_eq!(a.delta_hidden_output(), b.delta_hidden_output());
    assert_eq!(a.hidden_activations(), b.hidden_activations());
}

#[test]
fn test_hidden_error_gradient_matches_weight_views() {
    let mut network = FeedForwardNetwork::new(2, 3, 2).unwrap();
    network.randomize(11);

    let input = array![0.6, -0.2];
    let target = array![0.9, 0.1];
    let output = network.feedforward(input.view());

    let hidden_weights = network.hidden_weights().to_owned();
    for h in 0..3 {
        let mut sum = 0.0;
        for i in 0..2 {
            sum += hidden_weights[[h, i]] * output_error_gradient(target[i], output[i]);
        }
        let activation = network.hidden_activations()[h];
        let expected = activation * (1.0 - activation) * sum;

        assert_abs_diff_eq!(
            network.hidden_error_gradient(h, target.view(), output.view()),
            expected,
            epsilon = 1e-12
        );
    }
}

#[test]
fn test_training_reduces_mean_squared_deviation_on_a_set() {
    let mut network = FeedForwardNetwork::new(2, 4, 1).unwrap();
    network.randomize(23);

    let inputs = array![[0.0, 0.0], [1.0, 0.0], [0.0, 1.0], [1.0, 1.0]];
    let targets = array![[0.1], [0.9], [0.9], [0.1]];

    let before = network.mean_squared_deviation(inputs.view(), targets.view());
    for _ in 0..2000 {
        for (input, target) in inputs.rows().into_iter().zip(targets.rows()) {
            network.train(input, target, 0.5, 0.9);
        }
    }
    let after = network.mean_squared_deviation(inputs.view(), targets.view());

    assert!(
        after < before,
        "mean squared deviation should drop, went from {} to {}",
        before,
        after
    );
}

#[test]
#[should_panic(expected = "does not match the network output size")]
fn test_train_panics_on_wrong_target_length() {
    let mut network = FeedForwardNetwork::new(2, 2, 2).unwrap();
    network.train(array![1.0, 0.0].view(), array![1.0].view(), 0.5, 0.0);
}
