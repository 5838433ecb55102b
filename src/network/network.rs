use crate::{
    error::NetworkError,
    layers::{dense::Layer, unit::Unit},
    loss::euclidean::EuclideanLoss,
    network::{shape::NetworkShape, trace::ForwardTrace},
    optim::sgd::Sgd,
    train::{example::TrainingExample, loop_fn::train_loop, train_config::TrainConfig},
};
use rand::Rng;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_STAMP: AtomicU64 = AtomicU64::new(0);

/// Every freshly built or updated set of weights gets its own stamp.
fn next_stamp() -> u64 {
    NEXT_STAMP.fetch_add(1, Ordering::Relaxed)
}

/// A feed-forward chain of sigmoid layers trained by stochastic gradient descent.
#[derive(Debug, Clone)]
pub struct Network {
    layers: Vec<Layer>,
    optimizer: Sgd,
    error_values: Vec<f64>,
    stamp: u64,
}

impl Network {
    /// Builds a network of the given shape with randomly initialised weights.
    pub fn new(shape: &NetworkShape) -> Result<Network, NetworkError> {
        Network::with_rng(shape, &mut rand::thread_rng())
    }

    /// Builds a network drawing its initial weights from `rng`.
    pub fn with_rng<R: Rng + ?Sized>(
        shape: &NetworkShape,
        rng: &mut R,
    ) -> Result<Network, NetworkError> {
        Network::with_optimizer(shape, Sgd::default(), rng)
    }

    /// Builds a network with an explicit optimizer.
    ///
    /// With no hidden layers the network is a single layer from input to
    /// output; otherwise the layers chain input → hidden[0] → … → output.
    pub fn with_optimizer<R: Rng + ?Sized>(
        shape: &NetworkShape,
        optimizer: Sgd,
        rng: &mut R,
    ) -> Result<Network, NetworkError> {
        let sizes = shape.layer_sizes();
        if sizes.contains(&0) {
            return Err(NetworkError::InvalidShape);
        }

        let layers = sizes.windows(2)
            .map(|w| Layer::new(w[0], w[1], rng))
            .collect();

        Ok(Network::assemble(layers, optimizer))
    }

    /// Chains explicitly built layers; adjacent layers must agree on their arity.
    pub fn from_layers(layers: Vec<Layer>, optimizer: Sgd) -> Result<Network, NetworkError> {
        if layers.is_empty() || layers.windows(2).any(|w| w[1].input_size() != w[0].size()) {
            return Err(NetworkError::InvalidShape);
        }

        Ok(Network::assemble(layers, optimizer))
    }

    fn assemble(layers: Vec<Layer>, optimizer: Sgd) -> Network {
        Network {
            layers,
            optimizer,
            error_values: Vec::new(),
            stamp: next_stamp(),
        }
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn input_count(&self) -> usize {
        self.layers[0].input_size()
    }

    pub fn output_count(&self) -> usize {
        self.layers[self.layers.len() - 1].size()
    }

    pub fn learning_rate(&self) -> f64 {
        self.optimizer.learning_rate
    }

    pub fn shape(&self) -> NetworkShape {
        let hidden: Vec<usize> = self.layers[..self.layers.len() - 1]
            .iter()
            .map(Layer::size)
            .collect();
        NetworkShape::new(self.input_count(), &hidden, self.output_count())
    }

    /// Mean error after each completed epoch, oldest first.
    pub fn error_values(&self) -> &[f64] {
        &self.error_values
    }

    /// Forward pass recording every layer's input and activations for `backward`.
    pub fn trace(&self, input: &[f64]) -> Result<ForwardTrace, NetworkError> {
        NetworkError::check_len(self.input_count(), input.len())?;

        let mut trace = ForwardTrace::new(self.stamp);
        let mut current = input.to_vec();
        for layer in &self.layers {
            let activations = layer.propagate(&current)?;
            trace.push(current, activations.clone());
            current = activations;
        }

        Ok(trace)
    }

    /// Forward pass; returns the output layer's activations.
    pub fn forward(&self, input: &[f64]) -> Result<Vec<f64>, NetworkError> {
        Ok(self.trace(input)?.into_output())
    }

    /// Backpropagates `label` through the pass recorded in `trace`, updating
    /// weights from the output layer down to the first one.
    ///
    /// Each layer is updated before the deltas of the layer feeding it are
    /// computed, so those deltas see the weights as just updated.
    ///
    /// # Errors
    /// - `DimensionMismatch` if `label` is not as long as the output
    /// - `NoPriorForward` if `trace` was not produced by the current weights
    ///
    /// Both are checked before any weight changes.
    pub fn backward(&mut self, trace: &ForwardTrace, label: &[f64]) -> Result<(), NetworkError> {
        self.check_trace(trace, label)?;

        let steps = trace.layers();
        let mut deltas = output_deltas(trace.output(), label);
        for i in (0..self.layers.len()).rev() {
            self.optimizer.step(&mut self.layers[i], steps[i].input(), &deltas)?;
            if i > 0 {
                deltas = hidden_deltas(&self.layers[i], &deltas, steps[i - 1].activations());
            }
        }

        self.stamp = next_stamp();
        Ok(())
    }

    /// Gradient of ½‖output - label‖² with respect to every weight, indexed as
    /// `[layer][unit][input]`, computed without touching the weights.
    pub fn gradients(
        &self,
        trace: &ForwardTrace,
        label: &[f64],
    ) -> Result<Vec<Vec<Vec<f64>>>, NetworkError> {
        self.check_trace(trace, label)?;

        let steps = trace.layers();
        let mut gradients = vec![Vec::new(); self.layers.len()];
        let mut deltas = output_deltas(trace.output(), label);
        for i in (0..self.layers.len()).rev() {
            let input = steps[i].input();
            gradients[i] = deltas.iter()
                .map(|d| input.iter().map(|x| d * x).collect())
                .collect();
            if i > 0 {
                deltas = hidden_deltas(&self.layers[i], &deltas, steps[i - 1].activations());
            }
        }

        Ok(gradients)
    }

    /// One stochastic gradient descent step on a single example.
    pub fn train_example(&mut self, example: &TrainingExample) -> Result<(), NetworkError> {
        let trace = self.trace(&example.input)?;
        self.backward(&trace, &example.label)
    }

    /// Runs `iterations` epochs of stochastic gradient descent over `examples`,
    /// appending one entry to the error history per epoch.
    pub fn train(
        &mut self,
        examples: &[TrainingExample],
        iterations: usize,
    ) -> Result<(), NetworkError> {
        self.train_with(examples, &TrainConfig::new(iterations))?;
        Ok(())
    }

    /// Like [`Network::train`] but configurable; returns the last epoch's mean error.
    pub fn train_with(
        &mut self,
        examples: &[TrainingExample],
        config: &TrainConfig,
    ) -> Result<f64, NetworkError> {
        train_loop(self, examples, config)
    }

    /// Appends the mean Euclidean error over `dataset` to the error history.
    pub fn error(&mut self, dataset: &[TrainingExample]) -> Result<(), NetworkError> {
        let mean = self.mean_error(dataset)?;
        self.error_values.push(mean);
        Ok(())
    }

    /// Mean of `‖label - forward(input)‖` over `dataset`.
    pub fn mean_error(&self, dataset: &[TrainingExample]) -> Result<f64, NetworkError> {
        if dataset.is_empty() {
            return Err(NetworkError::EmptyDataset);
        }

        let mut total = 0.0;
        for example in dataset {
            self.check_example(example)?;
            let output = self.forward(&example.input)?;
            total += EuclideanLoss::loss(&output, &example.label);
        }

        Ok(total / dataset.len() as f64)
    }

    /// Fails unless `example` fits this network's input and output.
    pub fn check_example(&self, example: &TrainingExample) -> Result<(), NetworkError> {
        NetworkError::check_len(self.input_count(), example.input.len())?;
        NetworkError::check_len(self.output_count(), example.label.len())
    }

    fn check_trace(&self, trace: &ForwardTrace, label: &[f64]) -> Result<(), NetworkError> {
        NetworkError::check_len(self.output_count(), label.len())?;
        if trace.stamp() != self.stamp || trace.layers().len() != self.layers.len() {
            return Err(NetworkError::NoPriorForward);
        }

        Ok(())
    }
}

/// δ_i = (output_i - label_i) * σ'(output_i)
fn output_deltas(output: &[f64], label: &[f64]) -> Vec<f64> {
    EuclideanLoss::derivative(output, label)
        .into_iter()
        .zip(output)
        .map(|(e, &a)| e * Unit::derivative(a))
        .collect()
}

/// δ_j = σ'(a_j) * Σ_k w[k][j] * δ_k, summed over the layer downstream.
fn hidden_deltas(downstream: &Layer, deltas: &[f64], activations: &[f64]) -> Vec<f64> {
    downstream.backpropagate(deltas)
        .into_iter()
        .zip(activations)
        .map(|(e, &a)| e * Unit::derivative(a))
        .collect()
}
