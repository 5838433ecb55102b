/// An input vector paired with the output the network should produce for it.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainingExample {
    pub input: Vec<f64>,
    pub label: Vec<f64>,
}

impl TrainingExample {
    pub fn new(input: Vec<f64>, label: Vec<f64>) -> TrainingExample {
        TrainingExample { input, label }
    }
}
