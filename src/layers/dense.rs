use serde::{Serialize, Deserialize};

use crate::{math::matrix::Matrix, activation::activation::ActivationFunction};
use crate::network::{error::ModelError, model::ModelLayer};

/// Fully connected layer: `a = f(x W + b)`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dense {
    pub size: usize,
    /// Shape `(input_size, size)`.
    pub weights: Matrix,
    /// Shape `(1, size)`.
    pub biases: Matrix,
    pub activator: ActivationFunction,
}

impl Dense {
    /// Random weights (He for ReLU-like activations, Xavier otherwise) and zero biases.
    pub fn new(size: usize, input_size: usize, activation: ActivationFunction) -> Dense {
        let weights = if activation.prefers_he_init() {
            Matrix::he(input_size, size)
        } else {
            Matrix::xavier(input_size, size)
        };

        Dense {
            size,
            weights,
            biases: Matrix::zeros(1, size),
            activator: activation,
        }
    }

    pub fn input_size(&self) -> usize {
        self.weights.rows
    }

    /// Checks that stored weights and biases agree with each other and with
    /// `size`. Model files are not trusted to.
    pub fn validate(&self) -> Result<(), ModelError> {
        for m in [&self.weights, &self.biases] {
            if m.data.len() != m.rows * m.cols {
                return Err(ModelError::Shape { layer: 0, expected: m.rows * m.cols, got: m.data.len() });
            }
        }
        if self.weights.cols != self.size {
            return Err(ModelError::Shape { layer: 0, expected: self.size, got: self.weights.cols });
        }
        if self.biases.rows != 1 || self.biases.cols != self.size {
            return Err(ModelError::Shape { layer: 0, expected: self.size, got: self.biases.data.len() });
        }
        Ok(())
    }

    pub fn feed_from(&self, input: &Matrix) -> Result<Matrix, ModelError> {
        if input.rows != 1 || input.cols != self.input_size() {
            return Err(ModelError::Shape {
                layer: 0,
                expected: self.input_size(),
                got: input.data.len(),
            });
        }
        let mut a = &(input * &self.weights) + &self.biases;
        self.activator.apply_row(&mut a.data);
        Ok(a)
    }
}

/// A layer as stored in a model file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum NetworkLayer {
    /// Reshapes any input into a single row.
    Flatten,
    Dense(Dense),
}

impl ModelLayer for NetworkLayer {
    fn call(&self, input: &Matrix) -> Result<Matrix, ModelError> {
        match self {
            NetworkLayer::Flatten => Ok(input.flatten()),
            NetworkLayer::Dense(d) => d.feed_from(input),
        }
    }
}
