//! Predicting weak pseudo random number generators from their past outputs.
//!
//! Two generator families are covered: the additive feedback generator behind
//! glibc's `rand()` and a linear congruential generator modulo 2^31. Each has a
//! predictor that only looks at observed outputs, and [`harness`] measures how
//! often those predictions are right against a live stream.

pub mod dump;
pub mod generator;
pub mod glibc_random;
pub mod harness;
pub mod history;
pub mod lcg;
pub mod modifier;
pub mod modular;
pub mod predictor;

pub use generator::Generator;
pub use glibc_random::AdditiveFeedbackGenerator;
pub use harness::{evaluate, Evaluation, EvaluationConfig, EvaluationResult, Phase};
pub use history::ObservationHistory;
pub use lcg::LcgGenerator;
pub use modifier::{Identity, LowerBits, Modifier};
pub use modular::{extended_gcd, mod_inverse, ModularError};
pub use predictor::{
    AdditiveFeedbackPredictor, LcgParameters, LinearCongruentialPredictor, PredictError,
    Prediction, Predictor,
};
