use crate::glibc_random::{DEGREE, SEPARATION};
use crate::lcg::MODULUS;
use crate::modular::{self, ModularError};
use std::num::Wrapping;
use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PredictError {
    #[error("insufficient history: {available} observations, at least {required} required")]
    InsufficientHistory { required: usize, available: usize },
    #[error("recurrence parameters cannot be recovered: {0}")]
    NonInvertible(#[from] ModularError),
}

/// A candidate for the next output together with its estimated probability.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prediction {
    pub value: u32,
    pub probability: f64,
}

pub trait Predictor {
    /// Minimum number of observations `predict` needs.
    fn window(&self) -> usize;

    /// Predict the next output from the observations seen so far, oldest first.
    fn predict(&self, history: &[u32]) -> Result<Prediction, PredictError>;
}

fn require(history: &[u32], required: usize) -> Result<(), PredictError> {
    if history.len() < required {
        return Err(PredictError::InsufficientHistory {
            required,
            available: history.len(),
        });
    }
    Ok(())
}

/// Predicts glibc's additive feedback generator.
///
/// Each output is `(r(n-31) + r(n-3)) >> 1`, the observations are missing the
/// lowest bit of both words. The sum of the two observations is off by one only
/// when both missing bits are set, which happens a quarter of the time.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct AdditiveFeedbackPredictor;

impl AdditiveFeedbackPredictor {
    pub const PROBABILITY: f64 = 0.75;

    /// Both candidates, most likely first.
    pub fn candidates(&self, history: &[u32]) -> Result<[Prediction; 2], PredictError> {
        require(history, DEGREE)?;
        let n = history.len();
        let sum = Wrapping(history[n - DEGREE]) + Wrapping(history[n - SEPARATION]);
        let mask = MODULUS - 1;
        Ok([
            Prediction {
                value: sum.0 & mask,
                probability: Self::PROBABILITY,
            },
            Prediction {
                value: (sum + Wrapping(1)).0 & mask,
                probability: 1.0 - Self::PROBABILITY,
            },
        ])
    }
}

impl Predictor for AdditiveFeedbackPredictor {
    fn window(&self) -> usize {
        DEGREE
    }

    fn predict(&self, history: &[u32]) -> Result<Prediction, PredictError> {
        let [most_likely, _] = self.candidates(history)?;
        Ok(most_likely)
    }
}

/// Multiplier and increment of an LCG modulo 2^31.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LcgParameters {
    pub multiplier: u32,
    pub increment: u32,
}

impl LcgParameters {
    /// Apply the recurrence once.
    pub fn next(&self, value: u32) -> u32 {
        let m = MODULUS as u64;
        ((self.multiplier as u64 * value as u64 + self.increment as u64) % m) as u32
    }
}

/// Predicts an LCG modulo 2^31 with unknown multiplier and increment.
///
/// From three consecutive outputs r0, r1, r2:
///   a = (r1 - r2) / (r0 - r1)
///   c = (r0*r2 - r1*r1) / (r0 - r1)
/// The division needs r0 - r1 to be odd. For an LCG with odd a and c the parity
/// of consecutive outputs alternates, so that holds for any genuine stream.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LinearCongruentialPredictor;

impl LinearCongruentialPredictor {
    pub const WINDOW: usize = 3;

    /// Recover the recurrence from the three most recent observations.
    pub fn recover(&self, history: &[u32]) -> Result<LcgParameters, PredictError> {
        require(history, Self::WINDOW)?;
        let n = history.len();
        let m = MODULUS as u64;
        let [r0, r1, r2] =
            [history[n - 3], history[n - 2], history[n - 1]].map(|v| (v as u64 % m) as i64);

        let inverse = modular::mod_inverse(modular::normalize(r0 - r1, m), m)?;
        let a = modular::normalize(r1 - r2, m) * inverse % m;
        let c = modular::normalize(r0 * r2 - r1 * r1, m) * inverse % m;

        Ok(LcgParameters {
            multiplier: a as u32,
            increment: c as u32,
        })
    }
}

impl Predictor for LinearCongruentialPredictor {
    fn window(&self) -> usize {
        Self::WINDOW
    }

    fn predict(&self, history: &[u32]) -> Result<Prediction, PredictError> {
        let parameters = self.recover(history)?;
        let last = history[history.len() - 1] % MODULUS;
        Ok(Prediction {
            value: parameters.next(last),
            probability: 1.0,
        })
    }
}
