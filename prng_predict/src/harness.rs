use crate::{Generator, Modifier, ObservationHistory, PredictError, Predictor};
use log::{debug, info, trace, warn};

/// Observations collected before the first prediction.
pub const INITIAL: usize = 31;

/// Predictions made by a default evaluation.
pub const TOTAL_TESTS: usize = 10000;

/// Upper bound on the history space reserved up front.
const MAX_RESERVED: usize = 1 << 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvaluationConfig {
    /// Observations recorded without predicting.
    pub warmup: usize,
    /// Number of predictions to score.
    pub total_tests: usize,
}

impl Default for EvaluationConfig {
    fn default() -> Self {
        Self {
            warmup: INITIAL,
            total_tests: TOTAL_TESTS,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Warmup,
    Evaluating,
    Done,
}

/// Tally of one evaluation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvaluationResult {
    pub name: String,
    /// Predictions attempted.
    pub guesses: u64,
    /// Predictions equal to the observed output.
    pub correct: u64,
    /// Attempts where the predictor could not produce a value, counted as wrong.
    pub failed: u64,
}

impl EvaluationResult {
    /// Fraction of correct guesses, 0 if nothing was attempted.
    pub fn success_rate(&self) -> f64 {
        if self.guesses == 0 {
            return 0.0;
        }
        self.correct as f64 / self.guesses as f64
    }
}

/// `<name>: <correct>/<guesses> (<percent>%)`, followed by `, <failed> failed`
/// when some predictions could not be made.
impl std::fmt::Display for EvaluationResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {}/{} ({:.2}%)",
            self.name,
            self.correct,
            self.guesses,
            self.success_rate() * 100.0
        )?;
        if self.failed > 0 {
            write!(f, ", {} failed", self.failed)?;
        }
        Ok(())
    }
}

/// Scores a predictor against a live generator stream seen through a modifier.
pub struct Evaluation<P, G, M> {
    name: String,
    predictor: P,
    generator: G,
    modifier: M,
    config: EvaluationConfig,
    history: ObservationHistory,
    phase: Phase,
    guesses: u64,
    correct: u64,
    failed: u64,
}

impl<P: Predictor, G: Generator, M: Modifier> Evaluation<P, G, M> {
    /// Set up a run; fails if the warmup cannot fill the predictor's window.
    pub fn new(
        name: impl Into<String>,
        predictor: P,
        generator: G,
        modifier: M,
        config: EvaluationConfig,
    ) -> Result<Self, PredictError> {
        if config.warmup < predictor.window() {
            return Err(PredictError::InsufficientHistory {
                required: predictor.window(),
                available: config.warmup,
            });
        }
        Ok(Self {
            name: name.into(),
            predictor,
            generator,
            modifier,
            config,
            history: ObservationHistory::with_capacity(
                config.warmup.saturating_add(config.total_tests).min(MAX_RESERVED),
            ),
            phase: Phase::Warmup,
            guesses: 0,
            correct: 0,
            failed: 0,
        })
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn history(&self) -> &ObservationHistory {
        &self.history
    }

    fn observe(&mut self) -> u32 {
        let raw = self.generator.next_raw();
        self.modifier.apply(raw)
    }

    /// Record the warmup observations and move on to evaluating.
    pub fn warmup(&mut self) {
        if self.phase != Phase::Warmup {
            return;
        }
        for _ in 0..self.config.warmup {
            let observed = self.observe();
            self.history.push(observed);
        }
        debug!("{}: warmed up with {} observations", self.name, self.history.len());
        self.phase = Phase::Evaluating;
    }

    /// Score a single prediction; returns false once the run is done.
    pub fn step(&mut self) -> Result<bool, PredictError> {
        match self.phase {
            Phase::Warmup => self.warmup(),
            Phase::Evaluating => {}
            Phase::Done => return Ok(false),
        }
        if self.guesses >= self.config.total_tests as u64 {
            self.finish();
            return Ok(false);
        }

        let observed = self.observe();
        self.guesses += 1;
        match self.predictor.predict(&self.history) {
            Ok(prediction) => {
                let predicted = self.modifier.apply(prediction.value);
                if predicted == observed {
                    self.correct += 1;
                } else {
                    trace!(
                        "{}: guess {} predicted {} observed {}",
                        self.name,
                        self.guesses,
                        predicted,
                        observed
                    );
                }
            }
            Err(e @ PredictError::NonInvertible(_)) => {
                warn!("{}: guess {} failed: {}", self.name, self.guesses, e);
                self.failed += 1;
            }
            Err(e) => return Err(e),
        }
        self.history.push(observed);
        Ok(true)
    }

    fn finish(&mut self) {
        if self.phase == Phase::Done {
            return;
        }
        self.phase = Phase::Done;
        info!("{}", self.result());
    }

    /// Tally so far.
    pub fn result(&self) -> EvaluationResult {
        EvaluationResult {
            name: self.name.clone(),
            guesses: self.guesses,
            correct: self.correct,
            failed: self.failed,
        }
    }

    /// Drive the run to completion.
    pub fn run(mut self) -> Result<EvaluationResult, PredictError> {
        while self.step()? {}
        Ok(self.result())
    }
}

/// Run an evaluation with the default configuration.
pub fn evaluate<P: Predictor, G: Generator, M: Modifier>(
    name: impl Into<String>,
    predictor: P,
    generator: G,
    modifier: M,
) -> Result<EvaluationResult, PredictError> {
    Evaluation::new(name, predictor, generator, modifier, EvaluationConfig::default())?.run()
}
