use clap::Parser;
use prng_predict::{
    AdditiveFeedbackGenerator, AdditiveFeedbackPredictor, Evaluation, EvaluationConfig,
    EvaluationResult, Generator, Identity, LcgGenerator, LinearCongruentialPredictor, LowerBits,
    Modifier, PredictError, Predictor,
};
use std::time::{SystemTime, UNIX_EPOCH};

/// Measure how often the predictors guess the next output of their generator.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Seed for both generators, defaults to the current time in seconds.
    #[arg(short, long)]
    seed: Option<u32>,

    /// Number of predictions per run.
    #[arg(short, long, default_value_t = prng_predict::harness::TOTAL_TESTS)]
    tests: usize,

    /// Bits kept by the lower bits modifier.
    #[arg(short, long, default_value_t = 4)]
    bits: u32,
}

fn run<P: Predictor, G: Generator, M: Modifier>(
    name: &str,
    predictor: P,
    generator: G,
    modifier: M,
    tests: usize,
) -> Result<EvaluationResult, PredictError> {
    let config = EvaluationConfig {
        total_tests: tests,
        ..Default::default()
    };
    Evaluation::new(name, predictor, generator, modifier, config)?.run()
}

fn main() -> Result<(), PredictError> {
    env_logger::init();
    let args = Args::parse();
    let seed = args.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs() as u32)
            .unwrap_or(1)
    });
    println!("seed: {seed}");

    let lower = LowerBits::new(args.bits);
    let results = [
        run(
            "glibc rand, identity",
            AdditiveFeedbackPredictor,
            AdditiveFeedbackGenerator::new(seed),
            Identity,
            args.tests,
        )?,
        run(
            "glibc rand, lower bits",
            AdditiveFeedbackPredictor,
            AdditiveFeedbackGenerator::new(seed),
            lower,
            args.tests,
        )?,
        run(
            "lcg, identity",
            LinearCongruentialPredictor,
            LcgGenerator::new(seed),
            Identity,
            args.tests,
        )?,
        run(
            "lcg, lower bits",
            LinearCongruentialPredictor,
            LcgGenerator::new(seed),
            lower,
            args.tests,
        )?,
    ];

    for result in results {
        println!("{result}");
    }
    Ok(())
}
