use clap::{Parser, ValueEnum};
use prng_predict::{AdditiveFeedbackGenerator, Generator, LcgGenerator};

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Family {
    /// glibc's rand(); r(n) = r(n-31) + r(n-3), output r(n) >> 1
    Glibc,
    /// x(n) = 1103515245 * x(n-1) + 12345 mod 2^31
    Lcg,
}

/// A program to print raw outputs of one of the weak generators.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The generator to run.
    #[arg(value_enum)]
    family: Family,

    /// The seed, as passed to srand for glibc or the start state of the lcg.
    seed: u32,

    /// Number of advances to perform.
    #[arg(short, long, default_value_t = 5)]
    advances: usize,
}

fn main() {
    let args = Args::parse();
    let mut rng: Box<dyn Generator> = match args.family {
        Family::Glibc => Box::new(AdditiveFeedbackGenerator::new(args.seed)),
        Family::Lcg => Box::new(LcgGenerator::new(args.seed)),
    };

    for _ in 0..args.advances {
        println!("{}", rng.next_raw());
    }
}
