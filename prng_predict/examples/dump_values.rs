use clap::Parser;
use prng_predict::dump;
use prng_predict::AdditiveFeedbackGenerator;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

/// Write raw outputs of glibc's rand() to a text file, one per line.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File to write to.
    #[arg(short, long, default_value = "rand.txt")]
    output: PathBuf,

    /// Number of values to write.
    #[arg(short, long, default_value_t = 1000)]
    count: usize,

    /// Seed, defaults to the current time in seconds.
    #[arg(short, long)]
    seed: Option<u32>,
}

fn main() -> std::io::Result<()> {
    env_logger::init();
    let args = Args::parse();
    let seed = args.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs() as u32)
            .unwrap_or(1)
    });

    let mut rng = AdditiveFeedbackGenerator::new(seed);
    dump::write_to_file(&mut rng, args.count, &args.output)
}
