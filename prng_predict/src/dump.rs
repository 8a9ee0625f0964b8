use crate::Generator;
use log::debug;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write `count` raw outputs, one decimal integer per line.
pub fn write_outputs<G: Generator, W: Write>(
    generator: &mut G,
    count: usize,
    mut writer: W,
) -> std::io::Result<()> {
    for _ in 0..count {
        writeln!(writer, "{}", generator.next_raw())?;
    }
    writer.flush()
}

/// Create (or truncate) `path` and write `count` raw outputs to it.
pub fn write_to_file<G: Generator>(
    generator: &mut G,
    count: usize,
    path: impl AsRef<Path>,
) -> std::io::Result<()> {
    let path = path.as_ref();
    let file = File::create(path)?;
    write_outputs(generator, count, BufWriter::new(file))?;
    debug!("wrote {} values to {}", count, path.display());
    Ok(())
}
