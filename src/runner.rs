use crate::config::Config;
use crate::corpus::NgramKind;
use crate::counter::NgramCounts;
use crate::error::{FreqError, FreqResult};
use crate::reports;
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;
use std::time::{Duration, Instant};
use strum::IntoEnumIterator;
use tracing::{debug, info, warn};

/// Feeds every line of `reader` through the counters.
///
/// Lines end at `\n`, `\r\n` or a lone `\r`. A `\r` closing the final
/// line ends that line without opening an empty one after it.
///
/// Stops at the first read error; the partially filled tables are dropped
/// with it.
pub fn count_lines<R: BufRead>(reader: R) -> std::io::Result<NgramCounts> {
    let mut counts = NgramCounts::new();
    let mut lines = reader.lines().peekable();
    while let Some(line) = lines.next() {
        let line = line?;
        let body = match lines.peek() {
            None => line.strip_suffix('\r').unwrap_or(&line),
            Some(_) => line.as_str(),
        };
        for part in body.split('\r') {
            counts.add_line(part);
        }
    }
    Ok(counts)
}

/// Opens `path`, counts it and closes it again before returning.
///
/// The file handle lives only inside this call, so it is released whether
/// the pass finishes or fails half way.
pub fn count_file(path: &Path) -> FreqResult<NgramCounts> {
    let file = File::open(path).map_err(|source| FreqError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    count_lines(BufReader::new(file)).map_err(|source| FreqError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Full pass: count the configured corpus, then print the three reports and
/// the elapsed time to `out`. Nothing is written if counting fails.
pub fn run<W: Write>(config: &Config, out: &mut W) -> FreqResult<Duration> {
    let start = Instant::now();

    info!("📂 Loading corpus: {}", config.input.display());
    let counts = count_file(&config.input)?;
    info!("✅ Counted {} lines", counts.lines());

    if counts.unigrams.is_empty() {
        warn!("⚠️  Corpus '{}' has no characters to count.", config.input.display());
    }
    for kind in NgramKind::iter() {
        let (distinct, total) = counts.stats(kind);
        debug!("   -> {}: {} distinct, {} total", kind, distinct, total);
    }

    reports::write_report(out, &counts)?;

    let elapsed = start.elapsed();
    reports::write_elapsed(out, elapsed)?;
    out.flush()?;

    Ok(elapsed)
}
