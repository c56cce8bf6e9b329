use crate::corpus::NgramKind;
use crate::counter::{CountTable, NgramCounts};
use std::fmt::Display;
use std::hash::Hash;
use std::io::{self, Write};
use std::time::Duration;
use strum::IntoEnumIterator;

/// Entries printed per table.
pub const TOP_K: usize = 20;

/// Prints one ranked table: the title, up to `TOP_K` `"<key>"\t<count>`
/// lines and a blank separator line.
pub fn write_top<W, K>(out: &mut W, title: &str, table: &CountTable<K>) -> io::Result<()>
where
    W: Write,
    K: Display + Hash + Eq + Ord,
{
    writeln!(out, "{}", title)?;
    for (key, count) in table.top(TOP_K) {
        writeln!(out, "\"{}\"\t{}", key, count)?;
    }
    writeln!(out)
}

/// Prints the three tables in width order.
pub fn write_report<W: Write>(out: &mut W, counts: &NgramCounts) -> io::Result<()> {
    for kind in NgramKind::iter() {
        let title = kind.title();
        match kind {
            NgramKind::Unigrams => write_top(out, &title, &counts.unigrams)?,
            NgramKind::Bigrams => write_top(out, &title, &counts.bigrams)?,
            NgramKind::Trigrams => write_top(out, &title, &counts.trigrams)?,
        }
    }
    Ok(())
}

/// Final timing line, seconds with millisecond precision: `0.042 s`.
pub fn write_elapsed<W: Write>(out: &mut W, elapsed: Duration) -> io::Result<()> {
    writeln!(out, "{:.3} s", elapsed.as_secs_f64())
}
