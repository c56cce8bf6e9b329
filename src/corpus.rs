use std::iter;
use strum_macros::{Display, EnumIter};

/// The three window widths the report covers.
///
/// `Display` yields the report title without the trailing colon.
#[derive(Debug, Clone, Copy, EnumIter, Display, PartialEq, Eq, Hash)]
pub enum NgramKind {
    Unigrams,
    Bigrams,
    Trigrams,
}

impl NgramKind {
    /// Window width in characters.
    pub fn width(&self) -> usize {
        match self {
            Self::Unigrams => 1,
            Self::Bigrams => 2,
            Self::Trigrams => 3,
        }
    }

    /// Header line printed above the ranked entries, e.g. `Unigrams:`.
    pub fn title(&self) -> String {
        format!("{}:", self)
    }

    /// How many n-grams of this width a normalized line of `len` characters yields.
    pub fn count_in(&self, len: usize) -> usize {
        (len + 1).saturating_sub(self.width())
    }
}

/// One extracted window. Multi-character keys borrow from the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ngram<'a> {
    Uni(char),
    Bi(&'a str),
    Tri(&'a str),
}

impl Ngram<'_> {
    pub fn kind(&self) -> NgramKind {
        match self {
            Self::Uni(_) => NgramKind::Unigrams,
            Self::Bi(_) => NgramKind::Bigrams,
            Self::Tri(_) => NgramKind::Trigrams,
        }
    }
}

/// Lowercases and trims a raw line.
///
/// Folding uses `str::to_lowercase` (locale independent) and trimming follows
/// `str::trim`, so any Unicode `White_Space` at either end is dropped.
pub fn normalize_line(raw: &str) -> String {
    raw.to_lowercase().trim().to_string()
}

/// Sliding-window extraction over an already normalized line.
///
/// Walks start indices left to right; at each index it yields the unigram,
/// then the bigram and trigram when they still fit inside the line.
pub fn extract(line: &str) -> impl Iterator<Item = Ngram<'_>> + '_ {
    // Byte offset of every char start plus the end of the line, so a window
    // of `n` chars starting at char `i` is `bounds[i]..bounds[i + n]`.
    let bounds: Vec<usize> = line
        .char_indices()
        .map(|(offset, _)| offset)
        .chain(iter::once(line.len()))
        .collect();
    let len = bounds.len() - 1;

    line.chars().enumerate().flat_map(move |(i, c)| {
        let bi = (i + 2 <= len).then(|| Ngram::Bi(&line[bounds[i]..bounds[i + 2]]));
        let tri = (i + 3 <= len).then(|| Ngram::Tri(&line[bounds[i]..bounds[i + 3]]));
        [Some(Ngram::Uni(c)), bi, tri].into_iter().flatten()
    })
}
