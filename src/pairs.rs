/// Lazy decomposition of a code string into two-character pairs.
///
/// Pairs start at even character offsets only; the iterator borrows the
/// input and is `Clone`, so a scan can be restarted (or forked mid-way)
/// without reallocating. An empty input yields an empty sequence.
///
/// When the input has odd length, the final even offset holds a single
/// character and that character is emitted as a short "pair". That
/// mirrors the historical checker behavior and is pinned by
/// `trailing_single_char_is_emitted_as_short_pair` below rather than
/// silently corrected.
#[derive(Debug, Clone)]
pub struct Pairs<'a> {
    rest: &'a str,
}

/// Start a pair scan over `s`.
#[must_use]
pub fn pairs(s: &str) -> Pairs<'_> {
    Pairs { rest: s }
}

impl<'a> Iterator for Pairs<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.rest.is_empty() {
            return None;
        }
        // Advance two characters, not bytes: inputs are arbitrary text
        // until validation has run, so multi-byte input must not split.
        let mut tail = self.rest.chars();
        tail.next();
        tail.next();
        let cut = self.rest.len() - tail.as_str().len();
        let (pair, rest) = self.rest.split_at(cut);
        self.rest = rest;
        Some(pair)
    }
}
