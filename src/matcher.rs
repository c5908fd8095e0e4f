use serde::Serialize;

use crate::pairs::pairs;

/// One pair of the result and whether the bet holds an equal-valued pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PairMatch {
    pub pair: String,
    pub matched: bool,
}

/// Match every pair of `result` against the pairs of `bet`.
///
/// Comparison is by string value (`"03"` never matches `"3"`) and the
/// bet's pair order is irrelevant: a result pair matches when an equal
/// pair exists anywhere in the bet. Output entries follow the result's
/// left-to-right pair order.
///
/// Linear scan of the bet per result pair; codes are a handful of
/// pairs, so no index is worth building.
#[must_use]
pub fn match_pairs(result: &str, bet: &str) -> Vec<PairMatch> {
    let bet_pairs = pairs(bet);
    pairs(result)
        .map(|r| PairMatch {
            matched: bet_pairs.clone().any(|b| b == r),
            pair: r.to_string(),
        })
        .collect()
}
