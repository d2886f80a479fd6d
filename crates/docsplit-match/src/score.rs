//! Partial similarity scoring for fuzzy heading matches.
//!
//! Uses the indel ratio from `rapidfuzz` as the base similarity and slides the
//! shorter string over the longer one, so a heading embedded in a longer line
//! still scores highly. Windows running off the end of the longer string are
//! cut short rather than skipped, so a heading truncated at the end of a line
//! also scores.

use rapidfuzz::fuzz::ratio;

/// Scores how well the shorter string matches somewhere inside the longer.
///
/// Returns the best indel ratio over every window of the longer string that
/// has the shorter string's length and every suffix of the longer string that
/// is shorter than that, scaled to `0..=100` and rounded to a whole number.
/// Equal-length operands are scored both ways round. An empty operand scores 0.
pub fn partial_ratio(left: &str, right: &str) -> f64 {
    let left: Vec<char> = left.chars().collect();
    let right: Vec<char> = right.chars().collect();
    if left.is_empty() || right.is_empty() {
        return 0.0;
    }

    let best = match left.len().cmp(&right.len()) {
        std::cmp::Ordering::Less => best_alignment(&left, &right),
        std::cmp::Ordering::Greater => best_alignment(&right, &left),
        std::cmp::Ordering::Equal => best_alignment(&left, &right).max(best_alignment(&right, &left)),
    };
    (best * 100.0).round()
}

/// Best raw ratio of `shorter` against the windows of `longer`.
fn best_alignment(shorter: &[char], longer: &[char]) -> f64 {
    let width = shorter.len();
    let tails = (longer.len() - width + 1..longer.len()).map(|start| &longer[start..]);

    let mut best = 0.0_f64;
    for window in longer.windows(width).chain(tails) {
        let score = ratio(shorter.iter().copied(), window.iter().copied());
        if score > best {
            best = score;
            if best >= 1.0 {
                break;
            }
        }
    }
    best
}
