//! String similarity on a 0-100 scale.
//!
//! Strings are first reduced to a comparable form (lowercase, separators
//! turned into spaces). The score is the better of a plain edit ratio and
//! the same ratio over the alphabetically sorted words, so word order does
//! not matter ("learning machine" scores 100 against "machine learning").

/// Preprocess a string for comparison.
///
/// Characters other than alphanumerics and `+ # .` become spaces, runs of
/// whitespace collapse, and dots at word edges are trimmed.
pub fn process(s: &str) -> String {
    let mapped: String = s
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || matches!(c, '+' | '#' | '.') {
                c
            } else {
                ' '
            }
        })
        .collect();

    mapped
        .split_whitespace()
        .map(|w| w.trim_matches('.'))
        .filter(|w| !w.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Sort the words of an already processed string.
pub fn sort_words(processed: &str) -> String {
    let mut words: Vec<&str> = processed.split_whitespace().collect();
    words.sort_unstable();
    words.join(" ")
}

/// Similarity of two raw strings.
pub fn similarity(a: &str, b: &str) -> u8 {
    let a = process(a);
    let b = process(b);
    ratio(&a, &b).max(ratio(&sort_words(&a), &sort_words(&b)))
}

/// Edit ratio of two processed strings: `100 * (len_a + len_b - d) / (len_a + len_b)`,
/// rounded, where `d` is [`edit_distance`].
pub fn ratio(a: &str, b: &str) -> u8 {
    if a.is_empty() || b.is_empty() {
        return 0;
    }
    if a == b {
        return 100;
    }

    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let total = a.len() + b.len();
    percent(total - edit_distance(&a, &b), total)
}

/// Highest ratio two strings of these lengths could reach.
pub fn ratio_bound(len_a: usize, len_b: usize) -> u8 {
    let total = len_a + len_b;
    if total == 0 {
        return 0;
    }
    percent(2 * len_a.min(len_b), total)
}

/// Weighted optimal string alignment distance.
///
/// Insertions and deletions cost 1, substitutions 2 (a delete plus an
/// insert), and swapping two adjacent characters costs 1.
pub fn edit_distance(a: &[char], b: &[char]) -> usize {
    let (n, m) = (a.len(), b.len());
    let mut d = vec![vec![0usize; m + 1]; n + 1];
    for (i, row) in d.iter_mut().enumerate() {
        row[0] = i;
    }
    for (j, cell) in d[0].iter_mut().enumerate() {
        *cell = j;
    }

    for i in 1..=n {
        for j in 1..=m {
            let substitution = if a[i - 1] == b[j - 1] { 0 } else { 2 };
            let mut best = (d[i - 1][j] + 1)
                .min(d[i][j - 1] + 1)
                .min(d[i - 1][j - 1] + substitution);
            if i > 1 && j > 1 && a[i - 1] == b[j - 2] && a[i - 2] == b[j - 1] && substitution > 0 {
                best = best.min(d[i - 2][j - 2] + 1);
            }
            d[i][j] = best;
        }
    }

    d[n][m]
}

fn percent(numerator: usize, denominator: usize) -> u8 {
    ((200 * numerator + denominator) / (2 * denominator)) as u8
}
