/// Computes the Levenshtein distance between two strings: the minimum number of
/// single-character insertions, deletions, and substitutions that transform `a`
/// into `b`.
///
/// Characters are compared as Unicode scalar values; there is no locale-aware
/// collation and no transposition move.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let a_len = a_chars.len();
    let b_len = b_chars.len();

    if a_len == 0 {
        return b_len;
    }
    if b_len == 0 {
        return a_len;
    }

    let mut table = vec![vec![0usize; b_len + 1]; a_len + 1];

    for i in 0..=a_len {
        table[i][0] = i;
    }
    for j in 0..=b_len {
        table[0][j] = j;
    }

    for i in 1..=a_len {
        for j in 1..=b_len {
            if a_chars[i - 1] == b_chars[j - 1] {
                table[i][j] = table[i - 1][j - 1];
            } else {
                table[i][j] = 1 + table[i - 1][j - 1]
                    .min(table[i][j - 1])
                    .min(table[i - 1][j]);
            }
        }
    }

    table[a_len][b_len]
}
