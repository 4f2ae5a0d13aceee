//! Label tokenization for alignment.

/// Split a label into comparable tokens.
///
/// Uppercases, then splits on whitespace, `.` and `,`. Empty pieces are dropped,
/// so `"DS793 .K7 K847"` and `"DS793.K7 K847"` tokenize identically.
pub fn tokenize_label(label: &str) -> Vec<String> {
    label
        .split(|c: char| c.is_whitespace() || c == '.' || c == ',')
        .filter(|t| !t.is_empty())
        .map(str::to_uppercase)
        .collect()
}
