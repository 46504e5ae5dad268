//! The match-name grammar.
//!
//! A match's display label (`"Semi-Finals - Match 1"`) doubles as the
//! structural key that placeholder resolution and round ordering consume,
//! so every producer and consumer of these strings goes through this
//! module. Relabeling anywhere else breaks resolution.

/// Name of round `round` (zero-based) out of `total_rounds`.
///
/// The last three rounds get their conventional names; everything earlier
/// is numbered from 1.
pub fn round_label(round: usize, total_rounds: usize) -> String {
    if total_rounds == 1 || round + 1 == total_rounds {
        "Final".to_string()
    } else if round + 2 == total_rounds {
        "Semi-Finals".to_string()
    } else if round + 3 == total_rounds {
        "Quarter-Finals".to_string()
    } else {
        format!("Round {}", round + 1)
    }
}

/// Full match label: `"{round} - Match {n}"`, 1-based.
pub fn match_label(round_label: &str, n: usize) -> String {
    format!("{round_label} - Match {n}")
}

/// The placeholder text standing in for the named match's winner.
pub fn winner_placeholder(match_name: &str) -> String {
    format!("Winner of {match_name}")
}

/// Invert [`winner_placeholder`]: the referenced match name, if the text
/// is a well-formed placeholder.
pub fn placeholder_source(placeholder: &str) -> Option<&str> {
    placeholder.strip_prefix("Winner of ")
}

/// The round (or group) part of a match label: everything before the
/// first `" - "`.
pub fn round_prefix(match_name: &str) -> &str {
    match_name.split(" - ").next().unwrap_or(match_name)
}

/// The trailing `"Match N"` number of a match label.
pub fn match_number(match_name: &str) -> Option<u32> {
    match_name
        .split(" - Match ")
        .nth(1)
        .and_then(|n| n.trim().parse().ok())
}

/// Sort key for round names: `"Round N"` rounds sort by N ascending, the
/// fixed Quarter-Finals < Semi-Finals < Final suffix sorts after all
/// numbered rounds, anything unrecognized sorts last.
pub fn round_order_key(round_name: &str) -> u32 {
    let lower = round_name.to_ascii_lowercase();
    if let Some(rest) = lower.strip_prefix("round") {
        let digits: String = rest.chars().filter(|c| c.is_ascii_digit()).collect();
        return digits.parse().unwrap_or(999);
    }
    if lower.starts_with("quarter") {
        100
    } else if lower.starts_with("semi") {
        101
    } else if lower.starts_with("final") {
        102
    } else {
        999
    }
}

/// Name of group `index` (zero-based): `Group A`, `Group B`, ... with
/// spreadsheet-style letters (`AA`, `AB`, ...) past `Z`.
pub fn group_label(index: usize) -> String {
    let mut n = index + 1;
    let mut letters = String::new();
    while n > 0 {
        n -= 1;
        letters.insert(0, (b'A' + (n % 26) as u8) as char);
        n /= 26;
    }
    format!("Group {letters}")
}
