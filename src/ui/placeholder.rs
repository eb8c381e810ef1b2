//! Example expressions shown as the input placeholder.

use std::time::{SystemTime, UNIX_EPOCH};

pub const EXAMPLES: [&str; 10] = [
    "3 + 4 * 2",
    "(3 + 4) * 2",
    "3 + 4 * 2 / (1 - 5)^2",
    "2^3^2",
    "10 + 2 * 6",
    "100 * 2 + 12",
    "100 * (2 + 12)",
    "100 * (2 + 12) / 14",
    "a + b * c",
    "x + y / z",
];

/// Pick one example at startup. Cosmetic only, so time and pid are
/// entropy enough.
pub fn pick_example() -> &'static str {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos())
        .unwrap_or(0);
    let seed = u64::from(nanos) ^ u64::from(std::process::id());
    EXAMPLES[(seed % EXAMPLES.len() as u64) as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picked_example_comes_from_the_fixed_list() {
        let example = pick_example();
        assert!(EXAMPLES.contains(&example));
    }
}
