//! Human-readable byte sizes.

const UNITS: [&str; 9] = ["B", "KB", "MB", "GB", "TB", "PB", "EB", "ZB", "YB"];

/// Format a byte count with binary (1024) steps and JEDEC unit names
///
/// Values above the byte range are rounded to two decimals with trailing
/// zeros removed, e.g. `1536` -> `"1.5 KB"`.
pub fn format_size(bytes: u64) -> String {
    let mut exponent = 0;
    let mut value = bytes as f64;
    while value >= 1024.0 && exponent < UNITS.len() - 1 {
        value /= 1024.0;
        exponent += 1;
    }

    if exponent == 0 {
        return format!("{} {}", bytes, UNITS[0]);
    }

    let rounded = format!("{:.2}", value);
    let trimmed = rounded.trim_end_matches('0').trim_end_matches('.');
    format!("{} {}", trimmed, UNITS[exponent])
}
