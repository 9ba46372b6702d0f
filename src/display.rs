//! Number rendering for people, not for the engine.

/// Formats a dong amount with `.` thousands separators, e.g. `1.234.567 ₫`.
#[must_use]
pub fn format_vnd(amount: f64) -> String {
    format!("{} ₫", group_thousands(amount.round()))
}

/// Formats an area with one decimal, e.g. `210.0 m²`.
#[must_use]
pub fn format_area(area: f64) -> String {
    format!("{area:.1} m²")
}

/// Compact millions for narrow panels, e.g. `793.8M`.
#[must_use]
pub fn format_millions(amount: f64) -> String {
    format!("{:.1}M", amount / 1_000_000.0)
}

fn group_thousands(value: f64) -> String {
    let digits = format!("{:.0}", value.abs());
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    if value < 0.0 {
        grouped.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    grouped
}
