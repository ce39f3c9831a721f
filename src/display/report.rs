//! Report formatting utilities for terminal output
//!
//! Amounts are shown as whole currency units with thousands separators,
//! e.g. `$4,650` or `-$450`.

/// Format an amount rounded to whole units
pub fn format_money(amount: f64, symbol: &str) -> String {
    let rounded = amount.round();
    let digits = group_thousands(rounded.abs() as u64);
    if rounded < 0.0 {
        format!("-{}{}", symbol, digits)
    } else {
        format!("{}{}", symbol, digits)
    }
}

/// Format an amount with an explicit `+` for non-negative values
pub fn format_signed_money(amount: f64, symbol: &str) -> String {
    let formatted = format_money(amount, symbol);
    if formatted.starts_with('-') {
        formatted
    } else {
        format!("+{}", formatted)
    }
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Format a percentage with appropriate precision
pub fn format_percentage(pct: f64) -> String {
    if pct < 0.1 && pct > 0.0 {
        format!("{:.2}%", pct)
    } else if pct < 10.0 {
        format!("{:.1}%", pct)
    } else {
        format!("{:.0}%", pct)
    }
}

/// Create a simple bar chart representation
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return " ".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Format a double separator line
pub fn double_separator(width: usize) -> String {
    "═".repeat(width)
}

/// Truncate a string to a maximum number of characters with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        ".".repeat(max_len)
    } else {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{}...", head)
    }
}

/// Right-align text in a field of given width
pub fn right_align(s: &str, width: usize) -> String {
    format!("{:>width$}", s, width = width)
}

/// Left-align text in a field of given width
pub fn left_align(s: &str, width: usize) -> String {
    format!("{:<width$}", s, width = width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(0.0, "$"), "$0");
        assert_eq!(format_money(640.0, "$"), "$640");
        assert_eq!(format_money(4650.25, "$"), "$4,650");
        assert_eq!(format_money(1_234_567.5, "$"), "$1,234,568");
        assert_eq!(format_money(-450.25, "$"), "-$450");
        assert_eq!(format_money(-0.4, "$"), "$0");
        assert_eq!(format_money(2300.0, "€"), "€2,300");
    }

    #[test]
    fn test_format_signed_money() {
        assert_eq!(format_signed_money(360.0, "$"), "+$360");
        assert_eq!(format_signed_money(0.0, "$"), "+$0");
        assert_eq!(format_signed_money(-450.25, "$"), "-$450");
    }

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(0.05), "0.05%");
        assert_eq!(format_percentage(5.5), "5.5%");
        assert_eq!(format_percentage(50.0), "50%");
    }

    #[test]
    fn test_format_bar() {
        let bar = format_bar(50.0, 100.0, 10);
        assert_eq!(bar.chars().filter(|c| *c == '█').count(), 5);
        assert_eq!(format_bar(0.0, 100.0, 4), "    ");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Weekly groceries", 9), "Weekly...");
        assert_eq!(truncate("Rent", 10), "Rent");
        assert_eq!(truncate("Café crème", 6), "Caf...");
        assert_eq!(truncate("Long", 2), "..");
    }

    #[test]
    fn test_alignment() {
        assert_eq!(right_align("abc", 5), "  abc");
        assert_eq!(left_align("abc", 5), "abc  ");
        assert_eq!(left_align("abcdef", 3), "abcdef");
    }
}
