//! Number and text formatting for display copy

const CRORE: f64 = 10_000_000.0;
const LAKH: f64 = 100_000.0;
const THOUSAND: f64 = 1_000.0;

/// Compact Indian-style number: crores, lakhs, thousands
///
/// # Examples
/// ```ignore
/// format_number(21000000) // -> "2.1Cr"
/// format_number(250000)   // -> "2.5L"
/// format_number(999)      // -> "999"
/// ```
pub fn format_number(n: u64) -> String {
    let value = n as f64;
    if value >= CRORE {
        format!("{:.1}Cr", value / CRORE)
    } else if value >= LAKH {
        format!("{:.1}L", value / LAKH)
    } else if value >= THOUSAND {
        format!("{:.1}K", value / THOUSAND)
    } else {
        n.to_string()
    }
}

/// Rupee amount with Indian digit grouping (`₹15,00,000`)
pub fn format_currency(amount: u64) -> String {
    let digits = amount.to_string();
    if digits.len() <= 3 {
        return format!("₹{}", digits);
    }

    let (head, last3) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut rest = head;
    while rest.len() > 2 {
        let (h, t) = rest.split_at(rest.len() - 2);
        groups.push(t);
        rest = h;
    }
    if !rest.is_empty() {
        groups.push(rest);
    }
    groups.reverse();

    format!("₹{},{}", groups.join(","), last3)
}

/// URL-safe lowercase slug
///
/// # Examples
/// ```ignore
/// slugify("Hello World!") // -> "hello-world"
/// ```
pub fn slugify(s: &str) -> String {
    slug::slugify(s)
}

/// Truncate a string to a number of characters, appending an omission marker
pub fn truncate(s: &str, length: usize, omission: Option<&str>) -> String {
    let omission = omission.unwrap_or("...");

    if s.chars().count() <= length {
        s.to_string()
    } else {
        let truncated: String = s
            .chars()
            .take(length.saturating_sub(omission.chars().count()))
            .collect();
        format!("{}{}", truncated.trim_end(), omission)
    }
}
