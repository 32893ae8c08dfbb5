//! Keeps user-supplied text (item names, display names, raw command lines)
//! to a single safe log line.

/// Collapse whitespace control characters to spaces, replace other control
/// characters, and truncate long input with an ellipsis.
pub fn sanitize_log(s: &str) -> String {
    const MAX_PREVIEW: usize = 160;
    let mut out = String::with_capacity(s.len().min(MAX_PREVIEW) + 4);
    let mut truncated = false;
    for (count, ch) in s.chars().enumerate() {
        if count >= MAX_PREVIEW {
            truncated = true;
            break;
        }
        match ch {
            '\n' | '\r' | '\t' => out.push(' '),
            c if c.is_control() => out.push('?'),
            c => out.push(c),
        }
    }
    if truncated {
        out.push('…');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::sanitize_log;

    #[test]
    fn flattens_newlines() {
        assert_eq!(sanitize_log("a\nb\r\tc"), "a b  c");
    }

    #[test]
    fn truncates_long_input() {
        let long = "x".repeat(500);
        let out = sanitize_log(&long);
        assert!(out.chars().count() <= 161);
        assert!(out.ends_with('…'));
    }
}
