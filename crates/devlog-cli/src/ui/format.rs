//! String formatting utilities for UI rendering.

/// Truncate a string to max length, adding ellipsis if needed.
pub fn truncate(s: &str, max_len: usize) -> String {
    let char_count = s.chars().count();
    if char_count <= max_len {
        return s.to_string();
    }
    if max_len <= 3 {
        return s.chars().take(max_len).collect();
    }
    let truncated: String = s.chars().take(max_len - 3).collect();
    format!("{}...", truncated)
}

/// Entry number as written in headers, e.g. `#007`.
pub fn entry_ref(number: u32) -> String {
    format!("#{:03}", number)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short() {
        assert_eq!(truncate("hello", 10), "hello");
    }

    #[test]
    fn test_truncate_long() {
        assert_eq!(truncate("hello world", 8), "hello...");
    }

    #[test]
    fn test_truncate_tiny_limit() {
        assert_eq!(truncate("hello", 2), "he");
    }

    #[test]
    fn test_entry_ref_padding() {
        assert_eq!(entry_ref(3), "#003");
        assert_eq!(entry_ref(1200), "#1200");
    }
}
