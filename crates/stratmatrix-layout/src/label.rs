//! Greedy word wrapping for point labels.

/// Line-break marker understood by the renderer.
pub const LINE_BREAK: &str = "<br>";

/// Re-flows `name` into lines of at most `width` characters.
///
/// Names of `width` characters or fewer are returned unchanged. Longer
/// names are broken greedily at whitespace; a single word longer than
/// `width` keeps a line of its own instead of being split. Lines are joined
/// with [`LINE_BREAK`]. Widths are counted in characters, not bytes. A name
/// with no words at all is returned unchanged.
///
/// # Examples
///
/// ```
/// use stratmatrix_layout::wrap_label;
///
/// assert_eq!(wrap_label("AI Chatbot", 15), "AI Chatbot");
/// assert_eq!(
///     wrap_label("Predictive Maintenance", 15),
///     "Predictive<br>Maintenance"
/// );
/// ```
pub fn wrap_label(name: &str, width: usize) -> String {
    if name.chars().count() <= width {
        return name.to_string();
    }

    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in name.split_whitespace() {
        let word_len = word.chars().count();
        if current.is_empty() {
            current.push_str(word);
            current_len = word_len;
        } else if current_len + 1 + word_len <= width {
            current.push(' ');
            current.push_str(word);
            current_len += 1 + word_len;
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
            current_len = word_len;
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    if lines.is_empty() {
        return name.to_string();
    }

    lines.join(LINE_BREAK)
}

#[cfg(test)]
mod tests {
    use super::*;
    use stratmatrix_config::DEFAULT_WRAP_WIDTH;

    fn lines(label: &str) -> Vec<&str> {
        label.split(LINE_BREAK).collect()
    }

    #[test]
    fn test_short_name_unchanged() {
        assert_eq!(wrap_label("Fraud Detection", 15), "Fraud Detection");
        assert_eq!(wrap_label("OCR", 15), "OCR");
    }

    #[test]
    fn test_long_single_word_kept_whole() {
        let word = "Hyperpersonalized"; // 17 chars
        assert_eq!(wrap_label(word, 15), word);

        let twenty = "ABCDEFGHIJKLMNOPQRST";
        assert_eq!(wrap_label(twenty, 15), twenty);
    }

    #[test]
    fn test_long_name_split_on_words() {
        let wrapped = wrap_label("Customer Churn Prediction Engine", 15);
        let parts = lines(&wrapped);
        assert!(parts.len() >= 2);
        for part in &parts {
            assert!(part.chars().count() <= 15, "{part:?} too long");
        }
        assert_eq!(parts, vec!["Customer Churn", "Prediction", "Engine"]);
    }

    #[test]
    fn test_long_word_among_short_ones() {
        let wrapped = wrap_label("AI Hyperpersonalization Hub", 15);
        assert_eq!(lines(&wrapped), vec!["AI", "Hyperpersonalization", "Hub"]);
    }

    #[test]
    fn test_collapses_extra_whitespace() {
        let wrapped = wrap_label("Document   Analysis  Pipeline", 15);
        assert_eq!(lines(&wrapped), vec!["Document", "Analysis", "Pipeline"]);
    }

    #[test]
    fn test_counts_characters_not_bytes() {
        // 14 characters, 16 bytes.
        assert_eq!(wrap_label("Prévision café", 15), "Prévision café");
    }

    #[test]
    fn test_blank_name_kept_as_is() {
        let blank = " ".repeat(20);
        assert_eq!(wrap_label(&blank, 15), blank);
        assert_eq!(wrap_label("\t\t\t", 2), "\t\t\t");
    }

    #[test]
    fn test_default_width() {
        assert_eq!(
            wrap_label("Predictive Maintenance", DEFAULT_WRAP_WIDTH),
            "Predictive<br>Maintenance"
        );
    }

    #[test]
    fn test_custom_width() {
        assert_eq!(wrap_label("Route Optimization", 30), "Route Optimization");
        assert_eq!(wrap_label("Route Optimization", 5), "Route<br>Optimization");
    }
}
