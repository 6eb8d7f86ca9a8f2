//! Raw token classification.

/// Shape of one raw argument token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RawToken<'a> {
    /// `--name`
    Long(&'a str),
    /// `-x`
    Short(char),
    /// A bindable value.
    Value,
    /// Dash-leading but neither a well-formed short nor long option.
    Malformed,
}

pub(crate) fn classify(token: &str) -> RawToken<'_> {
    if let Some(name) = token.strip_prefix("--") {
        if name.is_empty() {
            RawToken::Malformed
        } else {
            RawToken::Long(name)
        }
    } else if let Some(rest) = token.strip_prefix('-') {
        let mut chars = rest.chars();
        match (chars.next(), chars.next()) {
            // bare "-" is the conventional stdin placeholder
            (None, _) => RawToken::Value,
            // "-3" is a negative number, not an option
            (Some(c), _) if c.is_ascii_digit() => RawToken::Value,
            (Some(c), None) => RawToken::Short(c),
            (Some(_), Some(_)) => RawToken::Malformed,
        }
    } else {
        RawToken::Value
    }
}

/// Whether a token ends a value run (option marker or malformed dash token).
pub(crate) fn is_option_marker(token: &str) -> bool {
    matches!(
        classify(token),
        RawToken::Long(_) | RawToken::Short(_) | RawToken::Malformed
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_long_and_short() {
        assert_eq!(classify("--verbose"), RawToken::Long("verbose"));
        assert_eq!(classify("-v"), RawToken::Short('v'));
        assert_eq!(classify("a.txt"), RawToken::Value);
    }

    #[test]
    fn test_classify_edge_tokens() {
        assert_eq!(classify("--"), RawToken::Malformed);
        assert_eq!(classify("-xy"), RawToken::Malformed);
        assert_eq!(classify("-"), RawToken::Value);
        assert_eq!(classify("-12"), RawToken::Value);
    }

    #[test]
    fn test_option_marker_gates_value_runs() {
        assert!(is_option_marker("--file"));
        assert!(is_option_marker("-f"));
        assert!(is_option_marker("-xy"));
        assert!(!is_option_marker("-7"));
        assert!(!is_option_marker("value"));
    }
}
