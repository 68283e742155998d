/// Splits a command into its expression and the free text following the first `;`.
///
/// The comment is returned untrimmed; an absent delimiter yields an empty comment.
pub fn split_comment(command: &str) -> (&str, &str) {
    match command.split_once(';') {
        Some((expression, comment)) => (expression, comment),
        None => (command, ""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_comment() {
        assert_eq!(split_comment("3d20"), ("3d20", ""));
        assert_eq!(split_comment(""), ("", ""));
    }

    #[test]
    fn test_comment() {
        assert_eq!(split_comment("3d20 ;asdf"), ("3d20 ", "asdf"));
        assert_eq!(split_comment("1d6; to hit "), ("1d6", " to hit "));
        assert_eq!(split_comment(";just words"), ("", "just words"));
    }

    #[test]
    fn test_only_first_delimiter_splits() {
        assert_eq!(split_comment("1d4;a;b"), ("1d4", "a;b"));
    }
}
