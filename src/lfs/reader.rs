use crate::common::LfsData;

/// Turns one line of input into something `eval` accepts. Identity for now.
pub fn read_str(input: &str) -> LfsData {
    trace!("read_str, input: {:?}", input);

    input.to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_str_keeps_text() {
        assert_eq!(read_str("(+ 1 2)"), "(+ 1 2)");
        assert_eq!(read_str(""), "");
        assert_eq!(read_str("  [a {b c}] ; x"), "  [a {b c}] ; x");
    }
}
