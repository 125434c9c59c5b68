use winnow::{
    ascii::space0,
    combinator::{alt, delimited, separated},
    token::{one_of, take_while},
    ModalResult, Parser,
};

use crate::grammars::types::GrammarError;

/// Parses a production definition line of the form `S → dA | d`. An ASCII
/// `->` arrow is also accepted. Uppercase ASCII letters are non-terminals,
/// other alphanumeric characters are terminals.
pub(super) fn production_line(input: &str) -> Result<(char, Vec<String>), GrammarError> {
    (left_hand_side, alternatives)
        .parse(input)
        .map_err(|err| GrammarError::Parse(err.to_string()))
}

fn left_hand_side(input: &mut &str) -> ModalResult<char> {
    delimited(
        space0,
        one_of(|c: char| c.is_ascii_uppercase()),
        (space0, alt(("→", "->"))),
    )
    .parse_next(input)
}

fn alternatives(input: &mut &str) -> ModalResult<Vec<String>> {
    separated(
        1..,
        delimited(
            space0,
            take_while(1.., |c: char| c.is_ascii_alphanumeric()).map(str::to_owned),
            space0,
        ),
        '|',
    )
    .parse_next(input)
}

#[cfg(test)]
mod tests {
    use super::production_line;

    #[test]
    fn parses_alternatives() {
        let (lhs, alternatives) = production_line("A → d | aB").unwrap();
        assert_eq!(lhs, 'A');
        assert_eq!(alternatives, vec!["d".to_string(), "aB".to_string()]);
    }

    #[test]
    fn parses_ascii_arrow() {
        let (lhs, alternatives) = production_line("S -> dA").unwrap();
        assert_eq!(lhs, 'S');
        assert_eq!(alternatives, vec!["dA".to_string()]);
    }

    #[test]
    fn rejects_missing_arrow() {
        assert!(production_line("S dA").is_err());
    }

    #[test]
    fn rejects_lowercase_left_hand_side() {
        assert!(production_line("s → dA").is_err());
    }

    #[test]
    fn rejects_empty_alternative() {
        assert!(production_line("S → dA |").is_err());
    }
}
