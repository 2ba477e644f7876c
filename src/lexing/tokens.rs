//! Token definitions for line segmentation
//!
//! The tokens are defined using the logos derive macro. Only four kinds matter for
//! structure: terminators, carriage returns, indentation-class whitespace and content.
use logos::Logos;

/// All tokens the segmenter cares about
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum Token {
    #[token("\n")]
    Newline,

    // Dropped wherever it appears, including before a newline
    #[token("\r")]
    CarriageReturn,

    // Spaces and tabs, wherever they appear on the line
    #[regex(r"[ \t]+")]
    Whitespace,

    #[regex(r"[^ \t\r\n]+")]
    Text,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokenize(source: &str) -> Vec<(Token, logos::Span)> {
        let mut lexer = Token::lexer(source);
        let mut tokens = Vec::new();
        while let Some(result) = lexer.next() {
            tokens.push((result.unwrap_or(Token::Text), lexer.span()));
        }
        tokens
    }

    fn kinds(source: &str) -> Vec<Token> {
        tokenize(source).into_iter().map(|(t, _)| t).collect()
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(tokenize(""), vec![]);
    }

    #[test]
    fn test_indented_line() {
        assert_eq!(
            kinds("  foo bar\n"),
            vec![
                Token::Whitespace,
                Token::Text,
                Token::Whitespace,
                Token::Text,
                Token::Newline
            ]
        );
    }

    #[test]
    fn test_tabs_are_whitespace() {
        assert_eq!(kinds("\t \tx"), vec![Token::Whitespace, Token::Text]);
    }

    #[test]
    fn test_crlf_splits_into_return_and_newline() {
        let tokens = tokenize("a\r\nb");
        assert_eq!(tokens[1], (Token::CarriageReturn, 1..2));
        assert_eq!(tokens[2], (Token::Newline, 2..3));
        assert_eq!(tokens.len(), 4);
    }

    #[test]
    fn test_carriage_return_breaks_text_runs() {
        assert_eq!(kinds("\r"), vec![Token::CarriageReturn]);
        assert_eq!(
            kinds("a\rb"),
            vec![Token::Text, Token::CarriageReturn, Token::Text]
        );
    }

    #[test]
    fn test_unicode_content() {
        assert_eq!(kinds("  héllo"), vec![Token::Whitespace, Token::Text]);
    }
}
