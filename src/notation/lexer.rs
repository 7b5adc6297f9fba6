use logos::Logos;

/// Represents a lexical token of an infix expression.
///
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// The set of variants is closed: every stage downstream matches on all five.
#[derive(Logos, Debug, PartialEq, Clone)]
pub enum Token {
    /// Numeric literal tokens, such as `42`, `3.14` or `.5`.
    ///
    /// Any run of digits and decimal points is accepted, so `1.2.3` is a
    /// single number token without a numeric value.
    #[regex(r"[0-9.]+", |lex| NumberLiteral::new(lex.slice()))]
    Number(NumberLiteral),
    /// Identifier tokens; variable names such as `a`, `rate2` or `δx`.
    ///
    /// An identifier starts with any alphabetic character and continues with
    /// letters or decimal digits.
    #[regex(r"\p{Alphabetic}[\p{Alphabetic}\p{Nd}]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// Operator tokens: `+`, `-`, `*`, `/` and `^`.
    ///
    /// Unrecognized characters are also reported as operator tokens; the
    /// converter rejects them.
    #[regex(r"[+\-*/^]", |lex| lex.slice().chars().next())]
    Operator(char),
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(number) => write!(f, "{}", number.text),
            Self::Identifier(name) => write!(f, "{name}"),
            Self::Operator(symbol) => write!(f, "{symbol}"),
            Self::LParen => write!(f, "("),
            Self::RParen => write!(f, ")"),
        }
    }
}

/// A numeric literal as written in the source.
///
/// The original text is kept for display. The parsed value is `None` when
/// the text is not a valid decimal number, e.g. `1.2.3` or a lone `.`.
#[derive(Debug, PartialEq, Clone)]
pub struct NumberLiteral {
    /// The literal exactly as scanned.
    pub text:  String,
    /// The parsed value, if the text is a well-formed number.
    pub value: Option<f64>,
}

impl NumberLiteral {
    /// Creates a literal from scanned text and parses its value.
    ///
    /// # Example
    /// ```
    /// use postfix_trainer::notation::lexer::NumberLiteral;
    ///
    /// assert_eq!(NumberLiteral::new("2.5").value, Some(2.5));
    /// assert_eq!(NumberLiteral::new("1.2.3").value, None);
    /// ```
    #[must_use]
    pub fn new(text: &str) -> Self {
        Self { text:  text.to_string(),
               value: text.parse().ok(), }
    }
}

/// Splits an infix expression into tokens.
///
/// All whitespace is removed before scanning, so spacing never separates
/// tokens: `"1 2"` scans as the single number `12`. The remaining characters
/// are read left to right without backtracking. Scanning never fails; any
/// character the lexer does not recognize becomes an [`Token::Operator`] and
/// is reported later by the converter.
///
/// # Parameters
/// - `expression`: The raw infix text.
///
/// # Returns
/// The token sequence. The same input always produces the same output.
///
/// # Example
/// ```
/// use postfix_trainer::notation::lexer::{Token, tokenize};
///
/// let tokens = tokenize("ab1 * (2 + 3)");
///
/// assert_eq!(tokens.len(), 7);
/// assert_eq!(tokens[0], Token::Identifier("ab1".to_string()));
/// assert_eq!(tokens[1], Token::Operator('*'));
/// assert_eq!(tokens[2], Token::LParen);
/// ```
#[must_use]
pub fn tokenize(expression: &str) -> Vec<Token> {
    let compact: String = expression.chars().filter(|c| !c.is_whitespace()).collect();

    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(&compact);

    while let Some(token) = lexer.next() {
        if let Ok(tok) = token {
            tokens.push(tok);
        } else {
            tokens.extend(lexer.slice().chars().map(Token::Operator));
        }
    }

    log::trace!("tokenized {expression:?} into {} tokens", tokens.len());

    tokens
}
