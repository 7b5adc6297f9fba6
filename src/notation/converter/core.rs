use crate::{
    error::{ConversionError, conversion_error::ConversionResult},
    notation::{
        converter::step::{ConversionStep, StepAction},
        lexer::Token,
        operator::{BinaryOperator, DEFAULT_OPERATORS, OperatorInfo, OperatorTable},
    },
};

/// The outcome of converting an infix expression.
#[derive(Debug, Clone, PartialEq)]
pub struct Conversion {
    /// The postfix tokens in output order.
    pub tokens:  Vec<Token>,
    /// The postfix tokens joined by a single space.
    pub postfix: String,
    /// The step trace; `Some` only for traced conversions.
    pub steps:   Option<Vec<ConversionStep>>,
}

/// An entry on the converter's control stack.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum StackEntry {
    /// An opening parenthesis and its one-based token position.
    LParen(usize),
    Operator(OperatorInfo),
}

impl StackEntry {
    const fn symbol(self) -> char {
        match self {
            Self::LParen(_) => '(',
            Self::Operator(info) => info.operator.symbol(),
        }
    }
}

/// Converts infix token sequences to postfix with the shunting-yard
/// algorithm.
///
/// A converter only borrows its operator table and holds no other state, so
/// one instance can serve any number of conversions, from any number of
/// threads.
///
/// ## Usage
///
/// [`Converter::new`] uses [`DEFAULT_OPERATORS`]. Use
/// [`Converter::with_table`] to convert with different binding rules.
#[derive(Debug, Copy, Clone)]
pub struct Converter<'a> {
    table: OperatorTable<'a>,
}

impl Converter<'static> {
    /// Creates a converter over the default operator table.
    #[must_use]
    pub const fn new() -> Self {
        Self { table: DEFAULT_OPERATORS }
    }
}

impl Default for Converter<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> Converter<'a> {
    /// Creates a converter over a custom operator table.
    ///
    /// # Example
    /// ```
    /// use postfix_trainer::notation::{
    ///     converter::core::Converter,
    ///     lexer::tokenize,
    ///     operator::{Associativity, BinaryOperator, OperatorInfo, OperatorTable},
    /// };
    ///
    /// // A dialect where `^` groups left to right.
    /// let entries = [OperatorInfo::new(BinaryOperator::Add, 1, Associativity::Left),
    ///                OperatorInfo::new(BinaryOperator::Pow, 3, Associativity::Left)];
    /// let converter = Converter::with_table(OperatorTable::new(&entries));
    ///
    /// let result = converter.convert(&tokenize("2^3^2")).unwrap();
    /// assert_eq!(result.postfix, "2 3 ^ 2 ^");
    ///
    /// // `*` is not part of this dialect.
    /// assert!(converter.convert(&tokenize("2*3")).is_err());
    /// ```
    #[must_use]
    pub const fn with_table(table: OperatorTable<'a>) -> Self {
        Self { table }
    }

    /// Converts an infix token sequence to postfix.
    ///
    /// # Parameters
    /// - `tokens`: Tokens as produced by
    ///   [`tokenize`](crate::notation::lexer::tokenize).
    ///
    /// # Returns
    /// A [`Conversion`] without a step trace.
    ///
    /// # Errors
    /// - `MismatchedParentheses` if a `(` is still open at the end of input.
    /// - `InvalidToken` if an operator token is not in the table.
    ///
    /// # Example
    /// ```
    /// use postfix_trainer::notation::{converter::core::Converter, lexer::tokenize};
    ///
    /// let result = Converter::new().convert(&tokenize("(2+3)*4")).unwrap();
    ///
    /// assert_eq!(result.postfix, "2 3 + 4 *");
    /// assert!(result.steps.is_none());
    /// ```
    pub fn convert(&self, tokens: &[Token]) -> ConversionResult<Conversion> {
        self.run(tokens, None)
    }

    /// Converts an infix token sequence to postfix and records every step.
    ///
    /// One step is recorded per input token, plus a final flush step when
    /// operators remain on the stack at the end of input. The postfix output
    /// is identical to [`Converter::convert`] for the same input.
    ///
    /// # Errors
    /// Same as [`Converter::convert`].
    ///
    /// # Example
    /// ```
    /// use postfix_trainer::notation::{converter::core::Converter, lexer::tokenize};
    ///
    /// let result = Converter::new().convert_traced(&tokenize("2+3*4")).unwrap();
    /// let steps = result.steps.unwrap();
    ///
    /// assert_eq!(steps.len(), 6);
    /// assert_eq!(steps[5].token, None);
    /// assert_eq!(steps[5].output, result.postfix);
    /// ```
    pub fn convert_traced(&self, tokens: &[Token]) -> ConversionResult<Conversion> {
        self.run(tokens, Some(Vec::with_capacity(tokens.len() + 1)))
    }

    fn run(&self,
           tokens: &[Token],
           mut trace: Option<Vec<ConversionStep>>)
           -> ConversionResult<Conversion> {
        let mut output: Vec<Token> = Vec::with_capacity(tokens.len());
        let mut stack: Vec<StackEntry> = Vec::new();

        for (i, token) in tokens.iter().enumerate() {
            let position = i + 1;

            let action = match token {
                Token::Number(_) | Token::Identifier(_) => {
                    output.push(token.clone());
                    StepAction::Output { operand: token.to_string() }
                },
                Token::LParen => {
                    stack.push(StackEntry::LParen(position));
                    StepAction::PushParen
                },
                Token::RParen => {
                    let (popped, matched) = pop_to_paren(&mut stack, &mut output);
                    if !matched {
                        log::debug!("')' at token {position} has no matching '('; ignoring");
                    }
                    StepAction::PopToParen { popped, matched }
                },
                Token::Operator(symbol) => {
                    let Some(incoming) = self.table.lookup(*symbol) else {
                        return Err(ConversionError::InvalidToken { token: symbol.to_string(),
                                                                   position });
                    };
                    let popped = pop_while_yielding(&mut stack, &mut output, incoming);
                    stack.push(StackEntry::Operator(*incoming));
                    if popped.is_empty() {
                        StepAction::PushOperator { operator: incoming.operator }
                    } else {
                        StepAction::PopThenPush { popped,
                                                  operator: incoming.operator }
                    }
                },
            };

            log::trace!("token {position} '{token}': {action}");

            if let Some(steps) = trace.as_mut() {
                steps.push(snapshot(position, Some(token.clone()), &output, &stack, action));
            }
        }

        if !stack.is_empty() {
            let mut popped = Vec::with_capacity(stack.len());
            while let Some(entry) = stack.pop() {
                match entry {
                    StackEntry::LParen(position) => {
                        return Err(ConversionError::MismatchedParentheses { position });
                    },
                    StackEntry::Operator(info) => {
                        output.push(Token::Operator(info.operator.symbol()));
                        popped.push(info.operator);
                    },
                }
            }

            if let Some(steps) = trace.as_mut() {
                steps.push(snapshot(tokens.len() + 1,
                                    None,
                                    &output,
                                    &stack,
                                    StepAction::FlushRemaining { popped }));
            }
        }

        let postfix = join_tokens(&output);
        log::debug!("converted {} infix tokens to postfix '{postfix}'", tokens.len());

        Ok(Conversion { tokens: output,
                        postfix,
                        steps: trace })
    }
}

/// Pops operators to the output until a `(` is found and discards it.
///
/// Returns the popped operators and whether a `(` was found. When the stack
/// runs out first, every operator has been moved to the output and the `)`
/// is otherwise ignored.
fn pop_to_paren(stack: &mut Vec<StackEntry>,
                output: &mut Vec<Token>)
                -> (Vec<BinaryOperator>, bool) {
    let mut popped = Vec::new();
    while let Some(entry) = stack.pop() {
        match entry {
            StackEntry::LParen(_) => return (popped, true),
            StackEntry::Operator(info) => {
                output.push(Token::Operator(info.operator.symbol()));
                popped.push(info.operator);
            },
        }
    }
    (popped, false)
}

/// Pops every operator that must precede `incoming` in the output.
///
/// Stops at a `(` or at the first operator that binds more loosely.
fn pop_while_yielding(stack: &mut Vec<StackEntry>,
                      output: &mut Vec<Token>,
                      incoming: &OperatorInfo)
                      -> Vec<BinaryOperator> {
    let mut popped = Vec::new();
    while let Some(StackEntry::Operator(top)) = stack.last().copied()
          && top.yields_to(incoming)
    {
        stack.pop();
        output.push(Token::Operator(top.operator.symbol()));
        popped.push(top.operator);
    }
    popped
}

fn snapshot(index: usize,
            token: Option<Token>,
            output: &[Token],
            stack: &[StackEntry],
            action: StepAction)
            -> ConversionStep {
    ConversionStep { index,
                     token,
                     output: join_tokens(output),
                     stack: stack.iter().map(|entry| entry.symbol()).collect(),
                     action }
}

fn join_tokens(tokens: &[Token]) -> String {
    tokens.iter().map(ToString::to_string).collect::<Vec<_>>().join(" ")
}
