use crate::notation::{lexer::Token, operator::BinaryOperator};

/// What the converter did with the token it consumed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepAction {
    /// An operand was appended to the output.
    Output {
        /// The operand as written.
        operand: String,
    },
    /// `(` was pushed onto the operator stack.
    PushParen,
    /// `)` popped operators to the output until the matching `(`.
    PopToParen {
        /// Operators moved to the output, in pop order.
        popped:  Vec<BinaryOperator>,
        /// `false` when the stack ran out before a `(` was found.
        matched: bool,
    },
    /// An operator was pushed without popping anything.
    PushOperator {
        /// The pushed operator.
        operator: BinaryOperator,
    },
    /// Operators that bind at least as tightly were popped, then the
    /// incoming operator was pushed.
    PopThenPush {
        /// Operators moved to the output, in pop order.
        popped:   Vec<BinaryOperator>,
        /// The pushed operator.
        operator: BinaryOperator,
    },
    /// End of input: every remaining operator was moved to the output.
    FlushRemaining {
        /// Operators moved to the output, in pop order.
        popped: Vec<BinaryOperator>,
    },
}

fn join_operators(operators: &[BinaryOperator]) -> String {
    operators.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ")
}

impl std::fmt::Display for StepAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Output { operand } => write!(f, "Add {operand} to output (operand)"),
            Self::PushParen => write!(f, "Push ( to stack"),
            Self::PopToParen { popped,
                               matched: true, } => {
                if popped.is_empty() {
                    write!(f, "Pop ( from stack")
                } else {
                    write!(f, "Pop {} from stack to output, discard (", join_operators(popped))
                }
            },
            Self::PopToParen { popped,
                               matched: false, } => write!(f,
                                                           "Pop {} from stack to output (no matching ( found)",
                                                           join_operators(popped)),
            Self::PushOperator { operator } => write!(f, "Push {operator} to stack"),
            Self::PopThenPush { popped, operator } => write!(f,
                                                             "Pop {} from stack (higher/equal precedence), then push {operator}",
                                                             join_operators(popped)),
            Self::FlushRemaining { popped } => {
                write!(f, "Pop remaining operators: {}", join_operators(popped))
            },
        }
    }
}

/// One recorded step of a traced conversion.
///
/// Steps are produced in order by
/// [`Converter::convert_traced`](crate::notation::converter::core::Converter::convert_traced)
/// and never change afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionStep {
    /// One-based step number. The final flush step is numbered one past the
    /// last input token.
    pub index:  usize,
    /// The token consumed, or `None` for the final flush step.
    pub token:  Option<Token>,
    /// The postfix output so far, tokens joined by a single space.
    pub output: String,
    /// The operator stack after the step, bottom first.
    pub stack:  Vec<char>,
    /// What the converter did.
    pub action: StepAction,
}

impl ConversionStep {
    /// Renders the operator stack, bottom first, or `(empty)`.
    ///
    /// # Example
    /// ```
    /// use postfix_trainer::convert_with_steps;
    ///
    /// let steps = convert_with_steps("(1+2)").unwrap().steps.unwrap();
    ///
    /// assert_eq!(steps[2].stack_display(), "( +");
    /// assert_eq!(steps[4].stack_display(), "(empty)");
    /// ```
    #[must_use]
    pub fn stack_display(&self) -> String {
        if self.stack.is_empty() {
            "(empty)".to_string()
        } else {
            self.stack.iter().map(char::to_string).collect::<Vec<_>>().join(" ")
        }
    }
}

impl std::fmt::Display for ConversionStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let token = self.token.as_ref().map_or_else(|| "(end)".to_string(), ToString::to_string);
        write!(f,
               "{:>3}. {token:<6} output: {:<24} stack: {:<12} {}",
               self.index,
               self.output,
               self.stack_display(),
               self.action)
    }
}
