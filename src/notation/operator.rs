/// Represents a binary operator.
///
/// These are the only operators the converter orders and the evaluator
/// applies.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Exponentiation (`^`)
    Pow,
}

impl BinaryOperator {
    /// All operators, in table order.
    pub const ALL: [Self; 5] = [Self::Add, Self::Sub, Self::Mul, Self::Div, Self::Pow];

    /// Returns the single-character symbol of the operator.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
            Self::Pow => '^',
        }
    }

    /// Looks up an operator by its symbol.
    ///
    /// # Example
    /// ```
    /// use postfix_trainer::notation::operator::BinaryOperator;
    ///
    /// assert_eq!(BinaryOperator::from_symbol('^'), Some(BinaryOperator::Pow));
    /// assert_eq!(BinaryOperator::from_symbol('%'), None);
    /// ```
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Self::Add),
            '-' => Some(Self::Sub),
            '*' => Some(Self::Mul),
            '/' => Some(Self::Div),
            '^' => Some(Self::Pow),
            _ => None,
        }
    }

    /// Looks up an operator from a whitespace-separated postfix token.
    ///
    /// Only single-character tokens can name an operator.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        let mut chars = token.chars();
        match (chars.next(), chars.next()) {
            (Some(symbol), None) => Self::from_symbol(symbol),
            _ => None,
        }
    }
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Direction in which operators of equal precedence group.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Associativity {
    /// `a - b - c` groups as `(a - b) - c`.
    Left,
    /// `a ^ b ^ c` groups as `a ^ (b ^ c)`.
    Right,
}

/// Precedence and associativity of a single operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct OperatorInfo {
    /// The operator described by this entry.
    pub operator:      BinaryOperator,
    /// Binding strength; higher binds tighter.
    pub precedence:    u8,
    /// Grouping of equal-precedence chains.
    pub associativity: Associativity,
}

impl OperatorInfo {
    /// Creates a table entry.
    #[must_use]
    pub const fn new(operator: BinaryOperator, precedence: u8, associativity: Associativity) -> Self {
        Self { operator,
               precedence,
               associativity }
    }

    /// Returns `true` if `self`, sitting on the operator stack, must be moved
    /// to the output before `incoming` is pushed.
    ///
    /// Higher precedence always yields. Equal precedence yields only when the
    /// incoming operator is left-associative, so right-associative chains
    /// stay on the stack and bind right to left.
    ///
    /// # Example
    /// ```
    /// use postfix_trainer::notation::operator::{BinaryOperator, DEFAULT_OPERATORS};
    ///
    /// let lookup = |op: BinaryOperator| *DEFAULT_OPERATORS.get(op).unwrap();
    ///
    /// assert!(lookup(BinaryOperator::Mul).yields_to(&lookup(BinaryOperator::Add)));
    /// assert!(lookup(BinaryOperator::Sub).yields_to(&lookup(BinaryOperator::Add)));
    /// assert!(!lookup(BinaryOperator::Pow).yields_to(&lookup(BinaryOperator::Pow)));
    /// ```
    #[must_use]
    pub fn yields_to(&self, incoming: &Self) -> bool {
        self.precedence > incoming.precedence
        || (self.precedence == incoming.precedence
            && incoming.associativity == Associativity::Left)
    }
}

/// Maps operators to their precedence and associativity.
///
/// The table is plain data borrowed for the duration of a conversion. The
/// process-wide default is [`DEFAULT_OPERATORS`]; a dialect with different
/// binding rules, or a reduced operator set, can be expressed by building a
/// table over its own entries. Operators absent from a table are rejected by
/// the converter.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct OperatorTable<'a> {
    entries: &'a [OperatorInfo],
}

const DEFAULT_ENTRIES: [OperatorInfo; 5] =
    [OperatorInfo::new(BinaryOperator::Add, 1, Associativity::Left),
     OperatorInfo::new(BinaryOperator::Sub, 1, Associativity::Left),
     OperatorInfo::new(BinaryOperator::Mul, 2, Associativity::Left),
     OperatorInfo::new(BinaryOperator::Div, 2, Associativity::Left),
     OperatorInfo::new(BinaryOperator::Pow, 3, Associativity::Right)];

/// The standard arithmetic table: `+ -` bind loosest, then `* /`, then the
/// right-associative `^`.
pub const DEFAULT_OPERATORS: OperatorTable<'static> = OperatorTable::new(&DEFAULT_ENTRIES);

impl<'a> OperatorTable<'a> {
    /// Creates a table over the given entries.
    ///
    /// If an operator appears more than once, the first entry wins.
    ///
    /// # Example
    /// ```
    /// use postfix_trainer::notation::operator::{
    ///     Associativity, BinaryOperator, OperatorInfo, OperatorTable,
    /// };
    ///
    /// // Every operator binds equally and groups left to right.
    /// let entries = BinaryOperator::ALL.map(|op| OperatorInfo::new(op, 1, Associativity::Left));
    /// let flat = OperatorTable::new(&entries);
    ///
    /// assert_eq!(flat.lookup('^').unwrap().precedence, 1);
    /// ```
    #[must_use]
    pub const fn new(entries: &'a [OperatorInfo]) -> Self {
        Self { entries }
    }

    /// Returns the entry for `operator`, if the table defines it.
    #[must_use]
    pub fn get(&self, operator: BinaryOperator) -> Option<&'a OperatorInfo> {
        self.entries.iter().find(|info| info.operator == operator)
    }

    /// Returns the entry for the operator written as `symbol`.
    #[must_use]
    pub fn lookup(&self, symbol: char) -> Option<&'a OperatorInfo> {
        BinaryOperator::from_symbol(symbol).and_then(|operator| self.get(operator))
    }
}
