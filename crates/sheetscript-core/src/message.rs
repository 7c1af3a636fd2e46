//! The builtin message set answered by every boxed value.
//!
//! Literals compile to boxed values: closures that take a message name and
//! answer with either the raw value (`_rawVal`) or a function of a second
//! boxed operand. This table is the single source of truth for the names
//! and for which formula primitive each message lowers to.

use std::fmt;

/// How a builtin message combines the receiver's raw value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lowering {
    /// Answer the raw value itself.
    Unbox,
    /// `raw <op> rhs`.
    Infix(&'static str),
    /// `FUNC(raw, rhs)`.
    Binary(&'static str),
    /// `FUNC(raw)`, no operand.
    Unary(&'static str),
}

/// A message name understood by boxed builtin values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuiltinMessage {
    RawVal,
    Plus,
    Minus,
    Times,
    Divide,
    Equals,
    NotEquals,
    And,
    Or,
    Xor,
    LessThan,
    LessThanOrEquals,
    GreaterThan,
    GreaterThanOrEquals,
    Negate,
    Factorial,
    Log,
    Concat,
}

impl BuiltinMessage {
    /// Every builtin message, in dispatch order.
    pub const ALL: [BuiltinMessage; 18] = [
        BuiltinMessage::RawVal,
        BuiltinMessage::Plus,
        BuiltinMessage::Minus,
        BuiltinMessage::Times,
        BuiltinMessage::Divide,
        BuiltinMessage::Equals,
        BuiltinMessage::NotEquals,
        BuiltinMessage::And,
        BuiltinMessage::Or,
        BuiltinMessage::Xor,
        BuiltinMessage::LessThan,
        BuiltinMessage::LessThanOrEquals,
        BuiltinMessage::GreaterThan,
        BuiltinMessage::GreaterThanOrEquals,
        BuiltinMessage::Negate,
        BuiltinMessage::Factorial,
        BuiltinMessage::Log,
        BuiltinMessage::Concat,
    ];

    /// The message string sent at run time.
    pub fn name(self) -> &'static str {
        match self {
            BuiltinMessage::RawVal => "_rawVal",
            BuiltinMessage::Plus => "plus",
            BuiltinMessage::Minus => "minus",
            BuiltinMessage::Times => "times",
            BuiltinMessage::Divide => "divide",
            BuiltinMessage::Equals => "equals",
            BuiltinMessage::NotEquals => "notEquals",
            BuiltinMessage::And => "and",
            BuiltinMessage::Or => "or",
            BuiltinMessage::Xor => "xor",
            BuiltinMessage::LessThan => "lessThan",
            BuiltinMessage::LessThanOrEquals => "lessThanOrEquals",
            BuiltinMessage::GreaterThan => "greaterThan",
            BuiltinMessage::GreaterThanOrEquals => "greaterThanOrEquals",
            BuiltinMessage::Negate => "negate",
            BuiltinMessage::Factorial => "factorial",
            BuiltinMessage::Log => "log",
            BuiltinMessage::Concat => "concat",
        }
    }

    /// Look up a builtin by its message string.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|message| message.name() == name)
    }

    pub fn lowering(self) -> Lowering {
        match self {
            BuiltinMessage::RawVal => Lowering::Unbox,
            BuiltinMessage::Plus => Lowering::Infix("+"),
            BuiltinMessage::Minus => Lowering::Infix("-"),
            BuiltinMessage::Times => Lowering::Infix("*"),
            BuiltinMessage::Divide => Lowering::Infix("/"),
            BuiltinMessage::Equals => Lowering::Infix("="),
            BuiltinMessage::NotEquals => Lowering::Infix("<>"),
            BuiltinMessage::And => Lowering::Binary("AND"),
            BuiltinMessage::Or => Lowering::Binary("OR"),
            BuiltinMessage::Xor => Lowering::Binary("XOR"),
            BuiltinMessage::LessThan => Lowering::Infix("<"),
            BuiltinMessage::LessThanOrEquals => Lowering::Infix("<="),
            BuiltinMessage::GreaterThan => Lowering::Infix(">"),
            BuiltinMessage::GreaterThanOrEquals => Lowering::Infix(">="),
            BuiltinMessage::Negate => Lowering::Unary("NOT"),
            BuiltinMessage::Factorial => Lowering::Unary("FACT"),
            BuiltinMessage::Log => Lowering::Unary("LOG"),
            BuiltinMessage::Concat => Lowering::Binary("CONCAT"),
        }
    }

    /// Whether the answer is a function awaiting a second boxed operand.
    pub fn takes_operand(self) -> bool {
        matches!(self.lowering(), Lowering::Infix(_) | Lowering::Binary(_))
    }
}

impl fmt::Display for BuiltinMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip_through_lookup() {
        for message in BuiltinMessage::ALL {
            assert_eq!(BuiltinMessage::from_name(message.name()), Some(message));
        }
        assert_eq!(BuiltinMessage::from_name("get"), None);
        assert_eq!(BuiltinMessage::from_name("Plus"), None);
    }

    #[test]
    fn unary_messages_take_no_operand() {
        assert!(!BuiltinMessage::Negate.takes_operand());
        assert!(!BuiltinMessage::Factorial.takes_operand());
        assert!(!BuiltinMessage::Log.takes_operand());
        assert!(!BuiltinMessage::RawVal.takes_operand());
        assert!(BuiltinMessage::Plus.takes_operand());
        assert!(BuiltinMessage::Concat.takes_operand());
    }

    #[test]
    fn comparison_lowering() {
        assert_eq!(BuiltinMessage::GreaterThanOrEquals.lowering(), Lowering::Infix(">="));
        assert_eq!(BuiltinMessage::NotEquals.lowering(), Lowering::Infix("<>"));
        assert_eq!(BuiltinMessage::Xor.lowering(), Lowering::Binary("XOR"));
    }
}
