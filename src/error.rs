//! Error types for comparer construction and comparison.
//!
//! Two kinds of failure are distinguished:
//!
//! - [`ConstructionError`]: a combinator was built with a missing required
//!   argument, or with too few members. Raised immediately by the fallible
//!   constructor, never deferred to the first comparison.
//! - [`NullElementError`]: a comparer that forbids absent elements was asked
//!   to compare one. Raised at compare time because it depends on the data.
//!
//! [`ComparerError`] unifies both so that `try_compare` and constructors can
//! share one error type where convenient.

/// Identifies which operand of a comparison was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Operand {
    /// The left-hand operand.
    Left,
    /// The right-hand operand.
    Right,
    /// Both operands.
    Both,
}

impl Operand {
    /// Determines the rejected operand from the absence of each side.
    ///
    /// Returns `None` when both operands are present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordkit::error::Operand;
    ///
    /// assert_eq!(Operand::from_absence(true, false), Some(Operand::Left));
    /// assert_eq!(Operand::from_absence(false, false), None);
    /// ```
    #[must_use]
    pub const fn from_absence(left_absent: bool, right_absent: bool) -> Option<Self> {
        match (left_absent, right_absent) {
            (true, true) => Some(Self::Both),
            (true, false) => Some(Self::Left),
            (false, true) => Some(Self::Right),
            (false, false) => None,
        }
    }
}

impl std::fmt::Display for Operand {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Left => write!(formatter, "left operand"),
            Self::Right => write!(formatter, "right operand"),
            Self::Both => write!(formatter, "both operands"),
        }
    }
}

/// Represents an error raised while constructing a comparer.
///
/// # Examples
///
/// ```rust
/// use ordkit::error::ConstructionError;
///
/// let error = ConstructionError::MissingArgument {
///     combinator: "ReverseComparer",
///     argument: "comparer",
/// };
/// assert_eq!(
///     format!("{error}"),
///     "ReverseComparer: required argument `comparer` is missing"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConstructionError {
    /// A required argument was not supplied.
    MissingArgument {
        /// The name of the combinator being constructed.
        combinator: &'static str,
        /// The name of the missing argument.
        argument: &'static str,
    },
    /// A chain was given fewer members than it requires.
    TooFewComparers {
        /// The minimum number of members.
        required: usize,
        /// The number of members supplied.
        actual: usize,
    },
}

impl std::fmt::Display for ConstructionError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingArgument {
                combinator,
                argument,
            } => write!(
                formatter,
                "{combinator}: required argument `{argument}` is missing"
            ),
            Self::TooFewComparers { required, actual } => write!(
                formatter,
                "ChainedComparer: at least {required} comparers are required, got {actual}"
            ),
        }
    }
}

impl std::error::Error for ConstructionError {}

/// Represents an absent element handed to a comparer that forbids them.
///
/// # Examples
///
/// ```rust
/// use ordkit::error::{NullElementError, Operand};
///
/// let error = NullElementError {
///     combinator: "NonNullKeyComparer",
///     operand: Operand::Right,
/// };
/// assert_eq!(
///     format!("{error}"),
///     "NonNullKeyComparer: absent element in right operand"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NullElementError {
    /// The name of the comparer that rejected the comparison.
    pub combinator: &'static str,
    /// Which operand was absent.
    pub operand: Operand,
}

impl std::fmt::Display for NullElementError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "{}: absent element in {}",
            self.combinator, self.operand
        )
    }
}

impl std::error::Error for NullElementError {}

/// Represents any error produced by this crate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComparerError {
    /// The comparer could not be constructed.
    Construction(ConstructionError),
    /// The comparer rejected an absent element.
    NullElement(NullElementError),
}

impl std::fmt::Display for ComparerError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Construction(error) => write!(formatter, "{error}"),
            Self::NullElement(error) => write!(formatter, "{error}"),
        }
    }
}

impl std::error::Error for ComparerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Construction(error) => Some(error),
            Self::NullElement(error) => Some(error),
        }
    }
}

impl From<ConstructionError> for ComparerError {
    fn from(error: ConstructionError) -> Self {
        Self::Construction(error)
    }
}

impl From<NullElementError> for ComparerError {
    fn from(error: NullElementError) -> Self {
        Self::NullElement(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_missing_argument_display() {
        let error = ConstructionError::MissingArgument {
            combinator: "KeyComparer",
            argument: "selector",
        };
        assert_eq!(
            format!("{error}"),
            "KeyComparer: required argument `selector` is missing"
        );
    }

    #[test]
    fn test_too_few_comparers_display() {
        let error = ConstructionError::TooFewComparers {
            required: 2,
            actual: 1,
        };
        assert_eq!(
            format!("{error}"),
            "ChainedComparer: at least 2 comparers are required, got 1"
        );
    }

    #[test]
    fn test_null_element_display_both() {
        let error = NullElementError {
            combinator: "NonNullKeyComparer",
            operand: Operand::Both,
        };
        assert_eq!(
            format!("{error}"),
            "NonNullKeyComparer: absent element in both operands"
        );
    }

    #[test]
    fn test_comparer_error_display_delegates() {
        let inner = NullElementError {
            combinator: "NonNullKeyComparer",
            operand: Operand::Left,
        };
        let error = ComparerError::from(inner);
        assert_eq!(format!("{error}"), format!("{inner}"));
    }

    #[test]
    fn test_comparer_error_source() {
        let error = ComparerError::from(ConstructionError::TooFewComparers {
            required: 2,
            actual: 0,
        });
        assert!(error.source().is_some());
    }

    #[test]
    fn test_operand_from_absence() {
        assert_eq!(Operand::from_absence(true, true), Some(Operand::Both));
        assert_eq!(Operand::from_absence(false, true), Some(Operand::Right));
        assert_eq!(Operand::from_absence(false, false), None);
    }

    #[test]
    fn test_construction_error_equality() {
        let error1 = ConstructionError::MissingArgument {
            combinator: "ReverseComparer",
            argument: "comparer",
        };
        let error2 = error1.clone();
        let error3 = ConstructionError::TooFewComparers {
            required: 2,
            actual: 1,
        };
        assert_eq!(error1, error2);
        assert_ne!(error1, error3);
    }
}
