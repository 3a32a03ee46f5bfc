use std::error::Error;
use std::fmt;

/// Errors raised by array and stack operations.
///
/// Shape errors are fail-fast: the operation that detects them returns
/// immediately and produces no partial result.
#[derive(Debug, Clone, PartialEq)]
pub enum ArrayError {
    /// Two operands of an element-wise operation differ in length.
    LengthMismatch { left: usize, right: usize },
    /// Two stacks (or a stack and a per-row vector) differ in row count.
    RowCountMismatch { left: usize, right: usize },
    IndexOutOfBounds { index: usize, len: usize },
    /// `start..end` is not a valid range over an array of length `len`.
    InvalidRange { start: usize, end: usize, len: usize },
    /// A stack row does not have the length of the first row.
    RaggedRows { row: usize, expected: usize, found: usize },
    EmptyInput,
    /// A constructor was asked for more elements than an array can hold.
    TooLong { requested: f64, max: usize },
    /// `rand_choice` was asked for a range it cannot sample uniformly.
    InvalidChoice(usize),
    Distribution(String),
}

impl fmt::Display for ArrayError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ArrayError::LengthMismatch { left, right } => {
                write!(f, "Arrays must be same length {} {}", left, right)
            }
            ArrayError::RowCountMismatch { left, right } => {
                write!(f, "Stacks must have the same number of rows {} {}", left, right)
            }
            ArrayError::IndexOutOfBounds { index, len } => {
                write!(f, "Index {} out of bounds for length {}", index, len)
            }
            ArrayError::InvalidRange { start, end, len } => write!(
                f,
                "Invalid range {}..{} for array of length {}",
                start, end, len
            ),
            ArrayError::RaggedRows { row, expected, found } => write!(
                f,
                "Row {} has length {}, expected {}",
                row, found, expected
            ),
            ArrayError::EmptyInput => write!(f, "Input array is empty"),
            ArrayError::TooLong { requested, max } => write!(
                f,
                "Requested {} elements, at most {} fit in an array",
                requested, max
            ),
            ArrayError::InvalidChoice(n) => {
                write!(f, "Cannot choose uniformly from [0, {})", n)
            }
            ArrayError::Distribution(msg) => write!(f, "Distribution error: {}", msg),
        }
    }
}

impl Error for ArrayError {}

pub type Result<T> = std::result::Result<T, ArrayError>;

/// Check that two operand lengths agree.
pub(crate) fn ensure_same_len(left: usize, right: usize) -> Result<()> {
    if left != right {
        return Err(ArrayError::LengthMismatch { left, right });
    }
    Ok(())
}

/// Check that `start..end` lies within `0..len`.
pub(crate) fn ensure_range(start: usize, end: usize, len: usize) -> Result<()> {
    if start > end || end > len {
        return Err(ArrayError::InvalidRange { start, end, len });
    }
    Ok(())
}
