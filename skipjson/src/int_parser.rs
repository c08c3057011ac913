// SPDX-License-Identifier: Apache-2.0

/// Why a number payload could not be read as an integer.
#[derive(Debug, PartialEq, Eq, Clone)]
pub(crate) enum IntegerError {
    /// A character other than a base-10 digit was found, typically a `.`.
    InvalidDigit,
    /// The value does not fit in an `i64`.
    Overflow,
}

/// Parses the unsigned digit run the lexer produces, without panicking.
///
/// An empty slice reads as zero; the lexer never emits one.
pub(crate) const fn parse_i64(src: &[u8]) -> Result<i64, IntegerError> {
    let mut digits = src;
    let mut result: i64 = 0;
    while let Some((&byte, rest)) = digits.split_first() {
        let digit = match byte {
            b'0'..=b'9' => (byte - b'0') as i64,
            _ => return Err(IntegerError::InvalidDigit),
        };

        result = match result.checked_mul(10) {
            Some(val) => val,
            None => return Err(IntegerError::Overflow),
        };
        result = match result.checked_add(digit) {
            Some(val) => val,
            None => return Err(IntegerError::Overflow),
        };

        digits = rest;
    }

    Ok(result)
}
