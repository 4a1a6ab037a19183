//! CPF (Cadastro de Pessoas Físicas) validation.
//!
//! A CPF is 11 digits where the last two are check digits computed by the
//! weighted mod-11 scheme. Inputs may be punctuated (`000.000.000-00`) or
//! bare. Sequences with all digits equal pass the checksum but are not valid
//! CPFs and are rejected explicitly.

use crate::errors::CoreError;

/// Strip punctuation and return the 11 digits, or `None` when the input has
/// the wrong shape.
fn digits(cpf: &str) -> Option<Vec<u32>> {
    let digits: Vec<u32> = cpf
        .chars()
        .filter(|c| !matches!(c, '.' | '-' | ' '))
        .map(|c| c.to_digit(10))
        .collect::<Option<Vec<u32>>>()?;
    (digits.len() == 11).then_some(digits)
}

/// Compute one check digit over `slice` with descending weights starting at
/// `slice.len() + 1`.
fn check_digit(slice: &[u32]) -> u32 {
    let weight_start = u32::try_from(slice.len()).unwrap_or(0) + 1;
    let sum: u32 = slice
        .iter()
        .enumerate()
        .map(|(i, d)| d * (weight_start - u32::try_from(i).unwrap_or(0)))
        .sum();
    sum * 10 % 11 % 10
}

/// Check whether `cpf` is a valid CPF number.
#[must_use]
pub fn is_valid(cpf: &str) -> bool {
    validate(cpf).is_ok()
}

/// Validate `cpf`, describing the failure on rejection.
///
/// # Errors
///
/// Returns `CoreError::Validation` for wrong length, non-digit characters,
/// repeated-digit sequences, or check digit mismatch.
pub fn validate(cpf: &str) -> Result<(), CoreError> {
    let Some(digits) = digits(cpf) else {
        return Err(CoreError::Validation(format!(
            "CPF must be 11 digits, got '{cpf}'"
        )));
    };

    if digits.iter().all(|d| *d == digits[0]) {
        return Err(CoreError::Validation(
            "CPF with all digits equal is not valid".into(),
        ));
    }

    if check_digit(&digits[..9]) != digits[9] || check_digit(&digits[..10]) != digits[10] {
        return Err(CoreError::Validation(format!("CPF '{cpf}' failed checksum")));
    }

    Ok(())
}

/// Canonical punctuated form (`000.000.000-00`).
///
/// # Errors
///
/// Returns `CoreError::Validation` if the input is not a valid CPF.
pub fn format(cpf: &str) -> Result<String, CoreError> {
    validate(cpf)?;
    let d: String = cpf.chars().filter(char::is_ascii_digit).collect();
    Ok(format!("{}.{}.{}-{}", &d[0..3], &d[3..6], &d[6..9], &d[9..11]))
}
