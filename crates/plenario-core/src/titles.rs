//! Generated titles for sessions, minutes, and protocol references.
//!
//! Session titles spell the session number as a feminine Portuguese ordinal
//! ("Vigésima Terceira Sessão Ordinária de 2025"); minutes prepend "Ata da".
//! Ordinals compose centenas, dezenas, and unidades for 1..=999.

use crate::enums::{DocumentKind, SessionKind};
use crate::errors::CoreError;

const UNITS: [&str; 9] = [
    "Primeira",
    "Segunda",
    "Terceira",
    "Quarta",
    "Quinta",
    "Sexta",
    "Sétima",
    "Oitava",
    "Nona",
];

const TENS: [&str; 9] = [
    "Décima",
    "Vigésima",
    "Trigésima",
    "Quadragésima",
    "Quinquagésima",
    "Sexagésima",
    "Septuagésima",
    "Octogésima",
    "Nonagésima",
];

const HUNDREDS: [&str; 9] = [
    "Centésima",
    "Ducentésima",
    "Trecentésima",
    "Quadringentésima",
    "Quingentésima",
    "Sexcentésima",
    "Septingentésima",
    "Octingentésima",
    "Nongentésima",
];

/// Spell `n` as a feminine Portuguese ordinal.
///
/// # Errors
///
/// Returns `CoreError::Validation` when `n` is 0 or above 999.
pub fn feminine_ordinal(n: u32) -> Result<String, CoreError> {
    if n == 0 || n > 999 {
        return Err(CoreError::Validation(format!(
            "ordinal out of range (1..=999): {n}"
        )));
    }

    let mut parts = Vec::with_capacity(3);
    let hundreds = (n / 100) as usize;
    let tens = (n / 10 % 10) as usize;
    let units = (n % 10) as usize;

    if hundreds > 0 {
        parts.push(HUNDREDS[hundreds - 1]);
    }
    if tens > 0 {
        parts.push(TENS[tens - 1]);
    }
    if units > 0 {
        parts.push(UNITS[units - 1]);
    }

    Ok(parts.join(" "))
}

/// Title for a session: "Vigésima Terceira Sessão Ordinária de 2025".
///
/// # Errors
///
/// Returns `CoreError::Validation` when `number` is out of ordinal range.
pub fn session_title(number: u32, kind: SessionKind, year: i32) -> Result<String, CoreError> {
    let ordinal = feminine_ordinal(number)?;
    Ok(format!("{ordinal} Sessão {} de {year}", kind.label()))
}

/// Heading for session minutes: "Ata da Vigésima Terceira Sessão Ordinária de 2025".
///
/// # Errors
///
/// Returns `CoreError::Validation` when `number` is out of ordinal range.
pub fn minutes_title(number: u32, kind: SessionKind, year: i32) -> Result<String, CoreError> {
    Ok(format!("Ata da {}", session_title(number, kind, year)?))
}

/// Protocol reference for a document: "Moção nº 12/2025".
#[must_use]
pub fn document_reference(kind: DocumentKind, number: i64, year: i32) -> String {
    format!("{} nº {number}/{year}", kind.label())
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(1, "Primeira")]
    #[case(9, "Nona")]
    #[case(10, "Décima")]
    #[case(11, "Décima Primeira")]
    #[case(23, "Vigésima Terceira")]
    #[case(50, "Quinquagésima")]
    #[case(78, "Septuagésima Oitava")]
    #[case(99, "Nonagésima Nona")]
    #[case(100, "Centésima")]
    #[case(101, "Centésima Primeira")]
    #[case(345, "Trecentésima Quadragésima Quinta")]
    #[case(999, "Nongentésima Nonagésima Nona")]
    fn spells_ordinals(#[case] n: u32, #[case] expected: &str) {
        assert_eq!(feminine_ordinal(n).unwrap(), expected);
    }

    #[rstest]
    #[case(0)]
    #[case(1000)]
    fn ordinal_out_of_range(#[case] n: u32) {
        assert!(feminine_ordinal(n).is_err());
    }

    #[test]
    fn session_title_format() {
        assert_eq!(
            session_title(23, SessionKind::Ordinaria, 2025).unwrap(),
            "Vigésima Terceira Sessão Ordinária de 2025"
        );
        assert_eq!(
            session_title(2, SessionKind::Extraordinaria, 2026).unwrap(),
            "Segunda Sessão Extraordinária de 2026"
        );
        assert_eq!(
            session_title(1, SessionKind::Solene, 2025).unwrap(),
            "Primeira Sessão Solene de 2025"
        );
    }

    #[test]
    fn minutes_title_format() {
        assert_eq!(
            minutes_title(23, SessionKind::Ordinaria, 2025).unwrap(),
            "Ata da Vigésima Terceira Sessão Ordinária de 2025"
        );
    }

    #[test]
    fn document_reference_format() {
        assert_eq!(
            document_reference(DocumentKind::Mocao, 12, 2025),
            "Moção nº 12/2025"
        );
        assert_eq!(
            document_reference(DocumentKind::ProjetoDeLei, 7, 2026),
            "Projeto de Lei nº 7/2026"
        );
    }
}
