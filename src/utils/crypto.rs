//! Password generation

use rand::Rng;

use crate::constants::MAX_PASSWORD_LENGTH;
use crate::error::{AppError, AppResult};
use crate::utils::validation::validate_tsv_field;

/// Alphabet and length used to generate contestant passwords
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordPolicy {
    alphabet: Vec<char>,
    length: usize,
}

impl PasswordPolicy {
    pub fn new(alphabet: &str, length: usize) -> AppResult<Self> {
        // Passwords end up in accounts.tsv.
        validate_tsv_field(alphabet)
            .map_err(|reason| AppError::Validation(format!("password alphabet {reason}")))?;

        let mut chars: Vec<char> = alphabet.chars().collect();
        chars.sort_unstable();
        chars.dedup();

        if chars.is_empty() {
            return Err(AppError::Validation(
                "password alphabet must not be empty".to_string(),
            ));
        }
        if length == 0 || length > MAX_PASSWORD_LENGTH {
            return Err(AppError::Validation(format!(
                "password length must be between 1 and {MAX_PASSWORD_LENGTH}"
            )));
        }

        Ok(Self {
            alphabet: chars,
            length,
        })
    }

    /// Generate a password drawn uniformly from the alphabet
    pub fn generate(&self) -> String {
        let mut rng = rand::rng();

        (0..self.length)
            .map(|_| self.alphabet[rng.random_range(0..self.alphabet.len())])
            .collect()
    }

    pub fn allows(&self, c: char) -> bool {
        self.alphabet.binary_search(&c).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_password() {
        let policy = PasswordPolicy::new("ab01", 12).unwrap();
        let pass1 = policy.generate();
        let pass2 = policy.generate();

        assert_eq!(pass1.chars().count(), 12);
        assert_eq!(pass2.chars().count(), 12);
        assert!(pass1.chars().all(|c| policy.allows(c)));
        assert!(pass2.chars().all(|c| "ab01".contains(c)));
    }

    #[test]
    fn test_single_char_alphabet() {
        let policy = PasswordPolicy::new("x", 5).unwrap();
        assert_eq!(policy.generate(), "xxxxx");
    }

    #[test]
    fn test_non_ascii_alphabet() {
        let policy = PasswordPolicy::new("αβ", 4).unwrap();
        let pass = policy.generate();
        assert_eq!(pass.chars().count(), 4);
        assert!(pass.chars().all(|c| c == 'α' || c == 'β'));
    }

    #[test]
    fn test_reject_bad_policy() {
        assert!(PasswordPolicy::new("", 8).is_err());
        assert!(PasswordPolicy::new("abc", 0).is_err());
        assert!(PasswordPolicy::new("abc", MAX_PASSWORD_LENGTH + 1).is_err());
    }

    #[test]
    fn test_reject_alphabet_breaking_tsv() {
        for alphabet in ["ab\tc", "ab\nc", "ab\rc"] {
            assert!(matches!(
                PasswordPolicy::new(alphabet, 8),
                Err(AppError::Validation(_))
            ));
        }
        assert!(PasswordPolicy::new("ab c", 8).is_ok());
    }
}
