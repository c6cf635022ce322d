//! 사용자 이름/비밀번호 형식 검증.
//!
//! 부수효과가 없는 순수 함수입니다.
//!
//! # 규칙
//!
//! - 사용자 이름: 4~10자, 영문 소문자와 숫자만 허용
//! - 비밀번호: 8~15자, 영문 대소문자와 숫자만 허용,
//!   소문자/대문자/숫자가 각각 최소 1개 포함

use crate::error::AuthError;

/// 사용자 이름 최소 길이
pub const USERNAME_MIN_LEN: usize = 4;
/// 사용자 이름 최대 길이
pub const USERNAME_MAX_LEN: usize = 10;
/// 비밀번호 최소 길이
pub const PASSWORD_MIN_LEN: usize = 8;
/// 비밀번호 최대 길이
pub const PASSWORD_MAX_LEN: usize = 15;

/// 사용자 이름 검증.
///
/// # Errors
///
/// 길이 또는 문자 규칙을 위반하면 `AuthError::InvalidUsername`
pub fn validate_username(username: &str) -> Result<(), AuthError> {
    let len = username.chars().count();
    if !(USERNAME_MIN_LEN..=USERNAME_MAX_LEN).contains(&len) {
        return Err(AuthError::InvalidUsername);
    }

    if !username
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
    {
        return Err(AuthError::InvalidUsername);
    }

    Ok(())
}

/// 비밀번호 검증.
///
/// # Errors
///
/// 길이, 허용 문자, 문자 종류 포함 규칙 중 하나라도 위반하면
/// `AuthError::InvalidPassword`
pub fn validate_password(password: &str) -> Result<(), AuthError> {
    let len = password.chars().count();
    if !(PASSWORD_MIN_LEN..=PASSWORD_MAX_LEN).contains(&len) {
        return Err(AuthError::InvalidPassword);
    }

    if !password.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(AuthError::InvalidPassword);
    }

    let has_lower = password.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = password.chars().any(|c| c.is_ascii_uppercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    if !(has_lower && has_upper && has_digit) {
        return Err(AuthError::InvalidPassword);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_valid_usernames() {
        assert!(validate_username("validuser1").is_ok());
        assert!(validate_username("abcd").is_ok());
        assert!(validate_username("1234567890").is_ok());
    }

    #[test]
    fn test_invalid_usernames() {
        let invalid = [
            "abc",          // 너무 짧음
            "abcdefghijkl", // 너무 김
            "user$",        // 특수 문자 포함
            "User1234",     // 대문자 포함
            "user name",    // 공백 포함
            "",
            "사용자이름",
        ];

        for username in invalid {
            assert_eq!(
                validate_username(username),
                Err(AuthError::InvalidUsername),
                "username {:?} should be rejected",
                username
            );
        }
    }

    #[test]
    fn test_valid_passwords() {
        assert!(validate_password("ValidPass123").is_ok());
        assert!(validate_password("aB345678").is_ok());
        assert!(validate_password("Abcdefghijklm12").is_ok());
    }

    #[test]
    fn test_invalid_passwords() {
        let invalid = [
            "short",                // 너무 짧음
            "veryverylongpassword", // 너무 김
            "nopassword123",        // 대문자 없음
            "NOLOWERCASE123",       // 소문자 없음
            "Abcdefghijklmno",      // 15자, 숫자 없음
            "ABCDEFG1",             // 8자, 소문자 없음
            "NoDigitsHere",         // 숫자 없음
            "Valid Pass123",        // 공백 포함
            "Valid@Pass123",        // 특수 문자 포함
            "Valid패스워드123",
        ];

        for password in invalid {
            assert_eq!(
                validate_password(password),
                Err(AuthError::InvalidPassword),
                "password {:?} should be rejected",
                password
            );
        }
    }

    #[test]
    fn test_length_boundaries() {
        assert!(validate_username("abc").is_err());
        assert!(validate_username("abcd").is_ok());
        assert!(validate_username("abcdefghij").is_ok());
        assert!(validate_username("abcdefghijk").is_err());

        assert!(validate_password("aB34567").is_err());
        assert!(validate_password("aB345678").is_ok());
        assert!(validate_password("aB3456789012345").is_ok());
        assert!(validate_password("aB34567890123456").is_err());
    }

    proptest! {
        #[test]
        fn prop_well_formed_username_accepted(name in "[a-z0-9]{4,10}") {
            prop_assert!(validate_username(&name).is_ok());
        }

        #[test]
        fn prop_short_username_rejected(name in "[a-z0-9]{0,3}") {
            prop_assert_eq!(validate_username(&name), Err(AuthError::InvalidUsername));
        }

        #[test]
        fn prop_long_username_rejected(name in "[a-z0-9]{11,40}") {
            prop_assert_eq!(validate_username(&name), Err(AuthError::InvalidUsername));
        }

        #[test]
        fn prop_username_with_foreign_char_rejected(
            name in "[a-z0-9]{2,4}[A-Z !@#$%_.-][a-z0-9]{1,4}"
        ) {
            prop_assert_eq!(validate_username(&name), Err(AuthError::InvalidUsername));
        }

        #[test]
        fn prop_well_formed_password_accepted(pw in "[a-z][A-Z][0-9][a-zA-Z0-9]{5,12}") {
            prop_assert!(validate_password(&pw).is_ok());
        }

        #[test]
        fn prop_password_without_uppercase_rejected(pw in "[a-z0-9]{8,15}") {
            prop_assert_eq!(validate_password(&pw), Err(AuthError::InvalidPassword));
        }

        #[test]
        fn prop_password_without_lowercase_rejected(pw in "[A-Z0-9]{8,15}") {
            prop_assert_eq!(validate_password(&pw), Err(AuthError::InvalidPassword));
        }

        #[test]
        fn prop_password_without_digit_rejected(pw in "[a-zA-Z]{8,15}") {
            prop_assert_eq!(validate_password(&pw), Err(AuthError::InvalidPassword));
        }

        #[test]
        fn prop_long_password_rejected(pw in "[a-z][A-Z][0-9][a-zA-Z0-9]{13,30}") {
            prop_assert_eq!(validate_password(&pw), Err(AuthError::InvalidPassword));
        }

        #[test]
        fn prop_password_with_symbol_rejected(pw in "[a-z][A-Z][0-9][a-zA-Z0-9]{2,5}[ !@#$%^&*_-][a-zA-Z0-9]{0,4}") {
            prop_assert_eq!(validate_password(&pw), Err(AuthError::InvalidPassword));
        }

        #[test]
        fn prop_validation_is_deterministic(s in "\\PC{0,20}") {
            prop_assert_eq!(validate_username(&s), validate_username(&s));
            prop_assert_eq!(validate_password(&s), validate_password(&s));
        }
    }
}
