//! T.C. Kimlik No checksum algorithm
//!
//! Digits are numbered 1..=11, most significant first. Digits 10 and 11 are
//! check digits derived from digits 1..=9:
//!
//! ```text
//! d10 = ((d1 + d3 + d5 + d7 + d9) * 7 - (d2 + d4 + d6 + d8)) mod 10
//! d11 = (d1 + d3 + ... + d9 + d2 + ... + d8 + d10) mod 10
//! ```
//!
//! The subtraction in `d10` goes negative for inputs like `1909090901x`,
//! so the modulo is Euclidean.
//!
//! # Examples
//!
//! ```
//! use tckimlik::core::services::checksum;
//!
//! assert_eq!(checksum::check_digits(&[1, 0, 0, 0, 0, 0, 0, 0, 1]), (4, 6));
//! assert!(checksum::is_valid(&[1, 0, 0, 0, 0, 0, 0, 0, 1, 4, 6]));
//! ```

/// Weight applied to the sum of the odd-positioned digits
const ODD_POSITION_WEIGHT: i32 = 7;

/// Compute the two check digits (positions 10 and 11) for the first nine digits
#[must_use]
pub fn check_digits(prefix: &[u8; 9]) -> (u8, u8) {
    // positions 1,3,5,7,9 (historically called the "even" sum)
    let even_sum: i32 = prefix.iter().step_by(2).map(|&d| i32::from(d)).sum();
    // positions 2,4,6,8
    let odd_sum: i32 = prefix.iter().skip(1).step_by(2).map(|&d| i32::from(d)).sum();

    let tenth = (even_sum * ODD_POSITION_WEIGHT - odd_sum).rem_euclid(10);
    let eleventh = (even_sum + odd_sum + tenth).rem_euclid(10);

    (to_digit(tenth), to_digit(eleventh))
}

/// Check whether the 11 digits form a valid identity number
///
/// A leading zero is never valid.
#[must_use]
pub fn is_valid(digits: &[u8; 11]) -> bool {
    if digits[0] == 0 {
        return false;
    }

    let mut prefix = [0u8; 9];
    prefix.copy_from_slice(&digits[..9]);
    let (tenth, eleventh) = check_digits(&prefix);

    digits[9] == tenth && digits[10] == eleventh
}

fn to_digit(value: i32) -> u8 {
    // rem_euclid(10) keeps the value in 0..=9
    u8::try_from(value).unwrap_or_default()
}
