//! 三個領域的計分規則。
//!
//! 姓名用畢達哥拉斯 1–9 循環對照表，車牌字母用字母序號 (A=1 … Z=26)。
//! 兩者刻意分開實作，不要合併。

use crate::domain::model::Domain;
use crate::domain::ports::Calculator;

// A..=Z
const PYTHAGOREAN_VALUES: [u8; 26] = [
    1, 2, 3, 4, 5, 6, 7, 8, 9, // A-I
    1, 2, 3, 4, 5, 6, 7, 8, 9, // J-R
    1, 2, 3, 4, 5, 6, 7, 8, // S-Z
];

/// 姓名字母值；非 A–Z 字元為 0
pub fn name_letter_value(c: char) -> u64 {
    let upper = c.to_ascii_uppercase();
    if upper.is_ascii_uppercase() {
        PYTHAGOREAN_VALUES[(upper as u8 - b'A') as usize] as u64
    } else {
        0
    }
}

/// 車牌字元值：數字取本身，字母取字母序號，其餘為 0
pub fn vehicle_char_value(c: char) -> u64 {
    if let Some(digit) = c.to_digit(10) {
        return digit as u64;
    }
    let upper = c.to_ascii_uppercase();
    if upper.is_ascii_uppercase() {
        (upper as u8 - b'A' + 1) as u64
    } else {
        0
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MobileCalculator;

impl Calculator for MobileCalculator {
    fn domain(&self) -> Domain {
        Domain::Mobile
    }

    fn score(&self, input: &str) -> u64 {
        input
            .chars()
            .filter_map(|c| c.to_digit(10))
            .map(u64::from)
            .sum()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NameCalculator;

impl Calculator for NameCalculator {
    fn domain(&self) -> Domain {
        Domain::Name
    }

    fn score(&self, input: &str) -> u64 {
        input.chars().map(name_letter_value).sum()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct VehicleCalculator;

impl Calculator for VehicleCalculator {
    fn domain(&self) -> Domain {
        Domain::Vehicle
    }

    fn score(&self, input: &str) -> u64 {
        input.chars().map(vehicle_char_value).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pythagorean_table() {
        let groups = [
            ("AJS", 1),
            ("BKT", 2),
            ("CLU", 3),
            ("DMV", 4),
            ("ENW", 5),
            ("FOX", 6),
            ("GPY", 7),
            ("HQZ", 8),
            ("IR", 9),
        ];
        for (letters, expected) in groups {
            for c in letters.chars() {
                assert_eq!(name_letter_value(c), expected, "upper {}", c);
                assert_eq!(
                    name_letter_value(c.to_ascii_lowercase()),
                    expected,
                    "lower {}",
                    c
                );
            }
        }
    }

    #[test]
    fn test_name_ignores_non_letters() {
        assert_eq!(name_letter_value(' '), 0);
        assert_eq!(name_letter_value('7'), 0);
        assert_eq!(name_letter_value('-'), 0);
        assert_eq!(name_letter_value('é'), 0);
        assert_eq!(NameCalculator.score("Ann-Marie 2"), 1 + 5 + 5 + 4 + 1 + 9 + 9 + 5);
    }

    #[test]
    fn test_vehicle_positional_letters() {
        assert_eq!(vehicle_char_value('A'), 1);
        assert_eq!(vehicle_char_value('k'), 11);
        assert_eq!(vehicle_char_value('Z'), 26);
        assert_eq!(vehicle_char_value('7'), 7);
        assert_eq!(vehicle_char_value('-'), 0);
        assert_eq!(VehicleCalculator.score("KA-01 AB"), 11 + 1 + 0 + 1 + 1 + 2);
    }

    #[test]
    fn test_mobile_strips_non_digits() {
        assert_eq!(MobileCalculator.score("98765 43210"), 45);
        assert_eq!(MobileCalculator.score("+91-98765-43210"), 55);
        assert_eq!(MobileCalculator.score("no digits"), 0);
    }

    #[test]
    fn test_name_and_vehicle_scores_differ() {
        assert_eq!(NameCalculator.score("ZZ"), 16);
        assert_eq!(VehicleCalculator.score("ZZ"), 52);
        assert_eq!(NameCalculator.score("S"), 1);
        assert_eq!(VehicleCalculator.score("S"), 19);
    }
}
