//! Spreadsheet column algebra for the two-letter addressing scheme

use crate::error::{Error, Result};
use crate::{MAX_COLUMN, MIN_COLUMN};
use std::fmt;
use std::str::FromStr;

/// A spreadsheet column in the two-letter addressing scheme ("A".."ZZ")
///
/// Columns are 1-based externally (A = 1, Z = 26, AA = 27, ZZ = 702) and
/// 0-based internally. Instances are immutable; [`ColumnAddress::add`] and
/// [`ColumnAddress::subtract`] produce new instances and fail when the
/// result would leave the valid range.
///
/// # Examples
/// ```
/// use tally_sheets_core::ColumnAddress;
///
/// let col = ColumnAddress::new(28).unwrap();
/// assert_eq!(col.to_string(), "AB");
/// assert_eq!(col.add(2).unwrap().number(), 30);
/// assert!(ColumnAddress::new(703).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ColumnAddress {
    /// Column index (0-based, A=0, ZZ=701)
    index: u16,
}

impl ColumnAddress {
    /// Column "A"
    pub const FIRST: ColumnAddress = ColumnAddress { index: 0 };

    /// Create a column from its 1-based external number
    pub fn new(number: u32) -> Result<Self> {
        if !(MIN_COLUMN..=MAX_COLUMN).contains(&number) {
            return Err(Error::ColumnOutOfRange(number as i64));
        }
        Ok(Self {
            index: (number - 1) as u16,
        })
    }

    /// Create a column from a single letter ('A'..='Z', case-insensitive)
    pub fn from_letter(letter: char) -> Result<Self> {
        if !letter.is_ascii_alphabetic() {
            return Err(Error::InvalidColumnLetters(letter.to_string()));
        }
        let index = letter.to_ascii_uppercase() as u16 - b'A' as u16;
        Ok(Self { index })
    }

    /// The 0-based internal index
    pub fn index(&self) -> u16 {
        self.index
    }

    /// The 1-based external column number
    pub fn number(&self) -> u32 {
        self.index as u32 + 1
    }

    /// Return the column `offset` places to the right
    pub fn add(&self, offset: u32) -> Result<Self> {
        Self::new(self.number() + offset)
    }

    /// Return the column `offset` places to the left
    pub fn subtract(&self, offset: u32) -> Result<Self> {
        let number = self.number() as i64 - offset as i64;
        if number < MIN_COLUMN as i64 {
            return Err(Error::ColumnOutOfRange(number));
        }
        Self::new(number as u32)
    }

    /// Parse a one- or two-letter column reference
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        let mut chars = s.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(c), None, _) => Self::from_letter(c),
            (Some(leading), Some(trailing), None) => {
                if !leading.is_ascii_alphabetic() || !trailing.is_ascii_alphabetic() {
                    return Err(Error::InvalidColumnLetters(s.to_string()));
                }
                let hi = leading.to_ascii_uppercase() as u32 - 'A' as u32 + 1;
                let lo = trailing.to_ascii_uppercase() as u32 - 'A' as u32 + 1;
                Self::new(hi * 26 + lo)
            }
            _ => Err(Error::InvalidColumnLetters(s.to_string())),
        }
    }
}

impl fmt::Display for ColumnAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.index;
        if n < 26 {
            write!(f, "{}", (n as u8 + b'A') as char)
        } else {
            let leading = (n / 26 - 1) as u8 + b'A';
            let trailing = (n % 26) as u8 + b'A';
            write!(f, "{}{}", leading as char, trailing as char)
        }
    }
}

impl FromStr for ColumnAddress {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_render() {
        assert_eq!(ColumnAddress::new(1).unwrap().to_string(), "A");
        assert_eq!(ColumnAddress::new(2).unwrap().to_string(), "B");
        assert_eq!(ColumnAddress::new(26).unwrap().to_string(), "Z");
        assert_eq!(ColumnAddress::new(27).unwrap().to_string(), "AA");
        assert_eq!(ColumnAddress::new(28).unwrap().to_string(), "AB");
        assert_eq!(ColumnAddress::new(52).unwrap().to_string(), "AZ");
        assert_eq!(ColumnAddress::new(53).unwrap().to_string(), "BA");
        assert_eq!(ColumnAddress::new(702).unwrap().to_string(), "ZZ");
    }

    #[test]
    fn test_bounds() {
        assert!(ColumnAddress::new(0).is_err());
        assert!(ColumnAddress::new(703).is_err());
        assert!(ColumnAddress::new(1).is_ok());
        assert!(ColumnAddress::new(702).is_ok());
    }

    #[test]
    fn test_from_letter() {
        assert_eq!(ColumnAddress::from_letter('A').unwrap().number(), 1);
        assert_eq!(ColumnAddress::from_letter('z').unwrap().number(), 26);
        assert!(ColumnAddress::from_letter('1').is_err());
    }

    #[test]
    fn test_parse() {
        assert_eq!(ColumnAddress::parse("AA").unwrap().number(), 27);
        assert_eq!(ColumnAddress::parse("zz").unwrap().number(), 702);
        assert!(ColumnAddress::parse("").is_err());
        assert!(ColumnAddress::parse("AAA").is_err());
        assert!(ColumnAddress::parse("A1").is_err());
    }

    #[test]
    fn test_arithmetic() {
        let c = ColumnAddress::new(3).unwrap();
        assert_eq!(c.add(4).unwrap(), ColumnAddress::new(7).unwrap());
        assert_eq!(c.subtract(2).unwrap(), ColumnAddress::new(1).unwrap());
        assert!(c.subtract(3).is_err());
        assert!(ColumnAddress::new(700).unwrap().add(3).is_err());
    }

    #[test]
    fn test_ordering() {
        assert!(ColumnAddress::new(1).unwrap() < ColumnAddress::new(27).unwrap());
        assert_eq!(
            ColumnAddress::parse("AB").unwrap(),
            ColumnAddress::new(28).unwrap()
        );
    }

    proptest! {
        #[test]
        fn roundtrip_all_columns(n in 1u32..=702) {
            let col = ColumnAddress::new(n).unwrap();
            let reparsed = ColumnAddress::parse(&col.to_string()).unwrap();
            prop_assert_eq!(reparsed.number(), n);
        }

        #[test]
        fn add_matches_construction(n in 1u32..=702, k in 0u32..=800) {
            let col = ColumnAddress::new(n).unwrap();
            match col.add(k) {
                Ok(sum) => {
                    prop_assert!(n + k <= 702);
                    prop_assert_eq!(sum, ColumnAddress::new(n + k).unwrap());
                }
                Err(_) => prop_assert!(n + k > 702),
            }
        }
    }
}
