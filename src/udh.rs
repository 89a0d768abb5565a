//! Concatenated SMS user data headers.
//!
//! Every part of a multipart message carries `050003` (IE "concatenated SMS,
//! 8-bit reference"), the shared reference as two hex digits, then the part
//! count and this part's index as two decimal digits each.

use rand::Rng;
use std::fmt;

/// Information element prefix for 8-bit reference concatenation.
pub const CONCAT_IEI: &str = "050003";

/// Source of the per-message reference byte.
pub trait ReferenceSource {
    fn next_reference(&mut self) -> u8;
}
impl<F> ReferenceSource for F where F: FnMut() -> u8 {
    fn next_reference(&mut self) -> u8 {
        self()
    }
}

/// Draws references from the thread-local RNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomReference;
impl ReferenceSource for RandomReference {
    fn next_reference(&mut self) -> u8 {
        rand::thread_rng().gen()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConcatHeader {
    pub reference: u8,
    pub total: u8,
    pub index: u8
}
impl ConcatHeader {
    pub fn new(reference: u8, total: u8, index: u8) -> Self {
        ConcatHeader { reference, total, index }
    }
    pub fn reference_hex(&self) -> String {
        format!("{:02X}", self.reference)
    }
}
impl fmt::Display for ConcatHeader {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{:02X}{:02}{:02}", CONCAT_IEI, self.reference, self.total, self.index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_reference_as_hex_and_counts_as_decimal() {
        assert_eq!(ConcatHeader::new(0xA7, 3, 1).to_string(), "050003A70301");
        assert_eq!(ConcatHeader::new(0x0b, 12, 10).to_string(), "0500030B1210");
    }
    #[test]
    fn reference_hex_is_uppercase_and_padded() {
        assert_eq!(ConcatHeader::new(0x05, 2, 2).reference_hex(), "05");
        assert_eq!(ConcatHeader::new(0xfe, 2, 2).reference_hex(), "FE");
    }
    #[test]
    fn closures_are_reference_sources() {
        let mut n = 0u8;
        let mut src = || { n += 1; n };
        assert_eq!(src.next_reference(), 1);
        assert_eq!(src.next_reference(), 2);
    }
}
