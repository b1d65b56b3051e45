// src/sizes.rs
//! Legal size descriptor — (min, max, step) triples for bit-length parameters

use serde::{Deserialize, Serialize};

/// Describes the bit lengths a size parameter may take.
///
/// A `step_bits` of zero means the range collapses to the single
/// value `min_bits`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegalSizes {
    pub min_bits: usize,
    pub max_bits: usize,
    pub step_bits: usize,
}

impl LegalSizes {
    pub const fn new(min_bits: usize, max_bits: usize, step_bits: usize) -> Self {
        Self {
            min_bits,
            max_bits,
            step_bits,
        }
    }

    /// Whether `bits` is an acceptable value under this descriptor
    pub fn contains(&self, bits: usize) -> bool {
        if bits < self.min_bits || bits > self.max_bits {
            return false;
        }
        if self.step_bits == 0 {
            return bits == self.min_bits;
        }
        (bits - self.min_bits) % self.step_bits == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stepped_range_membership() {
        let sizes = LegalSizes::new(128, 256, 64);
        assert!(sizes.contains(128));
        assert!(sizes.contains(192));
        assert!(sizes.contains(256));
        assert!(!sizes.contains(160));
        assert!(!sizes.contains(64));
        assert!(!sizes.contains(320));
    }

    #[test]
    fn test_zero_step_is_a_single_value() {
        let sizes = LegalSizes::new(128, 128, 0);
        assert!(sizes.contains(128));
        assert!(!sizes.contains(192));
        assert!(!sizes.contains(256));
    }
}
