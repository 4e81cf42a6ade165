//! Pre-write size ceiling

use serde::Serialize;

use crate::errors::{PromptError, Result};

/// 4.5 MiB, below the usual 5 MiB local storage quota
pub const DEFAULT_MAX_WRITE_BYTES: usize = 4_718_592;

/// Rejects writes whose serialized form exceeds `max_bytes`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeGuard {
    max_bytes: usize,
}

impl Default for SizeGuard {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_WRITE_BYTES)
    }
}

impl SizeGuard {
    pub fn new(max_bytes: usize) -> Self {
        Self { max_bytes }
    }

    pub fn max_bytes(&self) -> usize {
        self.max_bytes
    }

    pub fn fits(&self, candidate_bytes: usize) -> bool {
        candidate_bytes <= self.max_bytes
    }

    /// Measure `value` as compact JSON and fail with `QuotaError` above the ceiling
    pub fn check<T: Serialize + ?Sized>(&self, value: &T) -> Result<usize> {
        let size = serde_json::to_vec(value)?.len();
        if self.fits(size) {
            Ok(size)
        } else {
            Err(PromptError::QuotaError {
                size,
                limit: self.max_bytes,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MIB: usize = 1024 * 1024;

    #[test]
    fn test_default_ceiling() {
        assert_eq!(SizeGuard::default().max_bytes(), 4 * MIB + MIB / 2);
    }

    #[test]
    fn test_fits_boundary() {
        let guard = SizeGuard::new(100);
        assert!(guard.fits(0));
        assert!(guard.fits(100));
        assert!(!guard.fits(101));
    }

    #[test]
    fn test_five_mib_rejected() {
        assert!(!SizeGuard::default().fits(5 * MIB));
    }

    #[test]
    fn test_check_measures_json() {
        let guard = SizeGuard::new(7);
        assert_eq!(guard.check(&["ab"]).unwrap(), 6);

        let err = guard.check(&["abcd"]).unwrap_err();
        match err {
            PromptError::QuotaError { size, limit } => {
                assert_eq!(size, 8);
                assert_eq!(limit, 7);
            },
            other => panic!("Expected QuotaError, got {:?}", other),
        }
    }
}
