//! Error types for the debias-window crate.

/// Error type for all fallible operations in the debias-window crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WindowError {
    /// Returned when a series length is not an exact multiple of 365.
    #[error(
        "series length {len} is not a multiple of 365; day-of-year pooling requires whole \
         no-leap years (drop Feb 29 or disable 31-day interval scaling)"
    )]
    NotWholeYears {
        /// The offending series length.
        len: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_not_whole_years() {
        let e = WindowError::NotWholeYears { len: 366 };
        assert_eq!(
            e.to_string(),
            "series length 366 is not a multiple of 365; day-of-year pooling requires whole \
             no-leap years (drop Feb 29 or disable 31-day interval scaling)"
        );
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<WindowError>();
    }
}
