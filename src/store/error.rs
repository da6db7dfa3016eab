use thiserror::Error;

/// Reasons a [`Store::send`](super::Store::send) is refused.
///
/// A refused send leaves the state untouched and notifies no subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The send was issued while another transition of the same store was
    /// still running (from a reducer or a subscriber).
    #[error("send issued while another transition is in progress")]
    Reentrant,

    /// A borrow obtained from [`Store::state`](super::Store::state) was still
    /// alive when the transition tried to write.
    #[error("state is borrowed elsewhere and cannot be written")]
    StateBorrowed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            StoreError::Reentrant.to_string(),
            "send issued while another transition is in progress"
        );
        assert!(StoreError::StateBorrowed.to_string().contains("borrowed"));
    }
}
