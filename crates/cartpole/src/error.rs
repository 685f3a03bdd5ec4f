use thiserror::Error;

/// Errors reported by [`crate::CartPole`].
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartPoleError {
    /// `step` was called while no episode is running, either before the
    /// first `reset` or after the previous episode ended.
    #[error("cannot step a finished episode: call reset first")]
    IllegalState,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_names_the_remedy() {
        let msg = CartPoleError::IllegalState.to_string();
        assert!(msg.contains("reset"), "unexpected message: {msg}");
    }
}
