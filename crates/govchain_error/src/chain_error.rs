use alloy_primitives::Address;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChainError {
    #[error("internal error: {}", .0.as_deref().unwrap_or("unknown"))]
    InternalError(Option<String>),
    #[error("genesis error: {0}")]
    GenesisError(String),
    #[error("authorization error: {0}")]
    AuthorizationError(String),
    #[error("tried to remove non-owner {0}")]
    NotAMember(Address),
    #[error("state access error: {0}")]
    StateAccessError(String),
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("serialization error: {0}")]
    SerializationError(String),
}

#[cfg(test)]
mod tests {
    use alloy_primitives::address;

    use super::ChainError;

    #[test]
    fn test_not_a_member_display() {
        let err = ChainError::NotAMember(address!("0x0000000000000000000000000000000000000011"));
        assert_eq!(
            err.to_string(),
            "tried to remove non-owner 0x0000000000000000000000000000000000000011"
        );
    }

    #[test]
    fn test_internal_error_display() {
        assert_eq!(
            ChainError::InternalError(None).to_string(),
            "internal error: unknown"
        );
        assert_eq!(
            ChainError::InternalError(Some("boom".into())).to_string(),
            "internal error: boom"
        );
    }
}
