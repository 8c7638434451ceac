use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HashError {
    #[error("input of {bits} bits exceeds the configured capacity of {max_bits} bits")]
    InputTooLarge { bits: u64, max_bits: u64 },
    #[error("negative input rejected by sign policy 'reject'")]
    NegativeInput,
    #[error("non-canonical field element: {0}")]
    NonCanonicalElement(String),
    #[error("digest byte length {0} is not a non-zero multiple of 32")]
    InvalidDigestLength(usize),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("parameter set '{0}' not found")]
    UnknownParams(String),
}

impl HashError {
    /// True for errors that mean the input integer lies outside the hash domain.
    pub fn is_out_of_domain(&self) -> bool {
        matches!(
            self,
            HashError::InputTooLarge { .. } | HashError::NegativeInput
        )
    }
}
