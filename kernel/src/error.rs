use std::fmt::Display;

use error_stack::Context;

#[derive(Debug)]
pub enum KernelError {
    Concurrency,
    Timeout,
    NotFound,
    Unavailable,
    Invalid,
    Internal,
}

impl Display for KernelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KernelError::Concurrency => write!(f, "Concurrency error"),
            KernelError::Timeout => write!(f, "Process timed out"),
            KernelError::NotFound => write!(f, "Requested entity not found"),
            KernelError::Unavailable => write!(f, "Vehicle is not available for the period"),
            KernelError::Invalid => write!(f, "Invalid input"),
            KernelError::Internal => write!(f, "Internal kernel error"),
        }
    }
}

impl Context for KernelError {}
