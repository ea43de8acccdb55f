use crate::config::Value;
use std::io;
use std::result;
use thiserror::Error;

pub type Result<T> = result::Result<T, Error>;

/// Failures of the assembler and the interpreter. None of them is recovered
/// from internally.
#[derive(Debug, Error)]
pub enum Error {
    #[error("line {line}: unknown command {mnemonic}")]
    UnknownCommand { line: usize, mnemonic: String },

    /// `token` is `None` when the operand is missing.
    #[error("line {line}: invalid operand {} for {mnemonic}", .token.as_deref().unwrap_or("<missing>"))]
    InvalidOperand {
        line: usize,
        mnemonic: String,
        token: Option<String>,
    },

    #[error("line {line}: unexpected extra operand {token} for {mnemonic}")]
    ExtraOperand {
        line: usize,
        mnemonic: String,
        token: String,
    },

    #[error("offset {offset}: unknown opcode 0x{tag:02x}")]
    UnknownOpcode { offset: usize, tag: u8 },

    #[error("offset {offset}: stack underflow in {operation}")]
    StackUnderflow {
        offset: usize,
        operation: &'static str,
    },

    #[error("malformed stream: length {length} is not a multiple of 3")]
    MalformedStream { length: usize },

    #[error("offset {offset}: negative shift amount {amount}")]
    InvalidShift { offset: usize, amount: Value },

    #[error(transparent)]
    Io(#[from] io::Error),
}

impl Error {
    /// True for every operand format failure, extra tokens included.
    pub fn is_invalid_operand(&self) -> bool {
        match self {
            Error::InvalidOperand { .. } | Error::ExtraOperand { .. } => true,
            _ => false,
        }
    }
}
