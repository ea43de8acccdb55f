//! Translates `<MNEMONIC> <operand>` lines into the 3-byte binary format,
//! writing a `Command,Opcode,Operands` trace row for every instruction.

use crate::config::*;
use crate::error::{Error, Result};
use crate::vm::instruction::Instruction;
use crate::vm::opcodes::Opcode;
use std::fmt;
use std::io::Write;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TraceRecord {
    pub mnemonic: &'static str,
    pub opcode: u8,
    pub operand: Word,
}

impl<'a> From<&'a Instruction> for TraceRecord {
    fn from(instruction: &Instruction) -> Self {
        TraceRecord {
            mnemonic: instruction.opcode.mnemonic(),
            opcode: instruction.opcode.tag(),
            operand: instruction.operand,
        }
    }
}

impl fmt::Display for TraceRecord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{},{},[{}]", self.mnemonic, self.opcode, self.operand)
    }
}

pub struct Assembler<W: Write, L: Write> {
    program: W,
    log: L,
}

impl<W: Write, L: Write> Assembler<W, L> {
    pub fn new(program: W, log: L) -> Self {
        Assembler {
            program: program,
            log: log,
        }
    }

    /// Output is written as it is produced; on failure everything before the
    /// offending line stays in the sinks.
    pub fn assemble(&mut self, source: &str) -> Result<Vec<Instruction>> {
        writeln!(self.log, "{}", TRACE_LOG_HEADER)?;

        let mut instructions = vec![];
        for (index, line) in source.lines().enumerate() {
            let line_no = index + 1;
            if let Some(instruction) = parse_line(line_no, line)? {
                self.emit(&instruction)?;
                instructions.push(instruction);
            }
        }

        self.program.flush()?;
        self.log.flush()?;

        info!("assembled {} instructions ({} bytes)",
              instructions.len(),
              instructions.len() * INSTRUCTION_SIZE);

        Ok(instructions)
    }

    pub fn into_inner(self) -> (W, L) {
        (self.program, self.log)
    }

    fn emit(&mut self, instruction: &Instruction) -> Result<()> {
        let bytes = instruction.encode();
        debug!("emit {} -> {}", instruction, hex::encode(&bytes));

        self.program.write_all(&bytes)?;
        writeln!(self.log, "{}", TraceRecord::from(instruction))?;
        Ok(())
    }
}

/// Parses one source line; blank lines yield `None`.
pub fn parse_line(line_no: usize, line: &str) -> Result<Option<Instruction>> {
    let mut tokens = line.split_whitespace();

    let mnemonic = match tokens.next() {
        Some(mnemonic) => mnemonic,
        None => return Ok(None),
    };

    let opcode = Opcode::lookup(mnemonic).ok_or_else(|| Error::UnknownCommand {
        line: line_no,
        mnemonic: mnemonic.to_string(),
    })?;

    let token = tokens.next();
    let operand = token.and_then(|token| token.parse::<Word>().ok())
        .ok_or_else(|| {
            Error::InvalidOperand {
                line: line_no,
                mnemonic: mnemonic.to_string(),
                token: token.map(str::to_string),
            }
        })?;

    if let Some(extra) = tokens.next() {
        return Err(Error::ExtraOperand {
            line: line_no,
            mnemonic: mnemonic.to_string(),
            token: extra.to_string(),
        });
    }

    Ok(Some(Instruction::new(opcode, operand)))
}

pub fn assemble<W: Write, L: Write>(source: &str,
                                    program: W,
                                    log: L)
                                    -> Result<Vec<Instruction>> {
    Assembler::new(program, log).assemble(source)
}
