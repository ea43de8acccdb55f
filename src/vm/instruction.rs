use byteorder::ByteOrder;
use crate::config::*;
use crate::error::{Error, Result};
use std::fmt;
use super::opcodes::Opcode;

/// One opcode byte followed by one little-endian word.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Instruction {
    pub opcode: Opcode,
    pub operand: Word,
}

impl Instruction {
    pub fn new(opcode: Opcode, operand: Word) -> Self {
        Instruction {
            opcode: opcode,
            operand: operand,
        }
    }

    pub fn encode(&self) -> [u8; INSTRUCTION_SIZE] {
        let mut bytes = [0; INSTRUCTION_SIZE];
        bytes[0] = self.opcode.tag();
        Endian::write_u16(&mut bytes[OPCODE_SIZE..], self.operand);
        bytes
    }

    pub fn encode_into(&self, data: &mut Data) {
        data.extend_from_slice(&self.encode());
    }

    /// Decodes the instruction found at `offset` in `program`; fewer than 3
    /// bytes left there is a malformed stream.
    pub fn decode(program: DataSlice, offset: usize) -> Result<Instruction> {
        if program.len() < INSTRUCTION_SIZE || offset > program.len() - INSTRUCTION_SIZE {
            return Err(Error::MalformedStream { length: program.len() });
        }

        let tag = program[offset];
        let opcode = Opcode::from_tag(tag).ok_or(Error::UnknownOpcode {
            offset: offset,
            tag: tag,
        })?;
        let operand_begin = offset + OPCODE_SIZE;
        let operand = Endian::read_u16(&program[operand_begin..operand_begin + WORD_SIZE]);

        Ok(Instruction::new(opcode, operand))
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", self.opcode, self.operand)
    }
}

pub fn check_length(program: DataSlice) -> Result<()> {
    if program.len() % INSTRUCTION_SIZE == 0 {
        Ok(())
    } else {
        Err(Error::MalformedStream { length: program.len() })
    }
}

/// Disassembles a whole binary program.
pub fn decode_program(program: DataSlice) -> Result<Vec<Instruction>> {
    check_length(program)?;

    (0..program.len())
        .step_by(INSTRUCTION_SIZE)
        .map(|offset| Instruction::decode(program, offset))
        .collect()
}
