use byteorder::LittleEndian;
use std::mem;

pub type Word = u16;

pub type Endian = LittleEndian;

pub type Data = Vec<u8>;
pub type DataSlice<'a> = &'a [u8];

/// Widened signed integer for stack entries, addresses and memory cells.
pub type Value = i64;

pub const OPCODE_SIZE: usize = 1;

pub const WORD_SIZE: usize = mem::size_of::<Word>();

pub const INSTRUCTION_SIZE: usize = OPCODE_SIZE + WORD_SIZE;

pub const TRACE_LOG_HEADER: &str = "Command,Opcode,Operands";
