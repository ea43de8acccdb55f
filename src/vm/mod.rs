use crate::config::*;
use crate::error::{Error, Result};
use crate::utils::data_to_hex;
use std::fmt;
use std::io::Write;

pub mod instruction;
pub mod memory;
pub mod opcodes;

use self::instruction::*;
use self::memory::*;
use self::opcodes::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum State {
    Running,
    Done,
}

pub struct VM {
    program: Data,
    pc: usize,

    stack: Vec<Value>,
    memory: Memory,

    state: State,
}

impl VM {
    pub fn new(program: Data) -> Self {
        VM {
            program: program,
            pc: 0,
            stack: vec![],
            memory: Memory::new(),
            state: State::Running,
        }
    }

    pub fn run(&mut self) -> Result<()> {
        check_length(&self.program)?;

        while self.state == State::Running {
            if self.pc < self.program.len() {
                let offset = self.fetch();
                let instruction = self.decode(offset)?;
                self.execute(offset, instruction)?;
            } else {
                self.state = State::Done;
            }
        }

        info!("executed {} instructions, {} memory cells written",
              self.program.len() / INSTRUCTION_SIZE,
              self.memory.len());

        Ok(())
    }

    pub fn stack(&self) -> &[Value] {
        &self.stack
    }

    pub fn memory(&self) -> &Memory {
        &self.memory
    }

    pub fn program(&self) -> DataSlice {
        &self.program
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn dump(&self, lo: Value, hi: Value) -> Dump<&Memory> {
        self.memory.dump(lo, hi)
    }

    pub fn into_dump(self, lo: Value, hi: Value) -> Dump<Memory> {
        Dump::new(self.memory, lo, hi)
    }

    fn fetch(&mut self) -> usize {
        let offset = self.pc;
        self.pc += INSTRUCTION_SIZE;
        debug_assert_le!(self.pc, self.program.len());
        debug!("fetch {:?}", self);
        offset
    }

    fn decode(&self, offset: usize) -> Result<Instruction> {
        let instruction = Instruction::decode(&self.program, offset)?;
        debug!("decode {}", instruction);
        Ok(instruction)
    }

    fn execute(&mut self, offset: usize, instruction: Instruction) -> Result<()> {
        let Instruction { opcode, operand } = instruction;
        let operand = Value::from(operand);

        match opcode {
            Opcode::LoadConst => {
                self.stack_push(operand);
            }
            Opcode::ReadMem => {
                let base = self.stack_pop(offset, opcode)?;
                let value = self.memory.get(base + operand);
                self.stack_push(value);
            }
            Opcode::WriteMem => {
                let value = self.stack_pop(offset, opcode)?;
                let address = self.stack_pop(offset, opcode)?;
                self.memory.put(address, value);
            }
            Opcode::ShiftRight => {
                let b = self.stack_pop(offset, opcode)?;
                let a = self.stack_pop(offset, opcode)?;
                let value = shift_right(a, b).ok_or(Error::InvalidShift {
                    offset: offset,
                    amount: b,
                })?;
                self.stack_push(value);
            }
        }

        debug!("execute {:?}", self);
        Ok(())
    }

    fn stack_pop(&mut self, offset: usize, opcode: Opcode) -> Result<Value> {
        self.stack.pop().ok_or(Error::StackUnderflow {
            offset: offset,
            operation: opcode.mnemonic(),
        })
    }

    fn stack_push(&mut self, value: Value) {
        self.stack.push(value);
    }
}

impl fmt::Debug for VM {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let stack = self.stack
            .iter()
            .map(|i| i.to_string())
            .collect::<Vec<String>>()
            .join(" ");

        write!(f,
               "PC={} state={:?} stack=[{}] program=[{}]",
               to_hex!(self.pc, Word),
               self.state,
               stack,
               data_to_hex(&self.program))
    }
}

/// Arithmetic shift; `None` for a negative amount.
fn shift_right(a: Value, b: Value) -> Option<Value> {
    if b < 0 {
        None
    } else if b >= Value::from(Value::BITS) {
        Some(if a < 0 { -1 } else { 0 })
    } else {
        Some(a >> b)
    }
}

/// Runs `program` to completion; the returned dump of `[lo, hi)` is lazy.
pub fn execute(program: Data, lo: Value, hi: Value) -> Result<Dump<Memory>> {
    let mut vm = VM::new(program);
    vm.run()?;
    Ok(vm.into_dump(lo, hi))
}

pub fn write_dump<I, W>(records: I, mut output: W) -> Result<()>
    where I: IntoIterator<Item = DumpRecord>,
          W: Write
{
    for record in records {
        writeln!(output, "{}", record)?;
    }
    output.flush()?;
    Ok(())
}
