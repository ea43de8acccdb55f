use crate::asm;
use crate::config::*;
use crate::error::Result;
use crate::vm::VM;
use crate::vm::instruction::Instruction;
use env_logger;

macro_rules! to_hex {
   ($data:expr, Word) => {
       format!("0x{:04x}", $data)
   };
   ($data:expr) => {
       format!("0x{:02x}", $data)
   };
}

/// Hex dump of a program, one group per instruction.
pub fn data_to_hex(data: DataSlice) -> String {
    data.chunks(INSTRUCTION_SIZE)
        .map(hex::encode)
        .collect::<Vec<String>>()
        .join(" ")
}

pub fn test_assemble(source: &str) -> (Data, String, Result<Vec<Instruction>>) {
    let _ = env_logger::try_init();

    let mut program: Data = vec![];
    let mut log: Data = vec![];
    let result = asm::assemble(source, &mut program, &mut log);
    let log = String::from_utf8_lossy(&log).into_owned();

    (program, log, result)
}

pub fn test_run(program: Data) -> (Result<()>, VM) {
    let _ = env_logger::try_init();

    let mut vm = VM::new(program);
    let result = vm.run();

    (result, vm)
}
