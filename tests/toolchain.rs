extern crate asmvm;

use asmvm::Error;
use asmvm::utils;
use asmvm::vm::{self, State};
use asmvm::vm::instruction::decode_program;
use asmvm::vm::memory::DumpRecord;
use asmvm::vm::opcodes::*;

fn dump_text<I: IntoIterator<Item = DumpRecord>>(records: I) -> String {
    let mut output = vec![];
    vm::write_dump(records, &mut output).unwrap();
    String::from_utf8(output).unwrap()
}

#[test]
fn end_to_end() {
    let source = "LOAD_CONST 5
LOAD_CONST 0
WRITE_MEM 0
LOAD_CONST 0
READ_MEM 0
";
    let (program, log, result) = utils::test_assemble(source);

    assert_eq!(5, result.unwrap().len());
    assert_eq!(15, program.len());
    assert_eq!(6, log.lines().count());

    // value is popped first: 0 goes to address 5
    let (result, vm) = utils::test_run(program.clone());
    assert!(result.is_ok());
    assert_eq!(State::Done, vm.state());
    assert_eq!(&[0], vm.stack());
    assert_eq!("5,0\n", dump_text(vm.dump(5, 6)));

    let records = vm::execute(program, 0, 1).unwrap();
    assert_eq!("0,0\n", dump_text(records));
}

#[test]
fn store_then_load() {
    let source = "LOAD_CONST 0
LOAD_CONST 5
WRITE_MEM 0
LOAD_CONST 0
READ_MEM 0
";
    let (program, _, result) = utils::test_assemble(source);
    assert!(result.is_ok());

    let (result, vm) = utils::test_run(program);
    assert!(result.is_ok());
    assert_eq!(&[5], vm.stack());
    assert_eq!("0,5\n1,0\n", dump_text(vm.dump(0, 2)));
}

#[test]
fn shift_example() {
    let source = "LOAD_CONST 7
LOAD_CONST 20
LOAD_CONST 2
SHIFT_RIGHT 0
WRITE_MEM 0
";
    let (program, _, _) = utils::test_assemble(source);
    let records = vm::execute(program, 6, 9).unwrap();

    assert_eq!("6,0\n7,5\n8,0\n", dump_text(records));
}

#[test]
fn round_trip() {
    let source = "LOAD_CONST 100
LOAD_CONST 1
WRITE_MEM 0

LOAD_CONST 101
LOAD_CONST 2
WRITE_MEM 0
LOAD_CONST 100
LOAD_CONST 3
WRITE_MEM 0
LOAD_CONST 102
LOAD_CONST 99
READ_MEM 2
WRITE_MEM 0
";
    let (program, log, result) = utils::test_assemble(source);
    let instructions = result.unwrap();

    assert_eq!(instructions, decode_program(&program).unwrap());
    for (i, row) in log.lines().skip(1).enumerate() {
        let tag = program[i * 3];
        let mnemonic = Opcode::from_tag(tag).unwrap().mnemonic();
        assert!(row.starts_with(&format!("{},{},[", mnemonic, tag)));
    }

    let records = vm::execute(program, 100, 103).unwrap();
    assert_eq!("100,3\n101,2\n102,2\n", dump_text(records));
}

#[test]
fn disassembly_reassembles() {
    let source = "LOAD_CONST 65535\nLOAD_CONST 16\nSHIFT_RIGHT 0\n";
    let (program, _, _) = utils::test_assemble(source);

    let text = decode_program(&program)
        .unwrap()
        .iter()
        .map(|i| format!("{}\n", i))
        .collect::<String>();
    assert_eq!(source, text);

    let (again, _, _) = utils::test_assemble(&text);
    assert_eq!(program, again);
}

#[test]
fn failures() {
    let (program, _, result) = utils::test_assemble("FOO 1");
    match result {
        Err(Error::UnknownCommand { ref mnemonic, .. }) => assert_eq!("FOO", mnemonic),
        other => panic!("unexpected {:?}", other),
    }
    assert!(program.is_empty());

    let (_, _, result) = utils::test_assemble("LOAD_CONST 1 2");
    assert!(result.unwrap_err().is_invalid_operand());

    match vm::execute(vec![WRITE_MEM, 0x00, 0x00], 0, 1) {
        Err(Error::StackUnderflow { .. }) => (),
        other => panic!("unexpected {:?}", other),
    }

    match vm::execute(vec![LOAD_CONST, 0x00, 0x00, 0x00], 0, 1) {
        Err(Error::MalformedStream { length: 4 }) => (),
        other => panic!("unexpected {:?}", other),
    }

    match vm::execute(vec![0x01, 0x00, 0x00], 0, 1) {
        Err(Error::UnknownOpcode { tag: 0x01, .. }) => (),
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn memory_default() {
    let (program, _, _) = utils::test_assemble("LOAD_CONST 1\nLOAD_CONST 2\nWRITE_MEM 0\n");

    assert_eq!("10,0\n", dump_text(vm::execute(program, 10, 11).unwrap()));
}
