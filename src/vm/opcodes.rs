use std::fmt;

pub const READ_MEM: u8 = 19;    // memory -> stack
pub const LOAD_CONST: u8 = 72;
pub const SHIFT_RIGHT: u8 = 74;
pub const WRITE_MEM: u8 = 85;   // stack -> memory

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Opcode {
    LoadConst,
    ReadMem,
    WriteMem,
    ShiftRight,
}

/// The one table both the assembler and the interpreter consult.
pub static OPCODES: [(&str, u8, Opcode); 4] = [
    ("LOAD_CONST", LOAD_CONST, Opcode::LoadConst),
    ("READ_MEM", READ_MEM, Opcode::ReadMem),
    ("WRITE_MEM", WRITE_MEM, Opcode::WriteMem),
    ("SHIFT_RIGHT", SHIFT_RIGHT, Opcode::ShiftRight),
];

impl Opcode {
    pub fn lookup(mnemonic: &str) -> Option<Opcode> {
        OPCODES.iter()
            .find(|&&(name, _, _)| name == mnemonic)
            .map(|&(_, _, opcode)| opcode)
    }

    pub fn from_tag(tag: u8) -> Option<Opcode> {
        OPCODES.iter()
            .find(|&&(_, t, _)| t == tag)
            .map(|&(_, _, opcode)| opcode)
    }

    pub fn tag(self) -> u8 {
        self.entry().1
    }

    pub fn mnemonic(self) -> &'static str {
        self.entry().0
    }

    fn entry(self) -> &'static (&'static str, u8, Opcode) {
        match self {
            Opcode::LoadConst => &OPCODES[0],
            Opcode::ReadMem => &OPCODES[1],
            Opcode::WriteMem => &OPCODES[2],
            Opcode::ShiftRight => &OPCODES[3],
        }
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}
