use crate::config::Value;
use std::borrow::Borrow;
use std::collections::BTreeMap;
use std::fmt;
use std::ops::Range;

/// Sparse memory; addresses never written read as zero.
#[derive(Debug, Default)]
pub struct Memory {
    cells: BTreeMap<Value, Value>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DumpRecord {
    pub address: Value,
    pub value: Value,
}

impl Memory {
    pub fn new() -> Memory {
        Memory::default()
    }

    pub fn get(&self, address: Value) -> Value {
        self.cells.get(&address).cloned().unwrap_or(0)
    }

    pub fn put(&mut self, address: Value, value: Value) {
        debug!("put address={} value={}", address, value);
        self.cells.insert(address, value);
    }

    /// Number of cells written so far.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// One record per address of `[lo, hi)`, ascending, produced lazily.
    pub fn dump(&self, lo: Value, hi: Value) -> Dump<&Memory> {
        Dump::new(self, lo, hi)
    }
}

/// Lazy memory dump over a half-open address range. Owns its memory when
/// built from a finished `VM`.
#[derive(Debug)]
pub struct Dump<M: Borrow<Memory>> {
    memory: M,
    addresses: Range<Value>,
}

impl<M: Borrow<Memory>> Dump<M> {
    pub fn new(memory: M, lo: Value, hi: Value) -> Self {
        if lo > hi {
            warn!("empty memory range [{}, {})", lo, hi);
        }

        Dump {
            memory: memory,
            addresses: lo..hi,
        }
    }
}

impl<M: Borrow<Memory>> Iterator for Dump<M> {
    type Item = DumpRecord;

    fn next(&mut self) -> Option<DumpRecord> {
        let address = self.addresses.next()?;
        Some(DumpRecord {
            address: address,
            value: self.memory.borrow().get(address),
        })
    }
}

impl fmt::Display for DumpRecord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{},{}", self.address, self.value)
    }
}
