//! APEX data memory.

/// Default data memory size in cells.
pub const DATA_MEMORY_SIZE: usize = 4096;

/// Word-addressed signed data memory.
///
/// Out-of-range accesses are bounds-checked rather than indexed
/// directly: a load outside `[0, len)` returns zero and a store outside
/// `[0, len)` is a silent no-op.
pub struct DataMemory {
    cells: Vec<i64>,
}

impl DataMemory {
    pub fn new(size: usize) -> Self {
        Self {
            cells: vec![0; size],
        }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Reads a cell; out-of-range addresses read as zero.
    pub fn read(&self, addr: i64) -> i64 {
        if addr >= 0 && (addr as usize) < self.cells.len() {
            self.cells[addr as usize]
        } else {
            0
        }
    }

    /// Writes a cell; out-of-range addresses are ignored.
    pub fn write(&mut self, addr: i64, value: i64) {
        if addr >= 0 && (addr as usize) < self.cells.len() {
            self.cells[addr as usize] = value;
        }
    }

    /// The first `n` cells, for the observable-state dump.
    pub fn first(&self, n: usize) -> &[i64] {
        let n = n.min(self.cells.len());
        &self.cells[..n]
    }
}
