use crate::bus::Bus;
use embedded_hal::delay::DelayNs;
use heapless::Vec;

pub const MAX_WRITE_BYTES: usize = 16;
const MAX_TRANSACTIONS: usize = 32;

/// In-memory register file standing in for a BMP280.
///
/// Reads are served from the register file. Writes are applied to it and logged, one entry
/// per bus transaction, so tests can check ordering.
pub struct FakeBus {
    regs: [u8; 256],
    writes: Vec<Vec<u8, MAX_WRITE_BYTES>, MAX_TRANSACTIONS>,
    reads: Vec<(u8, usize), MAX_TRANSACTIONS>,
    fail_on_write: Option<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FakeBusError;

impl FakeBus {
    pub fn new() -> Self {
        FakeBus {
            regs: [0u8; 256],
            writes: Vec::new(),
            reads: Vec::new(),
            fail_on_write: None,
        }
    }

    pub fn with_registers(mut self, start: u8, data: &[u8]) -> Self {
        let start = start as usize;
        self.regs[start..start + data.len()].copy_from_slice(data);

        self
    }

    /// Makes the write transaction with the given zero-based index fail, once.
    pub fn failing_write(mut self, index: usize) -> Self {
        self.fail_on_write = Some(index);

        self
    }

    pub fn register(&self, addr: u8) -> u8 {
        self.regs[addr as usize]
    }

    pub fn writes(&self) -> &[Vec<u8, MAX_WRITE_BYTES>] {
        &self.writes
    }

    pub fn reads(&self) -> &[(u8, usize)] {
        &self.reads
    }
}

impl Bus for FakeBus {
    type Error = FakeBusError;

    fn read_registers(&mut self, start: u8, data: &mut [u8]) -> Result<(), Self::Error> {
        let start_idx = start as usize;
        data.copy_from_slice(&self.regs[start_idx..start_idx + data.len()]);
        self.reads.push((start, data.len())).unwrap();

        Ok(())
    }

    fn write_registers(&mut self, pairs: &[u8]) -> Result<(), Self::Error> {
        if self.fail_on_write == Some(self.writes.len()) {
            self.fail_on_write = None;
            return Err(FakeBusError);
        }

        for pair in pairs.chunks(2) {
            self.regs[pair[0] as usize] = pair[1];
        }
        self.writes.push(Vec::from_slice(pairs).unwrap()).unwrap();

        Ok(())
    }
}

/// Delay that returns immediately and keeps a log of what was asked for, in microseconds.
pub struct FakeDelay {
    delays_us: Vec<u32, MAX_TRANSACTIONS>,
}

impl FakeDelay {
    pub fn new() -> Self {
        FakeDelay { delays_us: Vec::new() }
    }

    pub fn delays_us(&self) -> &[u32] {
        &self.delays_us
    }
}

impl DelayNs for FakeDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.delays_us.push(ns / 1_000).unwrap();
    }

    fn delay_us(&mut self, us: u32) {
        self.delays_us.push(us).unwrap();
    }

    fn delay_ms(&mut self, ms: u32) {
        self.delays_us.push(ms * 1_000).unwrap();
    }
}
