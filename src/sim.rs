//! Sweep driver placing the block and trialling candidate bases

use crate::consts::*;
use crate::interpreter::Interpreter;
use crate::script::CommandSet;

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use std::collections::BTreeMap;
use tracing::debug;

/// Payload window the attacker controls, relative to a base address.
///
/// Both bounds are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExecWindow {
    /// First controlled offset.
    pub min_offset: usize,
    /// Last controlled offset.
    pub max_offset: usize,
}

impl ExecWindow {
    /// Window spanning `[min_offset, max_offset]`.
    pub const fn new(min_offset: usize, max_offset: usize) -> Self {
        Self {
            min_offset,
            max_offset,
        }
    }
}

/// Arithmetic progression of candidate base addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SweepRange {
    /// First base.
    pub start: usize,
    /// Number of bases.
    pub count: usize,
    /// Distance between bases.
    pub stride: usize,
}

impl SweepRange {
    /// Grid of `count` bases from `start` at `stride`.
    pub const fn new(start: usize, count: usize, stride: usize) -> Self {
        Self {
            start,
            count,
            stride,
        }
    }

    /// The bases, in order.
    pub fn bases(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.count).map(move |i| self.start + i * self.stride)
    }
}

impl Default for SweepRange {
    fn default() -> Self {
        Self::new(SWEEP_START, SWEEP_COUNT, SWEEP_STRIDE)
    }
}

/// Trial outcomes keyed by outer base, one flag per inner base.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HitMap {
    hits: BTreeMap<usize, Vec<bool>>,
}

impl HitMap {
    fn insert(&mut self, base: usize, outcomes: Vec<bool>) {
        self.hits.insert(base, outcomes);
    }

    /// Outcomes recorded for an outer `base`.
    pub fn get(&self, base: usize) -> Option<&[bool]> {
        self.hits.get(&base).map(Vec::as_slice)
    }

    /// All entries in base order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &[bool])> + '_ {
        self.hits.iter().map(|(base, hits)| (*base, hits.as_slice()))
    }

    /// Number of outer bases recorded.
    pub fn outer_count(&self) -> usize {
        self.hits.len()
    }

    /// `true` when no outcomes were recorded.
    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }
}

/// The sweep driver.
///
/// Owns the encoded Hall of Fame image and the trial parameters; borrows
/// the command table. One outer iteration zeroes the address space and
/// installs the image at `outer_base + hof_offset`, then every inner base
/// gets one interpretation trial against that read-only memory.
#[derive(Debug, Clone)]
pub struct Simulation<'a> {
    window: ExecWindow,
    commands: &'a CommandSet,
    hof_image: Vec<u8>,
    hof_offset: usize,
    entry_offset: usize,
    range_limit: usize,
    execution_limit: usize,
    memory_size: usize,
}

impl<'a> Simulation<'a> {
    /// Driver over `hof_image` with the default trial parameters.
    pub fn new(window: ExecWindow, commands: &'a CommandSet, hof_image: Vec<u8>) -> Self {
        Self {
            window,
            commands,
            hof_image,
            hof_offset: HOF_OFFSET,
            entry_offset: ENTRY_OFFSET,
            range_limit: RANGE_LIMIT,
            execution_limit: EXECUTION_LIMIT,
            memory_size: MEM_SIZE,
        }
    }

    /// Override the block placement offset.
    pub fn with_hof_offset(mut self, offset: usize) -> Self {
        self.hof_offset = offset;
        self
    }

    /// Zero the space and install the image for an outer `base`.
    fn install(&self, memory: &mut Vec<u8>, base: usize) {
        memory.clear();
        memory.resize(self.memory_size, 0);

        let at = base + self.hof_offset;
        memory[at..at + self.hof_image.len()].copy_from_slice(&self.hof_image);
    }

    /// One trial: interpret from `base + entry_offset` until the cursor
    /// lands in the payload window, the trial aborts, or a cap is hit.
    pub fn trial(&self, memory: &[u8], base: usize) -> bool {
        let interpreter = Interpreter::new(self.commands);
        let start = base + self.entry_offset;
        let payload = (base + self.window.min_offset)..=(base + self.window.max_offset);

        let mut address = start;
        let mut steps = 0;
        while address < start + self.range_limit && steps < self.execution_limit {
            let state = interpreter.step(memory, address);
            if !state.should_continue() {
                return false;
            }
            address = state.address();

            if payload.contains(&address) {
                return true;
            }
            steps += 1;
        }

        false
    }

    /// Inner sweep over an already installed address space.
    pub fn sweep_inner(&self, memory: &[u8], inner: &SweepRange) -> Vec<bool> {
        inner.bases().map(|base| self.trial(memory, base)).collect()
    }

    /// Install the block for one outer base and run the inner sweep.
    pub fn simulate_with_base(&self, outer_base: usize, inner: &SweepRange) -> Vec<bool> {
        let mut memory = Vec::new();
        self.install(&mut memory, outer_base);
        self.sweep_inner(&memory, inner)
    }

    /// Full cross product of the outer and inner grids.
    ///
    /// The address space buffer is reused across outer bases; nothing
    /// mutates it while the inner sweep runs.
    pub fn simulate_full(&self, outer: &SweepRange, inner: &SweepRange) -> HitMap {
        let mut hits = HitMap::default();
        let mut memory = Vec::with_capacity(self.memory_size);

        for base in outer.bases() {
            self.install(&mut memory, base);
            debug!("outer base {base:#x} installed");
            hits.insert(base, self.sweep_inner(&memory, inner));
        }

        hits
    }

    /// [`Simulation::simulate_full`] over the default grid on both axes.
    pub fn simulate_default(&self) -> HitMap {
        self.simulate_full(&SweepRange::default(), &SweepRange::default())
    }

    /// Parallel [`Simulation::simulate_full`]; each worker owns its own
    /// address space buffer.
    #[cfg(feature = "parallel")]
    pub fn simulate_full_par(&self, outer: &SweepRange, inner: &SweepRange) -> HitMap {
        let bases: Vec<usize> = outer.bases().collect();
        let entries: Vec<(usize, Vec<bool>)> = bases
            .into_par_iter()
            .map(|base| (base, self.simulate_with_base(base, inner)))
            .collect();

        let mut hits = HitMap::default();
        for (base, outcomes) in entries {
            hits.insert(base, outcomes);
        }
        hits
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_sweep_spans_the_grid() {
        let sweep = SweepRange::default();
        let bases: Vec<usize> = sweep.bases().collect();

        assert_eq!(bases.len(), SWEEP_COUNT);
        assert_eq!(bases[0], SWEEP_START);
        assert_eq!(bases[1], SWEEP_START + SWEEP_STRIDE);
        assert_eq!(bases[64], SWEEP_START + 0x100);
    }
}
