//! Script interpreter stepping over the emulated address space

use crate::bytes;
use crate::consts::*;
use crate::script::{Advancer, Command, CommandSet};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Resulting state of a single interpretation step.
pub enum StepState {
    /// Execution may continue from the contained cursor.
    Proceed(usize),
    /// The step aborted; the cursor marks where decoding stopped.
    ///
    /// Unknown command ids, `end`/`return`, out-of-range work values and
    /// reads past the address space all land here. Aborts are trial
    /// outcomes, not errors.
    Abort(usize),
}

impl StepState {
    /// Cursor after the step.
    pub const fn address(&self) -> usize {
        match self {
            Self::Proceed(address) | Self::Abort(address) => *address,
        }
    }

    /// `true` when interpretation may take another step.
    pub const fn should_continue(&self) -> bool {
        matches!(self, Self::Proceed(_))
    }
}

/// Script interpreter over a read-only address space.
///
/// The interpreter holds no cursor of its own; each [`Interpreter::step`]
/// takes the cursor in and hands the next one back, so a caller can drive
/// any number of interleaved trials against the same memory.
#[derive(Debug, Clone, Copy)]
pub struct Interpreter<'a> {
    commands: &'a CommandSet,
}

impl<'a> Interpreter<'a> {
    /// Interpreter dispatching over `commands`.
    pub const fn new(commands: &'a CommandSet) -> Self {
        Self { commands }
    }

    /// Fetch and decode one command at `address`, producing the next cursor.
    pub fn step(&self, memory: &[u8], address: usize) -> StepState {
        let Some((id, address)) = bytes::read_u(memory, address, OPCODE_WIDTH) else {
            return StepState::Abort(address);
        };

        let command = match self.commands.get(id as u16) {
            Some(command) => command,
            None => return StepState::Abort(address),
        };
        if command.halts() {
            return StepState::Abort(address);
        }

        match command.advancer() {
            Some(Advancer::Generic) => self.advance(memory, address, command),
            Some(Advancer::Jump) => self.advance_jump(memory, address, command),
            None => StepState::Abort(address),
        }
    }

    /// Consume the parameters, gating on work-variable validity.
    fn advance(&self, memory: &[u8], mut address: usize, command: &Command) -> StepState {
        for parameter in command.parameters() {
            let Some((value, next)) = bytes::read_u(memory, address, parameter.width()) else {
                return StepState::Abort(address);
            };
            address = next;

            if parameter.is_work() && !(WORK_VALUE_MIN..=WORK_VALUE_MAX).contains(&value) {
                return StepState::Abort(address);
            }
        }

        StepState::Proceed(address)
    }

    /// Consume the parameters, applying jump offsets to the cursor.
    ///
    /// Conditional jumps are not evaluated; every jump is taken. Work-value
    /// checks do not apply here.
    fn advance_jump(&self, memory: &[u8], mut address: usize, command: &Command) -> StepState {
        for parameter in command.parameters() {
            let Some((value, next)) = bytes::read_u(memory, address, parameter.width()) else {
                return StepState::Abort(address);
            };
            address = next;

            if parameter.is_jump() {
                let offset = sign_extend(value, parameter.width());
                address = match address.checked_add_signed(offset as isize) {
                    Some(address) => address,
                    None => return StepState::Abort(address),
                };
            }
        }

        StepState::Proceed(address)
    }
}

/// Reinterpret `value` as a signed integer of `width` bytes.
fn sign_extend(value: u64, width: usize) -> i64 {
    let bits = width as u32 * 8;
    if bits == 0 {
        return 0;
    }
    if bits >= 64 {
        return value as i64;
    }

    let sign = 1u64 << (bits - 1);
    if value & sign != 0 {
        (value | !((1u64 << bits) - 1)) as i64
    } else {
        value as i64
    }
}
