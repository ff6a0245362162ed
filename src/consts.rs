//! Layout and sweep parameters

/* HALL OF FAME LAYOUT */

/// Byte size of one encoded party member.
pub const POKEMON_SIZE: usize = 0x3C;

/// Capacity of the nickname field, in 16-bit units.
pub const NICKNAME_UNITS: usize = 0xB;

/// Capacity of the trainer name field, in 16-bit units.
pub const TRAINER_NAME_UNITS: usize = 0x8;

/// Unit closing a name field.
pub const NAME_TERMINATOR: u16 = 0xFFFF;

/// Party slots in one record.
pub const PARTY_SLOTS: usize = 6;

/// Bytes covered by the party slots of a record.
pub const PARTY_BYTES: usize = POKEMON_SIZE * PARTY_SLOTS;

/// Byte size of one record: six party slots plus the clear date.
pub const RECORD_SIZE: usize = PARTY_BYTES + 4;

/// Record slots in the ring.
pub const HOF_SLOTS: usize = 30;

/// Byte size of the assembled block.
pub const HOF_SIZE: usize = RECORD_SIZE * HOF_SLOTS;

/// Stored years are relative to this epoch.
pub const YEAR_MODULUS: u16 = 2000;

/* ADDRESS SPACE */

/// Byte size of the emulated address space.
pub const MEM_SIZE: usize = 0x240_0000;

/// Offset of the Hall of Fame block relative to a base address.
pub const HOF_OFFSET: usize = 0x2C2B8;

/// Offset of the interpreter entry point relative to a base address.
pub const ENTRY_OFFSET: usize = 0x2EAF0;

/* SCRIPT INTERPRETATION */

/// Byte width of a command id.
pub const OPCODE_WIDTH: usize = 2;

/// Byte width assumed for parameters the command table lists without one.
pub const DEFAULT_PARAM_WIDTH: usize = 2;

/// Lowest valid work-variable value.
pub const WORK_VALUE_MIN: u64 = 0x4000;

/// Highest valid work-variable value.
pub const WORK_VALUE_MAX: u64 = 0x8054;

/* SWEEP DEFAULTS */

/// First candidate base address.
pub const SWEEP_START: usize = 0x226D260;

/// Span of the candidate grid, in bytes.
pub const SWEEP_SPAN: usize = 0x104;

/// Distance between candidate bases.
pub const SWEEP_STRIDE: usize = 4;

/// Candidate bases per sweep.
pub const SWEEP_COUNT: usize = SWEEP_SPAN / SWEEP_STRIDE;

/// Cursor cap relative to the entry point.
pub const RANGE_LIMIT: usize = 0x800;

/// Step cap per trial.
pub const EXECUTION_LIMIT: usize = 1000;
