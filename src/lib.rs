//! Hall of Fame arbitrary-script-execution simulator.
//!
//! Assembles a bit-exact image of a cartridge save's Hall of Fame block,
//! places it inside an emulated address space and sweeps a grid of candidate
//! base addresses, interpreting the cartridge scripting bytecode at each one
//! to estimate how often execution drifts into the attacker-controlled
//! payload window.

pub mod bytes;
pub mod consts;
pub mod error;
pub mod hof;
pub mod interpreter;
pub mod report;
pub mod script;
pub mod setup;
pub mod sim;
pub mod tables;

pub mod prelude {
    pub use crate::error::{EncodeError, ResourceError};
    pub use crate::hof::{build_hall_of_fame, HallOfFame, HallOfFamePokemon, HallOfFameRecord};
    pub use crate::interpreter::{Interpreter, StepState};
    pub use crate::report::Summary;
    pub use crate::script::{Advancer, Command, CommandSet, Parameter};
    pub use crate::setup::{backup_save_window, GyaradosSetup, KakunaSetup, Setup};
    pub use crate::sim::{ExecWindow, HitMap, Simulation, SweepRange};
    pub use crate::tables::{CharMap, GameData, NameInput, NameKind, NameOrId, NameTable};
}
