//! 65C02 Disassembly Formatting
//!
//! Renders one instruction from its opcode, operand bytes and an optional
//! branch label, driven by the addressing-mode templates in the opcode table.
//! Fetching bytes and choosing labels is left to the caller.

pub mod formatter;

pub use formatter::{format_instruction, render_template};
