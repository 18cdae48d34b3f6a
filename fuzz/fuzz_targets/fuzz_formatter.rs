//! Fuzz target for instruction formatting.
//!
//! This target formats arbitrary opcodes with arbitrary operand bytes and
//! labels to find panics in template rendering.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use sym6502::{format_instruction, EngineError, OPCODE_TABLE};

/// Complete fuzz input
#[derive(Debug, Arbitrary)]
struct FuzzInput {
    opcode: u8,
    operands: Vec<u8>,
    label: Option<String>,
}

fuzz_target!(|input: FuzzInput| {
    let metadata = &OPCODE_TABLE[input.opcode as usize];
    let needed = metadata.size_bytes as usize - 1;

    match format_instruction(input.opcode, &input.operands, input.label.as_deref()) {
        Ok(text) => {
            assert!(text.starts_with(metadata.mnemonic));
            assert!(!text.contains('\n') || input.label.is_some());
        }
        Err(EngineError::OperandLength { actual, .. }) => {
            assert_eq!(actual, input.operands.len());
            assert!(actual < needed);
        }
        Err(EngineError::MissingBranchLabel { .. }) => {
            assert!(input.label.is_none());
            assert!(metadata.template.has_label());
        }
        Err(other) => panic!("unexpected error: {}", other),
    }
});
