//! Formatting functions for disassembled instructions

use std::fmt::Write;

use crate::addressing::{Template, Token};
use crate::opcodes::lookup;
use crate::EngineError;

/// Format a single instruction as assembly text
///
/// # Arguments
///
/// * `opcode` - The opcode byte
/// * `operands` - The instruction bytes following the opcode
/// * `label` - Branch target label for relative and zero-page-relative modes
///
/// # Returns
///
/// The formatted instruction, or an error if the operands or label needed by
/// the template are missing. Extra operand bytes are ignored.
///
/// # Examples
///
/// ```
/// use sym6502::format_instruction;
///
/// assert_eq!(format_instruction(0xAD, &[0x34, 0x12], None).unwrap(), "LDA 1234");
/// assert_eq!(format_instruction(0x0A, &[], None).unwrap(), "ASL A");
/// assert_eq!(format_instruction(0x0F, &[0x12, 0x05], Some("skip")).unwrap(), "BBR0 12,skip");
/// ```
pub fn format_instruction(
    opcode: u8,
    operands: &[u8],
    label: Option<&str>,
) -> Result<String, EngineError> {
    let metadata = lookup(opcode);
    render_template(metadata.template, metadata.mnemonic, operands, label)
}

/// Render a template with the given mnemonic, operand bytes and label
pub fn render_template(
    template: Template,
    mnemonic: &'static str,
    operands: &[u8],
    label: Option<&str>,
) -> Result<String, EngineError> {
    let needed = template
        .tokens()
        .iter()
        .filter_map(|t| match t {
            Token::Byte(i) => Some(i + 1),
            _ => None,
        })
        .max()
        .unwrap_or(0);

    if operands.len() < needed {
        return Err(EngineError::OperandLength {
            mnemonic,
            expected: needed,
            actual: operands.len(),
        });
    }

    let mut out = String::new();
    for token in template.tokens() {
        match *token {
            Token::Mnemonic => out.push_str(mnemonic),
            Token::Text(text) => out.push_str(text),
            Token::Byte(i) => {
                // Writing to a String cannot fail
                let _ = write!(out, "{:02X}", operands[i]);
            }
            Token::Label => match label {
                Some(label) => out.push_str(label),
                None => return Err(EngineError::MissingBranchLabel { mnemonic }),
            },
        }
    }
    Ok(out)
}
