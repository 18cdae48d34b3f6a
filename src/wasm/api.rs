//! WASM API for the symbolic trace engine.
//!
//! Provides JavaScript-callable interfaces for feeding trace observations,
//! reading the state line, and formatting instructions.

use crate::{format_instruction, lookup, Observation, TraceEngine};
use wasm_bindgen::prelude::*;

/// JavaScript-compatible error wrapper
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct JsError {
    message: String,
}

#[wasm_bindgen]
impl JsError {
    #[wasm_bindgen(constructor)]
    pub fn new(message: &str) -> JsError {
        JsError {
            message: message.to_string(),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn message(&self) -> String {
        self.message.clone()
    }
}

/// One trace-checking session for JavaScript
#[wasm_bindgen]
pub struct TraceSession {
    engine: TraceEngine,
    on_fault: Option<js_sys::Function>,
}

impl Default for TraceSession {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl TraceSession {
    /// Create a session with nothing known
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        TraceSession {
            engine: TraceEngine::new(),
            on_fault: None,
        }
    }

    /// Register a callback invoked with the state line whenever a render
    /// reports a prediction failure
    pub fn set_fault_listener(&mut self, listener: js_sys::Function) {
        self.on_fault = Some(listener);
    }

    /// Apply one instruction with its observed data byte
    pub fn dispatch(&mut self, opcode: u8, operand: u8) {
        self.engine.dispatch(opcode, operand);
    }

    /// Apply a conditional branch with its observed outcome
    pub fn branch(&mut self, opcode: u8, taken: bool) -> Result<(), JsError> {
        self.engine
            .observe(opcode, Observation::Branch(taken))
            .map_err(|e| JsError::new(&e.to_string()))
    }

    /// Run the hardware interrupt sequence with the pushed status byte
    pub fn interrupt(&mut self, status: u8) {
        self.engine.interrupt(status);
    }

    /// Render the state line, clearing any pending fault
    pub fn render_state(&mut self) -> String {
        let snapshot = self.engine.take_snapshot();
        let line = snapshot.to_string();
        if snapshot.fault {
            if let Some(listener) = &self.on_fault {
                let _ = listener.call1(&JsValue::NULL, &JsValue::from_str(&line));
            }
        }
        line
    }

    /// Forget all knowledge
    pub fn reset(&mut self) {
        self.engine.reset();
    }

    /// Mnemonic for an opcode
    pub fn mnemonic(&self, opcode: u8) -> String {
        lookup(opcode).mnemonic.to_string()
    }

    /// Total instruction length in bytes for an opcode
    pub fn instruction_length(&self, opcode: u8) -> u8 {
        lookup(opcode).size_bytes
    }

    /// Format an instruction using its addressing-mode template
    pub fn format_instruction(
        &self,
        opcode: u8,
        operands: Vec<u8>,
        label: Option<String>,
    ) -> Result<String, JsError> {
        format_instruction(opcode, &operands, label.as_deref())
            .map_err(|e| JsError::new(&e.to_string()))
    }
}
