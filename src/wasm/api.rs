//! WASM API for the NES CPU core.
//!
//! Provides JavaScript-callable interfaces for cartridge loading, CPU control and
//! state inspection.

use crate::{Cartridge, CPU, MemoryBus, NesMemory};
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

fn js_error(err: impl std::fmt::Display) -> JsError {
    JsError::new(&err.to_string())
}

/// NES CPU interface for JavaScript
#[wasm_bindgen]
pub struct NesCpu {
    cpu: CPU<NesMemory>,
}

#[wasm_bindgen]
impl NesCpu {
    /// Create a CPU attached to an empty NES bus
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        NesCpu {
            cpu: CPU::new(NesMemory::new()),
        }
    }

    /// Parse an iNES / NES 2.0 image, map its PRG ROM and reset
    pub fn load_rom(&mut self, image: &[u8]) -> Result<(), JsError> {
        let cartridge = Cartridge::from_bytes(image).map_err(js_error)?;
        self.cpu.memory_mut().load_cartridge(&cartridge);
        self.cpu.reset();
        Ok(())
    }

    /// Write raw bytes at `start_addr`, point the reset vector there and reset
    pub fn load_program(&mut self, program: &[u8], start_addr: u16) {
        let memory = self.cpu.memory_mut();
        for (i, &byte) in program.iter().enumerate() {
            memory.write(start_addr.wrapping_add(i as u16), byte);
        }
        memory.write(0xFFFC, start_addr as u8);
        memory.write(0xFFFD, (start_addr >> 8) as u8);
        self.cpu.reset();
    }

    pub fn reset(&mut self) {
        self.cpu.reset();
    }

    /// Advance one clock cycle
    pub fn tick(&mut self) -> Result<(), JsError> {
        self.cpu.tick().map_err(js_error)
    }

    /// Execute a single instruction and return its cycle count
    pub fn step(&mut self) -> Result<u8, JsError> {
        self.cpu.step().map_err(js_error)
    }

    /// Execute multiple cycles and return actual cycles executed
    pub fn run_for_cycles(&mut self, cycles: u32) -> Result<u32, JsError> {
        self.cpu
            .run_for_cycles(cycles as u64)
            .map(|c| c as u32)
            .map_err(js_error)
    }

    pub fn nmi(&mut self) {
        self.cpu.nmi();
    }

    pub fn irq(&mut self) {
        self.cpu.irq();
    }

    // Register getters
    #[wasm_bindgen(getter)]
    pub fn a(&self) -> u8 {
        self.cpu.a()
    }

    #[wasm_bindgen(getter)]
    pub fn x(&self) -> u8 {
        self.cpu.x()
    }

    #[wasm_bindgen(getter)]
    pub fn y(&self) -> u8 {
        self.cpu.y()
    }

    #[wasm_bindgen(getter)]
    pub fn pc(&self) -> u16 {
        self.cpu.pc()
    }

    #[wasm_bindgen(getter)]
    pub fn sp(&self) -> u8 {
        self.cpu.sp()
    }

    #[wasm_bindgen(getter)]
    pub fn status(&self) -> u8 {
        self.cpu.status()
    }

    #[wasm_bindgen(getter)]
    pub fn cycles(&self) -> f64 {
        self.cpu.cycles() as f64 // Convert u64 to f64 for JavaScript
    }

    #[wasm_bindgen(getter)]
    pub fn remaining_cycles(&self) -> u8 {
        self.cpu.remaining_cycles()
    }

    // Flag getters
    #[wasm_bindgen(getter)]
    pub fn flag_n(&self) -> bool {
        self.cpu.flag_n()
    }

    #[wasm_bindgen(getter)]
    pub fn flag_v(&self) -> bool {
        self.cpu.flag_v()
    }

    #[wasm_bindgen(getter)]
    pub fn flag_b(&self) -> bool {
        self.cpu.flag_b()
    }

    #[wasm_bindgen(getter)]
    pub fn flag_d(&self) -> bool {
        self.cpu.flag_d()
    }

    #[wasm_bindgen(getter)]
    pub fn flag_i(&self) -> bool {
        self.cpu.flag_i()
    }

    #[wasm_bindgen(getter)]
    pub fn flag_z(&self) -> bool {
        self.cpu.flag_z()
    }

    #[wasm_bindgen(getter)]
    pub fn flag_c(&self) -> bool {
        self.cpu.flag_c()
    }

    // Memory access methods

    /// Copy `len` bytes starting at `addr` (wrapping at 0xFFFF)
    pub fn read_memory(&self, addr: u16, len: u16) -> js_sys::Uint8Array {
        let memory = self.cpu.memory();
        let bytes: Vec<u8> = (0..len)
            .map(|i| memory.read(addr.wrapping_add(i)))
            .collect();
        js_sys::Uint8Array::from(bytes.as_slice())
    }

    pub fn write_memory(&mut self, addr: u16, value: u8) {
        self.cpu.memory_mut().write(addr, value);
    }
}

impl Default for NesCpu {
    fn default() -> Self {
        Self::new()
    }
}
