//! # CPU State and Execution
//!
//! This module contains the `CPU` struct representing the 2A03 processor state, the
//! per-tick stepping state machine and the interrupt entry points.
//!
//! ## CPU State
//!
//! The CPU maintains:
//! - **Registers**: Accumulator (A), index registers (X, Y)
//! - **Program counter** (PC): 16-bit address of next instruction
//! - **Stack pointer** (SP): 8-bit offset into stack page (0x0100-0x01FF)
//! - **Status register**: packed N V U B D I Z C bits
//! - **Remaining cycles**: countdown for the instruction in flight
//! - **Latches**: effective address, branch offset, fetched operand and opcode of the
//!   instruction being executed; meaningless across instruction boundaries
//!
//! ## Execution Model
//!
//! - `tick()`: advance one clock cycle
//! - `step()`: run one whole instruction
//! - `run_for_cycles()`: deliver a fixed number of ticks
//!
//! An instruction executes in full on the tick that fetches it and then occupies the
//! following ticks until its cycle budget drains. Register getters report the snapshot
//! taken when the last instruction retired.

use log::{debug, trace, warn};

use crate::flags::{self, Registers};
use crate::instructions;
use crate::{ExecutionError, MemoryBus, OPCODE_TABLE};

/// Base address of the hardware stack page.
pub const STACK_BASE: u16 = 0x0100;
/// NMI vector (low byte; high byte follows).
pub const NMI_VECTOR: u16 = 0xFFFA;
/// Reset vector (low byte; high byte follows).
pub const RESET_VECTOR: u16 = 0xFFFC;
/// IRQ vector (low byte; high byte follows).
pub const IRQ_VECTOR: u16 = 0xFFFE;

/// Stack pointer value after reset.
const RESET_SP: u8 = 0xFD;
/// Cycles billed for the reset sequence and NMI entry.
const RESET_CYCLES: u8 = 8;
const NMI_CYCLES: u8 = 8;
const IRQ_CYCLES: u8 = 7;

/// 2A03 CPU state and execution context.
///
/// The CPU is generic over the memory implementation via the `MemoryBus` trait and owns
/// its bus exclusively.
///
/// # Type Parameters
///
/// * `M` - Memory bus implementation (must implement `MemoryBus` trait)
///
/// # Examples
///
/// ```
/// use nes6502::{CPU, FlatMemory, MemoryBus};
///
/// let mut memory = FlatMemory::new();
/// memory.write(0xFFFC, 0x00);
/// memory.write(0xFFFD, 0x80);
///
/// let cpu = CPU::new(memory);
///
/// assert_eq!(cpu.pc(), 0x8000);
/// assert_eq!(cpu.sp(), 0xFD);
/// assert_eq!(cpu.status(), 0x20); // Only the unused bit
/// assert_eq!(cpu.remaining_cycles(), 8); // Reset sequence still draining
/// ```
pub struct CPU<M: MemoryBus> {
    /// Working registers, mutated as instructions execute
    pub(crate) regs: Registers,

    /// Registers as of the last retired instruction
    pub(crate) retired: Registers,

    /// Cycles left before the next fetch
    pub(crate) remaining_cycles: u8,

    /// Address computed by the most recent operand resolution
    pub(crate) effective_address: u16,

    /// Sign-extended branch displacement
    pub(crate) relative_offset: u16,

    /// Operand most recently read for the active operation
    pub(crate) fetched: u8,

    /// Opcode of the instruction being executed
    pub(crate) opcode: u8,

    /// Total ticks delivered
    pub(crate) cycles: u64,

    /// NMI requested while an instruction was in flight
    pub(crate) pending_nmi: bool,

    /// IRQ requested while an instruction was in flight
    pub(crate) pending_irq: bool,

    /// Memory bus implementation
    pub(crate) memory: M,
}

impl<M: MemoryBus> CPU<M> {
    /// Creates a CPU in its power-on state.
    ///
    /// Power-on runs the reset sequence: A, X and Y are zeroed, SP is 0xFD, only the
    /// unused status bit is set and PC is loaded from the reset vector at 0xFFFC/0xFFFD
    /// (little-endian). The 8-cycle reset budget must drain before the first fetch.
    pub fn new(memory: M) -> Self {
        let mut cpu = Self {
            regs: Registers::default(),
            retired: Registers::default(),
            remaining_cycles: 0,
            effective_address: 0,
            relative_offset: 0,
            fetched: 0,
            opcode: 0,
            cycles: 0,
            pending_nmi: false,
            pending_irq: false,
            memory,
        };
        cpu.reset();
        cpu
    }

    /// Advances the CPU by one clock cycle.
    ///
    /// With no instruction in flight this services a latched `nmi()`/`irq()` request, then
    /// a pending bus interrupt, or else fetches, resolves and executes the next
    /// instruction, loading its cycle cost. Every tick
    /// then consumes one cycle; the tick that drains the budget retires the instruction.
    ///
    /// # Errors
    ///
    /// Returns `ExecutionError::UnimplementedOpcode` on the fetch tick of a JAM opcode.
    /// The opcode has already been billed and skipped when the error is returned.
    pub fn tick(&mut self) -> Result<(), ExecutionError> {
        let mut outcome = Ok(());

        if self.remaining_cycles == 0 {
            let irq_requested = std::mem::take(&mut self.pending_irq);

            if std::mem::take(&mut self.pending_nmi) || self.memory.nmi_pending() {
                self.nmi();
            } else if (irq_requested || self.memory.irq_active())
                && !self.regs.flag(flags::INTERRUPT_DISABLE)
            {
                self.irq();
            } else {
                outcome = self.execute_next();
            }
        }

        self.remaining_cycles = self.remaining_cycles.saturating_sub(1);
        self.cycles += 1;

        if self.remaining_cycles == 0 {
            self.retired = self.regs;
        }

        outcome
    }

    /// Fetches, decodes and executes the instruction at PC.
    fn execute_next(&mut self) -> Result<(), ExecutionError> {
        let pc = self.regs.pc;
        self.opcode = self.fetch_pc_byte();
        let metadata = &OPCODE_TABLE[self.opcode as usize];

        trace!(
            "{:04X}  {:02X}  {}  A:{:02X} X:{:02X} Y:{:02X} P:{:02X} SP:{:02X} CYC:{}",
            pc,
            self.opcode,
            metadata.mnemonic,
            self.regs.a,
            self.regs.x,
            self.regs.y,
            self.regs.status,
            self.regs.sp,
            self.cycles
        );

        self.remaining_cycles = metadata.base_cycles;

        let address_penalty = self.resolve_operand(metadata.addressing_mode);
        let operation_penalty = instructions::execute(self, metadata.operation);

        if address_penalty && operation_penalty {
            self.remaining_cycles += 1;
        }

        if !metadata.implemented {
            warn!("JAM opcode 0x{:02X} at 0x{:04X} skipped", self.opcode, pc);
            return Err(ExecutionError::UnimplementedOpcode(self.opcode));
        }

        if metadata.is_illegal() {
            warn!("Illegal opcode 0x{:02X} at 0x{:04X} executed as NOP", self.opcode, pc);
        }

        Ok(())
    }

    /// Runs one whole instruction.
    ///
    /// Any instruction or interrupt sequence still in flight is drained first. Returns
    /// the number of cycles the instruction took, including page and branch penalties.
    ///
    /// # Examples
    ///
    /// ```
    /// use nes6502::{CPU, FlatMemory, MemoryBus};
    ///
    /// let mut mem = FlatMemory::new();
    /// mem.write(0xFFFC, 0x00);
    /// mem.write(0xFFFD, 0x80);
    /// mem.write(0x8000, 0xEA); // NOP
    ///
    /// let mut cpu = CPU::new(mem);
    /// assert_eq!(cpu.step(), Ok(2));
    /// assert_eq!(cpu.pc(), 0x8001);
    /// ```
    pub fn step(&mut self) -> Result<u8, ExecutionError> {
        while self.remaining_cycles > 0 {
            self.tick()?;
        }

        let start = self.cycles;
        let mut outcome = self.tick();
        while self.remaining_cycles > 0 {
            let result = self.tick();
            if outcome.is_ok() {
                outcome = result;
            }
        }
        outcome?;

        Ok((self.cycles - start) as u8)
    }

    /// Delivers `cycle_budget` ticks, stopping early on the first error.
    ///
    /// Returns the number of ticks delivered. This is the frame-locked driver: one NTSC
    /// frame is roughly 29780 CPU cycles.
    pub fn run_for_cycles(&mut self, cycle_budget: u64) -> Result<u64, ExecutionError> {
        for _ in 0..cycle_budget {
            self.tick()?;
        }
        Ok(cycle_budget)
    }

    // ========== Interrupt Controller ==========

    /// Resets the CPU, discarding any instruction in flight.
    ///
    /// A, X and Y are zeroed, SP becomes 0xFD, status holds only the unused bit, PC is
    /// loaded from 0xFFFC/0xFFFD and the latches are cleared. The reset sequence costs
    /// 8 cycles. The new register state is visible immediately.
    pub fn reset(&mut self) {
        self.regs = Registers {
            a: 0,
            x: 0,
            y: 0,
            sp: RESET_SP,
            pc: self.read_vector(RESET_VECTOR),
            status: flags::UNUSED,
        };
        self.retired = self.regs;

        self.effective_address = 0;
        self.relative_offset = 0;
        self.fetched = 0;
        self.opcode = 0;
        self.pending_nmi = false;
        self.pending_irq = false;

        self.remaining_cycles = RESET_CYCLES;

        debug!("Reset: PC = 0x{:04X}", self.regs.pc);
    }

    /// Services a non-maskable interrupt.
    ///
    /// Always taken regardless of the interrupt-disable flag. Pushes PC (high byte first)
    /// and status with Break clear and Unused set, sets interrupt-disable and vectors
    /// through 0xFFFA/0xFFFB. Costs 8 cycles.
    ///
    /// When idle the sequence starts at once and its register state is visible
    /// immediately. Otherwise the request is latched and serviced when the instruction
    /// in flight retires.
    pub fn nmi(&mut self) {
        if self.remaining_cycles > 0 {
            self.pending_nmi = true;
            return;
        }
        self.interrupt(NMI_VECTOR, NMI_CYCLES);
        debug!("NMI: PC = 0x{:04X}", self.regs.pc);
    }

    /// Requests a maskable interrupt.
    ///
    /// Ignored while the interrupt-disable flag is set. Otherwise identical to
    /// [`CPU::nmi`] but vectors through 0xFFFE/0xFFFF and costs 7 cycles. A request made
    /// mid-instruction is latched, and the flag is checked when it is serviced.
    pub fn irq(&mut self) {
        if self.remaining_cycles > 0 {
            self.pending_irq = true;
            return;
        }
        if self.regs.flag(flags::INTERRUPT_DISABLE) {
            return;
        }
        self.interrupt(IRQ_VECTOR, IRQ_CYCLES);
        debug!("IRQ: PC = 0x{:04X}", self.regs.pc);
    }

    fn interrupt(&mut self, vector: u16, cycles: u8) {
        self.push_word(self.regs.pc);

        self.regs.set_flag(flags::BREAK, false);
        self.regs.set_flag(flags::UNUSED, true);
        self.push(self.regs.status);
        self.regs.set_flag(flags::INTERRUPT_DISABLE, true);

        self.regs.pc = self.read_vector(vector);
        self.remaining_cycles = cycles;
        self.retired = self.regs;
    }

    fn read_vector(&self, vector: u16) -> u16 {
        let lo = self.memory.read(vector) as u16;
        let hi = self.memory.read(vector.wrapping_add(1)) as u16;
        (hi << 8) | lo
    }

    // ========== Stack ==========

    /// Writes a byte at 0x0100 + SP, then decrements SP.
    pub(crate) fn push(&mut self, value: u8) {
        self.memory.write(STACK_BASE | self.regs.sp as u16, value);
        self.regs.sp = self.regs.sp.wrapping_sub(1);
    }

    /// Increments SP, then reads the byte at 0x0100 + SP.
    pub(crate) fn pull(&mut self) -> u8 {
        self.regs.sp = self.regs.sp.wrapping_add(1);
        self.memory.read(STACK_BASE | self.regs.sp as u16)
    }

    /// Pushes a word high byte first.
    pub(crate) fn push_word(&mut self, value: u16) {
        self.push((value >> 8) as u8);
        self.push(value as u8);
    }

    /// Pulls a word low byte first.
    pub(crate) fn pull_word(&mut self) -> u16 {
        let lo = self.pull() as u16;
        let hi = self.pull() as u16;
        (hi << 8) | lo
    }

    // ========== Operand Access ==========

    /// Reads the active operand: A in accumulator mode, otherwise the byte at the
    /// effective address. The value is latched.
    pub(crate) fn fetch_operand(&mut self) -> u8 {
        self.fetched = if OPCODE_TABLE[self.opcode as usize].targets_accumulator() {
            self.regs.a
        } else {
            self.memory.read(self.effective_address)
        };
        self.fetched
    }

    /// Writes a result to wherever the operand came from.
    pub(crate) fn write_operand(&mut self, value: u8) {
        if OPCODE_TABLE[self.opcode as usize].targets_accumulator() {
            self.regs.a = value;
        } else {
            self.memory.write(self.effective_address, value);
        }
    }

    // ========== Register Getters ==========

    /// Returns the register snapshot of the last retired instruction.
    pub fn registers(&self) -> Registers {
        self.retired
    }

    /// Returns the accumulator register value.
    pub fn a(&self) -> u8 {
        self.retired.a
    }

    /// Returns the X index register value.
    pub fn x(&self) -> u8 {
        self.retired.x
    }

    /// Returns the Y index register value.
    pub fn y(&self) -> u8 {
        self.retired.y
    }

    /// Returns the program counter value.
    pub fn pc(&self) -> u16 {
        self.retired.pc
    }

    /// Returns the stack pointer value.
    ///
    /// Note: The full stack address is 0x0100 + SP. The stack grows downward from 0x01FF.
    pub fn sp(&self) -> u8 {
        self.retired.sp
    }

    /// Returns the status register as a packed byte (NV-BDIZC).
    pub fn status(&self) -> u8 {
        self.retired.status
    }

    /// Returns the total number of ticks delivered since construction.
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    /// Returns the cycles left in the instruction or interrupt sequence in flight.
    pub fn remaining_cycles(&self) -> u8 {
        self.remaining_cycles
    }

    /// Returns true when the next tick will fetch an instruction.
    pub fn is_idle(&self) -> bool {
        self.remaining_cycles == 0
    }

    /// Effective address latched by the most recent resolution.
    pub fn effective_address(&self) -> u16 {
        self.effective_address
    }

    /// Branch displacement latched by the most recent relative resolution.
    pub fn relative_offset(&self) -> u16 {
        self.relative_offset
    }

    /// Operand most recently read by an operation.
    pub fn fetched_operand(&self) -> u8 {
        self.fetched
    }

    /// Opcode of the most recently fetched instruction.
    pub fn current_opcode(&self) -> u8 {
        self.opcode
    }

    /// Returns a reference to the memory bus.
    pub fn memory(&self) -> &M {
        &self.memory
    }

    /// Returns a mutable reference to the memory bus.
    pub fn memory_mut(&mut self) -> &mut M {
        &mut self.memory
    }

    /// Consumes the CPU and returns its memory bus.
    pub fn into_memory(self) -> M {
        self.memory
    }

    // ========== Status Flag Getters ==========

    /// Returns true if the Negative flag is set.
    pub fn flag_n(&self) -> bool {
        self.retired.flag(flags::NEGATIVE)
    }

    /// Returns true if the Overflow flag is set.
    pub fn flag_v(&self) -> bool {
        self.retired.flag(flags::OVERFLOW)
    }

    /// Returns true if the Break flag is set.
    pub fn flag_b(&self) -> bool {
        self.retired.flag(flags::BREAK)
    }

    /// Returns true if the Decimal mode flag is set.
    pub fn flag_d(&self) -> bool {
        self.retired.flag(flags::DECIMAL)
    }

    /// Returns true if the Interrupt Disable flag is set.
    pub fn flag_i(&self) -> bool {
        self.retired.flag(flags::INTERRUPT_DISABLE)
    }

    /// Returns true if the Zero flag is set.
    pub fn flag_z(&self) -> bool {
        self.retired.flag(flags::ZERO)
    }

    /// Returns true if the Carry flag is set.
    pub fn flag_c(&self) -> bool {
        self.retired.flag(flags::CARRY)
    }

    // ========== Register Setters ==========
    //
    // Setters write both the working and the retired copy so that test setups and
    // debuggers see their change at once.

    fn update(&mut self, f: impl Fn(&mut Registers)) {
        f(&mut self.regs);
        f(&mut self.retired);
    }

    /// Sets the accumulator.
    pub fn set_a(&mut self, value: u8) {
        self.update(|r| r.a = value);
    }

    /// Sets the X index register.
    pub fn set_x(&mut self, value: u8) {
        self.update(|r| r.x = value);
    }

    /// Sets the Y index register.
    pub fn set_y(&mut self, value: u8) {
        self.update(|r| r.y = value);
    }

    /// Sets the stack pointer.
    pub fn set_sp(&mut self, value: u8) {
        self.update(|r| r.sp = value);
    }

    /// Sets the program counter.
    pub fn set_pc(&mut self, value: u16) {
        self.update(|r| r.pc = value);
    }

    /// Sets the packed status register.
    pub fn set_status(&mut self, value: u8) {
        self.update(|r| r.status = value);
    }

    /// Sets or clears the Negative flag.
    pub fn set_flag_n(&mut self, value: bool) {
        self.update(|r| r.set_flag(flags::NEGATIVE, value));
    }

    /// Sets or clears the Overflow flag.
    pub fn set_flag_v(&mut self, value: bool) {
        self.update(|r| r.set_flag(flags::OVERFLOW, value));
    }

    /// Sets or clears the Break flag.
    pub fn set_flag_b(&mut self, value: bool) {
        self.update(|r| r.set_flag(flags::BREAK, value));
    }

    /// Sets or clears the Decimal flag.
    pub fn set_flag_d(&mut self, value: bool) {
        self.update(|r| r.set_flag(flags::DECIMAL, value));
    }

    /// Sets or clears the Interrupt Disable flag.
    pub fn set_flag_i(&mut self, value: bool) {
        self.update(|r| r.set_flag(flags::INTERRUPT_DISABLE, value));
    }

    /// Sets or clears the Zero flag.
    pub fn set_flag_z(&mut self, value: bool) {
        self.update(|r| r.set_flag(flags::ZERO, value));
    }

    /// Sets or clears the Carry flag.
    pub fn set_flag_c(&mut self, value: bool) {
        self.update(|r| r.set_flag(flags::CARRY, value));
    }
}
