// Control unit: program counter, loop stack and instruction dispatch

use crate::interpreter::constants::BREAKPOINT;
use crate::interpreter::errors::{MalformedKind, RuntimeError};
use crate::interpreter::io::{InputQueue, OutputBuffer};
use crate::memory::Tape;
use crate::program::{Instruction, Program};

/// All state of one run: program, tape, pointer, PC, loop stack and I/O
#[derive(Debug, Clone)]
pub struct Machine {
    program: Program,
    tape: Tape,

    /// Current tape address, always within the tape
    pointer: usize,

    /// Index of the next instruction; `program.len()` means finished
    pc: usize,

    /// PCs of the `[` instructions of every loop currently entered
    loop_stack: Vec<usize>,

    input: InputQueue,
    output: OutputBuffer,
    halted: bool,
}

impl Machine {
    /// Fresh run state for `code`, ready to execute from PC 0
    pub fn new(code: &str, input: &str) -> Self {
        Machine {
            program: Program::new(code),
            tape: Tape::new(),
            pointer: 0,
            pc: 0,
            loop_stack: Vec::new(),
            input: InputQueue::new(input),
            output: OutputBuffer::new(),
            halted: false,
        }
    }

    /// A halted machine with nothing loaded
    pub fn unloaded() -> Self {
        let mut machine = Machine::new("", "");
        machine.halted = true;
        machine
    }

    /// Execute the instruction at PC, then advance PC to the next instruction
    ///
    /// Sets the halted flag once PC reaches the end of the program. A malformed
    /// jump halts the machine without advancing and leaves PC on the faulting
    /// bracket.
    pub fn step(&mut self) -> Result<(), RuntimeError> {
        if let Some(instruction) = self.program.instruction_at(self.pc) {
            if let Err(e) = self.dispatch(instruction) {
                self.halted = true;
                return Err(e);
            }
        }

        self.pc = self.program.next_instruction(self.pc);
        if self.pc >= self.program.len() {
            self.halted = true;
        }
        Ok(())
    }

    fn dispatch(&mut self, instruction: Instruction) -> Result<(), RuntimeError> {
        match instruction {
            Instruction::MoveRight => self.pointer = Tape::move_right(self.pointer),
            Instruction::MoveLeft => self.pointer = Tape::move_left(self.pointer),
            Instruction::Increment => self.tape.increment(self.pointer),
            Instruction::Decrement => self.tape.decrement(self.pointer),
            Instruction::LoopStart => {
                if self.tape.read(self.pointer) == 0 {
                    // Recomputed on every skip, no jump table
                    self.pc = self.program.find_closing_bracket(self.pc).ok_or(
                        RuntimeError::MalformedProgram {
                            pc: self.pc,
                            kind: MalformedKind::UnmatchedOpen,
                        },
                    )?;
                } else {
                    self.loop_stack.push(self.pc);
                }
            }
            Instruction::LoopEnd => {
                if self.tape.read(self.pointer) != 0 {
                    // Jump back onto the `[` without popping; the PC advance
                    // that follows moves into the loop body.
                    self.pc = *self.loop_stack.last().ok_or(RuntimeError::MalformedProgram {
                        pc: self.pc,
                        kind: MalformedKind::UnmatchedClose,
                    })?;
                } else {
                    self.loop_stack.pop();
                }
            }
            Instruction::Input => {
                let byte = self.input.read_byte();
                self.tape.write(self.pointer, byte);
            }
            Instruction::Output => self.output.write_byte(self.tape.read(self.pointer)),
            Instruction::Breakpoint => {}
        }
        Ok(())
    }

    /// Force the halted state, keeping everything else inspectable
    pub fn halt(&mut self) {
        self.halted = true;
    }

    pub fn is_halted(&self) -> bool {
        self.halted
    }

    /// True when PC rests on a breakpoint marker
    pub fn at_breakpoint(&self) -> bool {
        self.program.char_at(self.pc) == Some(BREAKPOINT)
    }

    pub fn pc(&self) -> usize {
        self.pc
    }

    pub fn pointer(&self) -> usize {
        self.pointer
    }

    pub fn tape(&self) -> &Tape {
        &self.tape
    }

    pub fn program(&self) -> &Program {
        &self.program
    }

    pub fn output(&self) -> &str {
        self.output.as_str()
    }

    pub fn input(&self) -> &InputQueue {
        &self.input
    }

    pub fn loop_depth(&self) -> usize {
        self.loop_stack.len()
    }

    /// Current cell value under the pointer
    pub fn current_cell(&self) -> u8 {
        self.tape.read(self.pointer)
    }
}

impl Default for Machine {
    fn default() -> Self {
        Self::unloaded()
    }
}
