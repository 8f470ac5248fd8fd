//! Program Loader.
//!
//! This module turns APEX assembly text into an instruction table. It performs:
//! 1. **File reading:** Reads the program file from disk.
//! 2. **Line parsing:** One comma-separated instruction per line, e.g. `ADD,R2,R0,R1`.
//! 3. **Validation:** Rejects unknown mnemonics and malformed operands with the line number.
//!
//! Blank lines and lines whose first non-blank character is `;` or `#` are skipped.
//! Register range checks happen when the machine is built.

use std::path::Path;

use tracing::debug;

use crate::common::SimError;
use crate::isa::{Instruction, Opcode, OperandFormat, Program};

/// Reads and parses an assembly file.
///
/// # Arguments
///
/// * `path` - Path to the program text.
///
/// # Errors
///
/// `SimError::Io` if the file cannot be read, `SimError::Parse` on the first bad line.
pub fn load_program(path: impl AsRef<Path>) -> Result<Program, SimError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| SimError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let program = parse_program(&text)?;
    debug!(path = %path.display(), instructions = program.len(), "program loaded");
    Ok(program)
}

/// Parses assembly text into a program.
///
/// # Examples
///
/// ```
/// use apex_pipe_core::sim::loader::parse_program;
///
/// let program = parse_program("MOVC,R0,#5\n; comment\nadd,R2,R0,R0\nHALT\n").unwrap();
/// assert_eq!(program.len(), 3);
/// assert_eq!(program.instructions()[1].to_string(), "ADD,R2,R0,R0");
/// ```
pub fn parse_program(text: &str) -> Result<Program, SimError> {
    let mut instructions = Vec::new();
    for (idx, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with(';') || line.starts_with('#') {
            continue;
        }
        let inst = parse_line(line).map_err(|message| SimError::Parse {
            line: idx + 1,
            message,
        })?;
        instructions.push(inst);
    }
    Ok(Program::new(instructions))
}

fn parse_line(line: &str) -> Result<Instruction, String> {
    let mut tokens = line.split(',').map(str::trim);
    let mnemonic = tokens.next().unwrap_or_default();
    let opcode =
        Opcode::from_mnemonic(mnemonic).ok_or_else(|| format!("unknown mnemonic '{mnemonic}'"))?;
    let operands: Vec<&str> = tokens.collect();

    let expected = match opcode.format() {
        OperandFormat::RegRegReg | OperandFormat::RegRegImm | OperandFormat::StoreRegRegImm => 3,
        OperandFormat::RegImm | OperandFormat::RegReg | OperandFormat::JumpRegImm => 2,
        OperandFormat::Imm => 1,
        OperandFormat::Bare => 0,
    };
    if operands.len() != expected {
        return Err(format!(
            "{opcode} takes {expected} operand(s), found {}",
            operands.len()
        ));
    }

    let inst = match opcode.format() {
        OperandFormat::RegRegReg => Instruction::reg3(
            opcode,
            register(operands[0])?,
            register(operands[1])?,
            register(operands[2])?,
        ),
        OperandFormat::RegRegImm => Instruction::reg_imm(
            opcode,
            register(operands[0])?,
            register(operands[1])?,
            literal(operands[2])?,
        ),
        OperandFormat::StoreRegRegImm => Instruction::store(
            opcode,
            register(operands[0])?,
            register(operands[1])?,
            literal(operands[2])?,
        ),
        OperandFormat::RegImm => Instruction::movc(register(operands[0])?, literal(operands[1])?),
        OperandFormat::RegReg => Instruction::cmp(register(operands[0])?, register(operands[1])?),
        OperandFormat::JumpRegImm => {
            Instruction::jump(register(operands[0])?, literal(operands[1])?)
        }
        OperandFormat::Imm => Instruction::branch(opcode, literal(operands[0])?),
        OperandFormat::Bare => Instruction::new(opcode),
    };
    Ok(inst)
}

fn register(token: &str) -> Result<usize, String> {
    token
        .strip_prefix(['R', 'r'])
        .and_then(|n| n.parse().ok())
        .ok_or_else(|| format!("expected a register like R3, found '{token}'"))
}

fn literal(token: &str) -> Result<i32, String> {
    token
        .strip_prefix('#')
        .and_then(|n| n.parse().ok())
        .ok_or_else(|| format!("expected a literal like #4, found '{token}'"))
}
