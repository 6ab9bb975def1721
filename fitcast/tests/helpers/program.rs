//! A tiny linear program used as a candidate in tests.

use crate::data::ObservationSlot;
use crate::evaluation::{IntronMask, ScoringFn, StructuralIntrons, create_scoring_fn};
use crate::utils::Float;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum Operand {
    Register(usize),
    Input(usize),
    Constant(Float),
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum Operator {
    Plus,
    Minus,
    Multiply,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Instruction {
    pub operator: Operator,
    pub target: usize,
    pub lhs: Operand,
    pub rhs: Operand,
}

/// A program which writes its outputs into the first registers.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LinearProgram {
    pub registers: usize,
    pub outputs: usize,
    pub instructions: Vec<Instruction>,
}

impl LinearProgram {
    pub fn execute(&self, slot: &mut ObservationSlot<'_>) {
        let mut registers = vec![0.; self.registers];

        self.instructions.iter().for_each(|instruction| {
            let read = |operand: Operand| match operand {
                Operand::Register(idx) => registers[idx],
                Operand::Input(idx) => slot.input(idx),
                Operand::Constant(value) => value,
            };

            let (lhs, rhs) = (read(instruction.lhs), read(instruction.rhs));
            registers[instruction.target] = match instruction.operator {
                Operator::Plus => lhs + rhs,
                Operator::Minus => lhs - rhs,
                Operator::Multiply => lhs * rhs,
            };
        });

        (0..self.outputs).for_each(|idx| slot.set_predicted_output(idx, registers[idx]));
    }
}

impl StructuralIntrons for LinearProgram {
    fn mark_structural_introns(&self) -> IntronMask {
        let mut effective = (0..self.outputs).collect::<HashSet<_>>();
        let mut introns = vec![true; self.instructions.len()];

        self.instructions.iter().enumerate().rev().for_each(|(idx, instruction)| {
            if effective.remove(&instruction.target) {
                introns[idx] = false;

                [instruction.lhs, instruction.rhs].into_iter().for_each(|operand| {
                    if let Operand::Register(register) = operand {
                        effective.insert(register);
                    }
                });
            }
        });

        IntronMask::new(introns)
    }

    fn effective_copy(&self, introns: &IntronMask) -> Self {
        Self {
            registers: self.registers,
            outputs: self.outputs,
            instructions: self
                .instructions
                .iter()
                .enumerate()
                .filter(|(idx, _)| !introns.is_intron(*idx))
                .map(|(_, instruction)| instruction.clone())
                .collect(),
        }
    }
}

fn instruction(operator: Operator, target: usize, lhs: Operand, rhs: Operand) -> Instruction {
    Instruction { operator, target, lhs, rhs }
}

/// Creates `y = 2x + 1` program with two structural introns.
pub fn create_linear_program_with_introns() -> LinearProgram {
    LinearProgram {
        registers: 3,
        outputs: 1,
        instructions: vec![
            instruction(Operator::Multiply, 1, Operand::Input(0), Operand::Constant(2.)),
            instruction(Operator::Multiply, 2, Operand::Input(0), Operand::Input(0)),
            instruction(Operator::Plus, 0, Operand::Register(1), Operand::Constant(1.)),
            instruction(Operator::Minus, 2, Operand::Register(0), Operand::Input(0)),
        ],
    }
}

/// Creates a scoring function which returns squared error of the program's first output.
pub fn create_squared_error_scoring() -> ScoringFn<LinearProgram> {
    create_scoring_fn(|program: &LinearProgram, slot| {
        program.execute(slot);

        Ok((slot.output(0) - slot.predicted_output(0)).powi(2))
    })
}
