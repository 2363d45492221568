//! Instruction set

use crate::interpreter::constants::BREAKPOINT;

/// A recognized instruction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Instruction {
    /// `>`
    MoveRight,
    /// `<`
    MoveLeft,
    /// `+`
    Increment,
    /// `-`
    Decrement,
    /// `.`
    Output,
    /// `,`
    Input,
    /// `[`
    LoopStart,
    /// `]`
    LoopEnd,
    /// `*`: no effect on execution, stops breakpointed runs
    Breakpoint,
}

impl Instruction {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '>' => Some(Instruction::MoveRight),
            '<' => Some(Instruction::MoveLeft),
            '+' => Some(Instruction::Increment),
            '-' => Some(Instruction::Decrement),
            '.' => Some(Instruction::Output),
            ',' => Some(Instruction::Input),
            '[' => Some(Instruction::LoopStart),
            ']' => Some(Instruction::LoopEnd),
            BREAKPOINT => Some(Instruction::Breakpoint),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Instruction::MoveRight => '>',
            Instruction::MoveLeft => '<',
            Instruction::Increment => '+',
            Instruction::Decrement => '-',
            Instruction::Output => '.',
            Instruction::Input => ',',
            Instruction::LoopStart => '[',
            Instruction::LoopEnd => ']',
            Instruction::Breakpoint => BREAKPOINT,
        }
    }

    pub fn is_loop(self) -> bool {
        matches!(self, Instruction::LoopStart | Instruction::LoopEnd)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_instruction_set() {
        let decoded: Vec<_> = "><+-.,[]*"
            .chars()
            .map(|c| Instruction::from_char(c).map(Instruction::as_char))
            .collect();
        assert!(decoded.iter().all(|d| d.is_some()));
        assert_eq!(decoded.into_iter().flatten().collect::<String>(), "><+-.,[]*");
    }

    #[test]
    fn test_comments_are_not_instructions() {
        for c in ['a', ' ', '\n', '#', '/', '0'] {
            assert_eq!(Instruction::from_char(c), None);
        }
    }
}
