//! Animation program bytecode
//!
//! A program is a read-only byte blob holding one or more sequences
//! separated by `'x'` and terminated by NUL. Each instruction is a single
//! opcode byte optionally followed by 2 or 4 ASCII hex digits.
//!
//! The end of the slice counts as a NUL terminator, so a blob without an
//! explicit trailing zero is still well-formed.

use core::fmt;

/// Sequence separator
pub const SEQUENCE_END: u8 = b'x';

/// Program terminator
pub const PROGRAM_END: u8 = 0;

/// Decoded opcode byte
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Opcode {
    /// `e` - set the current effect (2 digits)
    Effect,
    /// `s` - write the effect into one cell (2 digits)
    Set,
    /// `a` - write the effect into every cell
    All,
    /// `p` - pan the grid (2 digits)
    Pan,
    /// `w` - wait a number of ticks (4 digits)
    Wait,
    /// `'x'` or NUL
    End,
    /// Anything else
    Invalid(u8),
}

impl Opcode {
    pub const fn from_byte(byte: u8) -> Self {
        match byte {
            b'e' => Self::Effect,
            b's' => Self::Set,
            b'a' => Self::All,
            b'p' => Self::Pan,
            b'w' => Self::Wait,
            SEQUENCE_END | PROGRAM_END => Self::End,
            other => Self::Invalid(other),
        }
    }

    /// Number of hex digits following the opcode
    pub const fn operand_digits(self) -> usize {
        match self {
            Self::Effect | Self::Set | Self::Pan => 2,
            Self::Wait => 4,
            Self::All | Self::End | Self::Invalid(_) => 0,
        }
    }
}

/// Decode one hex digit
///
/// Returns `None` for characters outside `0-9`, `a-f` and `A-F`.
#[inline]
pub const fn hex_digit(character: u8) -> Option<u8> {
    match character {
        b'0'..=b'9' => Some(character - b'0'),
        b'a'..=b'f' => Some(character - b'a' + 10),
        b'A'..=b'F' => Some(character - b'A' + 10),
        _ => None,
    }
}

/// Hex digit for the low nibble of a value, lowercase
#[inline]
pub const fn hex_char(nibble: u8) -> u8 {
    let nibble = nibble & 0x0F;
    if nibble < 10 {
        b'0' + nibble
    } else {
        b'a' + nibble - 10
    }
}

/// Immutable program blob
#[derive(Clone, Copy)]
pub struct Program<'a> {
    bytes: &'a [u8],
}

impl fmt::Debug for Program<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Program")
            .field("len", &self.bytes.len())
            .finish()
    }
}

impl<'a> Program<'a> {
    pub const fn new(bytes: &'a [u8]) -> Self {
        Self { bytes }
    }

    pub const fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }

    pub const fn len(&self) -> usize {
        self.bytes.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Byte at an offset, NUL past the end
    #[inline]
    pub fn byte_at(&self, offset: usize) -> u8 {
        self.bytes.get(offset).copied().unwrap_or(PROGRAM_END)
    }

    /// Read a big-endian hex operand starting at `offset`
    ///
    /// Characters that are not hex digits decode as zero. Returns the value
    /// and the offset just past the operand.
    pub fn operand(&self, offset: usize, digits: usize) -> (u16, usize) {
        let mut value: u16 = 0;
        for i in 0..digits {
            let nibble = hex_digit(self.byte_at(offset + i)).unwrap_or(0);
            value = (value << 4) | u16::from(nibble);
        }
        (value, offset + digits)
    }

    /// Resolve a sequence selector to a start offset
    ///
    /// Counts separators from the beginning of the program. If the
    /// terminator is reached before `selector` separators were seen, or the
    /// selected sequence would start on the terminator itself, the program
    /// wraps: the returned selector is 0 and the offset is 0.
    pub fn sequence_start(&self, selector: u8) -> (usize, u8) {
        let mut seen = 0u8;
        let mut offset = 0usize;
        while seen != selector {
            let byte = self.byte_at(offset);
            offset += 1;
            if byte == PROGRAM_END {
                return (0, 0);
            }
            if byte == SEQUENCE_END {
                seen += 1;
            }
        }
        if selector != 0 && self.byte_at(offset) == PROGRAM_END {
            return (0, 0);
        }
        (offset, selector)
    }

    /// Number of sequences that can be selected
    ///
    /// A separator directly before the terminator does not open a new
    /// sequence.
    pub fn sequence_count(&self) -> usize {
        let mut count = 0;
        let mut open = false;
        for &byte in self.bytes {
            match byte {
                PROGRAM_END => break,
                SEQUENCE_END => {
                    count += 1;
                    open = false;
                }
                _ => open = true,
            }
        }
        if open { count + 1 } else { count.max(1) }
    }

    /// Walk the whole program and report the first malformed instruction
    ///
    /// The interpreter tolerates everything this rejects (bad digits read
    /// as zero, unknown opcodes restart the sequence), so validation is a
    /// build-time or boot-time diagnostic only.
    pub fn validate(&self) -> Result<ProgramStats, ProgramError> {
        let mut stats = ProgramStats::default();
        let mut offset = 0usize;
        let mut open = false;

        loop {
            let byte = self.byte_at(offset);
            let opcode = Opcode::from_byte(byte);
            match opcode {
                Opcode::End => {
                    if open || byte == SEQUENCE_END {
                        stats.sequences += 1;
                    }
                    if byte == PROGRAM_END {
                        // An empty program still has sequence 0
                        stats.sequences = stats.sequences.max(1);
                        return Ok(stats);
                    }
                    open = false;
                    offset += 1;
                    continue;
                }
                Opcode::Invalid(found) => {
                    return Err(ProgramError {
                        offset,
                        kind: ProgramErrorKind::UnknownOpcode(found),
                    });
                }
                _ => {}
            }

            open = true;
            let digits = opcode.operand_digits();
            for i in 0..digits {
                let position = offset + 1 + i;
                let character = self.byte_at(position);
                if character == PROGRAM_END || character == SEQUENCE_END {
                    return Err(ProgramError {
                        offset: position,
                        kind: ProgramErrorKind::TruncatedOperand,
                    });
                }
                if hex_digit(character).is_none() {
                    return Err(ProgramError {
                        offset: position,
                        kind: ProgramErrorKind::InvalidHexDigit(character),
                    });
                }
            }

            if opcode == Opcode::Wait {
                stats.waits += 1;
            }
            stats.instructions += 1;
            offset += 1 + digits;
        }
    }
}

/// Summary of a valid program
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProgramStats {
    pub sequences: usize,
    pub instructions: usize,
    pub waits: usize,
}

/// Malformed instruction found by [`Program::validate`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgramError {
    /// Byte offset of the offending character
    pub offset: usize,
    pub kind: ProgramErrorKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgramErrorKind {
    /// Opcode byte not in the instruction set
    UnknownOpcode(u8),
    /// Operand character that is not a hex digit
    InvalidHexDigit(u8),
    /// Separator or terminator inside an operand
    TruncatedOperand,
}

impl fmt::Display for ProgramError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ProgramErrorKind::UnknownOpcode(byte) => {
                write!(f, "unknown opcode 0x{:02x} at offset {}", byte, self.offset)
            }
            ProgramErrorKind::InvalidHexDigit(byte) => {
                write!(f, "invalid hex digit 0x{:02x} at offset {}", byte, self.offset)
            }
            ProgramErrorKind::TruncatedOperand => {
                write!(f, "truncated operand at offset {}", self.offset)
            }
        }
    }
}

impl core::error::Error for ProgramError {}
