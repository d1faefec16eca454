use crate::Error;
use std::io;

// NB. addresses are u16 and wrap at 12 bits; lengths are usize to stop endless casting

/// how many words the display processor can address
pub const SCREEN_WORDS: usize = 4096;

/// 12-bit address space
pub const ADDRESS_MASK: u16 = 0x0fff;

/// instructions are 12 bits wide; anything above is ignored
pub const WORD_MASK: u16 = 0x0fff;

/// byte order of a raw dump, which depends on how it was acquired
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WordOrder {
    #[default]
    Little,
    Big,
}

/// Snapshot of the HP85662A display-processor memory.
///
/// Holds exactly `SCREEN_WORDS` words; reads wrap the address and mask the
/// value, so the interpreter never has to.
#[derive(Clone, PartialEq, Eq)]
pub struct ScreenMemory {
    words: Box<[u16]>,
}

impl ScreenMemory {
    /// build from captured words; anything but 4096 of them is rejected
    pub fn from_words(words: &[u16]) -> Result<Self, Error> {
        if words.len() != SCREEN_WORDS {
            return Err(Error::InvalidLength {
                expected: SCREEN_WORDS,
                actual: words.len(),
            });
        }
        Ok(ScreenMemory {
            words: words.into(),
        })
    }

    /// read a raw two-bytes-per-word dump
    pub fn load(reader: &mut impl io::Read, order: WordOrder) -> Result<Self, Error> {
        let mut buf = Vec::new();
        let len = reader.read_to_end(&mut buf)?;
        if len != SCREEN_WORDS * 2 {
            return Err(Error::InvalidDumpSize {
                expected: SCREEN_WORDS * 2,
                actual: len,
            });
        }
        let words: Vec<u16> = buf
            .chunks_exact(2)
            .map(|b| match order {
                WordOrder::Little => u16::from_le_bytes([b[0], b[1]]),
                WordOrder::Big => u16::from_be_bytes([b[0], b[1]]),
            })
            .collect();
        Self::from_words(&words)
    }

    /// get the 12-bit instruction at addr (mod 4096)
    pub fn word(&self, addr: u16) -> u16 {
        self.words[(addr & ADDRESS_MASK) as usize] & WORD_MASK
    }

    /// raw words as captured, high bits included
    pub fn as_words(&self) -> &[u16] {
        &self.words
    }
}

impl TryFrom<Vec<u16>> for ScreenMemory {
    type Error = Error;

    fn try_from(words: Vec<u16>) -> Result<Self, Self::Error> {
        Self::from_words(&words)
    }
}

impl std::fmt::Debug for ScreenMemory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let used = self.words.iter().filter(|w| **w != 0).count();
        f.debug_struct("ScreenMemory")
            .field("words", &self.words.len())
            .field("non_zero", &used)
            .finish()
    }
}
