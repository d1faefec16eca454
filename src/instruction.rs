/// # instruction
///
/// HP85662A display-processor words are 12 bits. Bits 11:10 == 01 mark a
/// control word; everything else is data for the current drawing mode.
///
/// control words:
///  x1x x0xx xx11  program control (jump, dsz, call, return, skip)
///  x1x 0xxx xxxx  display control (mode, end, brightness, scale, ...)
///  x1x 1xxx xxxx  counter/threshold load
use std::fmt;

const CONTROL_MASK: u16 = 0xc00;
const CONTROL: u16 = 0x400;

/// which decoder gets the data words
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Graph,
    Label,
    Vector,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Brightness {
    Normal,
    Dim,
    Bright,
}

/// one of the four fixed display ratios
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scale {
    D1,
    D2,
    Bex,
    D3,
}

impl Scale {
    /// D2 and D3 address the full screen; the other two sit inside the graticule
    pub fn full_screen(&self) -> bool {
        matches!(self, Scale::D2 | Scale::D3)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayControl {
    pub mode: Mode,
    pub end: bool,
    pub brightness: Brightness,
    pub clear_x: bool,
    pub skip_page: bool,
    pub scale: Scale,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgramOp {
    /// fall through to the next control word
    SkipToControl,
    Jump,
    DecrementSkipZero,
    Call,
    Return,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgramControl {
    pub op: Option<ProgramOp>,
    /// bits no known operation accounts for
    pub stray: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    Data(u16),
    Display(DisplayControl),
    Program(ProgramControl),
    Count { value: u8, threshold_enabled: bool },
}

impl Instruction {
    /// decode a single 12-bit word
    pub fn decode(word: u16) -> Instruction {
        let w = word & 0xfff;
        if w & CONTROL_MASK != CONTROL {
            Instruction::Data(w)
        } else if w & 0x203 == 0x003 {
            Instruction::Program(decode_program(w))
        } else if w & 0x200 == 0 {
            Instruction::Display(decode_display(w))
        } else {
            Instruction::Count {
                value: (w & 0xff) as u8,
                threshold_enabled: w & 0x100 == 0,
            }
        }
    }

    pub fn is_control(&self) -> bool {
        !matches!(self, Instruction::Data(_))
    }
}

fn decode_display(w: u16) -> DisplayControl {
    let mode = match w & 0x003 {
        0 => Mode::Graph,
        1 => Mode::Label,
        // 3 is program control and never gets here
        _ => Mode::Vector,
    };
    let brightness = if w & 0x080 != 0 {
        Brightness::Bright
    } else if w & 0x008 != 0 {
        Brightness::Dim
    } else {
        Brightness::Normal
    };
    let scale = match w & 0x140 {
        0x000 => Scale::D1,
        0x040 => Scale::D2,
        0x100 => Scale::Bex,
        _ => Scale::D3,
    };
    DisplayControl {
        mode,
        end: w & 0x004 != 0,
        brightness,
        clear_x: w & 0x010 != 0,
        skip_page: w & 0x020 != 0,
        scale,
    }
}

fn decode_program(w: u16) -> ProgramControl {
    let bits = w & !0x403;
    let (op, known) = match bits & 0x0c8 {
        0x000 => (Some(ProgramOp::SkipToControl), 0x000),
        0x008 => (Some(ProgramOp::Jump), 0x008),
        0x048 => (Some(ProgramOp::DecrementSkipZero), 0x048),
        0x088 => (Some(ProgramOp::Call), 0x088),
        0x0c8 => (Some(ProgramOp::Return), 0x0c8),
        _ => (None, 0x000),
    };
    ProgramControl {
        op,
        stray: bits & !known,
    }
}

/// disassembly, as shown in trace output
impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Instruction::Data(d) => write!(f, "dat {:03x}", d),
            Instruction::Display(dc) => {
                write!(f, "dsp")?;
                match dc.mode {
                    Mode::Graph => write!(f, " grp")?,
                    Mode::Label => write!(f, " lbl")?,
                    Mode::Vector => write!(f, " vec")?,
                }
                if dc.end {
                    write!(f, " end")?;
                }
                match dc.brightness {
                    Brightness::Bright => write!(f, " bright")?,
                    Brightness::Dim => write!(f, " dim")?,
                    Brightness::Normal => {}
                }
                if dc.clear_x {
                    write!(f, " clrx")?;
                }
                if dc.skip_page {
                    write!(f, " skp")?;
                }
                match dc.scale {
                    Scale::D1 => Ok(()),
                    Scale::D2 => write!(f, " d2"),
                    Scale::Bex => write!(f, " bex"),
                    Scale::D3 => write!(f, " d3"),
                }
            }
            Instruction::Program(pc) => {
                write!(f, "prg")?;
                match pc.op {
                    Some(ProgramOp::SkipToControl) => write!(f, " skc")?,
                    Some(ProgramOp::Jump) => write!(f, " jmp")?,
                    Some(ProgramOp::DecrementSkipZero) => write!(f, " dsz")?,
                    Some(ProgramOp::Call) => write!(f, " jsr")?,
                    Some(ProgramOp::Return) => write!(f, " rtn")?,
                    None => {}
                }
                if pc.stray != 0 {
                    write!(f, " ??? {:03x}", pc.stray)?;
                }
                Ok(())
            }
            Instruction::Count {
                value,
                threshold_enabled,
            } => {
                let thr = if *threshold_enabled {
                    *value as u16 * 4
                } else {
                    0
                };
                write!(f, "cnt ({}) thr ({})", value, thr)
            }
        }
    }
}
