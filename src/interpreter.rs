/// # interpreter
///
/// Replays the HP85662A display program against a `DrawingSink`.
///
/// The display processor has:
///  * a 12-bit program counter, walking screen memory from 0
///  * a 10-bit x and y for the beam
///  * a drawing mode (graph, label or vector) deciding what data words mean
///  * a scale ratio and origin, set by display control words
///  * an 8-bit counter; loading it also loads the graph threshold (count * 4)
///  * ONE return address register: a nested call overwrites it
///  * a flag which makes data words be ignored until the next control word,
///    set by every program control word so their operands are not drawn
///
/// Counter, threshold and return address survive from the priming pass into
/// the real pass; everything else is reset at the start of each pass.
use crate::charrom::{self, CHARACTER_ROM, GLYPH_HEIGHT, GLYPH_WIDTH};
use crate::display::{Color, DrawingSink};
use crate::instruction::{
    Brightness, DisplayControl, Instruction, Mode, ProgramControl, ProgramOp, Scale,
};
use crate::memory::{ScreenMemory, ADDRESS_MASK};
use crate::options::{Offset, RenderOptions};
use crate::Error;
use log::{debug, error, log_enabled, trace, warn, Level};
use std::sync::OnceLock;

const COORD_MASK: u16 = 0x3ff;

/// graph data above this only moves the beam
const GRAPH_CLIPPED_MAX: u16 = 3072;

/// what every pass starts from; same as executing display word 0x400
const RESET: DisplayControl = DisplayControl {
    mode: Mode::Graph,
    end: false,
    brightness: Brightness::Normal,
    clear_x: false,
    skip_page: false,
    scale: Scale::D1,
};

/// why a pass stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Halt {
    /// a display control word carried the end bit
    Stopped { addr: u16 },
    /// a control word with bits no operation accounts for
    Unrecognized { addr: u16, word: u16 },
    RunawayGlyph { addr: u16, code: u8 },
    /// `max_steps` ran out; addr is where the next step would have been
    StepLimit { addr: u16 },
}

impl Halt {
    pub fn is_malformed(&self) -> bool {
        !matches!(self, Halt::Stopped { .. })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PassReport {
    pub steps: u64,
    pub halt: Halt,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderReport {
    pub priming: PassReport,
    pub real: PassReport,
    /// every glyph of the built-in character ROM terminates
    pub rom_ok: bool,
}

static ROM_SOUND: OnceLock<bool> = OnceLock::new();

fn check_rom() -> bool {
    *ROM_SOUND.get_or_init(|| match charrom::self_check() {
        Ok(()) => true,
        Err(e) => {
            error!("character ROM self-check failed: {}", e);
            false
        }
    })
}

/// Render `memory` onto `sink`.
///
/// Malformed programs are not an error: the pass stops and the reason ends
/// up in the report. Only sink failures come back as `Err`.
pub fn render(
    memory: &ScreenMemory,
    sink: &mut dyn DrawingSink,
    options: &RenderOptions,
) -> Result<RenderReport, Error> {
    Renderer::new(memory, sink, options).run()
}

pub(crate) struct Renderer<'a> {
    memory: &'a ScreenMemory,
    rom: &'a [u8],
    sink: &'a mut dyn DrawingSink,
    options: &'a RenderOptions,
    priming: bool,
    program_counter: u16,
    next: u16,
    x: u16,
    y: u16,
    mode: Mode,
    ratio: f64,
    offset: Offset,
    counter: u8,
    threshold: u16,
    return_addr: u16,
    skip_data: bool,
    stopped: bool,
    pen_color: Option<Color>,
    pen_width: Option<f64>,
}

impl<'a> Renderer<'a> {
    fn new(
        memory: &'a ScreenMemory,
        sink: &'a mut dyn DrawingSink,
        options: &'a RenderOptions,
    ) -> Renderer<'a> {
        Renderer {
            memory,
            rom: &CHARACTER_ROM,
            sink,
            options,
            priming: false,
            program_counter: 0,
            next: 0,
            x: 0,
            y: 0,
            mode: RESET.mode,
            ratio: options.ratio(RESET.scale),
            offset: options.offset(RESET.scale),
            counter: 0,
            threshold: 0,
            return_addr: 0,
            skip_data: false,
            stopped: false,
            pen_color: None,
            pen_width: None,
        }
    }

    /// both passes, from `begin` to `end`
    fn run(mut self) -> Result<RenderReport, Error> {
        let rom_ok = check_rom();
        let options = self.options;
        self.sink
            .begin(options.bounding_box(), options.color_background)?;
        self.set_pen_width(options.pen_width)?;

        // the counter/threshold register is loaded late in the stock
        // program, so go round once quietly to have it right for real
        let priming = self.run_pass(true)?;
        debug!("priming pass: {} steps, {:?}", priming.steps, priming.halt);
        let real = self.run_pass(false)?;
        debug!("real pass: {} steps, {:?}", real.steps, real.halt);
        if real.halt.is_malformed() {
            warn!("display program is malformed: {:?}", real.halt);
        }

        self.sink.end()?;
        Ok(RenderReport {
            priming,
            real,
            rom_ok,
        })
    }

    #[cfg(test)]
    fn position(&self) -> (u16, u16) {
        (self.x, self.y)
    }

    #[cfg(test)]
    fn mode(&self) -> Mode {
        self.mode
    }

    fn run_pass(&mut self, priming: bool) -> Result<PassReport, Error> {
        self.priming = priming;
        self.display_control(0, RESET)?;
        self.vector_to(0, 0, false)?;
        self.program_counter = 0;
        self.stopped = false;
        self.skip_data = false;

        let mut steps = 0;
        let halt = loop {
            if steps >= self.options.max_steps {
                break Halt::StepLimit {
                    addr: self.program_counter,
                };
            }
            steps += 1;
            if let Some(halt) = self.step()? {
                break halt;
            }
        };
        Ok(PassReport { steps, halt })
    }

    /// fetch, decode and execute one word
    fn step(&mut self) -> Result<Option<Halt>, Error> {
        let addr = self.program_counter;
        let word = self.memory.word(addr);
        let instruction = Instruction::decode(word);
        self.next = addr.wrapping_add(1);

        let mut halt = None;
        let skipped = self.skip_data && !instruction.is_control();
        match instruction {
            Instruction::Data(d) => {
                if !skipped {
                    halt = self.data(addr, d)?;
                }
            }
            Instruction::Display(dc) => {
                self.skip_data = false;
                self.display_control(addr, dc)?;
            }
            Instruction::Program(pc) => {
                self.skip_data = false;
                self.program_control(addr, pc);
                if pc.stray != 0 {
                    halt = Some(Halt::Unrecognized { addr, word });
                }
            }
            Instruction::Count {
                value,
                threshold_enabled,
            } => {
                self.skip_data = false;
                self.counter = value;
                self.threshold = if threshold_enabled {
                    value as u16 * 4
                } else {
                    0
                };
            }
        }
        self.program_counter = self.next & ADDRESS_MASK;

        if log_enabled!(Level::Trace) {
            let what = match instruction {
                Instruction::Data(_) if skipped => "skipctl".to_string(),
                Instruction::Data(d) => self.describe_data(addr, d),
                _ => instruction.to_string(),
            };
            trace!(
                "0x{:03x} 0x{:03x} [{:03x}, {:03x}] >{:03x} {}",
                addr,
                word,
                self.x,
                self.y,
                self.program_counter,
                what
            );
        }

        if halt.is_none() && self.stopped {
            halt = Some(Halt::Stopped { addr });
        }
        Ok(halt)
    }

    /// trace text for a data word, read back after it has executed
    fn describe_data(&self, addr: u16, d: u16) -> String {
        match self.mode {
            Mode::Graph if d <= COORD_MASK => format!("grp {}", d.max(self.threshold)),
            Mode::Graph => format!("grp {}", d),
            Mode::Label => match (d & 0xff) as u8 {
                0 => "lbl NUL".to_string(),
                8 => "lbl bs".to_string(),
                10 => "lbl nl".to_string(),
                13 => "lbl cr".to_string(),
                17 => "lbl -blink".to_string(),
                18 => "lbl +blink".to_string(),
                32 => "lbl sp".to_string(),
                0x91 => "lbl sk16".to_string(),
                0x92 => "lbl sk32".to_string(),
                0x93 => "lbl sk64".to_string(),
                c @ 33..=126 => format!("lbl '{}'", c as char),
                c => format!("lbl 0x{:03x}", c),
            },
            Mode::Vector => {
                let mut text = format!("vec {},{}", self.x, self.y);
                if self.memory.word(addr.wrapping_add(1)) & 0x800 != 0 {
                    text.push_str(" up");
                }
                if d & 0x800 != 0 {
                    text.push_str(" rel");
                }
                text
            }
        }
    }

    fn data(&mut self, addr: u16, d: u16) -> Result<Option<Halt>, Error> {
        match self.mode {
            Mode::Graph => self.graph(d)?,
            Mode::Label => return self.label(addr, d),
            Mode::Vector => self.vector(addr, d)?,
        }
        Ok(None)
    }

    /// one step right, at the sample height floored by the threshold
    fn graph(&mut self, d: u16) -> Result<(), Error> {
        let x = self.x.wrapping_add(1);
        if d <= COORD_MASK {
            self.vector_to(x, d.max(self.threshold), true)
        } else if d <= GRAPH_CLIPPED_MAX && self.threshold != 0 {
            self.vector_to(x, self.threshold, true)
        } else {
            self.vector_to(x, 0, false)
        }
    }

    fn label(&mut self, addr: u16, d: u16) -> Result<Option<Halt>, Error> {
        let code = (d & 0xff) as u8;
        if !self.priming {
            self.sink.annotate(&format!("char 0x{:02x}", code))?;
        }
        match code {
            // NUL, blink off, blink on
            0x00 | 0x11 | 0x12 => {}
            0x08 => self.vector_to(self.x.wrapping_sub(GLYPH_WIDTH), self.y, false)?,
            0x0a => self.vector_to(self.x, self.y.wrapping_sub(GLYPH_HEIGHT), false)?,
            0x0d => self.vector_to(0, self.y, false)?,
            0x20 => self.vector_to(self.x.wrapping_add(GLYPH_WIDTH), self.y, false)?,
            0x91 => self.next = addr.wrapping_add(16) & 0xff0,
            0x92 => self.next = addr.wrapping_add(32) & 0xfe0,
            0x93 => self.next = addr.wrapping_add(64) & 0xfc0,
            _ => return self.glyph(addr, code),
        }
        Ok(None)
    }

    fn glyph(&mut self, addr: u16, code: u8) -> Result<Option<Halt>, Error> {
        self.snap_to_cell();
        let (x0, y0) = (self.x, self.y);
        let rom = self.rom;
        match charrom::walk(rom, x0, y0, code, |x, y, draw| self.vector_to(x, y, draw)) {
            Ok(()) => {}
            Err(Error::RunawayGlyph { code }) => {
                return Ok(Some(Halt::RunawayGlyph { addr, code }))
            }
            Err(e) => return Err(e),
        }
        self.snap_to_cell();
        self.x = (self.x + GLYPH_WIDTH) & COORD_MASK;
        Ok(None)
    }

    fn snap_to_cell(&mut self) {
        self.x &= COORD_MASK & !(GLYPH_WIDTH - 1);
        self.y &= COORD_MASK & !(GLYPH_HEIGHT - 1);
    }

    /// x here, y in the next word; bit 11 of x is relative, of y pen up
    fn vector(&mut self, addr: u16, d: u16) -> Result<(), Error> {
        let yw = self.memory.word(addr.wrapping_add(1));
        self.next = addr.wrapping_add(2);
        let (mut x, mut y) = (d & COORD_MASK, yw & COORD_MASK);
        if d & 0x800 != 0 {
            x = self.x.wrapping_add(x);
            y = self.y.wrapping_add(y);
        }
        self.vector_to(x, y, yw & 0x800 == 0)
    }

    fn display_control(&mut self, addr: u16, dc: DisplayControl) -> Result<(), Error> {
        self.mode = dc.mode;
        if dc.end {
            self.stopped = true;
        }
        self.set_pen_color(self.options.color(dc.brightness))?;
        // uses the old scale, the new one is latched below
        if dc.clear_x {
            self.vector_to(0, self.y, false)?;
        }
        if dc.skip_page {
            self.next = addr.wrapping_add(0x400) & 0xc00;
        }
        self.ratio = self.options.ratio(dc.scale);
        self.offset = self.options.offset(dc.scale);
        Ok(())
    }

    fn program_control(&mut self, addr: u16, pc: ProgramControl) {
        let operand = addr.wrapping_add(1);
        match pc.op {
            None | Some(ProgramOp::SkipToControl) => {}
            Some(ProgramOp::Jump) => self.next = self.memory.word(operand),
            Some(ProgramOp::DecrementSkipZero) => {
                self.counter = self.counter.wrapping_sub(1);
                if self.counter == 0 {
                    self.next = addr.wrapping_add(2);
                }
            }
            Some(ProgramOp::Call) => {
                self.return_addr = addr.wrapping_add(2) & ADDRESS_MASK;
                self.next = self.memory.word(operand);
            }
            Some(ProgramOp::Return) => self.next = self.return_addr,
        }
        self.skip_data = true;
    }

    /// move the beam, telling the sink unless this is the priming pass
    fn vector_to(&mut self, x: u16, y: u16, draw: bool) -> Result<(), Error> {
        let x = x & COORD_MASK;
        let y = y & COORD_MASK;
        if !self.priming {
            let (sx, sy) = self.options.to_sink(x, y, self.ratio, self.offset);
            self.sink.move_or_draw(sx, sy, draw)?;
        }
        self.x = x;
        self.y = y;
        Ok(())
    }

    fn set_pen_color(&mut self, color: Color) -> Result<(), Error> {
        if self.priming || self.pen_color == Some(color) {
            return Ok(());
        }
        self.sink.set_pen_color(color)?;
        self.pen_color = Some(color);
        Ok(())
    }

    fn set_pen_width(&mut self, width: f64) -> Result<(), Error> {
        if self.priming || self.pen_width == Some(width) {
            return Ok(());
        }
        self.sink.set_pen_width(width)?;
        self.pen_width = Some(width);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::{BoundingBox, RecordingSink, SinkCall};
    use crate::memory::SCREEN_WORDS;
    use std::io;

    /// program at address 0, zeroes after
    fn program(words: &[u16]) -> ScreenMemory {
        program_filled(words, 0)
    }

    fn program_filled(words: &[u16], fill: u16) -> ScreenMemory {
        let mut w = vec![fill; SCREEN_WORDS];
        w[..words.len()].copy_from_slice(words);
        ScreenMemory::from_words(&w).unwrap()
    }

    /// options where sink x == beam x and sink y == 1023 - beam y
    fn unit_options() -> RenderOptions {
        let zero = Offset { x: 0.0, y: 0.0 };
        RenderOptions {
            ratio_d1: 1.0,
            ratio_d2: 1.0,
            ratio_d3: 1.0,
            ratio_bex: 1.0,
            offset_d1: zero,
            offset_full: zero,
            margin: 0.0,
            aspect: 1.0,
            max_steps: 10_000,
            ..RenderOptions::default()
        }
    }

    /// beam positions of every move/draw, when rendered with unit_options
    fn beam(sink: &RecordingSink) -> Vec<(u16, u16, bool)> {
        sink.moves()
            .map(|(x, y, draw)| (x as u16, (1023.0 - y) as u16, draw))
            .collect()
    }

    fn render_unit(m: &ScreenMemory) -> (RecordingSink, RenderReport) {
        let mut sink = RecordingSink::new();
        let report = render(m, &mut sink, &unit_options()).unwrap();
        (sink, report)
    }

    #[test]
    fn test_single_vector_then_end() {
        // vector mode; draw to 512,512; end. the rest is junk
        let m = program_filled(&[0x402, 512, 512, 0x406], 0x155);
        let o = RenderOptions::default();
        let mut sink = RecordingSink::new();
        let report = render(&m, &mut sink, &o).unwrap();

        let (ox, oy) = o.to_sink(0, 0, 1.0, o.offset_d1);
        let (x, y) = o.to_sink(512, 512, 1.0, o.offset_d1);
        assert_eq!(
            sink.calls,
            vec![
                SinkCall::Begin {
                    bbox: o.bounding_box(),
                    background: Color::White
                },
                SinkCall::PenWidth(3.0),
                SinkCall::PenColor(Color::Black),
                SinkCall::MoveOrDraw {
                    x: ox,
                    y: oy,
                    draw: false
                },
                SinkCall::MoveOrDraw { x, y, draw: true },
                SinkCall::End,
            ]
        );
        assert_eq!(report.real.halt, Halt::Stopped { addr: 3 });
        assert_eq!(report.real.steps, 3);
        assert_eq!(report.priming, report.real);
    }

    #[test]
    fn test_end_bit_stops_immediately() {
        let m = program_filled(&[0x406, 512, 512], 0x155);
        let (sink, report) = render_unit(&m);
        assert_eq!(beam(&sink), vec![(0, 0, false)]);
        assert_eq!(report.real.halt, Halt::Stopped { addr: 0 });
        assert_eq!(sink.calls.last(), Some(&SinkCall::End));
    }

    #[test]
    fn test_bounding_box_handed_to_sink() {
        let m = program(&[0x404]);
        let (sink, _) = render_unit(&m);
        match &sink.calls[0] {
            SinkCall::Begin { bbox, background } => {
                assert_eq!(
                    *bbox,
                    BoundingBox {
                        x0: 0.0,
                        y0: 0.0,
                        x1: 1023.0,
                        y1: 1023.0
                    }
                );
                assert_eq!(*background, Color::White);
            }
            other => panic!("expected begin, got {:?}", other),
        }
    }

    #[test]
    fn test_deterministic() {
        let m = program(&[0x401, 0x041, 0x042, 0x402, 0x900, 0x120, 0x400, 0x050, 0x404]);
        let (a, ra) = render_unit(&m);
        let (b, rb) = render_unit(&m);
        assert_eq!(a.calls, b.calls);
        assert_eq!(ra, rb);
    }

    #[test]
    fn test_mode_persists_until_next_display_word() {
        let m = program(&[
            0x400, // graph
            0x010, 0x020, //
            0x402, // vector
            0x100, 0x200, //
            0x404, // graph, end
        ]);
        let (sink, _) = render_unit(&m);
        assert_eq!(
            beam(&sink),
            vec![(0, 0, false), (1, 16, true), (2, 32, true), (256, 512, true)]
        );
    }

    #[test]
    fn test_graph_threshold() {
        let m = program(&[
            0x60a, // counter 10, threshold 40
            0x400, //
            0x005, // below threshold
            0x100, //
            0x900, // off screen, clipped to threshold
            0xd00, // beyond that, beam off
            0x404,
        ]);
        let (sink, _) = render_unit(&m);
        assert_eq!(
            beam(&sink),
            vec![
                (0, 0, false),
                (1, 40, true),
                (2, 256, true),
                (3, 40, true),
                (4, 0, false)
            ]
        );
    }

    #[test]
    fn test_graph_threshold_disabled() {
        let m = program(&[0x70a, 0x400, 0x005, 0x900, 0x404]);
        let (sink, _) = render_unit(&m);
        assert_eq!(
            beam(&sink),
            vec![(0, 0, false), (1, 5, true), (2, 0, false)]
        );
    }

    #[test]
    fn test_priming_pass_loads_threshold() {
        // the sample is drawn before the counter is loaded in program order
        let m = program(&[0x400, 0x005, 0x60a, 0x404]);
        let (sink, report) = render_unit(&m);
        assert_eq!(beam(&sink), vec![(0, 0, false), (1, 40, true)]);
        assert_eq!(report.priming.halt, Halt::Stopped { addr: 3 });
    }

    #[test]
    fn test_decrement_skip_zero_loop() {
        // 0: counter 5; 1: dsz; 2: jmp 1; 4: end
        let m = program(&[0x605, 0x44b, 0x40b, 0x001, 0x404]);
        let (_, report) = render_unit(&m);
        // count + 5 dsz + 4 jmp + skipped operand + end
        assert_eq!(report.real.steps, 12);
        assert_eq!(report.real.halt, Halt::Stopped { addr: 4 });
    }

    #[test]
    fn test_decrement_skip_zero_from_zero_wraps() {
        let m = program(&[0x600, 0x44b, 0x40b, 0x001, 0x404]);
        let (_, report) = render_unit(&m);
        assert_eq!(report.real.steps, 1 + 256 + 255 + 1 + 1);
    }

    #[test]
    fn test_call_and_return() {
        let mut w = vec![0u16; 16];
        w[0] = 0x48b; // jsr 4
        w[1] = 4;
        w[2] = 0x404; // end
        w[4] = 0x4cb; // rtn
        let (_, report) = render_unit(&program(&w));
        assert_eq!(report.real.halt, Halt::Stopped { addr: 2 });
    }

    #[test]
    fn test_nested_call_overwrites_return_address() {
        let mut w = vec![0u16; 16];
        w[0] = 0x48b; // jsr 4, return address 2
        w[1] = 4;
        w[2] = 0x406; // end, never reached
        w[4] = 0x48b; // jsr 8, return address 6
        w[5] = 8;
        w[6] = 0x404; // end
        w[8] = 0x4cb; // rtn
        let (_, report) = render_unit(&program(&w));
        assert_eq!(report.real.halt, Halt::Stopped { addr: 6 });
    }

    #[test]
    fn test_operands_not_drawn() {
        // skip-to-control, then a data word that must not become a graph point
        let m = program(&[0x403, 0x155, 0x404]);
        let (sink, report) = render_unit(&m);
        assert_eq!(beam(&sink), vec![(0, 0, false)]);
        assert_eq!(report.real.steps, 3);
    }

    #[test]
    fn test_unrecognized_halts_pass() {
        let m = program_filled(&[0x402, 0x010, 0x010, 0x443], 0x404);
        let (sink, report) = render_unit(&m);
        let halt = Halt::Unrecognized {
            addr: 3,
            word: 0x443,
        };
        assert_eq!(report.priming.halt, halt);
        assert_eq!(report.real.halt, halt);
        assert!(halt.is_malformed());
        assert_eq!(beam(&sink), vec![(0, 0, false), (16, 16, true)]);
        assert_eq!(sink.calls.last(), Some(&SinkCall::End));
    }

    #[test]
    fn test_step_limit() {
        // 0: jmp 0, forever
        let m = program(&[0x40b, 0x000]);
        let o = RenderOptions {
            max_steps: 100,
            ..unit_options()
        };
        let mut sink = RecordingSink::new();
        let report = render(&m, &mut sink, &o).unwrap();
        assert_eq!(report.real.steps, 100);
        assert_eq!(report.real.halt, Halt::StepLimit { addr: 0 });
    }

    #[test]
    fn test_glyph_matches_rom() {
        let m = program(&[0x401, 0x031, 0x404]);
        let (sink, _) = render_unit(&m);
        let mut expected = vec![(0, 0, false)];
        charrom::draw_glyph(0, 0, b'1', |x, y, draw| {
            expected.push((x, y, draw));
            Ok(())
        })
        .unwrap();
        assert_eq!(beam(&sink), expected);
        assert!(sink
            .calls
            .contains(&SinkCall::Annotate("char 0x31".to_string())));
    }

    #[test]
    fn test_glyphs_advance_one_cell() {
        let m = program(&[0x401, 0x031, 0x031, 0x404]);
        let (sink, _) = render_unit(&m);
        let first = beam(&sink)[1];
        let second_start = beam(&sink)
            .into_iter()
            .skip(2)
            .find(|p| *p == (first.0 + 16, first.1, first.2));
        assert!(second_start.is_some());
    }

    #[test]
    fn test_label_cursor_codes() {
        let m = program(&[
            0x402, 0x100, 0x940, // vector: move to 256,320
            0x401, // label
            0x008, // backspace
            0x00a, // newline
            0x020, // space
            0x011, // blink off
            0x00d, // carriage return
            0x404,
        ]);
        let (sink, _) = render_unit(&m);
        assert_eq!(
            beam(&sink),
            vec![
                (0, 0, false),
                (256, 320, false),
                (240, 320, false),
                (240, 288, false),
                (256, 288, false),
                (0, 288, false),
            ]
        );
    }

    #[test]
    fn test_label_skip_to_boundary() {
        let mut w = vec![0x406u16; 0x50];
        w[0] = 0x401;
        w[1] = 0x091; // next 16
        w[0x10] = 0x092; // next 32
        w[0x20] = 0x093; // next 64
        w[0x40] = 0x404;
        let (_, report) = render_unit(&program(&w));
        assert_eq!(report.real.halt, Halt::Stopped { addr: 0x40 });
    }

    #[test]
    fn test_display_skip_page() {
        let mut w = vec![0x406u16; 0x401];
        w[0] = 0x420; // graph, skip to 0x400
        w[0x400] = 0x404;
        let (_, report) = render_unit(&program(&w));
        assert_eq!(report.real.halt, Halt::Stopped { addr: 0x400 });
        assert_eq!(report.real.steps, 2);
    }

    #[test]
    fn test_clear_x() {
        let m = program(&[0x402, 300, 0x864, 0x412, 0x404]);
        let (sink, _) = render_unit(&m);
        assert_eq!(
            beam(&sink),
            vec![(0, 0, false), (300, 100, false), (0, 100, false)]
        );
    }

    #[test]
    fn test_relative_vector_wraps() {
        let m = program(&[
            0x402, 1000, 10, // to 1000,10
            0x864, 0x3ff, // +100, -1
            0x404,
        ]);
        let (sink, _) = render_unit(&m);
        assert_eq!(
            beam(&sink),
            vec![(0, 0, false), (1000, 10, true), (76, 9, true)]
        );
    }

    #[test]
    fn test_pen_colors_only_on_change() {
        let m = program(&[0x480, 0x408, 0x400, 0x400, 0x404]);
        let (sink, _) = render_unit(&m);
        let colors: Vec<_> = sink
            .calls
            .iter()
            .filter_map(|c| match c {
                SinkCall::PenColor(c) => Some(*c),
                _ => None,
            })
            .collect();
        assert_eq!(
            colors,
            vec![Color::Black, Color::Red, Color::Blue, Color::Black]
        );
    }

    #[test]
    fn test_scale_applies_to_later_moves() {
        // D3: full screen, 1.68
        let m = program(&[0x542, 100, 200, 0x404]);
        let o = RenderOptions::default();
        let mut sink = RecordingSink::new();
        render(&m, &mut sink, &o).unwrap();
        let moves: Vec<_> = sink.moves().collect();
        let (x, y) = o.to_sink(100, 200, 1.68, o.offset_full);
        assert_eq!(moves[1], (x, y, true));
    }

    struct BrokenSink;

    impl DrawingSink for BrokenSink {
        #[allow(unused)]
        fn begin(&mut self, bbox: BoundingBox, background: Color) -> Result<(), io::Error> {
            Ok(())
        }
        #[allow(unused)]
        fn set_pen_color(&mut self, color: Color) -> Result<(), io::Error> {
            Ok(())
        }
        #[allow(unused)]
        fn set_pen_width(&mut self, width: f64) -> Result<(), io::Error> {
            Ok(())
        }
        #[allow(unused)]
        fn move_or_draw(&mut self, x: f64, y: f64, draw: bool) -> Result<(), io::Error> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "plotter unplugged"))
        }
        fn end(&mut self) -> Result<(), io::Error> {
            Ok(())
        }
    }

    #[test]
    fn test_sink_errors_propagate() {
        let m = program(&[0x404]);
        let r = render(&m, &mut BrokenSink, &unit_options());
        assert!(matches!(r, Err(Error::Io(_))));
    }

    #[test]
    fn test_beam_stays_in_range_stepwise() {
        let m = program(&[
            0x402, 0x3ff, 0x3ff, 0xbff, 0xbff, 0x401, 0x041, 0x008, 0x00a, 0x400, 0x3ff, 0x404,
        ]);
        let o = unit_options();
        let mut sink = RecordingSink::new();
        let mut r = Renderer::new(&m, &mut sink, &o);
        for _ in 0..100 {
            let halt = r.step().unwrap();
            let (x, y) = r.position();
            assert!(x < 1024 && y < 1024);
            if halt.is_some() {
                break;
            }
        }
        assert_eq!(r.mode(), Mode::Graph);
    }

    #[test]
    fn test_looping_glyph_halts_the_pass() {
        // 'A' strokes, then a continuation back to 'A' itself
        let mut rom = CHARACTER_ROM.to_vec();
        rom[0x41 * 8..0x42 * 8].copy_from_slice(&[0x9d, 0x3e, 0x36, 0x3e, 0x96, 0x56, 0x2e, 0x41]);
        let m = program(&[0x401, 0x041, 0x404]);
        let o = unit_options();
        let mut sink = RecordingSink::new();
        let mut r = Renderer::new(&m, &mut sink, &o);
        r.rom = &rom;
        let report = r.run().unwrap();

        let runaway = Halt::RunawayGlyph {
            addr: 1,
            code: 0x41,
        };
        assert_eq!(report.priming.halt, runaway);
        assert_eq!(report.real.halt, runaway);
        assert_eq!(report.real.steps, 2);
        assert!(report.real.halt.is_malformed());
        assert_eq!(sink.calls.last(), Some(&SinkCall::End));
    }

    #[test]
    fn test_report_carries_rom_check() {
        let (_, report) = render_unit(&program(&[0x404]));
        assert!(report.rom_ok);
    }

    #[test]
    fn test_describe_graph_words() {
        let m = program(&[0x404]);
        let o = unit_options();
        let mut sink = RecordingSink::new();
        let mut r = Renderer::new(&m, &mut sink, &o);
        r.mode = Mode::Graph;
        r.threshold = 0x100;
        assert_eq!(r.describe_data(0, 0x050), "grp 256");
        assert_eq!(r.describe_data(0, 0x300), "grp 768");
        assert_eq!(r.describe_data(0, 0xc00), "grp 3072");
    }

    #[test]
    fn test_describe_label_words() {
        let m = program(&[0x404]);
        let o = unit_options();
        let mut sink = RecordingSink::new();
        let mut r = Renderer::new(&m, &mut sink, &o);
        r.mode = Mode::Label;
        for (d, text) in [
            (0x041, "lbl 'A'"),
            (0x07e, "lbl '~'"),
            (0x000, "lbl NUL"),
            (0x008, "lbl bs"),
            (0x00a, "lbl nl"),
            (0x00d, "lbl cr"),
            (0x011, "lbl -blink"),
            (0x012, "lbl +blink"),
            (0x120, "lbl sp"),
            (0x091, "lbl sk16"),
            (0x092, "lbl sk32"),
            (0x093, "lbl sk64"),
            (0x0a0, "lbl 0x0a0"),
            (0x021, "lbl '!'"),
        ] {
            assert_eq!(r.describe_data(0, d), text, "word 0x{:03x}", d);
        }
    }

    #[test]
    fn test_describe_vector_words() {
        // relative pen-up hop, then an absolute draw
        let m = program(&[0x402, 0x810, 0x820, 100, 200, 0x404]);
        let o = unit_options();
        let mut sink = RecordingSink::new();
        let mut r = Renderer::new(&m, &mut sink, &o);
        r.step().unwrap();
        r.step().unwrap();
        assert_eq!(r.describe_data(1, 0x810), "vec 16,32 up rel");
        r.step().unwrap();
        assert_eq!(r.describe_data(3, 100), "vec 100,200");
    }
}
