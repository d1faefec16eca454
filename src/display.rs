use crossterm::execute;
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io;
use tui::backend::CrosstermBackend;
use tui::style::Style;
use tui::symbols::Marker;
use tui::widgets::canvas::{Canvas, Line};
use tui::widgets::{Block, Borders};
use tui::Terminal;

/// DrawingSink is used by the interpreter to put strokes somewhere. It should
/// abstract the implementation details, so a pen plotter, an SVG file or a
/// terminal would all work.
///
/// Coordinates are already scaled, offset and flipped: x grows right, y grows
/// down, inside the bounding box handed to `begin`.
pub trait DrawingSink {
    fn begin(&mut self, bbox: BoundingBox, background: Color) -> Result<(), io::Error>;

    fn set_pen_color(&mut self, color: Color) -> Result<(), io::Error>;

    fn set_pen_width(&mut self, width: f64) -> Result<(), io::Error>;

    /// move the pen to (x, y), drawing a line on the way if `draw`
    fn move_or_draw(&mut self, x: f64, y: f64, draw: bool) -> Result<(), io::Error>;

    /// free-form note about what is being drawn
    #[allow(unused)]
    fn annotate(&mut self, comment: &str) -> Result<(), io::Error> {
        Ok(())
    }

    fn end(&mut self) -> Result<(), io::Error>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Black,
    White,
    Red,
    Green,
    Blue,
    Yellow,
    Cyan,
    Magenta,
    Gray,
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Color::Black => "black",
            Color::White => "white",
            Color::Red => "red",
            Color::Green => "green",
            Color::Blue => "blue",
            Color::Yellow => "yellow",
            Color::Cyan => "cyan",
            Color::Magenta => "magenta",
            Color::Gray => "gray",
        };
        f.write_str(name)
    }
}

impl From<Color> for tui::style::Color {
    fn from(c: Color) -> Self {
        match c {
            Color::Black => tui::style::Color::Black,
            Color::White => tui::style::Color::White,
            Color::Red => tui::style::Color::Red,
            Color::Green => tui::style::Color::Green,
            Color::Blue => tui::style::Color::Blue,
            Color::Yellow => tui::style::Color::Yellow,
            Color::Cyan => tui::style::Color::Cyan,
            Color::Magenta => tui::style::Color::Magenta,
            Color::Gray => tui::style::Color::Gray,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
}

/// one call made on a sink, as captured by `RecordingSink`
#[derive(Debug, Clone, PartialEq)]
pub enum SinkCall {
    Begin { bbox: BoundingBox, background: Color },
    PenColor(Color),
    PenWidth(f64),
    MoveOrDraw { x: f64, y: f64, draw: bool },
    Annotate(String),
    End,
}

impl fmt::Display for SinkCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SinkCall::Begin { bbox, background } => write!(
                f,
                "begin {:.1} {:.1} {:.1} {:.1} bg {}",
                bbox.x0, bbox.y0, bbox.x1, bbox.y1, background
            ),
            SinkCall::PenColor(c) => write!(f, "color {}", c),
            SinkCall::PenWidth(w) => write!(f, "width {:.1}", w),
            SinkCall::MoveOrDraw { x, y, draw } => {
                write!(f, "{} {:.1},{:.1}", if *draw { "draw" } else { "move" }, x, y)
            }
            SinkCall::Annotate(c) => write!(f, "# {}", c),
            SinkCall::End => write!(f, "end"),
        }
    }
}

/// keeps every call; useful for testing and for dumping what would be drawn
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub calls: Vec<SinkCall>,
}

impl RecordingSink {
    pub fn new() -> Self {
        RecordingSink { calls: Vec::new() }
    }

    /// just the pen movements
    pub fn moves(&self) -> impl Iterator<Item = (f64, f64, bool)> + '_ {
        self.calls.iter().filter_map(|c| match c {
            SinkCall::MoveOrDraw { x, y, draw } => Some((*x, *y, *draw)),
            _ => None,
        })
    }
}

impl DrawingSink for RecordingSink {
    fn begin(&mut self, bbox: BoundingBox, background: Color) -> Result<(), io::Error> {
        self.calls.push(SinkCall::Begin { bbox, background });
        Ok(())
    }

    fn set_pen_color(&mut self, color: Color) -> Result<(), io::Error> {
        self.calls.push(SinkCall::PenColor(color));
        Ok(())
    }

    fn set_pen_width(&mut self, width: f64) -> Result<(), io::Error> {
        self.calls.push(SinkCall::PenWidth(width));
        Ok(())
    }

    fn move_or_draw(&mut self, x: f64, y: f64, draw: bool) -> Result<(), io::Error> {
        self.calls.push(SinkCall::MoveOrDraw { x, y, draw });
        Ok(())
    }

    fn annotate(&mut self, comment: &str) -> Result<(), io::Error> {
        self.calls.push(SinkCall::Annotate(comment.to_string()));
        Ok(())
    }

    fn end(&mut self) -> Result<(), io::Error> {
        self.calls.push(SinkCall::End);
        Ok(())
    }
}

// a finished stroke, in sink coordinates
struct Segment {
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
    color: Color,
}

/// plots into a braille canvas on the terminal, rendered using TUI and
/// crossterm; strokes are gathered and painted in one go on `end`
pub struct TermPlotter {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    bbox: BoundingBox,
    background: Color,
    pen: (f64, f64),
    color: Color,
    segments: Vec<Segment>,
}

impl TermPlotter {
    pub fn new() -> Result<TermPlotter, io::Error> {
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(TermPlotter {
            terminal,
            bbox: BoundingBox {
                x0: 0.0,
                y0: 0.0,
                x1: 1.0,
                y1: 1.0,
            },
            background: Color::Black,
            pen: (0.0, 0.0),
            color: Color::White,
            segments: Vec::new(),
        })
    }
}

impl Drop for TermPlotter {
    fn drop(&mut self) {
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

impl DrawingSink for TermPlotter {
    fn begin(&mut self, bbox: BoundingBox, background: Color) -> Result<(), io::Error> {
        self.bbox = bbox;
        self.background = background;
        self.segments.clear();
        self.terminal.clear()
    }

    fn set_pen_color(&mut self, color: Color) -> Result<(), io::Error> {
        self.color = color;
        Ok(())
    }

    // a braille dot is as thin as it gets
    #[allow(unused)]
    fn set_pen_width(&mut self, width: f64) -> Result<(), io::Error> {
        Ok(())
    }

    fn move_or_draw(&mut self, x: f64, y: f64, draw: bool) -> Result<(), io::Error> {
        if draw {
            self.segments.push(Segment {
                x1: self.pen.0,
                y1: self.pen.1,
                x2: x,
                y2: y,
                color: self.color,
            });
        }
        self.pen = (x, y);
        Ok(())
    }

    fn end(&mut self) -> Result<(), io::Error> {
        // the canvas has y pointing up, so flip everything about the x axis
        self.terminal.draw(|f| {
            let size = f.size();
            let canvas = Canvas::default()
                .block(
                    Block::default()
                        .title("HP85662A")
                        .borders(Borders::ALL)
                        .style(Style::default().bg(self.background.into())),
                )
                .x_bounds([self.bbox.x0, self.bbox.x1])
                .y_bounds([-self.bbox.y1, -self.bbox.y0])
                .marker(Marker::Braille)
                .paint(|ctx| {
                    for s in &self.segments {
                        ctx.draw(&Line {
                            x1: s.x1,
                            y1: -s.y1,
                            x2: s.x2,
                            y2: -s.y2,
                            color: s.color.into(),
                        });
                    }
                });
            f.render_widget(canvas, size);
        })?;
        Ok(())
    }
}
