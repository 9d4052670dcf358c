// board_demo - interactive terminal demo for e_board.
//
// Implements DrawingSurface over a retained shape store rendered with
// ratatui's braille Canvas, and feeds crossterm mouse events to the
// board and paintbrush as PointerEvents.
//
// Keys: b = board mode (click cycles empty -> white -> black -> empty),
//       p = paint mode (drag to draw), u = undo stroke, c = clear
//       strokes, q / Esc = quit.
// Run with RUST_LOG=debug to trace events on stderr.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::io;
use std::rc::Rc;
use std::time::Duration;

use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, MouseButton,
    MouseEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use log::{debug, info};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;
use ratatui::style::Color;
use ratatui::symbols::Marker;
use ratatui::widgets::canvas::{Canvas, Circle, Context, Line};
use ratatui::widgets::{Block, Borders};
use ratatui::Terminal;

use e_board::display::format_board;
use e_board::{BoardConfig, BoardGrid, DrawingSurface, Paintbrush, PointerEvent, PrimitiveId};

const SURFACE_W: f64 = 800.0;
const SURFACE_H: f64 = 500.0;

enum Shape {
    Line {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        color: Color,
    },
    Oval {
        cx: f64,
        cy: f64,
        radius: f64,
        color: Color,
    },
}

/// Retained-shape terminal surface. Primitives live in a map keyed by
/// handle and are replayed into the ratatui canvas every frame.
struct TermSurface {
    next_id: u64,
    shapes: BTreeMap<u64, Shape>,
}

impl TermSurface {
    fn new() -> Self {
        Self {
            next_id: 0,
            shapes: BTreeMap::new(),
        }
    }

    fn alloc(&mut self) -> PrimitiveId {
        self.next_id += 1;
        PrimitiveId::new(self.next_id)
    }

    fn paint(&self, ctx: &mut Context<'_>) {
        for shape in self.shapes.values() {
            match shape {
                Shape::Line {
                    x1,
                    y1,
                    x2,
                    y2,
                    color,
                } => ctx.draw(&Line {
                    // canvas y grows up, surface y grows down
                    x1: *x1,
                    y1: SURFACE_H - *y1,
                    x2: *x2,
                    y2: SURFACE_H - *y2,
                    color: *color,
                }),
                Shape::Oval {
                    cx,
                    cy,
                    radius,
                    color,
                } => ctx.draw(&Circle {
                    x: *cx,
                    y: SURFACE_H - *cy,
                    radius: *radius,
                    color: *color,
                }),
            }
        }
    }
}

/// Map a color name to something visible on a dark terminal.
fn term_color(name: &str) -> Color {
    match name {
        "black" => Color::DarkGray,
        "white" => Color::White,
        "red" => Color::Red,
        "green" => Color::Green,
        "blue" => Color::Blue,
        "yellow" => Color::Yellow,
        "cyan" => Color::Cyan,
        "magenta" | "purple" => Color::Magenta,
        "gray" | "grey" => Color::Gray,
        _ => Color::White,
    }
}

impl DrawingSurface for TermSurface {
    fn create_line(
        &mut self,
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        color: &str,
        _width: f64,
    ) -> PrimitiveId {
        let id = self.alloc();
        self.shapes.insert(
            id.raw(),
            Shape::Line {
                x1,
                y1,
                x2,
                y2,
                color: term_color(color),
            },
        );
        id
    }

    fn create_oval(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, fill: &str) -> PrimitiveId {
        let id = self.alloc();
        self.shapes.insert(
            id.raw(),
            Shape::Oval {
                cx: (x1 + x2) / 2.0,
                cy: (y1 + y2) / 2.0,
                // zero-size point strokes still need a visible dot
                radius: ((x2 - x1).abs() / 2.0).max(1.5),
                color: term_color(fill),
            },
        );
        id
    }

    fn delete_primitive(&mut self, id: PrimitiveId) {
        self.shapes.remove(&id.raw());
    }
}

#[derive(Clone, Copy, PartialEq)]
enum Mode {
    Board,
    Paint,
}

/// Translate a terminal mouse position into surface pixels, relative to
/// the canvas area inside the border.
fn mouse_to_surface(area: Rect, column: u16, row: u16) -> (f64, f64) {
    let inner_w = area.width.saturating_sub(2).max(1);
    let inner_h = area.height.saturating_sub(2).max(1);
    let cx = column.saturating_sub(area.x + 1).min(inner_w - 1);
    let cy = row.saturating_sub(area.y + 1).min(inner_h - 1);
    (
        (cx as f64 + 0.5) / inner_w as f64 * SURFACE_W,
        (cy as f64 + 0.5) / inner_h as f64 * SURFACE_H,
    )
}

/// Next piece color when a cell is clicked: empty -> white -> black -> empty.
fn cycle_color(current: &str) -> Option<&'static str> {
    match current {
        "" => Some("white"),
        "white" => Some("black"),
        _ => None,
    }
}

fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> io::Result<()> {
    let mut surface = TermSurface::new();
    let mut board = BoardGrid::new(
        BoardConfig::new(8, 8, SURFACE_W, SURFACE_H),
        &mut surface,
    )
    .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e.to_string()))?;
    let mut brush = Paintbrush::new("red", 1.0);
    let mut mode = Mode::Board;

    // The click handler only records the resolved cell; the event loop
    // applies the placement because the handler cannot also hold the
    // surface mutably.
    let clicked: Rc<RefCell<Option<(i32, i32, String)>>> = Rc::new(RefCell::new(None));
    let clicked_sink = Rc::clone(&clicked);
    board.bind_click(
        move |row, col, color| {
            debug!("click resolved to cell ({}, {}) occupant {:?}", row, col, color);
            *clicked_sink.borrow_mut() = Some((row, col, color.to_string()));
        },
        true,
    );

    let mut canvas_area = Rect::default();
    loop {
        terminal.draw(|frame| {
            canvas_area = frame.area();
            let title = match mode {
                Mode::Board => " e_board demo - BOARD mode [b/p u c q] ",
                Mode::Paint => " e_board demo - PAINT mode [b/p u c q] ",
            };
            let canvas = Canvas::default()
                .block(Block::default().borders(Borders::ALL).title(title))
                .marker(Marker::Braille)
                .x_bounds([0.0, SURFACE_W])
                .y_bounds([0.0, SURFACE_H])
                .paint(|ctx| surface.paint(ctx));
            frame.render_widget(canvas, frame.area());
        })?;

        if !event::poll(Duration::from_millis(50))? {
            continue;
        }
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                KeyCode::Char('b') => mode = Mode::Board,
                KeyCode::Char('p') => mode = Mode::Paint,
                KeyCode::Char('u') => brush.undo(&mut surface, 1),
                KeyCode::Char('c') => brush.clear(&mut surface),
                _ => {}
            },
            Event::Mouse(mouse) => {
                let (x, y) = mouse_to_surface(canvas_area, mouse.column, mouse.row);
                let pointer = match mouse.kind {
                    MouseEventKind::Down(MouseButton::Left) => PointerEvent::Press { x, y },
                    MouseEventKind::Drag(MouseButton::Left) => PointerEvent::Drag { x, y },
                    MouseEventKind::Up(MouseButton::Left) => PointerEvent::Release,
                    _ => continue,
                };
                match mode {
                    Mode::Paint => brush.handle_pointer(&mut surface, pointer),
                    Mode::Board => {
                        board.handle_pointer(pointer);
                        if let Some((row, col, occupant)) = clicked.borrow_mut().take() {
                            match cycle_color(&occupant) {
                                Some(next) => {
                                    board.place_piece(&mut surface, row, col, next, true)
                                }
                                None => board.remove_piece(&mut surface, row, col),
                            }
                            debug!("board state:\n{}", format_board(&board));
                        }
                    }
                }
            }
            _ => {}
        }
    }
}

fn main() -> io::Result<()> {
    env_logger::init();
    info!("starting board_demo ({}x{} surface)", SURFACE_W, SURFACE_H);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run(&mut terminal);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;
    res
}
