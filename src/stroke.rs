// Paintbrush - freehand drawing with stroke-level undo.
//
// One pointer-down -> drag* -> up gesture is the unit of undo. Each
// primitive-creation call returns its handle and the active gesture
// accumulates them in order, so undo never has to assume anything about
// how the surface allocates ids.

use log::debug;

use crate::surface::{DrawingSurface, PointerEvent, PrimitiveId};

/// An in-progress gesture: the primitives drawn so far plus the current
/// pen position.
struct ActiveStroke {
    ids: Vec<PrimitiveId>,
    pen_x: f64,
    pen_y: f64,
}

pub struct Paintbrush {
    /// Brush color
    pub color: String,
    /// Brush width
    pub width: f64,
    /// Completed gestures, oldest first
    strokes: Vec<Vec<PrimitiveId>>,
    active: Option<ActiveStroke>,
}

impl Paintbrush {
    pub fn new(color: &str, width: f64) -> Self {
        Self {
            color: color.to_string(),
            width,
            strokes: Vec::new(),
            active: None,
        }
    }

    /// Begin a gesture: draw a zero-size oval (a point) at (x, y) and
    /// open the stroke with its handle. A press while already drawing is
    /// ignored.
    pub fn pointer_pressed(&mut self, surface: &mut dyn DrawingSurface, x: f64, y: f64) {
        if self.active.is_some() {
            debug!("pointer_pressed: gesture already in progress, ignoring");
            return;
        }
        let id = surface.create_oval(x, y, x, y, &self.color);
        self.active = Some(ActiveStroke {
            ids: vec![id],
            pen_x: x,
            pen_y: y,
        });
    }

    /// Extend the gesture: draw a line from the pen position to (x, y)
    /// and move the pen there. Ignored when no gesture is in progress
    /// (a drag can arrive without a press when the pointer enters the
    /// surface mid-gesture).
    pub fn pointer_dragged(&mut self, surface: &mut dyn DrawingSurface, x: f64, y: f64) {
        let stroke = match self.active.as_mut() {
            Some(stroke) => stroke,
            None => return,
        };
        let id = surface.create_line(stroke.pen_x, stroke.pen_y, x, y, &self.color, self.width);
        stroke.ids.push(id);
        stroke.pen_x = x;
        stroke.pen_y = y;
    }

    /// Seal the gesture into the stroke log. A gesture that never saw a
    /// drag is a single-point stroke and undoes like any other.
    pub fn pointer_released(&mut self) {
        match self.active.take() {
            Some(stroke) => {
                debug!("stroke sealed: {} primitives", stroke.ids.len());
                self.strokes.push(stroke.ids);
            }
            None => debug!("pointer_released: no gesture in progress"),
        }
    }

    /// Forward a host pointer event.
    pub fn handle_pointer(&mut self, surface: &mut dyn DrawingSurface, event: PointerEvent) {
        match event {
            PointerEvent::Press { x, y } => self.pointer_pressed(surface, x, y),
            PointerEvent::Drag { x, y } => self.pointer_dragged(surface, x, y),
            PointerEvent::Release => self.pointer_released(),
        }
    }

    /// Undo the last `n` strokes, most recent first, deleting each
    /// stroke's primitives fully before starting the next. Undoing at
    /// least as many strokes as are recorded is the same as `clear`;
    /// `n == 0` and undo with nothing recorded are no-ops. An unfinished
    /// gesture is not undoable until it is sealed by a release.
    pub fn undo(&mut self, surface: &mut dyn DrawingSurface, n: usize) {
        if n == 0 {
            return;
        }
        if n >= self.strokes.len() {
            self.clear(surface);
            return;
        }
        for _ in 0..n {
            if let Some(ids) = self.strokes.pop() {
                for id in ids {
                    surface.delete_primitive(id);
                }
            }
        }
    }

    /// Delete every recorded stroke's primitives and empty the log.
    pub fn clear(&mut self, surface: &mut dyn DrawingSurface) {
        if self.strokes.is_empty() {
            debug!("clear: nothing recorded");
        }
        for ids in self.strokes.drain(..) {
            for id in ids {
                surface.delete_primitive(id);
            }
        }
    }

    /// Number of sealed strokes
    pub fn stroke_count(&self) -> usize {
        self.strokes.len()
    }

    /// True while a gesture is in progress
    pub fn is_drawing(&self) -> bool {
        self.active.is_some()
    }
}
