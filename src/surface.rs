// Abstract drawing surface - the one external capability both components
// depend on. Implementations: a terminal canvas in the demo binary, a
// recording mock in the integration tests.

/// Opaque handle to a primitive owned by a drawing surface.
///
/// Handles are only meaningful to the surface that issued them. Every
/// creation call returns its handle, so callers never have to guess how
/// the surface allocates ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PrimitiveId(u64);

impl PrimitiveId {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// A 2D surface that can draw and delete shape primitives.
///
/// Coordinates are in surface pixels, origin top-left, y growing down.
/// Colors are passed as plain names ("black", "white", "red", ...) and
/// interpreted by the surface.
pub trait DrawingSurface {
    /// Draw a line segment from (x1, y1) to (x2, y2).
    fn create_line(
        &mut self,
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        color: &str,
        width: f64,
    ) -> PrimitiveId;

    /// Draw a filled oval inscribed in the bounding box (x1, y1)-(x2, y2).
    fn create_oval(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, fill: &str) -> PrimitiveId;

    /// Delete a primitive. Must be idempotent: deleting an unknown or
    /// already-deleted handle is a no-op, not an error.
    fn delete_primitive(&mut self, id: PrimitiveId);
}

/// A pointer event forwarded by the host to the components.
///
/// The host application owns the real event source (terminal, GUI
/// toolkit, ...) and translates its events into these; each component
/// keeps its own listener state rather than registering ambient
/// callbacks on the surface, so several boards and brushes can coexist
/// in one process.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Primary button pressed at (x, y)
    Press { x: f64, y: f64 },
    /// Pointer moved to (x, y) while the button is held
    Drag { x: f64, y: f64 },
    /// Primary button released
    Release,
}
