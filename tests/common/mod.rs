//! Shared recording surface for integration tests.
#![allow(dead_code)]

use std::collections::BTreeSet;

use e_board::{DrawingSurface, PrimitiveId};

#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Line {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        color: String,
        width: f64,
    },
    Oval {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        fill: String,
    },
}

/// Records every create/delete call. Handles are allocated sequentially,
/// but nothing in the library is allowed to rely on that.
#[derive(Default)]
pub struct MockSurface {
    next_id: u64,
    pub created: Vec<(PrimitiveId, DrawOp)>,
    pub deleted: Vec<PrimitiveId>,
    live: BTreeSet<u64>,
}

impl MockSurface {
    pub fn new() -> Self {
        Self::default()
    }

    fn alloc(&mut self) -> PrimitiveId {
        self.next_id += 1;
        self.live.insert(self.next_id);
        PrimitiveId::new(self.next_id)
    }

    pub fn live_count(&self) -> usize {
        self.live.len()
    }

    pub fn is_live(&self, id: PrimitiveId) -> bool {
        self.live.contains(&id.raw())
    }

    pub fn created_count(&self) -> usize {
        self.created.len()
    }

    pub fn last_created(&self) -> PrimitiveId {
        self.created.last().expect("nothing created").0
    }

    /// Ops of the live line primitives, in creation order.
    pub fn live_lines(&self) -> Vec<&DrawOp> {
        self.created
            .iter()
            .filter(|(id, op)| self.is_live(*id) && matches!(op, DrawOp::Line { .. }))
            .map(|(_, op)| op)
            .collect()
    }
}

impl DrawingSurface for MockSurface {
    fn create_line(
        &mut self,
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        color: &str,
        width: f64,
    ) -> PrimitiveId {
        let id = self.alloc();
        self.created.push((
            id,
            DrawOp::Line {
                x1,
                y1,
                x2,
                y2,
                color: color.to_string(),
                width,
            },
        ));
        id
    }

    fn create_oval(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, fill: &str) -> PrimitiveId {
        let id = self.alloc();
        self.created.push((
            id,
            DrawOp::Oval {
                x1,
                y1,
                x2,
                y2,
                fill: fill.to_string(),
            },
        ));
        id
    }

    fn delete_primitive(&mut self, id: PrimitiveId) {
        // idempotent: only record deletions of live primitives
        if self.live.remove(&id.raw()) {
            self.deleted.push(id);
        }
    }
}
