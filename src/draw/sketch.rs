//! Sketch container for the shapes drawn on one step screenshot.

use super::shape::{Shape, ShapeHandle, ShapeId};
use crate::input::dependencies::{ShapeFactory, ShapeRegistrar};
use log::{debug, warn};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EntryState {
    /// Handed out at press, not yet released
    Pending,
    Registered { editable: bool },
}

#[derive(Debug, Clone)]
struct Entry {
    handle: ShapeHandle,
    state: EntryState,
}

/// Serializable view of one committed shape.
#[derive(Debug, Clone, Serialize)]
pub struct ShapeRecord {
    pub id: ShapeId,
    pub editable: bool,
    #[serde(flatten)]
    pub shape: Shape,
}

/// All shapes of a step sketch in draw order (first = bottom layer).
///
/// Acts as both the shape factory and the shape registrar of the drawing
/// tool: handles are allocated here at press time and become part of the
/// sketch once they are registered at release.
#[derive(Debug, Clone, Default)]
pub struct Sketch {
    entries: Vec<Entry>,
    next_id: u64,
    /// Maximum number of committed shapes (0 = unlimited)
    max_shapes: usize,
}

impl Sketch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a sketch that refuses to commit more than `max_shapes` shapes.
    pub fn with_limit(max_shapes: usize) -> Self {
        Self {
            max_shapes,
            ..Self::default()
        }
    }

    /// Committed shapes in draw order.
    pub fn shapes(&self) -> impl Iterator<Item = &ShapeHandle> {
        self.entries
            .iter()
            .filter(|entry| matches!(entry.state, EntryState::Registered { .. }))
            .map(|entry| &entry.handle)
    }

    /// The shape currently being drawn, if any, for live preview.
    pub fn pending(&self) -> Option<&ShapeHandle> {
        self.entries
            .iter()
            .find(|entry| entry.state == EntryState::Pending)
            .map(|entry| &entry.handle)
    }

    /// Number of committed shapes.
    pub fn len(&self) -> usize {
        self.shapes().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns whether a committed shape accepts editing, or `None` if unknown.
    pub fn is_editable(&self, id: ShapeId) -> Option<bool> {
        self.entries.iter().find_map(|entry| match entry.state {
            EntryState::Registered { editable } if entry.handle.id() == id => Some(editable),
            _ => None,
        })
    }

    /// Geometry snapshots of the committed shapes, ready for export.
    pub fn records(&self) -> Vec<ShapeRecord> {
        self.entries
            .iter()
            .filter_map(|entry| match entry.state {
                EntryState::Registered { editable } => Some(ShapeRecord {
                    id: entry.handle.id(),
                    editable,
                    shape: entry.handle.snapshot(),
                }),
                EntryState::Pending => None,
            })
            .collect()
    }

    /// Removes and returns the most recently committed shape, if any.
    pub fn undo(&mut self) -> Option<ShapeHandle> {
        let index = self
            .entries
            .iter()
            .rposition(|entry| matches!(entry.state, EntryState::Registered { .. }))?;
        Some(self.entries.remove(index).handle)
    }

    /// Removes all committed shapes. A shape being drawn is kept.
    pub fn clear(&mut self) {
        self.entries.retain(|entry| entry.state == EntryState::Pending);
    }
}

impl ShapeFactory for Sketch {
    fn new_shape(&mut self, initial: Shape) -> ShapeHandle {
        self.next_id += 1;
        let handle = ShapeHandle::new(ShapeId(self.next_id), initial);
        debug!("Allocated {} ({})", handle.id(), handle.with(Shape::name));
        self.entries.push(Entry {
            handle: handle.clone(),
            state: EntryState::Pending,
        });
        handle
    }

    fn discard(&mut self, shape: &ShapeHandle) {
        self.entries.retain(|entry| !entry.handle.same_shape(shape));
    }
}

impl ShapeRegistrar for Sketch {
    fn register_interactive_behavior(&mut self, shape: &ShapeHandle, editable: bool) {
        if self.max_shapes > 0 && self.len() >= self.max_shapes {
            warn!(
                "Shape limit ({}) reached; discarding {}",
                self.max_shapes,
                shape.id()
            );
            self.discard(shape);
            return;
        }

        match self
            .entries
            .iter_mut()
            .find(|entry| entry.handle.same_shape(shape))
        {
            Some(entry) => entry.state = EntryState::Registered { editable },
            None => {
                // Handle came from another factory; adopt it.
                self.entries.push(Entry {
                    handle: shape.clone(),
                    state: EntryState::Registered { editable },
                });
            }
        }
        debug!("Registered {} (editable: {editable})", shape.id());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::RED;
    use crate::util::Point;

    fn line() -> Shape {
        Shape::Line {
            start: Point::new(0.0, 0.0),
            end: Point::new(1.0, 1.0),
            color: RED,
            thick: 2.0,
        }
    }

    #[test]
    fn pending_shapes_are_not_committed() {
        let mut sketch = Sketch::new();
        let handle = sketch.new_shape(line());

        assert!(sketch.is_empty());
        assert!(sketch.pending().unwrap().same_shape(&handle));

        sketch.register_interactive_behavior(&handle, false);
        assert_eq!(sketch.len(), 1);
        assert!(sketch.pending().is_none());
        assert_eq!(sketch.is_editable(handle.id()), Some(false));
    }

    #[test]
    fn ids_are_unique_and_increasing() {
        let mut sketch = Sketch::new();
        let a = sketch.new_shape(line());
        let b = sketch.new_shape(line());
        assert!(a.id() < b.id());
    }

    #[test]
    fn discard_drops_pending_shape() {
        let mut sketch = Sketch::new();
        let handle = sketch.new_shape(line());
        sketch.discard(&handle);

        assert!(sketch.pending().is_none());
        assert!(sketch.records().is_empty());
    }

    #[test]
    fn limit_discards_extra_shapes() {
        let mut sketch = Sketch::with_limit(1);
        let first = sketch.new_shape(line());
        sketch.register_interactive_behavior(&first, false);
        let second = sketch.new_shape(line());
        sketch.register_interactive_behavior(&second, true);

        assert_eq!(sketch.len(), 1);
        assert_eq!(sketch.is_editable(second.id()), None);
    }

    #[test]
    fn undo_and_clear_keep_pending_shape() {
        let mut sketch = Sketch::new();
        let first = sketch.new_shape(line());
        sketch.register_interactive_behavior(&first, false);
        let second = sketch.new_shape(line());
        sketch.register_interactive_behavior(&second, false);
        let drawing = sketch.new_shape(line());

        assert!(sketch.undo().unwrap().same_shape(&second));
        sketch.clear();
        assert!(sketch.is_empty());
        assert!(sketch.pending().unwrap().same_shape(&drawing));
    }
}
