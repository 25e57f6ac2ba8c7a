use std::collections::VecDeque;

use super::board::{CellId, Coord};

/// One occupied cell of the snake
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Segment {
    pub coord: Coord,
    pub cell: CellId,
}

impl Segment {
    pub fn new(coord: Coord, cell: CellId) -> Self {
        Self { coord, cell }
    }
}

/// The snake's body, head at the front and tail at the back.
///
/// Never empty: it is built from a single segment and `pop_tail` refuses to
/// remove the last one.
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    segments: VecDeque<Segment>,
}

impl Snake {
    pub fn new(head: Segment) -> Self {
        let mut segments = VecDeque::new();
        segments.push_back(head);
        Self { segments }
    }

    /// Build a snake from segments ordered head first
    pub fn from_segments(segments: impl IntoIterator<Item = Segment>) -> Option<Self> {
        let segments: VecDeque<Segment> = segments.into_iter().collect();
        if segments.is_empty() {
            None
        } else {
            Some(Self { segments })
        }
    }

    pub fn head(&self) -> Segment {
        self.segments[0]
    }

    pub fn tail(&self) -> Segment {
        self.segments[self.segments.len() - 1]
    }

    /// The segment right behind the head
    pub fn neck(&self) -> Option<Segment> {
        self.segments.get(1).copied()
    }

    /// The segment the tail follows, one step closer to the head
    pub fn tail_predecessor(&self) -> Option<Segment> {
        let len = self.segments.len();
        if len < 2 {
            None
        } else {
            Some(self.segments[len - 2])
        }
    }

    pub fn push_head(&mut self, segment: Segment) {
        self.segments.push_front(segment);
    }

    /// Remove the tail; the last remaining segment is never removed
    pub fn pop_tail(&mut self) -> Option<Segment> {
        if self.segments.len() > 1 {
            self.segments.pop_back()
        } else {
            None
        }
    }

    /// Append beyond the current tail (growth)
    pub fn push_tail(&mut self, segment: Segment) {
        self.segments.push_back(segment);
    }

    /// Swap head and tail, inverting segment order in place
    pub fn reverse(&mut self) {
        self.segments.make_contiguous().reverse();
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Always false; present for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Segments from head to tail
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Segment> + '_ {
        self.segments.iter()
    }

    pub fn cells(&self) -> impl Iterator<Item = CellId> + '_ {
        self.segments.iter().map(|segment| segment.cell)
    }
}
