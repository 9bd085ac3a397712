//! Marker engine.
//!
//! Grammar rules never build nodes directly. They open a [`Marker`] when a
//! construct may start and either complete it with a [`SyntaxKind`], abandon
//! it, or roll it back. Every marker records two events in a shared list: one
//! where it was opened and, once completed, one where it was closed. The CST
//! builder later replays that list to nest the token sequence into nodes.
//!
//! [`CompletedMarker::precede`] inserts a fresh marker immediately before an
//! already completed one, with the same start token. Completing the new marker
//! makes the older node its first child, which is how left-associative
//! operator chains are folded in a single pass without lookahead.

use log::trace;

use super::Parser;
use crate::SyntaxKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct MarkerId(usize);

impl MarkerId {
    pub(crate) fn index(self) -> usize {
        self.0
    }
}

/// Bookkeeping for a single marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct MarkerSlot {
    /// Token index where the node starts.
    pub(crate) start_pos: usize,
    /// Token index one past the node's last token.
    pub(crate) end_pos: usize,
    /// Position of the open event in the event list.
    pub(crate) start_event: usize,
    /// Position of the close event, once completed.
    pub(crate) end_event: Option<usize>,
    /// Node kind, once completed.
    pub(crate) kind: Option<SyntaxKind>,
    pub(crate) abandoned: bool,
}

/// Marker arena plus the ordered open/close event list.
#[derive(Debug, Default)]
pub(crate) struct Markers {
    slots: Vec<MarkerSlot>,
    events: Vec<MarkerId>,
}

impl Markers {
    #[must_use]
    pub(crate) fn events(&self) -> &[MarkerId] {
        &self.events
    }

    #[must_use]
    pub(crate) fn slot(&self, id: MarkerId) -> Option<&MarkerSlot> {
        self.slots.get(id.0)
    }

    #[must_use]
    pub(crate) fn len(&self) -> usize {
        self.slots.len()
    }

    #[expect(
        clippy::indexing_slicing,
        reason = "marker ids are only minted by `open` and slots are never removed"
    )]
    fn slot_mut(&mut self, id: MarkerId) -> &mut MarkerSlot {
        &mut self.slots[id.0]
    }

    fn open(&mut self, start_pos: usize) -> MarkerId {
        let id = MarkerId(self.slots.len());
        self.slots.push(MarkerSlot {
            start_pos,
            end_pos: start_pos,
            start_event: self.events.len(),
            end_event: None,
            kind: None,
            abandoned: false,
        });
        self.events.push(id);
        trace!("open marker {} at token {start_pos}", id.0);
        id
    }

    fn complete(&mut self, id: MarkerId, end_pos: usize, kind: SyntaxKind) {
        let end_event = self.events.len();
        let slot = self.slot_mut(id);
        slot.end_pos = end_pos;
        slot.end_event = Some(end_event);
        slot.kind = Some(kind);
        self.events.push(id);
        trace!("complete marker {} as {kind:?} at token {end_pos}", id.0);
    }

    fn abandon(&mut self, id: MarkerId) {
        self.slot_mut(id).abandoned = true;
        trace!("abandon marker {}", id.0);
    }

    /// Truncates the event list back to where `id` was opened and returns the
    /// token index to restore.
    fn truncate(&mut self, id: MarkerId) -> usize {
        let slot = self.slot_mut(id);
        slot.abandoned = true;
        let (start_event, start_pos) = (slot.start_event, slot.start_pos);
        self.events.truncate(start_event);
        trace!("roll back marker {} to token {start_pos}", id.0);
        start_pos
    }

    fn precede(&mut self, id: MarkerId) -> MarkerId {
        let (start_event, start_pos) = {
            let slot = self.slot_mut(id);
            (slot.start_event, slot.start_pos)
        };

        // Walk backwards so a slot whose open and close events are adjacent is
        // shifted exactly once per event.
        for (idx, event) in self.events.iter().enumerate().skip(start_event).rev() {
            #[expect(
                clippy::indexing_slicing,
                reason = "every event refers to a slot minted by `open`"
            )]
            let slot = &mut self.slots[event.0];
            if slot.start_event == idx {
                slot.start_event += 1;
            }
            if slot.end_event == Some(idx) {
                slot.end_event = Some(idx + 1);
            }
        }

        let new_id = MarkerId(self.slots.len());
        self.slots.push(MarkerSlot {
            start_pos,
            end_pos: start_pos,
            start_event,
            end_event: None,
            kind: None,
            abandoned: false,
        });
        self.events.insert(start_event, new_id);
        trace!("marker {} precedes marker {}", new_id.0, id.0);
        new_id
    }
}

/// An open marker. Consumed by exactly one of [`Marker::done`],
/// [`Marker::abandon`] or [`Marker::rollback`].
#[derive(Debug)]
#[must_use = "markers must be completed, abandoned or rolled back"]
pub(crate) struct Marker {
    id: MarkerId,
}

impl Marker {
    pub(super) fn open(p: &mut Parser<'_>) -> Self {
        let pos = p.stream.cursor();
        Self {
            id: p.markers.open(pos),
        }
    }

    /// Closes the marker at the current cursor, tagging the span with `kind`.
    pub(crate) fn done(self, p: &mut Parser<'_>, kind: SyntaxKind) -> CompletedMarker {
        let pos = p.stream.cursor();
        p.markers.complete(self.id, pos, kind);
        CompletedMarker { id: self.id }
    }

    /// Drops the marker; it contributes nothing to the tree.
    pub(crate) fn abandon(self, p: &mut Parser<'_>) {
        p.markers.abandon(self.id);
    }

    /// Undoes everything since the marker was opened: the cursor returns to
    /// its start token and all later events are discarded.
    #[cfg_attr(
        not(test),
        expect(dead_code, reason = "the current grammar never needs to backtrack")
    )]
    pub(crate) fn rollback(self, p: &mut Parser<'_>) {
        let pos = p.markers.truncate(self.id);
        p.stream.reset(pos);
    }
}

/// A marker that has been completed and may be wrapped by a new one.
#[derive(Debug)]
pub(crate) struct CompletedMarker {
    id: MarkerId,
}

impl CompletedMarker {
    /// Opens a new marker starting where this one starts, placed before it in
    /// the event list so the completed node becomes its first child.
    pub(crate) fn precede(self, p: &mut Parser<'_>) -> Marker {
        Marker {
            id: p.markers.precede(self.id),
        }
    }
}
