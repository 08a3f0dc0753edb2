//! Drag State Machine
//!
//! Pure transition logic for a single-pointer drag session. Knows nothing
//! about the DOM, so it runs in native tests.

/// Phase of the current drag session
#[derive(Clone, Debug, PartialEq)]
pub enum DragPhase<Id, Zone> {
    /// No button held
    Idle,
    /// Button held on an item, not yet moved past the threshold
    Pending { item: Id, origin: (i32, i32) },
    /// Item is being dragged out of `source`; `over` is the zone under the pointer
    Dragging { item: Id, source: Zone, over: Option<Zone> },
}

/// Committed move of `item` from one zone to another
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DropEvent<Id, Zone> {
    pub item: Id,
    pub from: Zone,
    pub to: Zone,
}

/// Movement threshold in pixels to start dragging
pub const DEFAULT_THRESHOLD_PX: i32 = 10;

#[derive(Clone, Debug)]
pub struct DragMachine<Id, Zone> {
    phase: DragPhase<Id, Zone>,
    threshold_px: i32,
}

impl<Id, Zone> Default for DragMachine<Id, Zone> {
    fn default() -> Self {
        Self::new(DEFAULT_THRESHOLD_PX)
    }
}

impl<Id, Zone> DragMachine<Id, Zone> {
    pub fn new(threshold_px: i32) -> Self {
        Self {
            phase: DragPhase::Idle,
            threshold_px: threshold_px.max(0),
        }
    }

    pub fn phase(&self) -> &DragPhase<Id, Zone> {
        &self.phase
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.phase, DragPhase::Idle)
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, DragPhase::Dragging { .. })
    }

    /// Item being dragged (not merely pressed)
    pub fn dragging_item(&self) -> Option<&Id> {
        match &self.phase {
            DragPhase::Dragging { item, .. } => Some(item),
            _ => None,
        }
    }

    pub fn source(&self) -> Option<&Zone> {
        match &self.phase {
            DragPhase::Dragging { source, .. } => Some(source),
            _ => None,
        }
    }

    /// Zone currently under the pointer while dragging
    pub fn hovered(&self) -> Option<&Zone> {
        match &self.phase {
            DragPhase::Dragging { over, .. } => over.as_ref(),
            _ => None,
        }
    }

    /// Abort the session without emitting anything
    pub fn cancel(&mut self) {
        self.phase = DragPhase::Idle;
    }
}

impl<Id: Clone + PartialEq, Zone: Clone + PartialEq> DragMachine<Id, Zone> {
    /// Mouse button went down on `item` at (x, y)
    pub fn press(&mut self, item: Id, x: i32, y: i32) {
        if self.is_idle() {
            self.phase = DragPhase::Pending { item, origin: (x, y) };
        }
    }

    /// Pointer moved. Promotes a pending press to a drag once it travels past
    /// the threshold, asking `locate` which zone holds the item.
    ///
    /// Returns true when this call started the drag.
    pub fn motion<F>(&mut self, x: i32, y: i32, locate: F) -> bool
    where
        F: FnOnce(&Id) -> Option<Zone>,
    {
        let DragPhase::Pending { item, origin } = &self.phase else {
            return false;
        };
        let dx = (x - origin.0).abs();
        let dy = (y - origin.1).abs();
        if dx <= self.threshold_px && dy <= self.threshold_px {
            return false;
        }
        let item = item.clone();
        let source = locate(&item);
        self.start(item, source)
    }

    /// Begin dragging `item` out of `source`.
    ///
    /// An item that sits in no zone cannot be moved, so the machine stays idle.
    pub fn start(&mut self, item: Id, source: Option<Zone>) -> bool {
        match source {
            Some(source) => {
                self.phase = DragPhase::Dragging { item, source, over: None };
                true
            }
            None => {
                self.phase = DragPhase::Idle;
                false
            }
        }
    }

    /// Pointer entered `zone`
    pub fn hover(&mut self, zone: Zone) {
        if let DragPhase::Dragging { over, .. } = &mut self.phase {
            *over = Some(zone);
        }
    }

    /// Pointer left the zone it was over
    pub fn leave(&mut self) {
        if let DragPhase::Dragging { over, .. } = &mut self.phase {
            *over = None;
        }
    }

    /// Button released. Drops on the hovered zone, or cancels if there is none.
    pub fn release(&mut self) -> Option<DropEvent<Id, Zone>> {
        match self.hovered().cloned() {
            Some(zone) => self.drop_on(zone),
            None => {
                self.cancel();
                None
            }
        }
    }

    /// Drop the dragged item on `target`. Always ends the session; only a
    /// drop on a zone other than the source produces an event.
    pub fn drop_on(&mut self, target: Zone) -> Option<DropEvent<Id, Zone>> {
        let phase = std::mem::replace(&mut self.phase, DragPhase::Idle);
        match phase {
            DragPhase::Dragging { item, source, .. } if source != target => Some(DropEvent {
                item,
                from: source,
                to: target,
            }),
            _ => None,
        }
    }
}
