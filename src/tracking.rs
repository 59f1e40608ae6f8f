//! Single-touch tracking state machine.
//!
//! `Idle` only accepts [`TouchInput::Begin`]. `Tracking` accepts moves and
//! leaves on end or cancel. Everything else is rejected, which includes a
//! second begin while a drag is in progress.

use floem::kurbo::Point;

use crate::color::SolidColor;

/// Input delivered by the host, in control-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TouchInput {
    Begin(Point),
    Move(Point),
    End(Point),
    Cancel,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum TrackingPhase {
    #[default]
    Idle,
    Tracking {
        position: Point,
    },
}

impl TrackingPhase {
    pub fn is_tracking(&self) -> bool {
        matches!(self, TrackingPhase::Tracking { .. })
    }

    /// The next phase for `input`, or `None` when the input is not valid here.
    pub fn transition(self, input: &TouchInput) -> Option<TrackingPhase> {
        match (self, *input) {
            (TrackingPhase::Idle, TouchInput::Begin(position))
            | (TrackingPhase::Tracking { .. }, TouchInput::Move(position)) => {
                Some(TrackingPhase::Tracking { position })
            }
            (TrackingPhase::Tracking { .. }, TouchInput::End(_) | TouchInput::Cancel) => {
                Some(TrackingPhase::Idle)
            }
            _ => None,
        }
    }
}

/// Event emitted to the host, one per accepted transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SliderEvent {
    DragStart(SolidColor),
    DragChange(SolidColor),
    DragEnd { color: SolidColor, inside: bool },
    DragCancel,
}
