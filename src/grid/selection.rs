//! Click-to-inspect state machine.
//!
//! Two states: Idle (nothing selected, inspector closed) and Inspecting
//! (one appointment selected, inspector open). Whether a click opens the
//! built-in inspector or is forwarded to the host is fixed at construction,
//! never inferred from render timing.

/// Which surface the built-in inspector uses. Chosen once by the composing
/// page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InspectorStyle {
    /// A floating dialog window.
    Dialog,
    /// A docked overlay panel.
    Overlay,
}

/// How card clicks are routed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickRouting {
    /// The controller owns selection and drives the inspector.
    SelfContained,
    /// Clicks are forwarded to the host's callback; the controller never
    /// transitions.
    Delegate,
}

/// What the caller should do with a click.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickOutcome {
    /// The controller consumed the click and opened its inspector.
    Inspecting,
    /// Delegation mode: hand the appointment to the host callback.
    Forward,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum State {
    Idle,
    Inspecting { appointment_id: String },
}

/// Tracks which appointment (if any) is being inspected.
#[derive(Debug, Clone)]
pub struct SelectionController {
    routing: ClickRouting,
    style: InspectorStyle,
    state: State,
}

impl SelectionController {
    pub fn new(routing: ClickRouting, style: InspectorStyle) -> Self {
        Self {
            routing,
            style,
            state: State::Idle,
        }
    }

    pub fn routing(&self) -> ClickRouting {
        self.routing
    }

    pub fn style(&self) -> InspectorStyle {
        self.style
    }

    /// Report a click on an appointment card.
    ///
    /// In self-contained mode this enters (or re-targets) Inspecting; a
    /// click on a different card replaces the selection without an
    /// intermediate Idle state.
    pub fn click(&mut self, appointment_id: &str) -> ClickOutcome {
        match self.routing {
            ClickRouting::Delegate => ClickOutcome::Forward,
            ClickRouting::SelfContained => {
                self.state = State::Inspecting {
                    appointment_id: appointment_id.to_string(),
                };
                ClickOutcome::Inspecting
            }
        }
    }

    /// Close the inspector, returning to Idle.
    pub fn close(&mut self) {
        self.state = State::Idle;
    }

    pub fn selected_id(&self) -> Option<&str> {
        match &self.state {
            State::Idle => None,
            State::Inspecting { appointment_id } => Some(appointment_id),
        }
    }

    /// The inspector is open exactly when something is selected.
    pub fn inspector_open(&self) -> bool {
        self.selected_id().is_some()
    }
}
