//! View transition sequencing.
//!
//! The content area mounts exactly one view at a time. Switching views runs
//! two phases back to back: the outgoing view exits, then the incoming view
//! enters. The incoming view never starts entering before the exit finishes.
//!
//! ```text
//! Idle{a} --request(b)--> Exiting{a -> b} --exit done--> Entering{b} --enter done--> Idle{b}
//!                          |  request(c): retarget to c     |  request(c): Exiting{b -> c}
//! ```

use std::time::Duration;

use edudash_config::ShellConfig;
use edudash_models::ViewId;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionPhase {
    Idle {
        mounted: ViewId,
    },
    Exiting {
        outgoing: ViewId,
        incoming: ViewId,
        remaining: Duration,
    },
    Entering {
        mounted: ViewId,
        remaining: Duration,
    },
}

/// Phase changes reported to the presenter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellEvent {
    ExitStarted { outgoing: ViewId, incoming: ViewId },
    /// A request arrived mid-exit and replaced the incoming view.
    Retargeted { incoming: ViewId },
    EnterStarted { view: ViewId },
    Settled { view: ViewId },
}

#[derive(Debug, Clone)]
pub struct TransitionSequencer {
    phase: TransitionPhase,
    exit_duration: Duration,
    enter_duration: Duration,
}

impl TransitionSequencer {
    /// A sequencer with `view` already mounted and settled.
    pub fn new(view: ViewId, config: &ShellConfig) -> Self {
        Self {
            phase: TransitionPhase::Idle { mounted: view },
            exit_duration: config.exit_duration,
            enter_duration: config.enter_duration,
        }
    }

    /// A sequencer whose first view is still entering.
    pub fn entering(view: ViewId, config: &ShellConfig) -> Self {
        Self {
            phase: TransitionPhase::Entering {
                mounted: view,
                remaining: config.enter_duration,
            },
            ..Self::new(view, config)
        }
    }

    pub fn phase(&self) -> TransitionPhase {
        self.phase
    }

    /// The single view currently mounted in the content area.
    pub fn mounted(&self) -> ViewId {
        match self.phase {
            TransitionPhase::Idle { mounted } | TransitionPhase::Entering { mounted, .. } => mounted,
            TransitionPhase::Exiting { outgoing, .. } => outgoing,
        }
    }

    /// The view the sequencer is heading to.
    pub fn target(&self) -> ViewId {
        match self.phase {
            TransitionPhase::Idle { mounted } | TransitionPhase::Entering { mounted, .. } => mounted,
            TransitionPhase::Exiting { incoming, .. } => incoming,
        }
    }

    pub fn is_settled(&self) -> bool {
        matches!(self.phase, TransitionPhase::Idle { .. })
    }

    /// Asks for `view` to become the mounted view.
    pub fn request(&mut self, view: ViewId) -> Option<ShellEvent> {
        let event = match self.phase {
            TransitionPhase::Idle { mounted } | TransitionPhase::Entering { mounted, .. } => {
                if mounted == view {
                    return None;
                }
                self.phase = TransitionPhase::Exiting {
                    outgoing: mounted,
                    incoming: view,
                    remaining: self.exit_duration,
                };
                ShellEvent::ExitStarted {
                    outgoing: mounted,
                    incoming: view,
                }
            }
            TransitionPhase::Exiting {
                outgoing,
                incoming,
                remaining,
            } => {
                if incoming == view {
                    return None;
                }
                self.phase = TransitionPhase::Exiting {
                    outgoing,
                    incoming: view,
                    remaining,
                };
                ShellEvent::Retargeted { incoming: view }
            }
        };
        debug!(?event, "Transition requested");
        Some(event)
    }

    /// Moves the clock forward by `elapsed`.
    ///
    /// Time left over when a phase ends is spent on the next phase, so one
    /// large step can run a whole transition.
    pub fn advance(&mut self, elapsed: Duration) -> Vec<ShellEvent> {
        let mut budget = elapsed;
        let mut events = Vec::new();
        loop {
            match self.phase {
                TransitionPhase::Idle { .. } => break,
                TransitionPhase::Exiting {
                    outgoing,
                    incoming,
                    remaining,
                } => {
                    if budget < remaining {
                        self.phase = TransitionPhase::Exiting {
                            outgoing,
                            incoming,
                            remaining: remaining - budget,
                        };
                        break;
                    }
                    budget -= remaining;
                    events.push(self.finish_phase());
                }
                TransitionPhase::Entering { mounted, remaining } => {
                    if budget < remaining {
                        self.phase = TransitionPhase::Entering {
                            mounted,
                            remaining: remaining - budget,
                        };
                        break;
                    }
                    budget -= remaining;
                    events.push(self.finish_phase());
                }
            }
        }
        events
    }

    /// Ends the running phase immediately, as a presenter does when its own
    /// animation reports completion.
    pub fn complete_phase(&mut self) -> Option<ShellEvent> {
        if self.is_settled() {
            None
        } else {
            Some(self.finish_phase())
        }
    }

    /// Runs every remaining phase to completion.
    pub fn settle(&mut self) -> Vec<ShellEvent> {
        let mut events = Vec::new();
        while let Some(event) = self.complete_phase() {
            events.push(event);
        }
        events
    }

    fn finish_phase(&mut self) -> ShellEvent {
        let event = match self.phase {
            TransitionPhase::Exiting { incoming, .. } => {
                self.phase = TransitionPhase::Entering {
                    mounted: incoming,
                    remaining: self.enter_duration,
                };
                ShellEvent::EnterStarted { view: incoming }
            }
            TransitionPhase::Entering { mounted, .. } | TransitionPhase::Idle { mounted } => {
                self.phase = TransitionPhase::Idle { mounted };
                ShellEvent::Settled { view: mounted }
            }
        };
        debug!(?event, "Transition phase finished");
        event
    }
}
