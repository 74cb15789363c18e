//! The closed catalog of symbolic actions.
//!
//! Every action a sprite can queue is one variant of [`Action`]. The catalog
//! is static configuration: each variant maps to an [`Effect`] describing
//! which transform channels it drives, whether the end value is relative or
//! absolute, and how long the step runs. UI surfaces identify actions by
//! their display label; [`Action::from_label`] resolves a label once, at the
//! boundary, so the rest of the engine never dispatches on strings.
//!
//! [`Action::ALL`] declares the picker display order.

use serde::{Deserialize, Serialize};
use smallvec::{SmallVec, smallvec};
use std::fmt;
use thiserror::Error;

/// One independently animatable scalar of a sprite's transform.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Channel {
    TranslateX,
    TranslateY,
    /// Rotation in degrees, unbounded (not wrapped modulo 360).
    Rotation,
    /// Uniform scale factor.
    Scale,
}

impl Channel {
    /// Channel name as shown in logs and diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            Channel::TranslateX => "translateX",
            Channel::TranslateY => "translateY",
            Channel::Rotation => "rotation",
            Channel::Scale => "scale",
        }
    }
}

/// How a track computes its end value when its step is dispatched.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Target {
    /// Add a fixed delta to the channel value read at dispatch time.
    Relative(f32),
    /// Go to a fixed value, ignoring the current state.
    Absolute(f32),
}

/// One channel's contribution to a step.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Track {
    pub channel: Channel,
    pub target: Target,
}

/// Static effect descriptor for one catalog entry.
///
/// All tracks of a step animate in parallel over the same `duration`; the
/// step counts as finished only when every track has finished.
#[derive(Clone, Debug, PartialEq)]
pub struct Effect {
    pub tracks: SmallVec<[Track; 2]>,
    /// Step duration in seconds.
    pub duration: f32,
}

/// A label that does not name any catalog entry.
///
/// Only reachable from the string surfaces (interaction feed, serde, CLI);
/// once resolved into an [`Action`] no further lookup can fail.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown action label {0:?}")]
pub struct UnknownAction(pub String);

/// One symbolic action from the closed catalog.
///
/// `Action` is the queue element type: resolved from its label when enqueued,
/// immutable afterwards. Variants serialize as their display labels.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Action {
    /// "Move X by 50" – translateX += 50 over 0.5 s.
    MoveX,
    /// "Move Y by 50" – translateY += 50 over 0.5 s.
    MoveY,
    /// "Rotate 360" – rotation += 360° over 1 s.
    Rotate,
    /// "Go to (0,0)" – both translate channels to 0 in parallel over 0.5 s.
    GotoOrigin,
    /// "Increase Size" – scale to 1.5 over 0.5 s.
    IncreaseSize,
    /// "Decrease Size" – scale to 0.5 over 0.5 s.
    DecreaseSize,
}

impl Action {
    /// Every catalog entry, in picker display order.
    pub const ALL: [Action; 6] = [
        Action::MoveX,
        Action::MoveY,
        Action::Rotate,
        Action::GotoOrigin,
        Action::IncreaseSize,
        Action::DecreaseSize,
    ];

    /// The display label, also the serialized form.
    pub fn label(self) -> &'static str {
        match self {
            Action::MoveX => "Move X by 50",
            Action::MoveY => "Move Y by 50",
            Action::Rotate => "Rotate 360",
            Action::GotoOrigin => "Go to (0,0)",
            Action::IncreaseSize => "Increase Size",
            Action::DecreaseSize => "Decrease Size",
        }
    }

    /// Resolve a display label back into its catalog entry.
    pub fn from_label(label: &str) -> Result<Action, UnknownAction> {
        Action::ALL
            .into_iter()
            .find(|action| action.label() == label)
            .ok_or_else(|| UnknownAction(label.to_string()))
    }

    /// The static effect this action has on a sprite's transform channels.
    pub fn effect(self) -> Effect {
        match self {
            Action::MoveX => Effect {
                tracks: smallvec![Track {
                    channel: Channel::TranslateX,
                    target: Target::Relative(50.0),
                }],
                duration: 0.5,
            },
            Action::MoveY => Effect {
                tracks: smallvec![Track {
                    channel: Channel::TranslateY,
                    target: Target::Relative(50.0),
                }],
                duration: 0.5,
            },
            Action::Rotate => Effect {
                tracks: smallvec![Track {
                    channel: Channel::Rotation,
                    target: Target::Relative(360.0),
                }],
                duration: 1.0,
            },
            Action::GotoOrigin => Effect {
                tracks: smallvec![
                    Track {
                        channel: Channel::TranslateX,
                        target: Target::Absolute(0.0),
                    },
                    Track {
                        channel: Channel::TranslateY,
                        target: Target::Absolute(0.0),
                    },
                ],
                duration: 0.5,
            },
            Action::IncreaseSize => Effect {
                tracks: smallvec![Track {
                    channel: Channel::Scale,
                    target: Target::Absolute(1.5),
                }],
                duration: 0.5,
            },
            Action::DecreaseSize => Effect {
                tracks: smallvec![Track {
                    channel: Channel::Scale,
                    target: Target::Absolute(0.5),
                }],
                duration: 0.5,
            },
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl From<Action> for String {
    fn from(action: Action) -> Self {
        action.label().to_string()
    }
}

impl TryFrom<String> for Action {
    type Error = UnknownAction;

    fn try_from(label: String) -> Result<Self, Self::Error> {
        Action::from_label(&label)
    }
}
