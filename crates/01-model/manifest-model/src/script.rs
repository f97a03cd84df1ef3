//! Scripted joypad sequences replayed by the runner before sampling a result.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScriptError {
    #[error("input step {0:?} is not of the form <delay>:<button>")]
    MalformedStep(String),

    #[error("invalid delay {0:?}")]
    InvalidDelay(String),

    #[error("unknown button {0:?}")]
    UnknownButton(String),

    #[error("input script is empty")]
    Empty,
}

/// Joypad button names understood by the runner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Button {
    Right,
    Left,
    Up,
    Down,
    A,
    B,
    Select,
    Start,
}

impl Button {
    pub fn name(self) -> &'static str {
        match self {
            Button::Right => "right",
            Button::Left => "left",
            Button::Up => "up",
            Button::Down => "down",
            Button::A => "a",
            Button::B => "b",
            Button::Select => "select",
            Button::Start => "start",
        }
    }
}

impl FromStr for Button {
    type Err = ScriptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "right" => Button::Right,
            "left" => Button::Left,
            "up" => Button::Up,
            "down" => Button::Down,
            "a" => Button::A,
            "b" => Button::B,
            "select" => Button::Select,
            "start" => Button::Start,
            other => return Err(ScriptError::UnknownButton(other.to_owned())),
        })
    }
}

/// Wait `delay` (seconds of emulated time in the reference runner), then tap `button`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct InputStep {
    pub delay: u32,
    pub button: Button,
}

/// Ordered list of [`InputStep`]s, rendered as `1:down,1:a`.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct InputScript {
    steps: Vec<InputStep>,
}

impl InputScript {
    pub fn new(steps: Vec<InputStep>) -> Result<Self, ScriptError> {
        if steps.is_empty() {
            return Err(ScriptError::Empty);
        }
        Ok(Self { steps })
    }

    /// Single-step script; chain more presses with [`InputScript::then`].
    pub fn press(delay: u32, button: Button) -> Self {
        Self {
            steps: vec![InputStep { delay, button }],
        }
    }

    pub fn then(mut self, delay: u32, button: Button) -> Self {
        self.steps.push(InputStep { delay, button });
        self
    }

    pub fn steps(&self) -> &[InputStep] {
        &self.steps
    }
}

impl FromStr for InputScript {
    type Err = ScriptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let steps = s
            .split(',')
            .map(|step| {
                let (delay, button) = step
                    .split_once(':')
                    .ok_or_else(|| ScriptError::MalformedStep(step.to_owned()))?;
                let delay = delay
                    .parse::<u32>()
                    .map_err(|_| ScriptError::InvalidDelay(delay.to_owned()))?;
                Ok(InputStep {
                    delay,
                    button: button.parse()?,
                })
            })
            .collect::<Result<Vec<_>, ScriptError>>()?;
        InputScript::new(steps)
    }
}

impl fmt::Display for InputScript {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, step) in self.steps.iter().enumerate() {
            if idx > 0 {
                f.write_str(",")?;
            }
            write!(f, "{}:{}", step.delay, step.button.name())?;
        }
        Ok(())
    }
}
