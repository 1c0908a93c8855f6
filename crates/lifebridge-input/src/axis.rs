use crate::event::{InputEvent, KeyCode};
use crate::layout::{ChannelSpec, RawAxis};

/// Three-way classification of an analog value against the press threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DiscreteState {
    Negative,
    #[default]
    Neutral,
    Positive,
}

impl DiscreteState {
    #[inline]
    pub fn classify(value: f32, press_threshold: f32) -> Self {
        if value <= -press_threshold {
            Self::Negative
        } else if value >= press_threshold {
            Self::Positive
        } else {
            Self::Neutral
        }
    }
}

/// Clamps device noise below `band` to exactly zero.
#[inline]
pub fn dead_band(value: f32, band: f32) -> f32 {
    if value.abs() < band {
        0.0
    } else {
        value
    }
}

/// Logical axis channel with edge-triggered button synthesis.
#[derive(Debug, Clone)]
pub struct AxisChannel {
    name: String,
    sources: Vec<RawAxis>,
    negative: KeyCode,
    positive: KeyCode,

    value: f32,
    state: DiscreteState,
}

impl AxisChannel {
    pub fn from_spec(spec: &ChannelSpec) -> Self {
        Self {
            name: spec.name.clone(),
            sources: spec.sources.clone(),
            negative: spec.negative,
            positive: spec.positive,
            value: 0.0,
            state: DiscreteState::Neutral,
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn sources(&self) -> &[RawAxis] {
        &self.sources
    }

    #[inline]
    pub fn value(&self) -> f32 {
        self.value
    }

    #[inline]
    pub fn state(&self) -> DiscreteState {
        self.state
    }

    #[inline]
    fn button(&self, state: DiscreteState) -> Option<KeyCode> {
        match state {
            DiscreteState::Negative => Some(self.negative),
            DiscreteState::Neutral => None,
            DiscreteState::Positive => Some(self.positive),
        }
    }

    /// Feeds an already dead-banded, alias-summed value.
    ///
    /// Edges are emitted only on a discrete-state change: the previously held button is released
    /// before the newly held one is pressed. Returns the number of events pushed.
    pub fn update(&mut self, value: f32, press_threshold: f32, out: &mut Vec<InputEvent>) -> usize {
        self.value = value;

        let next = DiscreteState::classify(value, press_threshold);
        if next == self.state {
            return 0;
        }

        let mut n = 0usize;
        if let Some(up) = self.button(self.state) {
            out.push(InputEvent::key_up(up.joypad()));
            n += 1;
        }
        if let Some(down) = self.button(next) {
            out.push(InputEvent::key_down(down.joypad(), 0));
            n += 1;
        }

        self.state = next;
        n
    }

    /// Forgets the last value and state without emitting releases.
    #[inline]
    pub fn reset(&mut self) {
        self.value = 0.0;
        self.state = DiscreteState::Neutral;
    }
}
