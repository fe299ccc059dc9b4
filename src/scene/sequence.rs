// Finite step sequences for the one-shot text and reveal effects.

/// One scheduled step: its position and the delay before it fires, measured
/// from the previous step (or from the start for the first one).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Step {
    pub index: usize,
    pub delay_ms: u32,
}

/// `total` steps, the first after `initial_delay_ms`, the rest every
/// `step_delay_ms`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StepSequence {
    index: usize,
    total: usize,
    initial_delay_ms: u32,
    step_delay_ms: u32,
}

impl StepSequence {
    pub fn new(total: usize, initial_delay_ms: u32, step_delay_ms: u32) -> Self {
        Self {
            index: 0,
            total,
            initial_delay_ms,
            step_delay_ms,
        }
    }

    /// Next step, or `None` once all `total` steps were handed out.
    pub fn next_step(&mut self) -> Option<Step> {
        if self.index >= self.total {
            return None;
        }
        let delay_ms = if self.index == 0 {
            self.initial_delay_ms
        } else {
            self.step_delay_ms
        };
        let step = Step {
            index: self.index,
            delay_ms,
        };
        self.index += 1;
        Some(step)
    }

    /// Absolute offset of step `index` from the start of the sequence.
    pub fn offset_ms(&self, index: usize) -> u32 {
        self.initial_delay_ms
            .saturating_add(self.step_delay_ms.saturating_mul(index as u32))
    }

    #[inline]
    pub fn position(&self) -> usize {
        self.index
    }

    #[inline]
    pub fn total(&self) -> usize {
        self.total
    }

    #[inline]
    pub fn is_done(&self) -> bool {
        self.index >= self.total
    }
}

impl Iterator for StepSequence {
    type Item = Step;

    fn next(&mut self) -> Option<Step> {
        self.next_step()
    }
}

pub const CURSOR_HTML: &str = "<span class=\"cursor\">|</span>";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TypeStep {
    /// Reveal one more character.
    Char(char),
    /// All characters are out; append the blinking cursor.
    Cursor,
    Done,
}

/// Character-by-character text reveal followed by a cursor.
#[derive(Clone, Debug)]
pub struct Typewriter {
    chars: Vec<char>,
    seq: StepSequence,
    cursor_shown: bool,
}

impl Typewriter {
    pub fn new(text: &str, step_delay_ms: u32) -> Self {
        let chars: Vec<char> = text.chars().collect();
        let seq = StepSequence::new(chars.len(), 0, step_delay_ms);
        Self {
            chars,
            seq,
            cursor_shown: false,
        }
    }

    pub fn advance(&mut self) -> TypeStep {
        if let Some(step) = self.seq.next_step() {
            return TypeStep::Char(self.chars[step.index]);
        }
        if !self.cursor_shown {
            self.cursor_shown = true;
            return TypeStep::Cursor;
        }
        TypeStep::Done
    }

    /// Text revealed so far.
    pub fn typed(&self) -> String {
        self.chars[..self.seq.position()].iter().collect()
    }

    #[inline]
    pub fn step_delay_ms(&self) -> u32 {
        self.seq.step_delay_ms
    }

    #[inline]
    pub fn is_done(&self) -> bool {
        self.seq.is_done() && self.cursor_shown
    }
}

/// Animation delay of the `index`-th item of a revealed grid, as a CSS time.
pub fn stagger_delay(index: usize, step_secs: f32) -> String {
    format!("{}s", index as f32 * step_secs)
}
