// Pollable input devices

use super::frame::InputFrame;

/// A source of input frames, polled once per tick per side
///
/// Implementations must be safe to poll after their frames are exhausted;
/// an exhausted device returns empty frames forever.
pub trait InputDevice {
    /// Produce the input frame for the current tick
    fn poll(&mut self) -> InputFrame;
}

/// Plays back a fixed sequence of frames, then empty frames forever
#[derive(Debug, Default)]
pub struct ScriptedInput {
    script: Vec<InputFrame>,
    index: usize,
}

impl ScriptedInput {
    pub fn new(script: Vec<InputFrame>) -> Self {
        Self { script, index: 0 }
    }
}

impl InputDevice for ScriptedInput {
    fn poll(&mut self) -> InputFrame {
        let frame = self.script.get(self.index).cloned().unwrap_or_default();
        self.index = (self.index + 1).min(self.script.len());
        frame
    }
}
