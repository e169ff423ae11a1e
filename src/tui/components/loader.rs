//! Loading-screen animation shown while the review source is in flight.
//!
//! A small plane makes its way towards a globe, one step per tick. Frame
//! advance is pure; the runner emits ticks on a timer only while a load is
//! outstanding.

/// Animation frames, advanced one step per tick.
const FRAMES: [&str; 6] = [
    ">= . . . . (o)",
    " . >= . . .(o)",
    " . . >= . .(o)",
    " . . . >= .(o)",
    " . . . . >=(o)",
    " . . . . .>(o)",
];

/// Caption rendered under the animation.
const CAPTION: &str = "Charting your journey...";

/// Component rendering the loading animation.
#[derive(Debug, Clone, Default)]
pub struct LoaderComponent {
    frame: usize,
}

impl LoaderComponent {
    /// Creates a loader at its first frame.
    #[must_use]
    pub const fn new() -> Self {
        Self { frame: 0 }
    }

    /// Advances the animation by one frame, wrapping at the end.
    pub const fn advance(&mut self) {
        let next = self.frame.saturating_add(1);
        self.frame = if next >= FRAMES.len() { 0 } else { next };
    }

    /// Resets the animation to its first frame.
    pub const fn reset(&mut self) {
        self.frame = 0;
    }

    /// Returns the current animation frame and caption as display lines.
    #[must_use]
    pub fn view(&self) -> Vec<String> {
        let art = FRAMES.get(self.frame).copied().unwrap_or_default();
        vec![art.to_owned(), String::new(), CAPTION.to_owned()]
    }
}
