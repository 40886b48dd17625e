/// Ticks from a freshly checked overlay to a fully drawn check
const DRAW_STEPS: u8 = 12;

/// State of the checkmark overlay
pub struct CheckmarkState {
    active: bool,
    checked: bool,
    label: String,
    step: u8,
}

impl CheckmarkState {
    pub fn new() -> Self {
        Self {
            active: false,
            checked: false,
            label: String::new(),
            step: 0,
        }
    }

    /// Show the overlay with the given headline, unchecked.
    pub fn activate(&mut self, label: impl Into<String>) {
        self.active = true;
        self.checked = false;
        self.label = label.into();
        self.step = 0;
    }

    /// Flip the art from spinner to check and restart the draw animation.
    pub fn check(&mut self) {
        if !self.checked {
            self.checked = true;
            self.step = 0;
        }
    }

    /// Hide the overlay and reset the animation.
    pub fn dismiss(&mut self) {
        self.active = false;
        self.checked = false;
        self.step = 0;
    }

    /// Advance the animation by one tick. The spinner cycles; the drawn
    /// check saturates.
    pub fn on_tick(&mut self) {
        if !self.active {
            return;
        }
        if self.checked {
            self.step = (self.step + 1).min(DRAW_STEPS);
        } else {
            self.step = self.step.wrapping_add(1);
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn is_checked(&self) -> bool {
        self.checked
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn step(&self) -> u8 {
        self.step
    }

    /// How much of the check has been drawn, 0.0..=1.0.
    pub fn draw_fraction(&self) -> f32 {
        if !self.checked {
            return 0.0;
        }
        f32::from(self.step) / f32::from(DRAW_STEPS)
    }
}

impl Default for CheckmarkState {
    fn default() -> Self {
        Self::new()
    }
}
