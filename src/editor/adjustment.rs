// SPDX-License-Identifier: MPL-2.0
//! Adjustment slider state and helpers for brightness/contrast.

use super::{Event, State};
use crate::domain::editing::EnhanceFactor;
use crate::media::Filter;

/// Brightness and contrast slider values.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AdjustmentState {
    /// Brightness factor (guaranteed valid by type).
    pub brightness: EnhanceFactor,
    /// Contrast factor (guaranteed valid by type).
    pub contrast: EnhanceFactor,
}

impl State {
    pub(crate) fn brightness_changed(&mut self, value: f32) -> Event {
        self.adjustment.brightness = EnhanceFactor::new(value);
        Event::None
    }

    pub(crate) fn contrast_changed(&mut self, value: f32) -> Event {
        self.adjustment.contrast = EnhanceFactor::new(value);
        Event::None
    }

    /// Applies the brightness slider to the current processed image.
    pub(crate) fn apply_brightness(&mut self) -> Event {
        let factor = self.adjustment.brightness;
        self.apply_filter(Filter::Brightness(factor))
    }

    /// Applies the contrast slider to the current processed image.
    pub(crate) fn apply_contrast(&mut self) -> Event {
        let factor = self.adjustment.contrast;
        self.apply_filter(Filter::Contrast(factor))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adjustment_state_default_is_neutral() {
        let state = AdjustmentState::default();
        assert!(state.brightness.is_neutral());
        assert!(state.contrast.is_neutral());
    }

    #[test]
    fn slider_changes_are_clamped() {
        let mut state = State::default();
        state.brightness_changed(9.0);
        state.contrast_changed(-3.0);
        assert_eq!(state.adjustment().brightness, EnhanceFactor::new(2.0));
        assert_eq!(state.adjustment().contrast, EnhanceFactor::new(0.0));
    }

    #[test]
    fn slider_change_does_not_touch_history() {
        let mut state = State::default();
        assert!(matches!(state.brightness_changed(1.4), Event::None));
        assert!(state.history().is_empty());
    }
}
