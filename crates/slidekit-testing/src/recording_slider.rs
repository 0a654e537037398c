//! A [`Slider`] that records every call made by the gesture handlers.

use slidekit_gesture::{InputEvent, Orientation, Slider, SliderEvent, TouchConfig};
use std::time::Duration;

/// One side effect requested by a handler.
#[derive(Clone, Debug, PartialEq)]
pub enum SliderCall {
    SetTranslate(f32),
    SetTransition(Duration),
    FinishTransition,
    UpdateSize,
    SetGrabCursor(bool),
    Emit(SliderEvent),
}

/// In-memory slider with fixed bounds.
///
/// Content starts at `min_translate`; `set_translate` moves it immediately.
#[derive(Debug)]
pub struct RecordingSlider {
    pub config: TouchConfig,
    pub min_translate: f32,
    pub max_translate: f32,
    pub translate: f32,
    pub orientation: Orientation,
    pub rtl: bool,
    pub animating: bool,
    pub calls: Vec<SliderCall>,
}

impl RecordingSlider {
    /// Horizontal slider whose content spans `content_extent` pixels beyond
    /// the viewport.
    pub fn horizontal(config: TouchConfig, content_extent: f32) -> Self {
        Self {
            config,
            min_translate: 0.0,
            max_translate: -content_extent,
            translate: 0.0,
            orientation: Orientation::Horizontal,
            rtl: false,
            animating: false,
            calls: Vec::new(),
        }
    }

    pub fn vertical(config: TouchConfig, content_extent: f32) -> Self {
        Self {
            orientation: Orientation::Vertical,
            ..Self::horizontal(config, content_extent)
        }
    }

    pub fn at_translate(mut self, translate: f32) -> Self {
        self.translate = translate;
        self
    }

    pub fn with_rtl(mut self, rtl: bool) -> Self {
        self.rtl = rtl;
        self
    }

    pub fn with_animating(mut self, animating: bool) -> Self {
        self.animating = animating;
        self
    }

    /// Notifications emitted so far, in order.
    pub fn events(&self) -> Vec<SliderEvent> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                SliderCall::Emit(event) => Some(*event),
                _ => None,
            })
            .collect()
    }

    pub fn count_event(&self, event: SliderEvent) -> usize {
        self.events().iter().filter(|emitted| **emitted == event).count()
    }

    /// Translates pushed through `set_translate`, in order.
    pub fn translates(&self) -> Vec<f32> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                SliderCall::SetTranslate(value) => Some(*value),
                _ => None,
            })
            .collect()
    }

    pub fn clear_calls(&mut self) {
        self.calls.clear();
    }
}

impl Slider for RecordingSlider {
    fn touch_config(&self) -> &TouchConfig {
        &self.config
    }

    fn min_translate(&self) -> f32 {
        self.min_translate
    }

    fn max_translate(&self) -> f32 {
        self.max_translate
    }

    fn translate(&self) -> f32 {
        self.translate
    }

    fn set_translate(&mut self, translate: f32) {
        self.translate = translate;
        self.calls.push(SliderCall::SetTranslate(translate));
    }

    fn set_transition(&mut self, duration: Duration) {
        self.calls.push(SliderCall::SetTransition(duration));
    }

    fn finish_transition(&mut self) {
        self.animating = false;
        self.calls.push(SliderCall::FinishTransition);
    }

    fn orientation(&self) -> Orientation {
        self.orientation
    }

    fn is_rtl(&self) -> bool {
        self.rtl
    }

    fn is_animating(&self) -> bool {
        self.animating
    }

    fn update_size(&mut self) {
        self.calls.push(SliderCall::UpdateSize);
    }

    fn set_grab_cursor(&mut self, grabbing: bool) {
        self.calls.push(SliderCall::SetGrabCursor(grabbing));
    }

    fn emit(&mut self, event: SliderEvent, _input: &InputEvent) {
        self.calls.push(SliderCall::Emit(event));
    }
}
