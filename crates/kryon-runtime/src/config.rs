use kryon_behaviors::{DEFAULT_MAX_BEHAVIORS, DEFAULT_MAX_ELEMENT_TYPES};
use kryon_core::Size;
use kryon_input::InputConfig;
use kryon_layout::LayoutConfig;

/// Tunables of a [`Runtime`](crate::Runtime).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RuntimeConfig {
    pub double_click_interval_ms: u64,
    pub double_click_distance: f32,
    /// Window size used when the root carries no `windowWidth`/`windowHeight`.
    pub default_window: Size,
    pub max_behaviors: usize,
    pub max_element_types: usize,
    /// Upper bound on commands produced by one [`Runtime::render_frame`](crate::Runtime::render_frame).
    pub render_command_capacity: usize,
    pub hit_slop: f32,
    pub layout_debounce_frames: u64,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        let input = InputConfig::default();
        let layout = LayoutConfig::default();
        Self {
            double_click_interval_ms: input.double_click_interval_ms,
            double_click_distance: input.double_click_distance,
            default_window: layout.default_window,
            max_behaviors: DEFAULT_MAX_BEHAVIORS,
            max_element_types: DEFAULT_MAX_ELEMENT_TYPES,
            render_command_capacity: 1024,
            hit_slop: input.hit_slop,
            layout_debounce_frames: layout.debounce_frames,
        }
    }
}

impl RuntimeConfig {
    pub fn with_double_click(mut self, interval_ms: u64, distance: f32) -> Self {
        self.double_click_interval_ms = interval_ms;
        self.double_click_distance = distance;
        self
    }

    pub fn with_default_window(mut self, width: f32, height: f32) -> Self {
        self.default_window = Size::new(width, height);
        self
    }

    pub fn with_registry_capacities(mut self, max_behaviors: usize, max_element_types: usize) -> Self {
        self.max_behaviors = max_behaviors;
        self.max_element_types = max_element_types;
        self
    }

    pub fn with_render_command_capacity(mut self, capacity: usize) -> Self {
        self.render_command_capacity = capacity;
        self
    }

    pub fn with_hit_slop(mut self, slop: f32) -> Self {
        self.hit_slop = slop;
        self
    }

    pub fn with_layout_debounce_frames(mut self, frames: u64) -> Self {
        self.layout_debounce_frames = frames;
        self
    }

    pub fn input_config(&self) -> InputConfig {
        InputConfig {
            double_click_interval_ms: self.double_click_interval_ms,
            double_click_distance: self.double_click_distance,
            hit_slop: self.hit_slop,
        }
    }

    pub fn layout_config(&self) -> LayoutConfig {
        LayoutConfig {
            default_window: self.default_window,
            debounce_frames: self.layout_debounce_frames,
        }
    }
}
