//! Render command output of the composed render chain.

use kryon_core::{ElementId, Point, Rect};

#[derive(Clone, Debug, PartialEq)]
pub enum RenderCommand {
    Rect {
        element: ElementId,
        bounds: Rect,
        color: String,
    },
    Text {
        element: ElementId,
        origin: Point,
        text: String,
        font_size: f32,
    },
    Custom {
        element: ElementId,
        tag: String,
    },
}

/// Bounded buffer of render commands. Pushes past capacity are refused.
#[derive(Clone, Debug)]
pub struct RenderCommandBuffer {
    commands: Vec<RenderCommand>,
    capacity: usize,
}

impl RenderCommandBuffer {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            commands: Vec::with_capacity(capacity.min(256)),
            capacity,
        }
    }

    /// Appends a command, returning `false` when the buffer is full.
    pub fn push(&mut self, command: RenderCommand) -> bool {
        if self.is_full() {
            return false;
        }
        self.commands.push(command);
        true
    }

    pub fn is_full(&self) -> bool {
        self.commands.len() >= self.capacity
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn commands(&self) -> &[RenderCommand] {
        &self.commands
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn into_commands(self) -> Vec<RenderCommand> {
        self.commands
    }
}
