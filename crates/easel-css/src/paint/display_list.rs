//! Display List - a queue of drawing commands
//!
//! Commands come out in the order they were pushed, which is painting order:
//! later commands sit on top of earlier ones.

use std::collections::VecDeque;
use std::collections::vec_deque;

use serde::Serialize;

use crate::layout::Rect;
use crate::values::ColorValue;

/// A single drawing command.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum DisplayCommand {
    /// Fill a rectangle with a solid color, composited over what is below.
    Rectangle {
        /// The area to fill.
        rect: Rect,
        /// Fill color.
        color: ColorValue,
    },
}

/// A FIFO queue of drawing commands in painting order.
///
/// [CSS 2.1 Appendix E.2 Painting order](https://www.w3.org/TR/CSS2/zindex.html#painting-order)
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DisplayList {
    commands: VecDeque<DisplayCommand>,
}

impl DisplayList {
    /// Create an empty display list.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            commands: VecDeque::new(),
        }
    }

    /// Add a command at the back of the queue.
    pub fn push(&mut self, command: DisplayCommand) {
        self.commands.push_back(command);
    }

    /// Take the command at the front of the queue.
    pub fn pop(&mut self) -> Option<DisplayCommand> {
        self.commands.pop_front()
    }

    /// Iterate the commands front to back without consuming them.
    pub fn iter(&self) -> vec_deque::Iter<'_, DisplayCommand> {
        self.commands.iter()
    }

    /// Get the number of commands.
    #[must_use]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Check if the display list is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl IntoIterator for DisplayList {
    type Item = DisplayCommand;
    type IntoIter = vec_deque::IntoIter<DisplayCommand>;

    fn into_iter(self) -> Self::IntoIter {
        self.commands.into_iter()
    }
}

impl<'a> IntoIterator for &'a DisplayList {
    type Item = &'a DisplayCommand;
    type IntoIter = vec_deque::Iter<'a, DisplayCommand>;

    fn into_iter(self) -> Self::IntoIter {
        self.commands.iter()
    }
}
