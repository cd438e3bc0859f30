//! Main-axis arrangement of flow children.

use crate::MainAxisAlignment;

impl MainAxisAlignment {
    /// Writes each child's offset from the content start into `positions`.
    ///
    /// `Start`, `Center` and `End` keep `gap` between children and move the
    /// whole run by the leftover space. The `Space*` modes ignore `gap` and
    /// turn leftover space into spacing instead; they never produce negative
    /// spacing when the children overflow.
    ///
    /// Gaps count as occupied space when centering: three 50 px children with
    /// a 10 px gap in 200 px of content start at 15, not at the 25 that
    /// centering the children alone would give.
    pub fn arrange(self, content: f32, gap: f32, sizes: &[f32], positions: &mut [f32]) {
        debug_assert_eq!(sizes.len(), positions.len());
        let count = sizes.len();
        if count == 0 {
            return;
        }
        let children: f32 = sizes.iter().sum();
        let gaps = gap * (count - 1) as f32;
        let slack = (content - children).max(0.0);

        let (start, spacing) = match self {
            MainAxisAlignment::Start => (0.0, gap),
            MainAxisAlignment::Center => ((content - children - gaps) / 2.0, gap),
            MainAxisAlignment::End => (content - children - gaps, gap),
            MainAxisAlignment::SpaceBetween if count > 1 => (0.0, slack / (count - 1) as f32),
            MainAxisAlignment::SpaceBetween => (0.0, 0.0),
            MainAxisAlignment::SpaceAround => {
                let around = slack / count as f32;
                (around / 2.0, around)
            }
            MainAxisAlignment::SpaceEvenly => {
                let even = slack / (count + 1) as f32;
                (even, even)
            }
        };

        let mut cursor = start;
        for (size, position) in sizes.iter().zip(positions.iter_mut()) {
            *position = cursor;
            cursor += size + spacing;
        }
    }
}

#[cfg(test)]
#[path = "tests/arrangement_tests.rs"]
mod tests;
