//! Recording render sink

use crate::render::RenderSink;

/// Render sink that records every draw request of a frame
///
/// Renderers replay the list into real draw calls; tests and the headless
/// demo inspect it directly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DrawList {
    render_indices: Vec<u32>,
}

impl DrawList {
    /// Create an empty draw list
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget all recorded draws, keeping the allocation
    pub fn clear(&mut self) {
        self.render_indices.clear();
    }

    /// Number of draw requests recorded
    pub fn len(&self) -> usize {
        self.render_indices.len()
    }

    /// Whether nothing was drawn
    pub fn is_empty(&self) -> bool {
        self.render_indices.is_empty()
    }

    /// Recorded render indices in draw order
    pub fn render_indices(&self) -> &[u32] {
        &self.render_indices
    }

    /// Whether `render_index` was drawn at least once
    pub fn contains(&self, render_index: u32) -> bool {
        self.render_indices.contains(&render_index)
    }

    /// Sorted render indices with duplicates removed
    pub fn unique_indices(&self) -> Vec<u32> {
        let mut unique = self.render_indices.clone();
        unique.sort_unstable();
        unique.dedup();
        unique
    }
}

impl RenderSink for DrawList {
    fn draw_obstacle(&mut self, render_index: u32) {
        self.render_indices.push(render_index);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_in_order() {
        let mut list = DrawList::new();
        list.draw_obstacle(302);
        list.draw_obstacle(14);
        list.draw_obstacle(302);
        assert_eq!(list.render_indices(), &[302, 14, 302]);
        assert_eq!(list.unique_indices(), vec![14, 302]);
        assert!(list.contains(14));

        list.clear();
        assert!(list.is_empty());
    }

    #[test]
    fn test_closure_is_a_sink() {
        let mut total = 0u32;
        {
            let mut sink = |index: u32| total += index;
            sink.draw_obstacle(5);
            sink.draw_obstacle(7);
        }
        assert_eq!(total, 12);
    }
}
