/// Computed position for one node on the map.
///
/// `x_percent` is relative to the map's width; `y_offset` is an
/// absolute pixel offset from the top of the scrollable path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodePosition {
    pub x_percent: f32,
    pub y_offset: u32,
}

/// Deterministic projection from node index to map position.
///
/// Horizontal placement cycles through three lanes (left, right,
/// center) so the path zig-zags; vertical placement grows strictly with
/// the index so nodes render in visit order without overlap.
#[derive(Debug, Clone, PartialEq)]
pub struct MapLayout {
    base_offset: u32,
    vertical_gap: u32,
    trailing_margin: u32,
    lanes: [f32; 3],
}

impl Default for MapLayout {
    fn default() -> Self {
        Self {
            base_offset: 120,
            vertical_gap: 120,
            trailing_margin: 300,
            lanes: [30.0, 70.0, 50.0],
        }
    }
}

impl MapLayout {
    #[must_use]
    pub fn vertical_gap(&self) -> u32 {
        self.vertical_gap
    }

    /// Position of the node at `index`. Pure function of the index.
    #[must_use]
    pub fn position(&self, index: usize) -> NodePosition {
        let lane = self.lanes[index % self.lanes.len()];
        let step = u32::try_from(index).unwrap_or(u32::MAX);
        NodePosition {
            x_percent: lane,
            y_offset: self
                .base_offset
                .saturating_add(step.saturating_mul(self.vertical_gap)),
        }
    }

    /// Total scrollable height needed to show `total_nodes` nodes plus
    /// the trailing margin. Sizes the presentation layer's container.
    #[must_use]
    pub fn total_extent(&self, total_nodes: usize) -> u32 {
        let last = total_nodes.saturating_sub(1);
        self.position(last)
            .y_offset
            .saturating_add(self.trailing_margin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lanes_cycle_left_right_center() {
        let layout = MapLayout::default();
        assert_eq!(layout.position(0).x_percent, 30.0);
        assert_eq!(layout.position(1).x_percent, 70.0);
        assert_eq!(layout.position(2).x_percent, 50.0);
        assert_eq!(layout.position(3).x_percent, 30.0);
        // Deterministic for the same index.
        assert_eq!(layout.position(17), layout.position(17));
    }

    #[test]
    fn vertical_offsets_strictly_increase() {
        let layout = MapLayout::default();
        for index in 1..60 {
            assert!(layout.position(index).y_offset > layout.position(index - 1).y_offset);
        }
        assert_eq!(layout.position(0).y_offset, 120);
        assert_eq!(layout.position(29).y_offset, 120 + 29 * 120);
    }

    #[test]
    fn extent_covers_last_node_plus_margin() {
        let layout = MapLayout::default();
        assert_eq!(layout.total_extent(30), 120 + 29 * 120 + 300);
        assert_eq!(layout.total_extent(1), 120 + 300);
    }
}
