use quest_core::{MapLayout, ProgressionConfig};
use quest_core::model::Progress;

/// Everything the map view needs to draw one node.
#[derive(Clone, Debug, PartialEq)]
pub struct NodeTile {
    pub index: usize,
    /// 1-based number painted on the node.
    pub number: usize,
    pub xp: u32,
    pub required_xp: u32,
    pub completed: bool,
    pub unlocked: bool,
    pub x_percent: f32,
    pub y_offset: u32,
}

impl NodeTile {
    #[must_use]
    pub fn css_class(&self) -> &'static str {
        if self.completed {
            "node completed"
        } else if self.unlocked {
            "node unlocked"
        } else {
            "node locked"
        }
    }

    #[must_use]
    pub fn tooltip(&self) -> String {
        if self.completed {
            "Completed".to_owned()
        } else if self.unlocked {
            format!("Node {} — Click to practice", self.number)
        } else {
            "Locked".to_owned()
        }
    }

    #[must_use]
    pub fn xp_badge(&self) -> String {
        format!("{}/{} XP", self.xp, self.required_xp)
    }
}

/// Projection of the whole progress snapshot for the map view.
#[derive(Clone, Debug, PartialEq)]
pub struct MapVm {
    pub tiles: Vec<NodeTile>,
    pub total_height: u32,
    pub total_xp: u64,
    /// 1-based number of the node the player last opened.
    pub current_node_number: usize,
}

impl MapVm {
    #[must_use]
    pub fn build(progress: &Progress, config: &ProgressionConfig, layout: &MapLayout) -> Self {
        let tiles = progress
            .nodes()
            .iter()
            .map(|node| {
                let position = layout.position(node.index());
                NodeTile {
                    index: node.index(),
                    number: node.index() + 1,
                    xp: node.xp(),
                    required_xp: config.required_xp(node.index()),
                    completed: node.completed(),
                    unlocked: node.unlocked(),
                    x_percent: position.x_percent,
                    y_offset: position.y_offset,
                }
            })
            .collect();

        Self {
            tiles,
            total_height: layout.total_extent(progress.nodes().len()),
            total_xp: progress.total_xp(),
            current_node_number: progress.current_node() + 1,
        }
    }
}
