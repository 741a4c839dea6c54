use quest_core::MapLayout;

/// Kinds of decorative props along the path. The first half of the map
/// reads as daytime (trees, bushes), the rest as nighttime (clouds,
/// stars), matching the biome split of the original game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SceneryKind {
    Tree,
    Bush,
    Cloud,
    Star,
}

impl SceneryKind {
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            SceneryKind::Tree => "scenery tree",
            SceneryKind::Bush => "scenery bush",
            SceneryKind::Cloud => "scenery cloud",
            SceneryKind::Star => "scenery star",
        }
    }
}

/// One decorative prop with a precomputed position and size seed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SceneryItem {
    pub kind: SceneryKind,
    pub x_percent: f32,
    pub y_offset: u32,
    /// Small integer varying the prop's rendered size.
    pub seed: u32,
}

/// Scatter props along the path for `total_nodes` rows.
///
/// Placement jitters per row from a cheap hash of the row index so the
/// map looks organic but renders identically across frames; the props
/// carry no game state and the core never reads them back.
#[must_use]
pub fn scenery_items(total_nodes: usize, layout: &MapLayout) -> Vec<SceneryItem> {
    let mut items = Vec::new();
    let day_rows = total_nodes / 2;

    for row in 0..total_nodes {
        let y = layout.position(row).y_offset;
        if row < day_rows {
            for slot in 0..2_u32 {
                items.push(SceneryItem {
                    kind: SceneryKind::Tree,
                    x_percent: jitter(row as u32 * 7 + slot * 31),
                    y_offset: y + (hash(row as u32 + slot) % 20),
                    seed: row as u32 + slot,
                });
            }
            items.push(SceneryItem {
                kind: SceneryKind::Bush,
                x_percent: jitter(row as u32 * 13 + 5),
                y_offset: y + (hash(row as u32 * 3) % 20),
                seed: row as u32,
            });
        } else {
            for slot in 0..3_u32 {
                items.push(SceneryItem {
                    kind: SceneryKind::Cloud,
                    x_percent: jitter(row as u32 * 11 + slot * 17),
                    y_offset: y.saturating_sub(50) + (hash(row as u32 + slot * 2) % 100),
                    seed: row as u32 + slot,
                });
                items.push(SceneryItem {
                    kind: SceneryKind::Star,
                    x_percent: jitter(row as u32 * 19 + slot * 23),
                    y_offset: y.saturating_sub(80) + (hash(row as u32 * 5 + slot) % 120),
                    seed: row as u32 + slot,
                });
            }
        }
    }

    items
}

/// Map a seed into the 10..90 percent band the props live in.
fn jitter(seed: u32) -> f32 {
    10.0 + (hash(seed) % 80) as f32
}

fn hash(seed: u32) -> u32 {
    // Knuth multiplicative hash, plenty for decoration.
    seed.wrapping_mul(2_654_435_761) >> 16
}
