mod map_vm;
mod quiz_vm;
mod scenery;

pub use map_vm::{MapVm, NodeTile};
pub use quiz_vm::{QuizOutcome, QuizVm};
pub use scenery::{SceneryItem, SceneryKind, scenery_items};
