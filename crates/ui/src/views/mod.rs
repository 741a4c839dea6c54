mod map;
mod quiz;
mod scripts;
mod state;

pub use map::MapView;
pub use quiz::QuizModal;
pub use state::ViewError;
