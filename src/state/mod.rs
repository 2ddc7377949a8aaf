pub mod cart;
pub mod slide;
pub mod swipe;

pub use slide::{SlideOutcome, SlideSession};
pub use swipe::{SectionPager, SwipeDir, SwipeTracker};
