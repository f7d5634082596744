pub mod closest_first;

pub use closest_first::ClosestFirstIterator;
