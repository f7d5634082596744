pub mod out_heap;
pub mod priority_queue;
pub mod tree_heap;

pub use out_heap::OutHeap;
pub use priority_queue::MinQueue;
pub use tree_heap::SidetrackNode;
