pub mod binary_heap;
pub mod intrusive_list;
pub mod slot_arena;
pub mod union_find;

pub use binary_heap::{DrainSorted, OrderedHeap};
pub use intrusive_list::IntrusiveList;
pub use slot_arena::{SlotArena, SlotId};
pub use union_find::UnionFind;
