mod arena;
mod handle;
mod iter;
mod node;
mod raw_order_statistic_tree;
mod raw_splay_tree;
mod splay;

pub(crate) use handle::Handle;
pub(crate) use iter::InOrder;
pub(crate) use node::{KeyNode, Links, RankNode};
pub(crate) use raw_order_statistic_tree::RawOrderStatisticTree;
pub(crate) use raw_splay_tree::{RawSplayTree, Side};
