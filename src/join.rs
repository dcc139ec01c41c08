//! Join finder (§4.4): the lowest common ancestor of the entering arc's
//! endpoints in the current basis tree, found by a depth-equalizing climb.

use crate::tree::TreeState;
use crate::types::FlowNum;

pub fn find_join<F: FlowNum>(tree: &TreeState<F>, k: usize, l: usize) -> usize {
    let mut k = k;
    let mut l = l;
    while tree.depth[k] > tree.depth[l] {
        k = tree.parent[k];
    }
    while tree.depth[l] > tree.depth[k] {
        l = tree.parent[l];
    }
    while k != l {
        k = tree.parent[k];
        l = tree.parent[l];
    }
    k
}
