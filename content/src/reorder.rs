//! Single-element move used for drag-and-drop reordering.
//!
//! A drop is always "take one element out, put it back at the target's
//! position". Everything else keeps its relative order, nothing is
//! duplicated or dropped, and a drop onto itself is a no-op.

#[cfg(test)]
#[path = "reorder_test.rs"]
mod reorder_test;

/// Move the element at `from` to index `to`.
///
/// Out-of-range indices leave the sequence unchanged.
pub fn move_index<T: Clone>(items: &[T], from: usize, to: usize) -> Vec<T> {
    let mut next = items.to_vec();
    if from >= next.len() || to >= next.len() || from == to {
        return next;
    }
    let item = next.remove(from);
    next.insert(to, item);
    next
}

/// Resolve a drag-end event over `ids` into `(from, to)` indices.
///
/// Returns `None` when the event is a no-op: no drop target, dropped onto
/// itself, or either id is not in the list.
pub fn resolve_drop<T: PartialEq>(ids: &[T], dragged: &T, over: Option<&T>) -> Option<(usize, usize)> {
    let over = over?;
    if dragged == over {
        return None;
    }
    let from = ids.iter().position(|id| id == dragged)?;
    let to = ids.iter().position(|id| id == over)?;
    Some((from, to))
}

/// Apply a drag-end event to an id list.
pub fn move_by_id<T: Clone + PartialEq>(ids: &[T], dragged: &T, over: Option<&T>) -> Vec<T> {
    match resolve_drop(ids, dragged, over) {
        Some((from, to)) => move_index(ids, from, to),
        None => ids.to_vec(),
    }
}
