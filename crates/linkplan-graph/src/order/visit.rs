//! Iterative "reverse-declare, postorder-visit, final-reverse" linearizer.
//!
//! Shared by [`OrderMerger`](super::OrderMerger) (static edges) and
//! [`ClosureWalker`](super::ClosureWalker) (static and shared edges).
//!
//! A unit is appended to the output buffer only after every one of its
//! children has been appended, and each child list is scanned last entry
//! first. Reversing the buffer at the end therefore yields a dependents-first
//! order in which, absent a forcing edge, units keep their declared relative
//! order.

use rustc_hash::FxHashMap;

use crate::cycle::StaticCycle;
use crate::view::{DependencyView, EdgeKinds, ReverseChildren};
use crate::UnitId;

/// Progress of one unit inside a single linearization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    /// On the work stack; some children may still be pending.
    Entered,
    /// Appended to the output buffer.
    Placed,
}

/// Per-computation bookkeeping of which units have been reached.
///
/// Owned by exactly one linearization and dropped with it. A unit is marked
/// when its visit starts, so an edge back into a unit that is still being
/// expanded is dropped instead of followed.
#[derive(Debug, Default)]
pub(crate) struct VisitState {
    marks: FxHashMap<UnitId, Mark>,
}

impl VisitState {
    fn mark(&self, unit: &UnitId) -> Option<Mark> {
        self.marks.get(unit).copied()
    }

    fn enter(&mut self, unit: &UnitId) {
        self.marks.insert(unit.clone(), Mark::Entered);
    }

    fn place(&mut self, unit: &UnitId) {
        self.marks.insert(unit.clone(), Mark::Placed);
    }

    pub(crate) fn is_visited(&self, unit: &UnitId) -> bool {
        self.marks.contains_key(unit)
    }
}

struct Frame<'v> {
    unit: UnitId,
    children: ReverseChildren<'v>,
}

/// Result of one linearization.
#[derive(Debug, Default)]
pub(crate) struct Linearization {
    /// Every reachable unit, dependents first, without duplicates.
    pub order: Vec<UnitId>,
    /// Re-entrant edges found along the way.
    pub cycles: Vec<StaticCycle>,
}

/// Linearize everything reachable from `root` along `edges`.
///
/// `root` itself is not placed unless an edge leads back to it.
pub(crate) fn linearize<V>(view: &V, root: &UnitId, edges: EdgeKinds) -> Linearization
where
    V: DependencyView + ?Sized,
{
    let mut state = VisitState::default();
    let mut placed: Vec<UnitId> = Vec::new();
    let mut cycles: Vec<StaticCycle> = Vec::new();
    let mut stack: Vec<Frame<'_>> = Vec::new();

    for dep in edges.reverse_children(view, root) {
        if state.is_visited(dep) {
            continue;
        }

        state.enter(dep);
        stack.push(Frame {
            unit: dep.clone(),
            children: edges.reverse_children(view, dep),
        });

        while let Some(frame) = stack.last_mut() {
            match frame.children.next() {
                Some(child) => match state.mark(child) {
                    None => {
                        state.enter(child);
                        stack.push(Frame {
                            unit: child.clone(),
                            children: edges.reverse_children(view, child),
                        });
                    }
                    Some(Mark::Entered) => cycles.push(cycle_on_stack(&stack, child)),
                    Some(Mark::Placed) => {}
                },
                None => {
                    if let Some(done) = stack.pop() {
                        state.place(&done.unit);
                        placed.push(done.unit);
                    }
                }
            }
        }
    }

    placed.reverse();
    Linearization {
        order: placed,
        cycles,
    }
}

/// Build the cycle closed by an edge back to `target`, which is on the stack.
fn cycle_on_stack(stack: &[Frame<'_>], target: &UnitId) -> StaticCycle {
    let start = stack
        .iter()
        .rposition(|frame| &frame.unit == target)
        .unwrap_or(0);
    let mut path: Vec<UnitId> = stack[start..].iter().map(|f| f.unit.clone()).collect();
    path.push(target.clone());
    StaticCycle::new(path)
}
