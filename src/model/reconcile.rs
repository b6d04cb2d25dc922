//! Matching re-parsed parameters against the previous parse
//!
//! For each new parameter, in order, the first unconsumed old entry that
//! `same` accepts donates its handle and is consumed. Unmatched new
//! parameters get a fresh handle; unmatched old handles are released. The
//! new order is authoritative. Cost is O(n·m), fine for the dozens of
//! parameters a module has.

/// Outcome of one reconciliation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reconciled<P, H> {
    pub entries: Vec<(P, H)>,
    pub kept: usize,
    pub bound: usize,
    pub released: usize,
}

pub fn reconcile<P, H>(
    old: Vec<(P, H)>,
    new: Vec<P>,
    same: impl Fn(&P, &P) -> bool,
    mut bind: impl FnMut(&P) -> H,
    mut refresh: impl FnMut(&H, &P),
    mut release: impl FnMut(H),
) -> Reconciled<P, H> {
    let mut slots: Vec<Option<(P, H)>> = old.into_iter().map(Some).collect();
    let mut entries = Vec::with_capacity(new.len());
    let (mut kept, mut bound) = (0, 0);

    for parameter in new {
        let matched = slots
            .iter_mut()
            .find(|slot| slot.as_ref().is_some_and(|(prev, _)| same(prev, &parameter)))
            .and_then(Option::take);

        let handle = match matched {
            Some((_, handle)) => {
                refresh(&handle, &parameter);
                kept += 1;
                handle
            }
            None => {
                bound += 1;
                bind(&parameter)
            }
        };
        entries.push((parameter, handle));
    }

    let mut released = 0;
    for (_, handle) in slots.into_iter().flatten() {
        release(handle);
        released += 1;
    }

    Reconciled {
        entries,
        kept,
        bound,
        released,
    }
}
