use std::hash::Hash;

use bit_set::BitSet;
use itertools::Itertools;

use crate::StateId;

/// Type alias for sets, we use this to hide which type of `HashSet` we are actually using.
pub type Set<S> = fxhash::FxHashSet<S>;
/// Type alias for maps, we use this to hide which type of `HashMap` we are actually using.
pub type Map<K, V> = fxhash::FxHashMap<K, V>;

/// Represents a bijective mapping between `L` and `R`, that is a mapping which associates
/// each `L` with precisely one `R` and vice versa.
pub type Bijection<L, R> = bimap::BiBTreeMap<L, R>;

/// A set of NFA states. Equality, ordering and hashing only depend on the members, never on
/// the insertion order or on the capacity of the underlying bit vector, which makes a
/// `StateSet` usable as a key when interning the states of a determinized automaton.
#[derive(Clone, Default)]
pub struct StateSet(BitSet);

impl StateSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the set that contains only `state`.
    pub fn singleton(state: StateId) -> Self {
        let mut set = Self::new();
        set.insert(state);
        set
    }

    /// Inserts `state`, returns `true` if it was not present before.
    pub fn insert(&mut self, state: StateId) -> bool {
        self.0.insert(state.index())
    }

    /// Returns true if `state` is a member.
    pub fn contains(&self, state: StateId) -> bool {
        self.0.contains(state.index())
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if there are no members.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the members in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = StateId> + '_ {
        self.0.iter().map(StateId::new)
    }

    /// Adds all members of `other` to `self`.
    pub fn union_with(&mut self, other: &StateSet) {
        self.0.union_with(&other.0);
    }

    /// Returns a new set containing the members of both sets.
    pub fn union(&self, other: &StateSet) -> StateSet {
        let mut out = self.clone();
        out.union_with(other);
        out
    }

    /// Returns true if the two sets share no member.
    pub fn is_disjoint(&self, other: &StateSet) -> bool {
        self.0.is_disjoint(&other.0)
    }

    /// Returns true if every member of `self` is a member of `other`.
    pub fn is_subset(&self, other: &StateSet) -> bool {
        self.0.is_subset(&other.0)
    }
}

impl PartialEq for StateSet {
    fn eq(&self, other: &Self) -> bool {
        self.0.iter().eq(other.0.iter())
    }
}

impl Eq for StateSet {}

impl Hash for StateSet {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for q in self.0.iter() {
            q.hash(state);
        }
    }
}

impl PartialOrd for StateSet {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for StateSet {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.0.iter().cmp(other.0.iter())
    }
}

impl std::fmt::Debug for StateSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{{}}}", self.iter().join(", "))
    }
}

impl FromIterator<StateId> for StateSet {
    fn from_iter<I: IntoIterator<Item = StateId>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl Extend<StateId> for StateSet {
    fn extend<I: IntoIterator<Item = StateId>>(&mut self, iter: I) {
        for q in iter {
            self.insert(q);
        }
    }
}

impl<const N: usize> From<[StateId; N]> for StateSet {
    fn from(value: [StateId; N]) -> Self {
        value.into_iter().collect()
    }
}

/// Upper bound on the number of states that determinizing an automaton with `nfa_states`
/// states can produce: every subset plus the sink. Saturates at `usize::MAX`.
pub fn subset_bound(nfa_states: usize) -> usize {
    if nfa_states >= usize::BITS as usize {
        usize::MAX
    } else {
        (1usize << nfa_states).saturating_add(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::hash::{BuildHasher, BuildHasherDefault};

    fn hash_of(set: &StateSet) -> u64 {
        BuildHasherDefault::<fxhash::FxHasher>::default().hash_one(set)
    }

    #[test]
    fn equality_ignores_insertion_order_and_capacity() {
        let mut left = StateSet::new();
        left.insert(StateId::new(200));
        left.insert(StateId::new(1));
        let mut grown = StateSet::singleton(StateId::new(300));
        grown.0.remove(300);
        grown.insert(StateId::new(1));
        grown.insert(StateId::new(200));

        assert_eq!(left, grown);
        assert_eq!(hash_of(&left), hash_of(&grown));
        assert_eq!(left.cmp(&grown), std::cmp::Ordering::Equal);
    }

    #[test]
    fn empty_sets_are_equal() {
        let mut shrunk = StateSet::singleton(StateId::new(64));
        shrunk.0.remove(64);
        assert!(shrunk.is_empty());
        assert_eq!(shrunk, StateSet::new());
        assert_eq!(hash_of(&shrunk), hash_of(&StateSet::new()));
    }

    #[test]
    fn set_operations() {
        let a = StateSet::from([StateId::new(0), StateId::new(2)]);
        let b = StateSet::from([StateId::new(1)]);
        let u = a.union(&b);
        assert_eq!(u.len(), 3);
        assert!(a.is_subset(&u));
        assert!(a.is_disjoint(&b));
        assert!(!u.is_disjoint(&b));
        assert_eq!(format!("{u:?}"), "{q0, q1, q2}");
    }

    #[test]
    fn bound_saturates() {
        assert_eq!(subset_bound(0), 2);
        assert_eq!(subset_bound(3), 9);
        assert_eq!(subset_bound(200), usize::MAX);
    }
}
