use std::fmt::Display;

/// The integer type backing every index in this crate.
pub type DefaultIdType = u32;

macro_rules! impl_index_type {
    ($($(#[$meta:meta])* $name:ident => $prefix:literal),*) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
            pub struct $name(DefaultIdType);

            impl $name {
                /// Wraps a dense position.
                pub fn new(index: usize) -> Self {
                    Self(index as DefaultIdType)
                }

                /// Returns the dense position this id stands for.
                pub fn index(self) -> usize {
                    self.0 as usize
                }
            }

            impl From<usize> for $name {
                fn from(value: usize) -> Self {
                    Self::new(value)
                }
            }

            impl Display for $name {
                fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    write!(f, "{}{}", $prefix, self.0)
                }
            }
        )*
    };
}

impl_index_type!(
    /// Index of a state of an [`crate::Nfa`]. Ids are handed out densely in declaration order.
    StateId => "q",
    /// Index of a state of a [`crate::Dfa`]. Ids are handed out densely in discovery order,
    /// so the initial state always has index 0.
    DfaStateId => "d",
    /// Index of a symbol in an [`crate::Alphabet`].
    Symbol => "s"
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_dense_positions() {
        assert_eq!(StateId::new(3).index(), 3);
        assert_eq!(DfaStateId::from(0).to_string(), "d0");
        assert!(Symbol::new(1) < Symbol::new(2));
    }
}
