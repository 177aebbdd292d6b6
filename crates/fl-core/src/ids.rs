use core::fmt;

macro_rules! compact_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(u32);

        impl $name {
            /// Create an id from its 0-based index.
            pub const fn from_index(index: u32) -> Self {
                Self(index)
            }

            /// Recover the 0-based index.
            pub const fn index(self) -> u32 {
                self.0
            }

            /// The index as a `usize`, for slice addressing.
            pub const fn as_usize(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<u32> for $name {
            fn from(index: u32) -> Self {
                Self::from_index(index)
            }
        }
    };
}

compact_id! {
    /// A node of a flow network, identified by its position in `[0, node_count)`.
    ///
    /// Nodes carry no data; whether a node is the source or the sink is decided
    /// by comparing against the graph's terminals.
    NodeId
}

compact_id! {
    /// Position of an edge in a graph's edge list.
    EdgeId
}
