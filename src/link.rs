//! Position-based link trait for null-capable integer handles.
//!
//! Links are 1-based: value `v > 0` refers to arena slot `v - 1`, and `0` is
//! reserved as null. An all-zeros node therefore reads as fully unlinked,
//! which is exactly what a freshly zeroed arena contains.

/// A copyable 1-based position handle with `0` reserved as null.
///
/// A link value `v > 0` refers to the node at arena position `v - 1`. The
/// maximum usable node count is one less than the type's maximum value, so a
/// `u8` link addresses at most 254 nodes.
///
/// # Example
///
/// ```
/// use intrusive_arena::Link;
///
/// let link = u32::from_index(5);
/// assert_eq!(link, 6);
/// assert_eq!(link.index(), 5);
/// assert!(link.is_some());
/// assert!(u32::NULL.is_null());
/// ```
pub trait Link: Copy + Eq + core::fmt::Debug {
    /// The null link, `0`.
    const NULL: Self;

    /// Maximum number of addressable nodes, one less than the type's maximum.
    const MAX_NODES: usize;

    /// Converts a zero-based arena position into a link.
    fn from_index(index: usize) -> Self;

    /// Converts this link into a zero-based arena position.
    ///
    /// Must not be called on [`Link::NULL`]; debug builds assert.
    fn index(self) -> usize;

    /// Returns `true` if this is the null link.
    #[inline]
    fn is_null(self) -> bool {
        self == Self::NULL
    }

    /// Returns `true` if this link refers to a node.
    #[inline]
    fn is_some(self) -> bool {
        !self.is_null()
    }
}

macro_rules! impl_link_for_unsigned {
    ($($ty:ty),*) => {
        $(
            impl Link for $ty {
                const NULL: Self = 0;
                const MAX_NODES: usize = <$ty>::MAX as usize - 1;

                #[inline]
                fn from_index(index: usize) -> Self {
                    debug_assert!(index < <$ty>::MAX as usize);
                    index as $ty + 1
                }

                #[inline]
                fn index(self) -> usize {
                    debug_assert!(self != 0);
                    self as usize - 1
                }
            }
        )*
    };
}

impl_link_for_unsigned!(u8, u16, u32, u64, usize);

/// Validator-side range check: non-null and within the arena extent.
#[inline]
pub(crate) fn in_bounds<L: Link>(link: L, extent: usize) -> bool {
    link.is_some() && link.index() < extent
}
