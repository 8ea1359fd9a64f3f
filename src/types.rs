//! Element type alias and per-operation cost report.
//!
//! This module defines `Elem` as the integer type stored by all containers.
//! The actual type is determined at compile time via feature flags.
//!
//! # Features
//! - `elem-i64` (default): uses [`i64`] as `Elem`
//! - `elem-i32`: uses [`i32`] as `Elem`
//!   (Both features cannot be enabled at the same time.)
//! - If neither feature is enabled, `i64` is used as the default type.

/// Alias for the integer type stored by the containers.
///
/// The type is selected at compile time using feature flags:
/// - **`elem-i64`** (default): uses [`i64`]
/// - **`elem-i32`**: uses [`i32`]
///
/// > **Note:** Enabling both `elem-i64` and `elem-i32` at the same time
///   will result in a compile error. If neither is enabled, [`i64`] is used.
#[cfg(all(feature = "elem-i64", feature = "elem-i32"))]
compile_error!("You cannot enable both `elem-i64` and `elem-i32` features at the same time");

#[cfg(all(feature = "elem-i64", not(feature = "elem-i32")))]
pub type Elem = i64;

#[cfg(all(feature = "elem-i32", not(feature = "elem-i64")))]
pub type Elem = i32;

#[cfg(not(any(feature = "elem-i64", feature = "elem-i32")))]
pub type Elem = i64;

/// Exact cost of a single mutating queue operation.
///
/// `copied` counts elements copied into a fresh backing block during a
/// resize; `moved` counts elements shifted within the existing block. The
/// two are reported separately so that growth cost (amortized, occasional)
/// and shift cost (per-operation, layout-dependent) can be compared.
///
/// # Example
///
/// ```rust
/// use array_cost_core::containers::ArrayQueueCore;
/// use array_cost_core::OpCost;
///
/// let mut queue = ArrayQueueCore::new();
/// assert_eq!(queue.enqueue(7), Ok(OpCost { copied: 0, moved: 0 }));
/// assert_eq!(queue.enqueue(8), Ok(OpCost { copied: 1, moved: 0 }));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OpCost {
    /// Elements copied into new storage by a resize during this operation.
    pub copied: usize,
    /// Elements shifted within existing storage by this operation.
    pub moved: usize,
}

impl OpCost {
    /// Cost of an operation that neither resized nor shifted.
    pub const FREE: OpCost = OpCost { copied: 0, moved: 0 };

    /// Cost of an operation whose only work was a resize copy.
    #[inline]
    pub const fn resize(copied: usize) -> Self {
        OpCost { copied, moved: 0 }
    }

    /// Cost of an operation whose only work was shifting in place.
    #[inline]
    pub const fn shift(moved: usize) -> Self {
        OpCost { copied: 0, moved }
    }
}
