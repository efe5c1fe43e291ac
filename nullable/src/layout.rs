//! Compile-time layout checks.
//!
//! `Nullable<T>` is a thin wrapper around `Option<T>`, so it gets the same niche-filling: a
//! nullable box, reference or non-zero integer costs nothing over the bare value.

use core::num;
use core::ptr::NonNull;

use static_assertions::{assert_eq_size, assert_impl_all, assert_not_impl_any};

use super::{Nullable, NullError};

macro_rules! niche_impls {
    ( $( $t:ty, )* ) => {
        $(
            assert_eq_size!($t, Nullable<$t>);
            assert_eq_size!(Option<$t>, Nullable<$t>);
        )*
    }
}

niche_impls! {
    num::NonZeroU8, num::NonZeroU16, num::NonZeroU32, num::NonZeroU64, num::NonZeroU128,
    num::NonZeroI8, num::NonZeroI16, num::NonZeroI32, num::NonZeroI64, num::NonZeroI128,
    Box<()>, Box<[u8]>, NonNull<u8>, &'static u8, &'static str,
}

assert_eq_size!(Option<u32>, Nullable<u32>);
assert_eq_size!(Option<bool>, Nullable<bool>);
assert_eq_size!(Option<String>, Nullable<String>);

assert_impl_all!(Nullable<u8>: Copy, Send, Sync);
assert_impl_all!(Nullable<String>: Clone, Eq, core::hash::Hash, Send, Sync);
assert_not_impl_any!(Nullable<String>: Copy);
assert_not_impl_any!(Nullable<std::rc::Rc<u8>>: Send, Sync);
assert_impl_all!(NullError: std::error::Error, Send, Sync);

// Capabilities come from the held type, never from the container.
#[allow(dead_code)]
struct Opaque;
assert_not_impl_any!(Nullable<Opaque>: PartialEq, Clone, core::fmt::Debug, core::hash::Hash, PartialOrd);
assert_impl_all!(Nullable<Opaque>: Default, From<Opaque>, IntoIterator);
