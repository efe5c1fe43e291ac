//! Values that may be absent.
//!
//! `Nullable<T>` holds either a `T` or nothing. Unlike a bare `Option<T>` the accessors assume the
//! caller already knows a value is present: `value()` on an empty container is a bug in the caller
//! and panics, rather than handing back something to be checked.
//!
//! ```
//! use nullable::Nullable;
//!
//! let mut n: Nullable<u32> = Nullable::NULL;
//! assert!(!n.has_value());
//!
//! n.set_value(5);
//! assert_eq!(*n.value(), 5);
//!
//! n.clear();
//! assert_eq!(n, Nullable::NULL);
//! ```

use core::cmp;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::mem;
use core::option;

mod error;
pub use self::error::NullError;

mod layout;

/// A value of type `T`, or nothing.
#[repr(transparent)]
pub struct Nullable<T>(Option<T>);

impl<T> Nullable<T> {
    /// The empty `Nullable`.
    ///
    /// Usable wherever a `Nullable<T>` is expected without naming `T`:
    ///
    /// ```
    /// # use nullable::Nullable;
    /// fn lookup(key: &str) -> Nullable<u64> {
    ///     if key == "answer" { 42.into() } else { Nullable::NULL }
    /// }
    ///
    /// assert_eq!(lookup("answer"), Nullable::from(42));
    /// assert!(!lookup("question").has_value());
    /// ```
    pub const NULL: Self = Nullable(None);

    /// Creates an empty `Nullable`.
    #[inline(always)]
    pub const fn new() -> Self {
        Nullable(None)
    }

    /// Creates a `Nullable` holding `value`.
    #[inline(always)]
    pub const fn from_value(value: T) -> Self {
        Nullable(Some(value))
    }

    /// Returns `true` if a value is present.
    #[inline(always)]
    pub fn has_value(&self) -> bool {
        self.0.is_some()
    }

    /// Stores `value`, dropping the previous value if any.
    #[inline]
    pub fn set_value(&mut self, value: T) {
        self.0 = Some(value);
    }

    /// Resets back to no value.
    ///
    /// Clearing an empty `Nullable` does nothing.
    #[inline]
    pub fn clear(&mut self) {
        self.0 = None;
    }

    /// Returns the stored value.
    ///
    /// # Panics
    ///
    /// Panics if there is no value. Check with `has_value()` first, or use `get()` or
    /// `try_value()` if absence is an expected condition.
    #[inline]
    #[track_caller]
    pub fn value(&self) -> &T {
        match &self.0 {
            Some(value) => value,
            None => null_access("value"),
        }
    }

    /// Returns the stored value mutably.
    ///
    /// # Panics
    ///
    /// Panics if there is no value.
    #[inline]
    #[track_caller]
    pub fn value_mut(&mut self) -> &mut T {
        match &mut self.0 {
            Some(value) => value,
            None => null_access("value_mut"),
        }
    }

    /// Consumes the `Nullable`, returning the stored value.
    ///
    /// # Panics
    ///
    /// Panics if there is no value.
    #[inline]
    #[track_caller]
    pub fn into_value(self) -> T {
        match self.0 {
            Some(value) => value,
            None => null_access("into_value"),
        }
    }

    /// Returns the stored value, or `None` if there isn't one.
    #[inline]
    pub fn get(&self) -> Option<&T> {
        self.0.as_ref()
    }

    /// Returns the stored value mutably, or `None` if there isn't one.
    #[inline]
    pub fn get_mut(&mut self) -> Option<&mut T> {
        self.0.as_mut()
    }

    /// Returns the stored value, or `NullError` if there isn't one.
    #[inline]
    pub fn try_value(&self) -> Result<&T, NullError> {
        self.0.as_ref().ok_or(NullError)
    }

    /// Consumes the `Nullable`, returning the stored value or `NullError`.
    #[inline]
    pub fn try_into_value(self) -> Result<T, NullError> {
        self.0.ok_or(NullError)
    }

    /// Returns the stored value, or `default` if there isn't one.
    #[inline]
    pub fn value_or<'a>(&'a self, default: &'a T) -> &'a T {
        self.0.as_ref().unwrap_or(default)
    }

    /// Takes the value out, leaving nothing in its place.
    #[inline]
    pub fn take(&mut self) -> Self {
        Nullable(self.0.take())
    }

    /// Stores `value`, returning whatever was there before.
    #[inline]
    pub fn replace(&mut self, value: T) -> Self {
        Nullable(mem::replace(&mut self.0, Some(value)))
    }

    /// Returns the stored value, first storing the result of `f` if there is none.
    #[inline]
    pub fn get_or_insert_with(&mut self, f: impl FnOnce() -> T) -> &mut T {
        self.0.get_or_insert_with(f)
    }

    /// Applies `f` to the stored value, if any.
    #[inline]
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Nullable<U> {
        Nullable(self.0.map(f))
    }

    #[inline]
    pub fn as_ref(&self) -> Nullable<&T> {
        Nullable(self.0.as_ref())
    }

    #[inline(always)]
    pub fn as_option(&self) -> &Option<T> {
        &self.0
    }

    #[inline(always)]
    pub fn into_option(self) -> Option<T> {
        self.0
    }
}

#[cold]
#[inline(never)]
#[track_caller]
fn null_access(method: &str) -> ! {
    panic!("Nullable::{}() called on a null value", method)
}

impl<T> Default for Nullable<T> {
    #[inline(always)]
    fn default() -> Self {
        Nullable::new()
    }
}

impl<T> From<T> for Nullable<T> {
    #[inline(always)]
    fn from(value: T) -> Self {
        Nullable::from_value(value)
    }
}

/// Bridges from `Option`: `Some(v)` holds `v`, `None` is empty.
///
/// When `T` is itself an `Option` the generic `From<T>` impl also applies, so `None.into()` is
/// ambiguous and `None::<U>.into()` *holds* a `None`. Use `Nullable::NULL` for the empty value:
///
/// ```
/// # use nullable::Nullable;
/// let n: Nullable<Option<u8>> = None::<u8>.into();
/// assert!(n.has_value());
///
/// let n: Nullable<Option<u8>> = Nullable::NULL;
/// assert!(!n.has_value());
/// ```
impl<T> From<Option<T>> for Nullable<T> {
    #[inline(always)]
    fn from(value: Option<T>) -> Self {
        Nullable(value)
    }
}

impl<T> From<Nullable<T>> for Option<T> {
    #[inline(always)]
    fn from(nullable: Nullable<T>) -> Self {
        nullable.0
    }
}

impl<T: Clone> Clone for Nullable<T> {
    #[inline]
    fn clone(&self) -> Self {
        Nullable(self.0.clone())
    }

    #[inline]
    fn clone_from(&mut self, source: &Self) {
        self.0.clone_from(&source.0)
    }
}

impl<T: Copy> Copy for Nullable<T> {}

impl<T: fmt::Debug> fmt::Debug for Nullable<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.0 {
            Some(value) => f.debug_tuple("Value").field(value).finish(),
            None => f.write_str("Null"),
        }
    }
}

impl<T: cmp::PartialEq> cmp::PartialEq for Nullable<T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        match (&self.0, &other.0) {
            (None, None) => true,
            (Some(a), Some(b)) => cmp::PartialEq::eq(a, b),
            _ => false,
        }
    }
}
impl<T: cmp::Eq> cmp::Eq for Nullable<T> {}

impl<T: cmp::PartialOrd> cmp::PartialOrd for Nullable<T> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<cmp::Ordering> {
        cmp::PartialOrd::partial_cmp(&self.0, &other.0)
    }
}

impl<T: cmp::Ord> cmp::Ord for Nullable<T> {
    #[inline]
    fn cmp(&self, other: &Self) -> cmp::Ordering {
        cmp::Ord::cmp(&self.0, &other.0)
    }
}

impl<T: Hash> Hash for Nullable<T> {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        Hash::hash(&self.0, state)
    }
}

impl<T> IntoIterator for Nullable<T> {
    type Item = T;
    type IntoIter = option::IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Nullable<T> {
    type Item = &'a T;
    type IntoIter = option::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Nullable<T> {
    type Item = &'a mut T;
    type IntoIter = option::IterMut<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.0.iter_mut()
    }
}
