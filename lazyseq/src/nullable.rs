//! The distinguished absent value.
//!
//! Exclusion needs to know whether an element is absent: an absent element
//! always survives exclusion, and an absent excluded value is rejected
//! eagerly. `Option<T>` is the canonical nullable element type; plain
//! scalar and string elements are never absent.

/// Element types with a distinguished absent value.
pub trait Nullable {
    /// Check whether this value is the absent value.
    fn is_null(&self) -> bool;
}

impl<T> Nullable for Option<T> {
    fn is_null(&self) -> bool {
        self.is_none()
    }
}

impl<T: Nullable + ?Sized> Nullable for &T {
    fn is_null(&self) -> bool {
        (**self).is_null()
    }
}

macro_rules! never_null {
    ($($t:ty),* $(,)?) => {
        $(
            impl Nullable for $t {
                fn is_null(&self) -> bool {
                    false
                }
            }
        )*
    };
}

never_null!(
    bool, char, u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64, str,
    String,
);
