//! String representation of collection elements.

use std::borrow::Cow;

/// Something that can sit in an `OrderedCollection` and be rendered as text.
///
/// `join` and the default `sort` comparator are defined in terms of this
/// rendering. Absent and null elements render as the empty string in `join`.
pub trait Element {
    /// The standard string representation of this element.
    fn render(&self) -> Cow<'_, str>;

    /// True for the "no value was ever assigned" marker.
    fn is_absent(&self) -> bool {
        return false;
    }

    /// True for an explicit null.
    fn is_null(&self) -> bool {
        return false;
    }
}

/// Render a float the way the standard number-to-string conversion does.
pub(crate) fn render_number(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        let text = if n > 0.0 { "Infinity" } else { "-Infinity" };
        return text.to_string();
    }
    if n == 0.0 {
        // Covers -0.
        return "0".to_string();
    }
    return n.to_string();
}

macro_rules! element_display {
    ($($t:ty),*) => {$(
        impl Element for $t {
            fn render(&self) -> Cow<'_, str> {
                return Cow::Owned(self.to_string());
            }
        }
    )*};
}

element_display!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, bool, char);

impl Element for f64 {
    fn render(&self) -> Cow<'_, str> {
        return Cow::Owned(render_number(*self));
    }
}

impl Element for f32 {
    fn render(&self) -> Cow<'_, str> {
        return Cow::Owned(render_number(f64::from(*self)));
    }
}

impl Element for str {
    fn render(&self) -> Cow<'_, str> {
        return Cow::Borrowed(self);
    }
}

impl Element for String {
    fn render(&self) -> Cow<'_, str> {
        return Cow::Borrowed(self.as_str());
    }
}

impl<T: Element + ?Sized> Element for &T {
    fn render(&self) -> Cow<'_, str> {
        return (**self).render();
    }

    fn is_absent(&self) -> bool {
        return (**self).is_absent();
    }

    fn is_null(&self) -> bool {
        return (**self).is_null();
    }
}

/// `None` is the absent marker.
impl<T: Element> Element for Option<T> {
    fn render(&self) -> Cow<'_, str> {
        return match self {
            Some(inner) => inner.render(),
            None => Cow::Borrowed("undefined"),
        };
    }

    fn is_absent(&self) -> bool {
        return match self {
            Some(inner) => inner.is_absent(),
            None => true,
        };
    }

    fn is_null(&self) -> bool {
        return matches!(self, Some(inner) if inner.is_null());
    }
}
