use std::fmt::{Display, Formatter, Write};
use derive_more::{Display, From};

/// Renders a value the way it appears when nested inside a list or tuple.
///
/// Integers render the same as their plain form; text is quoted and escaped.
pub trait Repr {
    fn fmt_repr(&self, f: &mut Formatter<'_>) -> std::fmt::Result;
}

pub struct ReprOf<'a, T: ?Sized>(&'a T);

impl<T: Repr + ?Sized> Display for ReprOf<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.0.fmt_repr(f)
    }
}

pub const fn repr<T: Repr + ?Sized>(value: &T) -> ReprOf<'_, T> {
    ReprOf(value)
}

impl<T: Repr + ?Sized> Repr for &T {
    fn fmt_repr(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        (**self).fmt_repr(f)
    }
}

impl Repr for i64 {
    fn fmt_repr(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self}")
    }
}

impl Repr for str {
    fn fmt_repr(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let quote = if self.contains('\'') && !self.contains('"') { '"' } else { '\'' };

        f.write_char(quote)?;
        for c in self.chars() {
            match c {
                '\\' => f.write_str("\\\\")?,
                '\n' => f.write_str("\\n")?,
                '\r' => f.write_str("\\r")?,
                '\t' => f.write_str("\\t")?,
                c if c == quote => {
                    f.write_char('\\')?;
                    f.write_char(c)?;
                }
                c if c.is_control() => {
                    let code = u32::from(c);
                    if code <= 0xFF {
                        write!(f, "\\x{code:02x}")?;
                    } else if code <= 0xFFFF {
                        write!(f, "\\u{code:04x}")?;
                    } else {
                        write!(f, "\\U{code:08x}")?;
                    }
                }
                c => f.write_char(c)?,
            }
        }
        f.write_char(quote)
    }
}

impl Repr for String {
    fn fmt_repr(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.as_str().fmt_repr(f)
    }
}

#[derive(PartialEq, Eq, Clone, Debug, Display, From)]
pub enum Value {
    #[display(fmt = "{_0}")]
    Integer(i64),
    #[display(fmt = "{_0}")]
    Text(String),
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl Repr for Value {
    fn fmt_repr(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(i) => i.fmt_repr(f),
            Self::Text(s) => s.fmt_repr(f),
        }
    }
}

/// Builds a `Vec<Value>` from `literal => Integer` / `literal => Text` pairs.
#[macro_export]
macro_rules! values {
    (@buf [$($out:expr),*]) => {
        vec![$($out),*]
    };
    (@buf [$($out:expr),*] $x:expr => Integer $(, $($rest:tt)*)?) => {
        $crate::values!(@buf [$($out,)* $crate::value::Value::Integer($x)] $($($rest)*)?)
    };
    (@buf [$($out:expr),*] $x:expr => Text $(, $($rest:tt)*)?) => {
        $crate::values!(@buf [$($out,)* $crate::value::Value::Text(::std::string::ToString::to_string($x))] $($($rest)*)?)
    };
    ($($t:tt)*) => {
        $crate::values!(@buf [] $($t)*)
    };
}

#[must_use]
pub fn concatenate(lhs: String, rhs: &str) -> String {
    let mut ret = lhs;
    ret.reserve_exact(rhs.len());
    ret += rhs;
    ret
}
