use std::fmt::{Display, Formatter};
use crate::value::{repr, Repr, Value};

fn write_comma_separated_items(f: &mut Formatter<'_>, values: &[&dyn Repr]) -> std::fmt::Result {
    for value in values.iter().take(values.len().max(1) - 1) {
        write!(f, "{}", repr(*value))?;
        f.write_str(", ")?;
    }

    values.last().map_or(Ok(()), |last| write!(f, "{}", repr(*last)))
}

/// Growable, insertion-ordered sequence of mixed values.
#[derive(PartialEq, Eq, Clone, Debug, Default)]
pub struct List {
    items: Vec<Value>,
}

impl List {
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn append(&mut self, value: impl Into<Value>) {
        self.items.push(value.into());
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.items.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.items.iter()
    }
}

impl From<Vec<Value>> for List {
    fn from(items: Vec<Value>) -> Self {
        Self { items }
    }
}

impl<'a> IntoIterator for &'a List {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Display for List {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let items = self.items.iter().map(|x| x as &dyn Repr).collect::<Vec<_>>();
        f.write_str("[")?;
        write_comma_separated_items(f, &items)?;
        f.write_str("]")
    }
}

impl Repr for List {
    fn fmt_repr(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self}")
    }
}

/// Exposes the fields of a fixed-arity tuple for rendering.
pub trait TupleRepr {
    fn items(&self) -> Vec<&dyn Repr>;
}

impl TupleRepr for () {
    fn items(&self) -> Vec<&dyn Repr> {
        vec![]
    }
}

macro_rules! tuple_repr {
    ($($name:ident),+) => {
        impl<$($name: Repr),+> TupleRepr for ($($name,)+) {
            #[allow(non_snake_case)]
            fn items(&self) -> Vec<&dyn Repr> {
                let ($($name,)+) = self;
                vec![$($name as &dyn Repr),+]
            }
        }
    };
}

tuple_repr!(A);
tuple_repr!(A, B);
tuple_repr!(A, B, C);
tuple_repr!(A, B, C, D);
tuple_repr!(A, B, C, D, E);
tuple_repr!(A, B, C, D, E, F);
tuple_repr!(A, B, C, D, E, F, G);
tuple_repr!(A, B, C, D, E, F, G, H);

/// Renders a native tuple as `(a, b, ...)`. A single field keeps its trailing comma.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct DisplayTuple<T>(pub T);

impl<T: TupleRepr> DisplayTuple<T> {
    #[must_use]
    pub fn arity(&self) -> usize {
        self.0.items().len()
    }
}

impl<T: TupleRepr> Display for DisplayTuple<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let items = self.0.items();
        f.write_str("(")?;
        write_comma_separated_items(f, &items)?;
        if items.len() == 1 {
            f.write_str(",")?;
        }
        f.write_str(")")
    }
}

impl<T: TupleRepr> Repr for DisplayTuple<T> {
    fn fmt_repr(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self}")
    }
}
