// Values that can be bound to template variables

use std::collections::{BTreeMap, HashMap};

/// A bound value, classified by its shape
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Scalar(String),
    Sequence(Vec<String>),
    /// Entries keep the iteration order of the collection they were built from
    Mapping(Vec<(String, String)>),
}

impl Value {
    pub fn scalar(value: impl ToString) -> Self {
        Value::Scalar(value.to_string())
    }

    pub fn sequence<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: ToString,
    {
        Value::Sequence(items.into_iter().map(|item| item.to_string()).collect())
    }

    pub fn mapping<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: ToString,
        V: ToString,
    {
        Value::Mapping(
            entries
                .into_iter()
                .map(|(key, value)| (key.to_string(), value.to_string()))
                .collect(),
        )
    }

    /// True for composites with no elements; these contribute nothing to an expansion
    pub fn is_empty_composite(&self) -> bool {
        match self {
            Value::Scalar(_) => false,
            Value::Sequence(items) => items.is_empty(),
            Value::Mapping(entries) => entries.is_empty(),
        }
    }
}

macro_rules! scalar_from {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value::Scalar(value.to_string())
                }
            }
        )*
    };
}

scalar_from!(
    &str, String, &String, char, bool, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64,
    u128, usize, f32, f64,
);

impl<T: ToString> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::sequence(items)
    }
}

impl<T: ToString> From<&[T]> for Value {
    fn from(items: &[T]) -> Self {
        Value::Sequence(items.iter().map(T::to_string).collect())
    }
}

impl<T: ToString, const N: usize> From<[T; N]> for Value {
    fn from(items: [T; N]) -> Self {
        Value::sequence(items)
    }
}

impl<K: ToString, V: ToString, S> From<HashMap<K, V, S>> for Value {
    fn from(entries: HashMap<K, V, S>) -> Self {
        Value::mapping(entries)
    }
}

impl<K: ToString, V: ToString> From<BTreeMap<K, V>> for Value {
    fn from(entries: BTreeMap<K, V>) -> Self {
        Value::mapping(entries)
    }
}
