/// Builds an [`Items`](crate::Items) matcher from literal values.
///
/// ```ignore
/// items![1, 2, "three"]
/// ```
#[macro_export]
macro_rules! items {
    ($($value:expr),* $(,)?) => {{
        let values: ::std::vec::Vec<$crate::Value> =
            ::std::vec![$($crate::Value::from($value)),*];
        $crate::items(values)
    }};
}

/// Builds an [`ItemIn`](crate::ItemIn) matcher from literal values.
#[macro_export]
macro_rules! item_in {
    ($($value:expr),* $(,)?) => {{
        let values: ::std::vec::Vec<$crate::Value> =
            ::std::vec![$($crate::Value::from($value)),*];
        $crate::item_in(values)
    }};
}

/// Builds a [`Sequence`](crate::Sequence) matcher from literal values.
///
/// ```ignore
/// sequence![1, 2, 3]
/// ```
#[macro_export]
macro_rules! sequence {
    ($($value:expr),* $(,)?) => {{
        let values: ::std::vec::Vec<$crate::Value> =
            ::std::vec![$($crate::Value::from($value)),*];
        $crate::sequence(values)
    }};
}
