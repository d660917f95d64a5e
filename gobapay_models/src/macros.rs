/// A required form field: any string that is non-empty after trimming.
/// The stored value keeps its original whitespace.
macro_rules! required_trimmed {
    ($ident:ident) => {
        #[::nutype::nutype(
            validate(predicate = |value| !value.trim().is_empty()),
            derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Serialize, Deserialize)
        )]
        pub struct $ident(String);
    };
}

pub(crate) use required_trimmed;
