/// Declares a trimmed string newtype validated by nutype.
macro_rules! nutype_string {
    ($ident:ident($($args:tt)*)) => {
        #[::nutype::nutype(
            sanitize(trim),
            $($args)*,
            derive(
                Debug,
                Clone,
                PartialEq,
                Eq,
                Deref,
                AsRef,
                Display,
                TryFrom,
                Serialize,
                Deserialize
            ),
        )]
        pub struct $ident(String);
    };
}

pub(crate) use nutype_string;
