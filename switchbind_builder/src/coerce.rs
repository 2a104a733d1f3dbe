use std::any::Any;
use std::ffi::OsString;
use std::fmt::Display;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr, SocketAddrV4, SocketAddrV6};
use std::num::{
    NonZeroI128, NonZeroI16, NonZeroI32, NonZeroI64, NonZeroI8, NonZeroIsize, NonZeroU128,
    NonZeroU16, NonZeroU32, NonZeroU64, NonZeroU8, NonZeroUsize,
};
use std::path::PathBuf;
use std::rc::Rc;
use std::str::FromStr;
use std::sync::Arc;

use crate::api::InvalidCoercion;

/// How a type is produced from a single token.
///
/// The variants are listed in order of precedence: a type declares the first one that applies to it.
/// Structured types get the strictest path, free-form types may be constructed from any text, and `String` takes the token verbatim.
pub enum Strategy<T> {
    /// Select a member by its exact (case-sensitive) name.
    Enumeration {
        /// Every member name, for error reporting.
        members: &'static [&'static str],
        /// Find the member named by the token.
        select: fn(&str) -> Option<T>,
    },
    /// A strict conversion which may reject the token, explaining why.
    Parse(fn(&str) -> Result<T, String>),
    /// An infallible conversion from the owned token.
    Construct(fn(String) -> T),
    /// The token itself; only applicable to `String`.
    Verbatim,
    /// No conversion from text exists.
    Unsupported,
}

impl<T> Strategy<T>
where
    T: FromStr,
    <T as FromStr>::Err: Display,
{
    /// Parse via [`std::str::FromStr`], reporting the parse error's message.
    pub fn parsed() -> Self {
        Strategy::Parse(|token: &str| T::from_str(token).map_err(|error| error.to_string()))
    }
}

impl<T> Strategy<T>
where
    T: From<String>,
{
    /// Construct via [`From<String>`].
    pub fn constructed() -> Self {
        Strategy::Construct(T::from)
    }
}

/// Behaviour to produce a value of `Self` from a single token.
///
/// Implement via [`coerce!`](crate::coerce!) for `FromStr` or `From<String>` types, or derive `Enumeration` for unit-only enums.
pub trait Coerce: Sized + 'static {
    /// The strategy used to convert tokens into `Self`.
    fn strategy() -> Strategy<Self>;
}

/// Coerce one token into `T`.
///
/// ### Example
/// ```
/// # use switchbind_builder as switchbind;
/// use switchbind::{coerce, InvalidCoercion};
///
/// assert_eq!(coerce::<u32>("42").unwrap(), 42);
/// assert_eq!(coerce::<String>("42").unwrap(), "42");
/// assert!(matches!(
///     coerce::<u32>("abc"),
///     Err(InvalidCoercion::ValueConversion { .. })
/// ));
/// ```
pub fn coerce<T: Coerce>(token: &str) -> Result<T, InvalidCoercion> {
    let type_name = std::any::type_name::<T>();

    match T::strategy() {
        Strategy::Enumeration { members, select } => {
            select(token).ok_or_else(|| InvalidCoercion::InvalidEnumValue {
                token: token.to_string(),
                type_name,
                members,
            })
        }
        Strategy::Parse(parse) => parse(token).map_err(|message| InvalidCoercion::ValueConversion {
            token: token.to_string(),
            type_name,
            message,
        }),
        Strategy::Construct(construct) => Ok(construct(token.to_string())),
        Strategy::Verbatim => {
            let verbatim: Box<dyn Any> = Box::new(token.to_string());
            verbatim
                .downcast::<T>()
                .map(|value| *value)
                .map_err(|_| InvalidCoercion::UnsupportedType { type_name })
        }
        Strategy::Unsupported => Err(InvalidCoercion::UnsupportedType { type_name }),
    }
}

/// Implement [`Coerce`] for the listed types.
///
/// * `parse: T, ..` uses [`Strategy::parsed`] (requires `FromStr` with a `Display` error).
/// * `construct: T, ..` uses [`Strategy::constructed`] (requires `From<String>`).
///
/// ### Example
/// ```
/// # use switchbind_builder as switchbind;
/// use switchbind::coerce;
///
/// #[derive(Debug, PartialEq)]
/// struct Label(String);
///
/// impl From<String> for Label {
///     fn from(value: String) -> Self {
///         Label(value)
///     }
/// }
///
/// switchbind::coerce!(construct: Label);
///
/// assert_eq!(coerce::<Label>("x").unwrap(), Label("x".to_string()));
/// ```
#[macro_export]
macro_rules! coerce {
    (parse: $($t:ty),+ $(,)?) => {
        $(
            impl $crate::Coerce for $t {
                fn strategy() -> $crate::Strategy<Self> {
                    $crate::Strategy::parsed()
                }
            }
        )+
    };
    (construct: $($t:ty),+ $(,)?) => {
        $(
            impl $crate::Coerce for $t {
                fn strategy() -> $crate::Strategy<Self> {
                    $crate::Strategy::constructed()
                }
            }
        )+
    };
}

coerce!(
    parse: i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    f32,
    f64,
    bool,
    char,
    NonZeroI8,
    NonZeroI16,
    NonZeroI32,
    NonZeroI64,
    NonZeroI128,
    NonZeroIsize,
    NonZeroU8,
    NonZeroU16,
    NonZeroU32,
    NonZeroU64,
    NonZeroU128,
    NonZeroUsize,
    IpAddr,
    Ipv4Addr,
    Ipv6Addr,
    SocketAddr,
    SocketAddrV4,
    SocketAddrV6,
);

coerce!(construct: PathBuf, OsString, Box<str>, Rc<str>, Arc<str>);

impl Coerce for String {
    fn strategy() -> Strategy<Self> {
        Strategy::Verbatim
    }
}
