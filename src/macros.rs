//! Macros for naming state and event ids.

/// Declare an enum whose variants are state ids.
///
/// Generates a `#[repr(u8)]` enum with `id()`, `name()`, an `ALL` list,
/// `From<Enum> for StateId` and `TryFrom<StateId> for Enum`.
///
/// # Example
///
/// ```
/// use autostate::core::StateId;
/// use autostate::state_ids;
///
/// state_ids! {
///     pub enum Light {
///         Red = 1,
///         Green = 2,
///         Yellow = 3,
///     }
/// }
///
/// assert_eq!(Light::Green.id(), StateId(2));
/// assert_eq!(Light::try_from(StateId(3)), Ok(Light::Yellow));
/// assert_eq!(Light::Red.name(), "Red");
/// ```
#[macro_export]
macro_rules! state_ids {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident = $value:literal
            ),* $(,)?
        }
    ) => {
        $crate::__id_enum! {
            $crate::core::StateId;
            $(#[$meta])*
            $vis enum $name {
                $( $(#[$variant_meta])* $variant = $value ),*
            }
        }
    };
}

/// Declare an enum whose variants are event ids.
///
/// Same shape as [`state_ids!`], producing conversions to and from
/// [`EventId`](crate::core::EventId).
///
/// ```
/// use autostate::core::EventId;
/// use autostate::event_ids;
///
/// event_ids! {
///     enum Button {
///         Press = 10,
///         Hold = 11,
///     }
/// }
///
/// assert_eq!(EventId::from(Button::Hold), EventId(11));
/// assert!(Button::try_from(EventId(12)).is_err());
/// ```
#[macro_export]
macro_rules! event_ids {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident = $value:literal
            ),* $(,)?
        }
    ) => {
        $crate::__id_enum! {
            $crate::core::EventId;
            $(#[$meta])*
            $vis enum $name {
                $( $(#[$variant_meta])* $variant = $value ),*
            }
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __id_enum {
    (
        $id:ty;
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident = $value:literal
            ),*
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
        #[repr(u8)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant = $value
            ),*
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$(Self::$variant),*];

            pub const fn id(self) -> $id {
                <$id>::new(self as u8)
            }

            pub fn name(&self) -> &'static str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }

        impl ::core::convert::From<$name> for $id {
            fn from(value: $name) -> Self {
                value.id()
            }
        }

        impl ::core::convert::TryFrom<$id> for $name {
            type Error = $id;

            fn try_from(id: $id) -> ::core::result::Result<Self, Self::Error> {
                match id.get() {
                    $($value => Ok(Self::$variant),)*
                    _ => Err(id),
                }
            }
        }
    };
}
