pub use crate::traceable;

/// Declares an error enum whose variants carry their cause as `anyhow::Error`
/// and a `tracing::Level`.
///
/// For every variant a constructor of the same name is generated, taking the
/// declared fields followed by the cause, so the variant path can be passed
/// straight to `map_err` when it has no fields.
#[macro_export]
macro_rules! traceable {
    (
        $enum_name:ident {
            $(
                $(#[doc = $doc:expr])*
                #[error($msg:expr)]
                $variant:ident $({ $($field:ident: $field_type:ty),* $(,)? })? => $level:expr
                $(,)?
            )*
        }
    ) => {
        #[allow(dead_code)]
        #[derive(Debug, thiserror::Error)]
        pub enum $enum_name {
            $(
                $(#[doc = $doc])*
                #[error($msg)]
                $variant {
                    $($($field: $field_type,)*)?
                    #[source]
                    source: anyhow::Error
                },
            )*
        }

        impl $enum_name {
            #[allow(dead_code)]
            pub fn level(&self) -> tracing::Level {
                match self {
                    $(Self::$variant { .. } => $level,)*
                }
            }

            #[allow(dead_code)]
            pub fn name(&self) -> &'static str {
                match self {
                    $(Self::$variant { .. } => stringify!($variant),)*
                }
            }

            $(
                $crate::traceable!(@constructor $variant $($($field: $field_type),*)?);
            )*
        }
    };

    (@constructor $variant:ident $($field:ident: $field_type:ty),*) => {
        #[allow(non_snake_case)]
        pub fn $variant($($field: impl Into<$field_type>,)* source: impl Into<anyhow::Error>) -> Self {
            Self::$variant {
                $($field: $field.into(),)*
                source: source.into()
            }
        }
    };
}
