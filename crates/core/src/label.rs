//! Enums persisted as fixed TEXT labels.
//!
//! The labels are the exact strings stored in the `CHECK`-constrained
//! columns and exchanged with the frontend, so they stay in Portuguese.

macro_rules! define_label_enum {
    (
        $(#[$meta:meta])*
        $name:ident($what:literal) {
            $( $(#[$vmeta:meta])* $variant:ident = $label:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// The label stored in the database.
            pub fn as_str(self) -> &'static str {
                match self {
                    $( $name::$variant => $label ),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::error::CoreError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $( $label => Ok($name::$variant), )+
                    other => Err($crate::error::CoreError::Validation(format!(
                        "unknown {} '{other}', expected one of: {}",
                        $what,
                        [$($label),+].join(", ")
                    ))),
                }
            }
        }
    };
}

pub(crate) use define_label_enum;
