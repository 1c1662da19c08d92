/// Declares a string-backed identifier enum.
///
/// Each variant carries a serde name, a display name and any number of
/// aliases. A `Custom(String)` variant is always appended so identifiers
/// coming from external sources (cached analyses, catalogs) round-trip.
#[macro_export]
macro_rules! define_id_enum {
    (
        $(#[$enum_meta:meta])*
        $enum_name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $serde_name:literal : $display_name:literal
                $( | $alias:literal )*
            ),* $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub enum $enum_name {
            $(
                $(#[$variant_meta])*
                $variant,
            )*
            Custom(String),
        }

        impl serde::Serialize for $enum_name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.serialize_str(self.serde_name())
            }
        }

        impl<'de> serde::Deserialize<'de> for $enum_name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let s = String::deserialize(deserializer)?;
                Ok(Self::from_name(&s).unwrap_or(Self::Custom(s)))
            }
        }

        impl $enum_name {
            pub fn name(&self) -> String {
                match self {
                    $(
                        Self::$variant => $display_name.to_string(),
                    )*
                    Self::Custom(name) => name.clone(),
                }
            }

            pub fn serde_name(&self) -> &str {
                match self {
                    $(
                        Self::$variant => $serde_name,
                    )*
                    Self::Custom(name) => name.as_str(),
                }
            }

            pub fn aliases(&self) -> &'static [&'static str] {
                match self {
                    $(
                        Self::$variant => &[$($alias),*],
                    )*
                    Self::Custom(_) => &[],
                }
            }

            /// Case-insensitive lookup by display name, serde name or alias.
            pub fn from_name(name: &str) -> Option<Self> {
                Self::all_variants()
                    .iter()
                    .find(|id| {
                        id.name().eq_ignore_ascii_case(name)
                            || id.serde_name().eq_ignore_ascii_case(name)
                            || id.aliases().iter().any(|a| a.eq_ignore_ascii_case(name))
                    })
                    .cloned()
            }

            pub fn all_variants() -> &'static [Self] {
                &[
                    $(
                        Self::$variant,
                    )*
                ]
            }
        }

        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.name())
            }
        }
    };
}
