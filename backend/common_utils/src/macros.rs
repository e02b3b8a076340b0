mod id_type {
    /// Defines an ID type.
    #[macro_export]
    macro_rules! id_type {
        ($type:ident, $doc:literal) => {
            #[doc = $doc]
            #[derive(
                Clone, Hash, PartialEq, Eq, serde::Serialize, serde::Deserialize, utoipa::ToSchema,
            )]
            #[schema(value_type = String)]
            pub struct $type($crate::id_type::ReferenceId);
        };
    }

    /// Defines an ID type backed by a UUID.
    #[macro_export]
    macro_rules! uuid_id_type {
        ($type:ident, $doc:literal) => {
            #[doc = $doc]
            #[derive(
                Clone,
                Copy,
                Debug,
                Hash,
                PartialEq,
                Eq,
                PartialOrd,
                Ord,
                serde::Serialize,
                serde::Deserialize,
                utoipa::ToSchema,
            )]
            #[schema(value_type = String)]
            #[serde(transparent)]
            pub struct $type(uuid::Uuid);

            impl $type {
                /// Wrap an existing UUID.
                pub const fn new(id: uuid::Uuid) -> Self {
                    Self(id)
                }

                /// Get the underlying UUID.
                pub const fn get_uuid(&self) -> uuid::Uuid {
                    self.0
                }
            }

            impl From<uuid::Uuid> for $type {
                fn from(id: uuid::Uuid) -> Self {
                    Self(id)
                }
            }

            impl core::fmt::Display for $type {
                fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                    core::fmt::Display::fmt(&self.0, f)
                }
            }
        };
        ($type:ident, $doc:literal, $field_name:literal) => {
            $crate::uuid_id_type!($type, $doc);

            impl core::str::FromStr for $type {
                type Err = error_stack::Report<$crate::errors::ValidationError>;

                fn from_str(s: &str) -> Result<Self, Self::Err> {
                    use error_stack::ResultExt;

                    uuid::Uuid::parse_str(s.trim())
                        .map(Self)
                        .change_context($crate::errors::ValidationError::IncorrectValueProvided {
                            field_name: $field_name,
                        })
                }
            }
        };
    }

    /// Implements common methods on the specified ID type.
    #[macro_export]
    macro_rules! impl_id_type_methods {
        ($type:ty, $field_name:literal) => {
            impl $type {
                /// Get the string representation of the ID type.
                pub fn get_string_repr(&self) -> &str {
                    &self.0 .0
                }
            }
        };
    }

    /// Implements the `Debug` trait on the specified ID type.
    #[macro_export]
    macro_rules! impl_debug_id_type {
        ($type:ty) => {
            impl core::fmt::Debug for $type {
                fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                    f.debug_tuple(stringify!($type))
                        .field(&self.0 .0)
                        .finish()
                }
            }
        };
    }

    /// Implements the `TryFrom<Cow<'static, str>>` trait on the specified ID type.
    #[macro_export]
    macro_rules! impl_try_from_cow_str_id_type {
        ($type:ty, $field_name:literal) => {
            impl TryFrom<std::borrow::Cow<'static, str>> for $type {
                type Error = error_stack::Report<$crate::errors::ValidationError>;

                fn try_from(value: std::borrow::Cow<'static, str>) -> Result<Self, Self::Error> {
                    use error_stack::ResultExt;

                    let reference_id = $crate::id_type::ReferenceId::from(value).change_context(
                        $crate::errors::ValidationError::IncorrectValueProvided {
                            field_name: $field_name,
                        },
                    )?;

                    Ok(Self(reference_id))
                }
            }
        };
    }
}
