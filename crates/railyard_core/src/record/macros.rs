/// Implement [`Record`](crate::record::Record) for a struct by listing its
/// injectable fields.
///
/// Must be invoked in the module that defines the struct so the private
/// fields are reachable.
///
/// # Example
/// ```ignore
/// #[derive(Debug, Default)]
/// pub struct ClassData { id: String, title_key: String }
///
/// define_record!(ClassData, "ClassData", {
///     id: String,
///     title_key: String,
/// });
/// ```
#[macro_export]
macro_rules! define_record {
    ($ty:ty, $kind:expr, { $($field:ident : $fty:ty),* $(,)? }) => {
        impl $crate::record::Record for $ty {
            const KIND: &'static str = $kind;

            fn fields() -> ::std::vec::Vec<$crate::record::FieldMeta> {
                ::std::vec![
                    $($crate::record::FieldMeta::of::<$fty>(::std::stringify!($field)),)*
                ]
            }

            #[allow(unused_variables)]
            fn inject_value(
                &mut self,
                field: &str,
                value: $crate::record::FieldValue,
            ) -> ::std::result::Result<(), $crate::record::SchemaMismatch> {
                match field {
                    $(::std::stringify!($field) => {
                        self.$field = value.downcast::<$fty>(
                            <Self as $crate::record::Record>::KIND,
                            field,
                        )?;
                        ::std::result::Result::Ok(())
                    })*
                    _ => ::std::result::Result::Err($crate::record::SchemaMismatch::UnknownField {
                        record: <Self as $crate::record::Record>::KIND,
                        field: field.to_string(),
                    }),
                }
            }
        }
    };
}
