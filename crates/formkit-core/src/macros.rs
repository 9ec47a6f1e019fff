// field_map
/// Build a [`FieldMap`](crate::types::FieldMap) from `property => value`
/// pairs, converting each value with `Into`.
///
/// ```ignore
/// fn labels(&self) -> FieldMap<String> {
///     field_map! { "street" => "Street", "city" => "City" }
/// }
/// ```
#[macro_export]
macro_rules! field_map {
    () => {
        $crate::types::FieldMap::new()
    };
    ($($property:expr => $value:expr),+ $(,)?) => {{
        let mut map = $crate::types::FieldMap::new();
        $(
            map.insert($property, ::core::convert::Into::into($value));
        )+
        map
    }};
}
