//! Macros for ergonomic query construction.

/// Build a [`Parameters`](crate::context::Parameters) map from literal
/// name/value pairs. Each name maps to one or more accepted values.
///
/// # Example
///
/// ```
/// use statusflow::params;
///
/// let params = params! {
///     "Finalidade" => ["2"],
///     "Orgao" => ["1", "2"],
/// };
///
/// assert_eq!(params.len(), 2);
/// assert_eq!(params.get("Orgao"), Some(&["1".to_string(), "2".to_string()][..]));
/// ```
#[macro_export]
macro_rules! params {
    () => {
        $crate::context::Parameters::new()
    };
    ($($name:expr => [$($value:expr),* $(,)?]),+ $(,)?) => {{
        let mut params = $crate::context::Parameters::new();
        $(
            params.insert($name, [$($value.to_string()),*]);
        )+
        params
    }};
}
