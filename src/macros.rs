/// Creates an ascending sort token for a field.
///
/// # Examples
///
/// ```
/// use relsort::asc;
///
/// assert_eq!("CreatedAt", asc!("CreatedAt"));
/// ```
#[macro_export]
macro_rules! asc {
    ( $x:expr ) => {
        ::std::string::String::from($x)
    };
}

/// Creates a descending sort token for a field.
///
/// # Examples
///
/// ```
/// use relsort::desc;
///
/// assert_eq!("-Id", desc!("Id"));
/// ```
#[macro_export]
macro_rules! desc {
    ( $x:expr ) => {
        ::std::format!("-{}", $x)
    };
}
