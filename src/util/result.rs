use std::error::Error;

pub(crate) trait ResultExtension<T, E: Error> {
    /// Unwraps an accessor's result for the panicking variants of the union API, such as
    /// `UnionN::value`. Unlike [`Result::unwrap`], the panic message is the error's own
    /// [`Display`](std::fmt::Display) text (e.g. "attempted to access an empty value"), rather
    /// than its [`Debug`] form.
    ///
    /// # Panics
    /// Panics if the [`Result`] is an [`Err`].
    fn throw(self) -> T;
}

impl<T, E: Error> ResultExtension<T, E> for Result<T, E> {
    fn throw(self) -> T {
        match self {
            Ok(value) => value,
            Err(error) => panic!("{error}"),
        }
    }
}
