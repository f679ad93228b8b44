// src/macros.rs
#[macro_export]
macro_rules! s {
    // String shorthand!

    // Zero-arg → String::new()
    () => {
        ::std::string::String::new()
    };
    // Any single expression — works for literals, consts, or vars
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

#[macro_export]
macro_rules! cells {
    // Row shorthand: each value goes through `Into<Cell>`.
    ($($val:expr),* $(,)?) => {
        ::std::vec![$($crate::data::Cell::from($val)),*]
    };
}
