// src/macros.rs
#[macro_export]
macro_rules! s {
    // String shorthand!
    () => {
        ::std::string::String::new()
    };
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

/// Lock a status/notice mutex, recovering the value if a previous holder panicked.
#[macro_export]
macro_rules! lock {
    ($m:expr) => {
        match $m.lock() {
            Ok(g) => g,
            Err(poisoned) => poisoned.into_inner(),
        }
    };
}
