// src/macros.rs
#[macro_export]
macro_rules! s {
    // s!() → String::new(), s!(x) → String::from(x)
    () => {
        ::std::string::String::new()
    };
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

#[macro_export]
macro_rules! join {
    // Concatenate &str pieces into a fresh String.
    ($first:expr $(, $rest:expr)+ $(,)?) => {{
        let mut s = ::std::string::String::from($first);
        $(
            s.push_str($rest);
        )+
        s
    }};
}

/// `Some(trimmed)` for a non-blank optional string, `None` otherwise.
#[macro_export]
macro_rules! non_blank {
    ($opt:expr) => {
        $opt.as_deref().map(str::trim).filter(|v| !v.is_empty())
    };
}
