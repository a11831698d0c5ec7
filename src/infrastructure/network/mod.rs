pub mod http;
pub mod mymemory;
pub mod tatoeba;
