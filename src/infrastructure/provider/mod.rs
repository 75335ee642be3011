mod esa;

pub use esa::{DEFAULT_API_BASE, EsaContentProvider};
