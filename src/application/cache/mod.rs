//! Cache-aside storage for data derived from the external provider.
//!
//! Everything stored here is disposable: deleting an entry only forces the
//! next reader to fetch or rebuild it. Store failures are logged and treated
//! as misses so a broken cache never breaks a request.

mod content;
mod entry;
pub mod keys;
mod list;
mod lock;
mod single_flight;

pub use content::ContentCache;
pub use entry::CacheEntry;
pub use list::ListCache;
pub use single_flight::{FlightGuard, SingleFlight};
