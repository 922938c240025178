mod limited;
mod map;
mod traits;
mod unbounded;

pub use limited::LimitedCache;
pub use map::CacheMap;
pub use traits::PointCache;
pub use unbounded::UnboundedCache;
