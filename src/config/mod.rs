//! Creation requests for registry entries and pools.
//!
//! Each config is a plain value with a `validate()` method; the engine
//! calls it before touching any state.

mod pool;
mod registry;

pub use pool::PoolConfig;
pub use registry::RegistryConfig;
