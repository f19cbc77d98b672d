//! Repository implementations composed from a store and a cache.

mod cached_url_repository;

pub use cached_url_repository::CachedUrlRepository;
