//! Gas catalog: which gases exist and where their series come from
//!
//! The catalog is an ordered registry of [`GasInfo`] entries. Gases with a
//! public flask feed carry a URL; the rest carry embedded sample series so
//! the consumer always has something to plot. The built-in entries can be
//! replaced wholesale from a TOML file, keeping sample data injectable
//! configuration rather than literals buried in view code.
//!
//! - [`catalog`] - The registry with lookup and file loading
//! - [`defaults`] - Built-in entries for the six canonical gases

pub mod catalog;
pub mod defaults;

#[cfg(test)]
pub mod tests;

pub use catalog::GasCatalog;
