//! Implementaciones de `CityDataProvider`.

pub mod json_directory;

pub use json_directory::JsonDirectoryProvider;
