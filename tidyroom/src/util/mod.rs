/// Consistency checks on generated rooms, used in `debug_assert!()` blocks and tests.
pub mod assertions;

mod config;

#[doc(inline)]
pub use config::FallbackGrid;
#[doc(inline)]
pub use config::GeneratorConfig;
