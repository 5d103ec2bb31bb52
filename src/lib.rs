//! Fancy Forge - deterministic fancy-text generation
//!
//! Turns a piece of text into an endless, index-addressable stream of stylized
//! renderings: Unicode alphabet remapping, glitch marks, decorators and templates.

pub mod engine;
pub mod error;
pub mod symbols;
pub mod types;

// Re-export commonly used types
pub use error::{ForgeError, Result};
pub use types::{Category, FancyText, GenerationConfig, OutputFormat, StyleDefinition};

// Re-export main functionality
pub use engine::{generate_batch, glitch, remap, FancyGenerator, FancyPager, Strategy};
pub use symbols::{Catalog, TemplateCategory};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the library
pub fn init() -> Result<()> {
    // Load .env file if it exists
    dotenv::dotenv().ok();
    Ok(())
}
