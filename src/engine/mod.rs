//! Fancy-text engine
//!
//! - [`remap`]: Latin letters and digits into styled Unicode alphabets
//! - [`glitch`]: random combining marks stacked after each character
//! - [`Strategy`]: the twelve ways a result is assembled
//! - [`FancyGenerator`]: index-driven batch generation over a [`Catalog`](crate::symbols::Catalog)
//! - [`FancyPager`]: "load more" cursor on top of the generator

mod generator;
mod zalgo;
mod pager;
mod alphabet;
mod strategy;

pub use generator::{generate_batch, FancyGenerator};
pub use zalgo::{glitch, glitch_with_rng, MARKS_PER_CHAR};
pub use pager::FancyPager;
pub use alphabet::remap;
pub use strategy::{Parts, Strategy};
