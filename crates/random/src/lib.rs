//! Seeded randomness for easel sketches.
//!
//! [`Random`] is a stack of named, independently seeded contexts. Every
//! higher level operation (ints, choices, shuffles, colors, noise seeds,
//! words) is defined in terms of [`Random::next`] on the active context, so
//! a sketch that starts from a fixed root seed replays identically.
//!
//! # Example
//! ```
//! use random::Random;
//!
//! let mut rng = Random::new("sketch", Some("moss"));
//! let radius = rng.float(5.0, 20.0);
//!
//! // Child contexts derive their seed from the parent stream.
//! rng.push("palette", None);
//! let hue = rng.float(0.0, 360.0);
//! rng.pop();
//! # let _ = (radius, hue);
//! ```

mod curl;
mod error;
mod random;
mod seed;
mod simplex;
mod words;

pub use curl::{curl, CurlField, CurlOptions};
pub use error::RandomError;
pub use random::{ContextGuard, Fuzzy, Random, RandomContext};
pub use seed::{entropy_seed, stream_from_seed};
pub use simplex::{Noise2, Noise3, Noise4, NoiseOptions, Simplex2, Simplex3, Simplex4};
pub use words::{PartOfSpeech, TaggedWordList, WordSource};
