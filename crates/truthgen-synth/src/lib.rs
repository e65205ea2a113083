pub mod error;
pub mod extract;
pub mod normalize;
pub mod seed;
pub mod synth;

pub use error::SynthError;
pub use extract::extract_username;
pub use normalize::{normalize, IdentifierKind};
pub use seed::stable_seed;
pub use synth::Synthesizer;
