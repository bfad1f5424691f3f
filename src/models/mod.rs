mod asset;
mod media;
mod seed;

pub use asset::*;
pub use media::*;
pub use seed::*;
