pub mod draft;
pub mod job;
pub mod palette;
pub mod reference;
pub mod staff;

pub use draft::*;
pub use job::*;
pub use palette::*;
pub use reference::*;
pub use staff::*;
