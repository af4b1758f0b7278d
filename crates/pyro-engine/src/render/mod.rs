mod surface;

pub use surface::{NullSurface, Surface};
