pub mod f32;
pub mod io;
pub mod mask;
pub mod rgba;
pub mod traits;

pub use self::f32::ImageF32;
pub use self::mask::BinaryMask;
pub use self::rgba::PixelBuffer;
pub use self::traits::{ImageView, ImageViewMut, Rows};
