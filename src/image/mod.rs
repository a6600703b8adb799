pub mod io;
pub mod view;

pub use self::io::{load_mask_image, save_overlay_bmp, save_tile_png, write_json_file, MaskImage};
pub use self::view::{PixelLayout, PixelView};
