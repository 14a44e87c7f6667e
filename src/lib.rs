pub mod batch;
pub mod cli;
pub mod constants;
pub mod error;
pub mod info;
pub mod logger;
pub mod processing;

pub use batch::{
    batch_resize_images, collect_eligible_files, is_eligible_file, resize_all, BatchSummary,
};
pub use error::{ResizeError, Result};
pub use info::print_image_info;
pub use processing::{
    load_image, resize_in_place, save_format_for, save_image, scale_image, ResizeOptions,
};
