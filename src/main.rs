use clap::Parser;
use tex_resize::batch::batch_resize_images;
use tex_resize::cli::{Args, Commands};
use tex_resize::error::Result;
use tex_resize::info::print_image_info;
use tex_resize::logger;
use tex_resize::processing::ResizeOptions;

fn main() -> Result<()> {
    let args = Args::parse();
    logger::init(args.quiet, args.verbose);

    match args.command {
        Commands::Resize {
            directory,
            width,
            height,
            extensions,
        } => {
            let options = ResizeOptions::new(width, height, extensions)?;
            batch_resize_images(directory, options)?;
        }
        Commands::Info { input } => {
            print_image_info(&input)?;
        }
    }

    Ok(())
}
