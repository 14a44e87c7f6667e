use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "tex-resize",
    about = "Batch-resize game texture assets to fixed dimensions",
    long_about = "tex-resize normalizes the textures of a game asset directory to a single \
                  fixed footprint. Every file with an eligible extension is loaded, scaled \
                  to the exact target dimensions (aspect ratio is not preserved) and written \
                  back over the original file.",
    version = "0.1.0",
    after_help = "EXAMPLES:\n  \
    tex-resize resize ./assets/models/structures\n  \
    tex-resize resize ./assets/scenes -w 256 -H 256\n  \
    tex-resize resize ./assets/ui -e png\n  \
    tex-resize info wall_diffuse.png"
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(
        short = 'q',
        long,
        global = true,
        help = "Suppress progress and summary output"
    )]
    pub quiet: bool,

    #[arg(short = 'v', long, global = true, help = "Print per-file detail")]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(
        about = "Resize every eligible image in a directory in place",
        long_about = "Resize every eligible image at the top level of a directory in place. \
                      Originals are overwritten; JPEG files go through a lossy re-encode. \
                      The run stops at the first failure, leaving earlier files modified \
                      and later files untouched."
    )]
    Resize {
        #[arg(help = "Directory containing the textures to resize")]
        directory: PathBuf,

        #[arg(
            short = 'w',
            long,
            help = "Target width in pixels (default: 512)",
            long_help = "Exact target width in pixels. Every eligible image is scaled to \
                         this width regardless of its original size or aspect ratio."
        )]
        width: Option<u32>,

        #[arg(
            short = 'H',
            long,
            help = "Target height in pixels (default: 512)",
            long_help = "Exact target height in pixels. Every eligible image is scaled to \
                         this height regardless of its original size or aspect ratio."
        )]
        height: Option<u32>,

        #[arg(
            short = 'e',
            long = "ext",
            help = "Eligible file extension, repeatable (default: png, jpg)",
            long_help = "File extension to treat as eligible, without the leading dot. \
                         May be given multiple times. Matching is exact-case, so 'png' \
                         does not match 'TEXTURE.PNG'."
        )]
        extensions: Vec<String>,
    },

    #[command(about = "Display information about a single image")]
    Info {
        #[arg(help = "Image file path to analyze")]
        input: PathBuf,
    },
}
