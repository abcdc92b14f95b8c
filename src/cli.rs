use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "extract-glb")]
#[command(version)]
#[command(about = "Extract files from DemonStar GLB2.0 archives", long_about = None)]
#[command(after_help = "Examples:\n  \
  extract-glb DEMONSTAR.GLB          extract into the current directory\n  \
  extract-glb -d out DEMONSTAR.GLB   extract into ./out\n  \
  extract-glb -l DEMONSTAR.GLB       list entries without extracting")]
pub struct Cli {
    /// GLB archive path
    #[arg(value_name = "infile.glb")]
    pub file: String,

    /// List entries only
    #[arg(short = 'l')]
    pub list: bool,

    /// Extract files into exdir
    #[arg(short = 'd', value_name = "DIR")]
    pub extract_dir: Option<String>,

    /// Quiet mode (-qq => quieter)
    #[arg(short = 'q', action = clap::ArgAction::Count)]
    pub quiet: u8,
}

impl Cli {
    /// Suppress per-entry progress lines
    pub fn is_quiet(&self) -> bool {
        self.quiet > 0
    }

    /// Also suppress the listing summary
    pub fn is_very_quiet(&self) -> bool {
        self.quiet > 1
    }
}
