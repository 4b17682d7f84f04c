use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(about = "A reconciler for ingredient catalogs")]
#[structopt(rename_all = "kebab-case")]
pub struct Cli {
    #[structopt(flatten)]
    pub io_args: IoArgs,
    #[structopt(flatten)]
    pub preprocessing_options: PreprocessingOptions,
    #[structopt(flatten)]
    pub match_options: MatchOptions,
    #[structopt(long, help = "Explicit number of threads")]
    pub threads: Option<usize>,
}

#[derive(Debug, StructOpt)]
#[structopt(rename_all = "kebab-case")]
pub struct IoArgs {
    /// Check alias entries from this file...
    pub alias_file: String,
    /// ...against ingredient records in this file
    pub ingredient_file: String,
    #[structopt(long, short)]
    /// Save missing entries to this filepath (REQUIRED)
    pub output_file: String,
}

#[derive(Debug, StructOpt)]
#[structopt(rename_all = "kebab-case")]
pub struct PreprocessingOptions {
    #[structopt(long)]
    /// Do not convert unicode characters to ASCII equivalents
    pub retain_unicode: bool,
    #[structopt(skip)]
    pub case_sensitive: bool,
}

#[derive(Debug, StructOpt)]
pub struct MatchOptions {
    #[structopt(long = "max-edit-distance", short = "d")]
    #[structopt(default_value = "4")]
    /// The largest edit distance still accepted as a match
    pub max_edit_distance: usize,
}
