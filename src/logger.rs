use std::fs::File;
use std::io;
use std::path::Path;

use env_logger::Target;
use log::LevelFilter;

/// Initialize the logger with the specified level.
///
/// With `log_file` set, records go to that file instead of stderr so they do
/// not interleave with frames drawn on the terminal.
pub fn init_logger(level: LevelFilter, log_file: Option<&Path>) -> io::Result<()> {
    let mut builder = env_logger::Builder::from_default_env();
    builder.filter_level(level);
    if let Some(path) = log_file {
        builder.target(Target::Pipe(Box::new(File::create(path)?)));
    }
    builder.init();
    Ok(())
}
