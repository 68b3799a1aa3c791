use std::io::Write;

pub use log::LevelFilter;

/// Initializes env_logger, e.g. to see why a version string was only partially parsed.
///
/// The format is:
/// `<level>  /path/to/file:<line_number>  <time>  <log_message>`
///
/// Does nothing if a logger is already installed.
pub fn init_logging(log_level: LevelFilter) {
    let _ = env_logger::Builder::new()
        .filter_level(log_level)
        .format(|buf, record| {
            let location =
                format!("{}:{}", record.file().unwrap_or("unknown"), record.line().unwrap_or(0));
            let time_format = time::macros::format_description!("[hour]:[minute]:[second]");
            let now = time::OffsetDateTime::now_local()
                .unwrap_or_else(|_| time::OffsetDateTime::now_utc());
            let formatted_time = now.format(time_format).map_err(std::io::Error::other)?;
            writeln!(buf, "{:7}{:45} {formatted_time} {}", record.level(), location, record.args())
        })
        .try_init();
}
