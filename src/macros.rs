/// Timestamped console line, in the spirit of tracing's `info!`.
/// The form taking a start time also appends the seconds elapsed since then.
/// Callers need `chrono::Local` in scope.
#[macro_export]
macro_rules! info_time {
    ($strfm:literal $(,)? $($arg:expr),*) => {{
        let now = Local::now();
        println!("[{}] {}", now.format("%H:%M:%S%.3f"), format!($strfm, $($arg),*));
    }};
    ($start:expr, $strfm:literal $(,)? $($arg:expr),*) => {{
        let now = Local::now();
        let elapsed = (now - $start).num_milliseconds() as f64 / 1000.0;
        println!(
            "[{}] {} ({elapsed:.3} sec)",
            now.format("%H:%M:%S%.3f"),
            format!($strfm, $($arg),*)
        );
    }};
}

/// Like `info_time!` but tagged as a warning and printed to stderr.
#[macro_export]
macro_rules! warn_time {
    ($strfm:literal $(,)? $($arg:expr),*) => {{
        let now = Local::now();
        eprintln!("[{}] WARNING: {}", now.format("%H:%M:%S%.3f"), format!($strfm, $($arg),*));
    }};
}
