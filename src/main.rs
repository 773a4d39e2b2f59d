use chrono::Local;
use clap::Parser;
use coralscrape::{cli::Cli, info_time, process, Result};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();
    if args.quit {
        args.print_inputs();
        return Ok(());
    }

    let start_time = Local::now();
    process::run(args.into_config()).await?;
    info_time!(start_time, "Full program time:");

    Ok(())
}
