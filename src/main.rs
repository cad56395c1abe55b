//! Bili Downloader - CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use bili_downloader::{
    api::BiliApi,
    cli::Args,
    download::{download_video, BatchOptions, Remuxer},
    error::{exit_codes, Error, Result},
    output::{print_banner, print_batch_summary, print_config_summary, print_error},
};

#[tokio::main]
async fn main() -> ExitCode {
    // Parse CLI arguments
    let args = Args::parse();

    // Set up logging
    let log_level = if args.debug {
        "debug"
    } else if args.quiet {
        "warn"
    } else {
        "info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt().with_env_filter(filter).with_target(false).init();

    match run(&args).await {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(e) => {
            print_error(&format!("{}", e));
            exit_code_for(&e)
        }
    }
}

fn exit_code_for(error: &Error) -> ExitCode {
    let code = match error {
        Error::Config(_)
        | Error::ConfigValidation { .. }
        | Error::MissingConfig(_)
        | Error::Json(_) => exit_codes::CONFIG_ERROR,
        Error::Api(_) | Error::Network(_) | Error::Http(_) | Error::Data(_) => {
            exit_codes::API_ERROR
        }
        Error::Io(_) | Error::InvalidFilename(_) | Error::FFmpeg(_) | Error::FFmpegNotFound => {
            exit_codes::DOWNLOAD_ERROR
        }
        Error::PartsFailed(_) => exit_codes::SOME_PARTS_FAILED,
    };
    ExitCode::from(code as u8)
}

async fn run(args: &Args) -> Result<()> {
    if !args.quiet {
        print_banner();
    }

    // Resolve inputs before touching the network
    let id = args.video_id()?;
    let request = args.stream_request()?;
    let session = args.resolve_session()?;

    if !args.quiet {
        print_config_summary(
            &id.to_string(),
            request.qn,
            &request.fnval.to_string(),
            &args.path.display().to_string(),
        );
    }

    // The pipeline gets the resolved cookie as a value; nothing below this
    // point reads credential files
    let api = BiliApi::new(session.cookie, &session.user_agent)?;
    let remuxer = Remuxer::new(session.ffmpeg);

    let options = BatchOptions {
        id,
        request,
        dest_dir: args.path.clone(),
        all_parts: args.all,
        fail_fast: !args.keep_going,
        jobs: args.jobs,
        show_progress: !args.quiet,
    };

    let report = download_video(&api, &remuxer, &options).await?;
    print_batch_summary(&report);

    if report.has_failures() {
        if args.keep_going {
            return Err(Error::PartsFailed(report.failed()));
        }
        if let Some(error) = report.into_first_error() {
            return Err(error);
        }
    }

    Ok(())
}
