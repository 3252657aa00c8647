mod interrupt;
mod logging;
mod render;
mod runner;

use std::process::ExitCode;
use std::thread;
use std::time::Duration;

use clap::Parser;
use scout_client::{ClientHandle, ClientSettings};
use scout_core::{update, CrawlRequest, Msg, SessionState, SessionStatus, DEPTH_DEFAULT};

use crate::interrupt::InterruptWatch;
use crate::logging::LogDestination;
use crate::render::Renderer;
use crate::runner::EffectRunner;

/// Stream keyword-crawl results from a scout backend.
#[derive(Debug, Parser)]
#[command(name = "scout")]
struct Args {
    /// URL the crawl starts from.
    target: String,

    /// Keywords to scan for (at least one).
    #[arg(required = true)]
    keywords: Vec<String>,

    /// Crawl depth bound, 1 to 5.
    #[arg(long, default_value_t = DEPTH_DEFAULT)]
    depth: u8,

    /// Base URL of the crawl backend.
    #[arg(long, default_value = "http://localhost:8000")]
    api: String,

    /// Also write logs to ./scout.log.
    #[arg(long)]
    log_file: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    logging::initialize(if args.log_file {
        LogDestination::Both
    } else {
        LogDestination::Terminal
    });

    let request = CrawlRequest::new(args.target, args.keywords, args.depth);
    if let Err(err) = request.validate() {
        eprintln!("invalid request: {err}");
        return ExitCode::from(2);
    }

    let settings = ClientSettings {
        api_base: args.api,
        ..ClientSettings::default()
    };
    let runner = EffectRunner::new(ClientHandle::new(settings));
    let mut renderer = Renderer::new();
    let interrupt = InterruptWatch::spawn();

    let mut state = SessionState::new();
    let (next, effects) = update(state, Msg::StartSubmitted { request });
    state = next;
    runner.run_effects(effects);

    // Single update loop: every inbound event is applied serially here, and
    // rendering happens only when the projection actually changed.
    loop {
        if interrupt.triggered() {
            // Ctrl-C is the stop gesture: sever the transport through the
            // normal stop path, then exit with the session as it stands.
            let (next, effects) = update(state, Msg::StopClicked);
            state = next;
            runner.run_effects(effects);
            // Let the close command reach the transport before exit.
            thread::sleep(Duration::from_millis(50));
            renderer.summary(&state.view());
            return ExitCode::from(130);
        }

        let mut applied = false;
        while let Some(msg) = runner.try_recv_msg() {
            let (next, effects) = update(state, msg);
            state = next;
            runner.run_effects(effects);
            applied = true;
        }

        if state.consume_dirty() {
            renderer.render(&state.view());
        }

        match state.status() {
            SessionStatus::Complete => {
                renderer.summary(&state.view());
                return ExitCode::SUCCESS;
            }
            SessionStatus::Error => {
                renderer.summary(&state.view());
                return ExitCode::FAILURE;
            }
            _ => {}
        }

        if !applied {
            thread::sleep(Duration::from_millis(20));
        }
    }
}
