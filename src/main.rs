use std::sync::Arc;

use clap::Parser;
use community_board::cmds::App;
use community_board::conductors::Conductor;
use community_board::config::Config;
use community_board::file_backed;
use community_board::presenters::impls::text::TextBoardPresenter;
use community_board::usecases::ActionError;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

async fn async_main(app: App) -> i32 {
    let config = Config::from(&app);

    let conductor = Conductor {
        handler: file_backed(&config, Arc::new(TextBoardPresenter::stdout())).await,
    };

    match conductor.conduct(app.cmd).await {
        Ok(()) => 0,
        // already shown as an alert
        Err(e) if e.downcast_ref::<ActionError>().is_some() => 1,
        Err(e) => {
            eprintln!("error: {:#}", e);
            2
        },
    }
}

fn main() {
    let app = App::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(::std::io::stderr))
        .init();

    let rt = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .thread_name("community_board")
        .build()
    {
        Ok(r) => r,
        Err(e) => {
            eprintln!("cannot build tokio runtime: {}", e);
            ::std::process::exit(2)
        },
    };

    let code = rt.block_on(async_main(app));
    drop(rt);

    ::std::process::exit(code)
}
