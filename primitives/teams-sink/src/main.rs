use clap::Parser;
use teams_sink::{Args, MessageRequest, WebhookClient, WebhookUrlValidator, pipeline};
use tracing_subscriber::EnvFilter;

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let request = MessageRequest::from_args(args);
    let validator = WebhookUrlValidator::new()?;
    let client = WebhookClient::new()?;

    let result = pipeline::run(&request, &validator, &client).await;
    let code = pipeline::report(&result, &mut std::io::stdout(), &mut std::io::stderr());
    if code != 0 {
        std::process::exit(code);
    }

    Ok(())
}
