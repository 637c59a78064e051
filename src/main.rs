use std::env;

#[tokio::main]
async fn main() {
    env_logger::init();

    let raw_args: Vec<String> = env::args().collect();
    if raw_args.get(1).map(|s| s.as_str()) == Some("serve") {
        if let Err(msg) = compound::api::run_server_cli(&raw_args[1..]).await {
            log::error!("{msg}");
            eprintln!("{msg}");
            std::process::exit(1);
        }
        return;
    }

    if let Err(msg) = compound::api::run_cli(raw_args) {
        eprintln!("{msg}");
        eprintln!("Usage: compound [OPTIONS] | compound serve [port] [--max-rate-variance N] [--max-years N]");
        std::process::exit(1);
    }
}
