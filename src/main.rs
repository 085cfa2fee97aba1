use colored::Colorize;

use snaplink::config::AppConfig;
use snaplink::runtime::server;
use snaplink::system::logging;

#[actix_web::main]
async fn main() {
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env();

    // guard 必须存活到进程结束，否则日志会丢
    let _guard = logging::init_logging(&config.logging);

    if let Err(e) = server::run_server(config).await {
        eprintln!(
            "{} {}",
            "[FATAL]".red().bold(),
            format!("{:#}", e).white()
        );
        std::process::exit(1);
    }
}
