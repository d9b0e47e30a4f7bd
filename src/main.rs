use dotenv::dotenv;
use human_panic::setup_panic;
use tracing::{debug, error, warn};

// 从 lib.rs 导入模块
use rust_hwportal_client::config::AppConfig;
use rust_hwportal_client::runtime::lifetime;

#[tokio::main]
async fn main() {
    dotenv().ok();

    // 记录程序启动时间
    let start_datetime = chrono::Utc::now();

    // 启动前预处理 //

    // 初始化配置
    setup_panic!();
    if let Err(e) = AppConfig::init() {
        eprintln!("Failed to initialize configuration: {e}");
        std::process::exit(1);
    }
    let config = AppConfig::get();

    // 初始化日志
    let stdout_log = std::io::stdout();
    let (non_blocking_writer, _guard) = tracing_appender::non_blocking(stdout_log);
    let filter = tracing_subscriber::EnvFilter::new(&config.app.log_level);
    let tracing_format = tracing_subscriber::fmt::format()
        .with_level(true)
        .with_ansi(true);

    let tracing_builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(non_blocking_writer)
        .event_format(tracing_format);

    if config.is_development() {
        tracing_builder
            .with_file(true)
            .with_line_number(true)
            .init();
    } else {
        tracing_builder.json().init();
    }

    // 打印信息
    warn!(
        "Starting pre-startup processing...
        Project: {}
        Version: {}
        Authors: {}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        env!("CARGO_PKG_AUTHORS")
    );

    let startup = match lifetime::startup::prepare_client_startup() {
        Ok(startup) => startup,
        Err(e) => {
            error!("{}", e.format_simple());
            #[cfg(debug_assertions)]
            eprintln!("{}", e.format_colored());
            std::process::exit(1);
        }
    };

    // 输出预处理时间
    debug!(
        "Pre-startup processing completed in {} ms",
        chrono::Utc::now()
            .signed_duration_since(start_datetime)
            .num_milliseconds()
    );

    // 预处理完成 //

    // 统计面板只加载一次，失败已通过通知展示
    if let Err(e) = startup.analytics().load().await {
        debug!("Analytics dashboard not loaded: {}", e);
    }

    let monitor = match startup.session_monitor() {
        Ok(monitor) => monitor,
        Err(e) => {
            error!("{}", e.format_simple());
            std::process::exit(1);
        }
    };
    warn!(
        "Monitoring session on {} every {}s",
        config.portal.base_url, config.session.poll_interval_secs
    );

    tokio::select! {
        _ = monitor.run() => {
            warn!("Session ended, exiting");
        }
        _ = lifetime::shutdown::listen_for_shutdown() => {
            warn!("Graceful shutdown: session monitor stopped");
        }
    }

    startup.ui.state().teardown();
}
