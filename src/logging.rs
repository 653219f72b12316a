use tracing_subscriber::EnvFilter;

/// `RUST_LOG` 환경 변수를 따르는 로그 구독자를 설치한다. 없으면 `default_level` 을 쓴다.
///
/// 이미 설치되어 있으면 아무 것도 하지 않는다.
pub fn init(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
