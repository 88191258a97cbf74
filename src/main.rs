//! 사용자 인증 서비스 저장소 준비 도구
//!
//! 환경 설정을 로드하고 MongoDB 연결을 검증한 뒤
//! 사용자 컬렉션의 유니크 인덱스를 준비합니다.

use std::path::Path;
use std::process::ExitCode;

use env_logger::Env;
use log::{error, info};
use user_auth_service::config::{Environment, PasswordConfig};
use user_auth_service::core::errors::AppResult;
use user_auth_service::db::Database;
use user_auth_service::repositories::users::MongoUserStore;

#[tokio::main]
async fn main() -> ExitCode {
    // RUST_LOG가 .env 파일에 있을 수 있으므로 로거보다 먼저 로드
    let env_file = load_env_file(Path::new("."));
    init_logging();
    env_file.log();

    info!("🚀 사용자 인증 저장소 준비중...");

    match prepare_user_store().await {
        Ok(()) => {
            info!("✅ 사용자 저장소 준비 완료");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("❌ 사용자 저장소 준비 실패: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// MongoDB에 연결하고 사용자명 인덱스를 생성합니다.
async fn prepare_user_store() -> AppResult<()> {
    info!(
        "환경: {:?}, bcrypt cost: {}",
        Environment::current(),
        PasswordConfig::bcrypt_cost()
    );

    info!("📡 데이터베이스 연결 중...");
    let database = Database::new().await?;

    let store = MongoUserStore::from_config(&database);
    store.create_indexes().await?;

    info!(
        "사용자 컬렉션: {}.{} (username match: {:?})",
        database.database_name(),
        store.collection().name(),
        store.matching()
    );

    Ok(())
}

/// `.env` 파일 로드 결과
///
/// 로거 초기화 전에 로드하므로 결과는 보관했다가 초기화 후에 기록합니다.
struct EnvFileReport {
    profile: String,
    file_name: &'static str,
    result: Result<(), String>,
}

impl EnvFileReport {
    fn log(&self) {
        info!("Current profile: {}", self.profile);
        match &self.result {
            Ok(()) => info!("{} 파일 로드 됨", self.file_name),
            Err(e) => error!("{} 파일 로드 실패: {}", self.file_name, e),
        }
    }
}

/// 프로필별 설정 파일 이름
///
/// * `dev` - .env.dev (기본값)
/// * `prod` - .env.prod
/// * 기타 - .env
fn env_file_for_profile(profile: &str) -> &'static str {
    match profile {
        "prod" => ".env.prod",
        "dev" => ".env.dev",
        _ => ".env",
    }
}

/// `PROFILE` 환경변수에 따라 `dir` 아래의 설정 파일을 로드합니다
fn load_env_file(dir: &Path) -> EnvFileReport {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());
    let file_name = env_file_for_profile(&profile);

    let result = dotenv::from_path(dir.join(file_name)).map_err(|e| e.to_string());

    EnvFileReport {
        profile,
        file_name,
        result,
    }
}

/// 로깅 시스템을 초기화합니다
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info")
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info"));
}
