//! 설정 관리.
//!
//! 기본값 → 설정 파일(선택) → 환경 변수 순서로 덮어씁니다.
//! 환경 변수 형식은 `AUTH__<섹션>__<키>`입니다 (예: `AUTH__SERVER__PORT=8080`).

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use std::path::Path;

/// 개발용 기본 JWT 비밀 키.
pub const DEV_JWT_SECRET: &str = "dev-secret-key-change-in-production";

/// 애플리케이션 설정.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// 서버 설정
    #[serde(default)]
    pub server: ServerConfig,
    /// 데이터베이스 설정
    #[serde(default)]
    pub database: DatabaseConfig,
    /// JWT 설정
    #[serde(default)]
    pub jwt: JwtConfig,
    /// 로깅 설정
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// 서버 설정.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// 바인딩할 호스트
    pub host: String,
    /// 리스닝할 포트
    pub port: u16,
    /// 요청 타임아웃 (초)
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
    /// 쉼표로 구분된 CORS 허용 origin 목록. 없으면 모든 origin 허용.
    #[serde(default)]
    pub cors_origins: Option<String>,
}

fn default_request_timeout() -> u64 {
    30
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            request_timeout_secs: default_request_timeout(),
            cors_origins: None,
        }
    }
}

impl ServerConfig {
    /// `host:port` 형식 주소.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// 설정된 CORS origin 목록 (공백 제거, 빈 항목 제외).
    pub fn cors_origin_list(&self) -> Vec<String> {
        self.cors_origins
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    }
}

/// 데이터베이스 설정.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// PostgreSQL 연결 URL. 없으면 인메모리 저장소를 사용합니다.
    #[serde(default)]
    pub url: Option<String>,
    /// 최대 연결 수
    pub max_connections: u32,
    /// 연결 획득 타임아웃 (초)
    pub acquire_timeout_secs: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: None,
            max_connections: 10,
            acquire_timeout_secs: 10,
        }
    }
}

/// JWT 설정.
#[derive(Debug, Clone, Deserialize)]
pub struct JwtConfig {
    /// 서명용 비밀 키 (Debug 출력에서 가려짐)
    #[serde(default)]
    pub secret: Option<SecretString>,
    /// Access Token 만료 시간 (분)
    pub expires_in_minutes: i64,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: None,
            expires_in_minutes: 60,
        }
    }
}

impl JwtConfig {
    /// 설정된 비밀 키. 없으면 `None`.
    pub fn secret(&self) -> Option<SecretString> {
        self.secret
            .as_ref()
            .filter(|s| !s.expose_secret().is_empty())
            .cloned()
    }

    /// 설정된 비밀 키 또는 개발용 기본값.
    pub fn secret_or_default(&self) -> SecretString {
        self.secret().unwrap_or_else(|| {
            tracing::warn!("JWT secret not set, using default (INSECURE for development only)");
            SecretString::from(DEV_JWT_SECRET)
        })
    }
}

/// 로깅 설정.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// 로그 레벨 필터
    pub level: String,
    /// 로그 형식 (pretty, json, compact)
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "auth_core=info,auth_api=info,tower_http=info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

impl AppConfig {
    /// 파일(선택)과 환경 변수에서 설정을 로드합니다.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, config::ConfigError> {
        let defaults = Self::default();

        let builder = config::Config::builder()
            // 기본값으로 시작
            .set_default("server.host", defaults.server.host)?
            .set_default("server.port", i64::from(defaults.server.port))?
            .set_default(
                "server.request_timeout_secs",
                defaults.server.request_timeout_secs as i64,
            )?
            .set_default(
                "database.max_connections",
                i64::from(defaults.database.max_connections),
            )?
            .set_default(
                "database.acquire_timeout_secs",
                defaults.database.acquire_timeout_secs as i64,
            )?
            .set_default("jwt.expires_in_minutes", defaults.jwt.expires_in_minutes)?
            .set_default("logging.level", defaults.logging.level)?
            .set_default("logging.format", defaults.logging.format)?
            // 파일에서 로드 (없어도 됨)
            .add_source(config::File::from(path.as_ref()).required(false))
            // 환경 변수로 오버라이드
            .add_source(
                config::Environment::with_prefix("AUTH")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            );

        builder.build()?.try_deserialize()
    }

    /// 기본 경로에서 설정을 로드합니다.
    pub fn load_default() -> Result<Self, config::ConfigError> {
        Self::load("config/default.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_without_file_uses_defaults() {
        let config = AppConfig::load("does/not/exist.toml").unwrap();

        assert_eq!(config.server.port, 3000);
        assert_eq!(config.database.max_connections, 10);
        assert_eq!(config.jwt.expires_in_minutes, 60);
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_bind_address() {
        let server = ServerConfig::default();
        assert_eq!(server.bind_address(), "127.0.0.1:3000");
        assert!(server.cors_origin_list().is_empty());
    }

    #[test]
    fn test_cors_origin_list() {
        let server = ServerConfig {
            cors_origins: Some("https://a.example.com, ,https://b.example.com".to_string()),
            ..Default::default()
        };
        assert_eq!(
            server.cors_origin_list(),
            vec!["https://a.example.com", "https://b.example.com"]
        );
    }

    #[test]
    fn test_jwt_secret_fallback() {
        let empty = JwtConfig {
            secret: Some(SecretString::from("")),
            ..Default::default()
        };
        assert!(empty.secret().is_none());
        assert_eq!(empty.secret_or_default().expose_secret(), DEV_JWT_SECRET);

        let set = JwtConfig {
            secret: Some(SecretString::from("configured-secret")),
            ..Default::default()
        };
        assert_eq!(set.secret_or_default().expose_secret(), "configured-secret");
    }

    #[test]
    fn test_jwt_secret_redacted_in_debug() {
        let config = AppConfig {
            jwt: JwtConfig {
                secret: Some(SecretString::from("super-secret-value")),
                ..Default::default()
            },
            ..Default::default()
        };

        let printed = format!("{:?}", config);
        assert!(!printed.contains("super-secret-value"));
        assert!(printed.contains("REDACTED"));
    }

    #[test]
    fn test_jwt_secret_from_env() {
        std::env::set_var("AUTH__JWT__SECRET", "env-provided-secret");
        let config = AppConfig::load("does/not/exist.toml");
        std::env::remove_var("AUTH__JWT__SECRET");

        let config = config.unwrap();
        assert_eq!(
            config.jwt.secret().unwrap().expose_secret(),
            "env-provided-secret"
        );
    }
}
