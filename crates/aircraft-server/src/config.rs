//! Конфигурация сервиса самолётов.

#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Адрес для прослушивания (например "0.0.0.0:8888")
    pub listen: String,

    /// URL подключения к БД (sqlite, mysql или postgres)
    pub db_url: String,

    /// Префикс маршрутов ресурса ("" или "/aircraft-api")
    pub base_path: String,

    /// Внешний адрес API, из него строятся ссылки в списке
    pub public_url: String,
}

impl ServerConfig {
    /// Собрать конфигурацию с проверкой префикса и внешнего адреса.
    pub fn new(
        listen: String,
        db_url: String,
        base_path: &str,
        public_url: &str,
    ) -> Result<Self, String> {
        Ok(Self {
            listen,
            db_url,
            base_path: normalize_base_path(base_path)?,
            public_url: validate_public_url(public_url)?,
        })
    }
}

/// Привести префикс к виду "/segment": ведущий `/`, без завершающего.
/// "" и "/" означают монтирование в корень.
pub fn normalize_base_path(raw: &str) -> Result<String, String> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Ok(String::new());
    }
    if !trimmed.starts_with('/') {
        return Err(format!("Префикс маршрутов должен начинаться с '/': {raw}"));
    }
    if trimmed.contains(['{', '}', '*']) {
        return Err(format!("Префикс маршрутов не может содержать шаблоны: {raw}"));
    }
    Ok(trimmed.to_string())
}

/// Проверить внешний адрес: схема http(s) и наличие хоста.
/// Возвращает адрес без завершающего `/`.
pub fn validate_public_url(raw: &str) -> Result<String, String> {
    let parsed = url::Url::parse(raw).map_err(|e| format!("Некорректный URL {raw}: {e}"))?;

    match parsed.scheme() {
        "http" | "https" => {}
        other => {
            return Err(format!(
                "public_url должен начинаться с http:// или https://, получено: {other}"
            ))
        }
    }

    if parsed.host_str().is_none() {
        return Err(format!("public_url не содержит хост: {raw}"));
    }

    Ok(raw.trim_end_matches('/').to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_path_is_normalized() {
        assert_eq!(normalize_base_path("/aircraft-api/").unwrap(), "/aircraft-api");
        assert_eq!(normalize_base_path("/").unwrap(), "");
        assert_eq!(normalize_base_path("").unwrap(), "");
    }

    #[test]
    fn base_path_without_leading_slash_is_rejected() {
        assert!(normalize_base_path("aircraft-api").is_err());
        assert!(normalize_base_path("/{tenant}").is_err());
    }

    #[test]
    fn public_url_accepts_localhost_http() {
        assert_eq!(
            validate_public_url("http://localhost:8888/aircraft-api/").unwrap(),
            "http://localhost:8888/aircraft-api"
        );
    }

    #[test]
    fn public_url_rejects_other_schemes() {
        assert!(validate_public_url("ftp://example.com").is_err());
        assert!(validate_public_url("not a url").is_err());
    }
}
