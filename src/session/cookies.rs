use anyhow::Context;
use axum::http::{header, HeaderMap, HeaderValue};

use crate::config::SessionConfig;
use crate::session::SessionId;

const SECONDS_PER_DAY: i64 = 60 * 60 * 24;

/// Value of the named cookie from the request's `Cookie` headers, if present.
pub fn read_cookie<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(k, _)| k.trim() == name)
        .map(|(_, v)| v.trim().trim_matches('"'))
}

/// `Set-Cookie` value that hands `session` to the client.
pub fn session_cookie(cfg: &SessionConfig, session: SessionId) -> anyhow::Result<HeaderValue> {
    let max_age = cfg
        .ttl_days
        .checked_mul(SECONDS_PER_DAY)
        .with_context(|| format!("session ttl of {} days overflows Max-Age", cfg.ttl_days))?;
    let value = format!(
        "{}={}; Path=/; Max-Age={}; HttpOnly; SameSite=Lax",
        cfg.cookie_name, session, max_age
    );
    Ok(HeaderValue::from_str(&value)?)
}
