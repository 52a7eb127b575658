//! Session cookie handling.

use std::sync::Arc;

use reqwest::cookie::Jar;
use url::Url;

/// Name of the site's session cookie.
pub const SESSION_COOKIE: &str = "sess";

/// Authentication state shared by every request of a run.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Value of the `sess` cookie captured from a logged-in browser.
    pub session_token: String,

    /// User agent of the browser the cookie was captured from.
    pub user_agent: String,

    /// Site root, e.g. `https://onlyfans.com`.
    pub base_url: Url,
}

/// Cookie domain for the base URL.
///
/// Returns a leading-dot domain so media hosts on subdomains receive the cookie too.
/// IP hosts get a host-only cookie.
pub fn cookie_domain(base_url: &Url) -> Option<String> {
    let domain = base_url.domain()?;
    let domain = domain.strip_prefix("www.").unwrap_or(domain);
    Some(format!(".{}", domain))
}

/// Build the `Set-Cookie` style string for the session cookie.
pub fn session_cookie(session_token: &str, base_url: &Url) -> String {
    match cookie_domain(base_url) {
        Some(domain) => format!(
            "{}={}; Domain={}; Path=/",
            SESSION_COOKIE, session_token, domain
        ),
        None => format!("{}={}; Path=/", SESSION_COOKIE, session_token),
    }
}

/// Create a cookie jar holding the session cookie.
pub fn session_jar(session: &SessionConfig) -> Arc<Jar> {
    let jar = Jar::default();
    jar.add_cookie_str(
        &session_cookie(&session.session_token, &session.base_url),
        &session.base_url,
    );
    Arc::new(jar)
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::cookie::CookieStore;

    #[test]
    fn test_cookie_domain() {
        let url = Url::parse("https://onlyfans.com").unwrap();
        assert_eq!(cookie_domain(&url).as_deref(), Some(".onlyfans.com"));

        let url = Url::parse("https://www.onlyfans.com/").unwrap();
        assert_eq!(cookie_domain(&url).as_deref(), Some(".onlyfans.com"));

        let url = Url::parse("http://127.0.0.1:8080").unwrap();
        assert_eq!(cookie_domain(&url), None);
    }

    #[test]
    fn test_session_cookie_format() {
        let url = Url::parse("https://onlyfans.com").unwrap();
        assert_eq!(
            session_cookie("abc", &url),
            "sess=abc; Domain=.onlyfans.com; Path=/"
        );

        let url = Url::parse("http://127.0.0.1:8080").unwrap();
        assert_eq!(session_cookie("abc", &url), "sess=abc; Path=/");
    }

    #[test]
    fn test_jar_sends_cookie_to_subdomains() {
        let session = SessionConfig {
            session_token: "token123".to_string(),
            user_agent: "agent".to_string(),
            base_url: Url::parse("https://onlyfans.com").unwrap(),
        };
        let jar = session_jar(&session);

        let cdn = Url::parse("https://cdn2.onlyfans.com/files/a.jpg").unwrap();
        let header = jar.cookies(&cdn).unwrap();
        assert_eq!(header.to_str().unwrap(), "sess=token123");

        let other = Url::parse("https://example.com/").unwrap();
        assert!(jar.cookies(&other).is_none());
    }
}
