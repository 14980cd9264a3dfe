/// `Set-Cookie` values for the session token cookie.
#[derive(Debug, Clone)]
pub struct SessionCookie {
    name: String,
}

impl SessionCookie {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Cookie carrying `token`, expiring after `max_age_secs`.
    pub fn set(&self, token: &str, max_age_secs: i64) -> String {
        format!(
            "{}={}; Path=/; HttpOnly; SameSite=Lax; Max-Age={}",
            self.name,
            token,
            max_age_secs.max(0)
        )
    }

    /// Cookie that removes the session from the browser.
    pub fn clear(&self) -> String {
        format!("{}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0", self.name)
    }
}
