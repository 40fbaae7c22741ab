//! HTTP implementation of [`Backend`] against a Supabase-style service:
//! GoTrue for auth (`/auth/v1`) and PostgREST for rows (`/rest/v1`).
//!
//! The magic-link flow never handles passwords: sign-in requests an email
//! with a one-time link, and redemption lands back on the app with tokens in
//! the URL fragment. [`SupabaseClient::resume_from_redirect`] lifts those
//! into a cached session and strips the fragment.

use super::error::BackendError;
use super::listeners::{SessionListener, SessionListeners, SessionSubscription};
use super::types::{
    CheckIn, Habit, HabitPatch, NewHabit, ProfileUpsert, Session, UserProfile,
};
use super::Backend;
use crate::config::AppConfig;
use async_trait::async_trait;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use chrono::NaiveDate;
use gloo::storage::{LocalStorage, Storage};
use serde::Deserialize;
use serde_json::json;

const AUTH_PATH: &str = "/auth/v1";
const REST_PATH: &str = "/rest/v1";

/// Backend client over GoTrue + PostgREST.
#[derive(Clone)]
pub struct SupabaseClient {
    http: reqwest::Client,
    base_url: String,
    anon_key: String,
    listeners: SessionListeners,
}

impl SupabaseClient {
    pub fn new(base_url: String, anon_key: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url,
            anon_key,
            listeners: SessionListeners::new(),
        }
    }

    /// Build from compile-time environment with page-origin fallback.
    pub fn from_env() -> Self {
        Self::new(AppConfig::backend_url(), AppConfig::anon_key())
    }

    /// If the current URL carries magic-link tokens in its fragment, turn
    /// them into a session, persist it, notify listeners and strip the
    /// fragment. Call once at startup, before the session resolver mounts.
    pub fn resume_from_redirect(&self) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let Ok(fragment) = window.location().hash() else {
            return;
        };
        let Some(session) = session_from_fragment(&fragment, now_unix()) else {
            return;
        };

        self.store_session(&session);
        let _ = window.location().set_hash("");
        self.listeners.notify(Some(&session));
    }

    fn store_session(&self, session: &Session) {
        if let Err(err) = LocalStorage::set(AppConfig::SESSION_STORAGE_KEY, session) {
            log::warn!("failed to cache session: {err}");
        }
    }

    fn clear_session(&self) {
        LocalStorage::delete(AppConfig::SESSION_STORAGE_KEY);
    }

    fn cached_session(&self) -> Option<Session> {
        let session: Session = LocalStorage::get(AppConfig::SESSION_STORAGE_KEY).ok()?;
        if session.is_expired_at(now_unix()) {
            self.clear_session();
            return None;
        }
        Some(session)
    }

    fn auth_url(&self, path: &str) -> String {
        format!("{}{AUTH_PATH}{path}", self.base_url)
    }

    fn rest_url(&self, path: &str) -> String {
        format!("{}{REST_PATH}{path}", self.base_url)
    }

    /// Request builder with the API key and, when a session exists, the
    /// bearer token attached.
    fn request(&self, method: reqwest::Method, url: String) -> reqwest::RequestBuilder {
        let mut builder = self.http.request(method, url).header("apikey", &self.anon_key);
        if let Some(session) = self.cached_session() {
            builder = builder.bearer_auth(session.access_token);
        }
        builder
    }

    /// Execute a request, mapping non-success statuses onto [`BackendError`].
    async fn execute(&self, builder: reqwest::RequestBuilder) -> Result<reqwest::Response, BackendError> {
        let response = builder.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let message = response.text().await.unwrap_or_default();
        Err(BackendError::from_status(status.as_u16(), message))
    }

    async fn execute_json<T: serde::de::DeserializeOwned>(
        &self,
        builder: reqwest::RequestBuilder,
    ) -> Result<T, BackendError> {
        let response = self.execute(builder).await?;
        Ok(response.json::<T>().await?)
    }
}

#[async_trait(?Send)]
impl Backend for SupabaseClient {
    async fn current_session(&self) -> Result<Option<Session>, BackendError> {
        Ok(self.cached_session())
    }

    fn subscribe_session(&self, listener: SessionListener) -> SessionSubscription {
        self.listeners.subscribe(listener)
    }

    async fn sign_in_with_magic_link(
        &self,
        email: &str,
        redirect_to: &str,
    ) -> Result<(), BackendError> {
        let builder = self
            .request(reqwest::Method::POST, self.auth_url("/otp"))
            .query(&[("redirect_to", redirect_to)])
            .json(&json!({ "email": email, "create_user": true }));
        self.execute(builder).await?;
        Ok(())
    }

    async fn sign_out(&self) -> Result<(), BackendError> {
        let builder = self.request(reqwest::Method::POST, self.auth_url("/logout"));
        let result = self.execute(builder).await;
        // Local state is cleared even when the revocation call fails; the
        // app must not stay signed in because the network flaked.
        self.clear_session();
        self.listeners.notify(None);
        result.map(|_| ())
    }

    async fn fetch_profile(&self, user_id: &str) -> Result<Option<UserProfile>, BackendError> {
        let builder = self
            .request(reqwest::Method::GET, self.rest_url("/user_profiles"))
            .query(&[("user_id", &format!("eq.{user_id}")), ("select", &"*".to_owned())]);
        let rows: Vec<UserProfile> = self.execute_json(builder).await?;
        Ok(rows.into_iter().next())
    }

    async fn upsert_profile(&self, profile: &ProfileUpsert) -> Result<(), BackendError> {
        let builder = self
            .request(reqwest::Method::POST, self.rest_url("/user_profiles"))
            .query(&[("on_conflict", "user_id")])
            .header("Prefer", "resolution=merge-duplicates")
            .json(profile);
        self.execute(builder).await?;
        Ok(())
    }

    async fn list_habits(&self, user_id: &str) -> Result<Vec<Habit>, BackendError> {
        let builder = self
            .request(reqwest::Method::GET, self.rest_url("/habits"))
            .query(&[
                ("user_id", &format!("eq.{user_id}")),
                ("select", &"*".to_owned()),
                ("order", &"created_at.asc".to_owned()),
            ]);
        self.execute_json(builder).await
    }

    async fn insert_habit(&self, habit: &NewHabit) -> Result<Habit, BackendError> {
        let builder = self
            .request(reqwest::Method::POST, self.rest_url("/habits"))
            .header("Prefer", "return=representation")
            .json(habit);
        let mut rows: Vec<Habit> = self.execute_json(builder).await?;
        rows.pop()
            .ok_or_else(|| BackendError::NotFound("inserted habit not returned".to_owned()))
    }

    async fn update_habit(&self, id: &str, patch: &HabitPatch) -> Result<(), BackendError> {
        let builder = self
            .request(reqwest::Method::PATCH, self.rest_url("/habits"))
            .query(&[("id", &format!("eq.{id}"))])
            .json(patch);
        self.execute(builder).await?;
        Ok(())
    }

    async fn delete_habit(&self, id: &str) -> Result<(), BackendError> {
        let builder = self
            .request(reqwest::Method::DELETE, self.rest_url("/habits"))
            .query(&[("id", &format!("eq.{id}"))]);
        self.execute(builder).await?;
        Ok(())
    }

    async fn list_check_ins(
        &self,
        user_id: &str,
        since: NaiveDate,
    ) -> Result<Vec<CheckIn>, BackendError> {
        let builder = self
            .request(reqwest::Method::GET, self.rest_url("/habit_check_ins"))
            .query(&[
                ("user_id", &format!("eq.{user_id}")),
                ("date", &format!("gte.{since}")),
                ("select", &"*".to_owned()),
            ]);
        self.execute_json(builder).await
    }

    async fn insert_check_in(&self, check_in: &CheckIn) -> Result<(), BackendError> {
        let builder = self
            .request(reqwest::Method::POST, self.rest_url("/habit_check_ins"))
            .json(check_in);
        self.execute(builder).await?;
        Ok(())
    }

    async fn delete_check_in(&self, habit_id: &str, date: NaiveDate) -> Result<(), BackendError> {
        let builder = self
            .request(reqwest::Method::DELETE, self.rest_url("/habit_check_ins"))
            .query(&[
                ("habit_id", &format!("eq.{habit_id}")),
                ("date", &format!("eq.{date}")),
            ]);
        self.execute(builder).await?;
        Ok(())
    }

    async fn delete_check_ins_for_habit(&self, habit_id: &str) -> Result<(), BackendError> {
        let builder = self
            .request(reqwest::Method::DELETE, self.rest_url("/habit_check_ins"))
            .query(&[("habit_id", &format!("eq.{habit_id}"))]);
        self.execute(builder).await?;
        Ok(())
    }

    async fn delete_user_data(&self, user_id: &str) -> Result<(), BackendError> {
        // Sequential single-row-filtered deletes; the store offers no
        // transactional grouping across tables.
        for table in ["/habit_check_ins", "/habits", "/user_profiles"] {
            let builder = self
                .request(reqwest::Method::DELETE, self.rest_url(table))
                .query(&[("user_id", &format!("eq.{user_id}"))]);
            self.execute(builder).await?;
        }
        Ok(())
    }
}

fn now_unix() -> i64 {
    #[allow(
        clippy::cast_possible_truncation,
        reason = "js_sys::Date::now is milliseconds since epoch, well within i64"
    )]
    {
        (js_sys::Date::now() / 1000.0) as i64
    }
}

/// Tokens carried in a magic-link redirect fragment.
#[derive(Debug, PartialEq, Eq)]
struct FragmentTokens {
    access_token: String,
    refresh_token: Option<String>,
    expires_in: Option<i64>,
}

/// Parse `#access_token=...&refresh_token=...&expires_in=...` fragments.
/// Returns `None` when no access token is present.
fn parse_fragment(fragment: &str) -> Option<FragmentTokens> {
    let trimmed = fragment.strip_prefix('#').unwrap_or(fragment);
    let mut access_token = None;
    let mut refresh_token = None;
    let mut expires_in = None;

    for pair in trimmed.split('&') {
        // Flag-style segments without `=` carry nothing we need.
        let Some((key, value)) = pair.split_once('=') else {
            continue;
        };
        match key {
            "access_token" => access_token = Some(value.to_owned()),
            "refresh_token" => refresh_token = Some(value.to_owned()),
            "expires_in" => expires_in = value.parse().ok(),
            _ => {}
        }
    }

    Some(FragmentTokens {
        access_token: access_token?,
        refresh_token,
        expires_in,
    })
}

#[derive(Deserialize)]
struct JwtClaims {
    sub: String,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    exp: Option<i64>,
}

/// Decode the unverified payload of a JWT. Verification happens server-side;
/// the client only needs the subject and email for display and row scoping.
fn decode_claims(access_token: &str) -> Option<JwtClaims> {
    let payload = access_token.split('.').nth(1)?;
    let bytes = URL_SAFE_NO_PAD
        .decode(payload.trim_end_matches('='))
        .ok()?;
    serde_json::from_slice(&bytes).ok()
}

/// Build a session from a redirect fragment, or `None` when the fragment
/// carries no redeemable tokens.
fn session_from_fragment(fragment: &str, now: i64) -> Option<Session> {
    let tokens = parse_fragment(fragment)?;
    let claims = decode_claims(&tokens.access_token)?;
    let expires_at = claims.exp.or_else(|| tokens.expires_in.map(|ttl| now + ttl));
    Some(Session {
        user_id: claims.sub,
        email: claims.email,
        access_token: tokens.access_token,
        refresh_token: tokens.refresh_token,
        expires_at,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_jwt(claims: &serde_json::Value) -> String {
        let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
        let payload = URL_SAFE_NO_PAD.encode(claims.to_string().as_bytes());
        format!("{header}.{payload}.sig")
    }

    #[test]
    fn fragment_without_access_token_is_rejected() {
        assert_eq!(parse_fragment("#error=access_denied"), None);
        assert_eq!(parse_fragment(""), None);
    }

    #[test]
    fn fragment_tokens_are_extracted() {
        let tokens =
            parse_fragment("#access_token=abc&refresh_token=def&expires_in=3600&type=magiclink")
                .unwrap();
        assert_eq!(tokens.access_token, "abc");
        assert_eq!(tokens.refresh_token.as_deref(), Some("def"));
        assert_eq!(tokens.expires_in, Some(3600));
    }

    #[test]
    fn flag_style_segments_are_skipped_not_fatal() {
        let tokens = parse_fragment("#proxied&access_token=abc&noval&expires_in=60").unwrap();
        assert_eq!(tokens.access_token, "abc");
        assert_eq!(tokens.expires_in, Some(60));
        assert_eq!(tokens.refresh_token, None);
    }

    #[test]
    fn session_is_built_from_jwt_claims() {
        let jwt = make_jwt(&json!({
            "sub": "user-1",
            "email": "ada@example.com",
            "exp": 2_000_000_000u32,
        }));
        let fragment = format!("#access_token={jwt}&refresh_token=r1&expires_in=3600");

        let session = session_from_fragment(&fragment, 1_000).unwrap();
        assert_eq!(session.user_id, "user-1");
        assert_eq!(session.email.as_deref(), Some("ada@example.com"));
        assert_eq!(session.expires_at, Some(2_000_000_000));
    }

    #[test]
    fn expires_in_is_fallback_when_jwt_has_no_exp() {
        let jwt = make_jwt(&json!({ "sub": "user-1" }));
        let fragment = format!("#access_token={jwt}&expires_in=3600");

        let session = session_from_fragment(&fragment, 1_000).unwrap();
        assert_eq!(session.expires_at, Some(4_600));
    }

    #[test]
    fn garbage_access_token_yields_no_session() {
        assert!(session_from_fragment("#access_token=not-a-jwt", 0).is_none());
    }
}
