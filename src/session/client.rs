//! Authenticated portal client
//!
//! Thin page provider around `reqwest`: one method per portal page, each
//! POSTing the form payload the portal expects and returning raw markup for
//! the extractors. The extractors never see this layer; they accept only the
//! returned markup snapshot.
//!
//! Retry/backoff policy is deliberately absent here; a failed fetch surfaces
//! as an error and the interactive loop simply shows an empty section.

use crate::config::Credentials;
use crate::session::context::{extract_csrf_token, SessionContext};
use crate::{SessionError, VtopError};
use chrono::Utc;
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// Browser-like user agent; the portal rejects obviously non-browser clients
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Builds the HTTP client used for all portal traffic
///
/// Cookies carry the portal session, so the cookie store is mandatory.
pub fn build_portal_client(timeout_secs: u64) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(USER_AGENT)
        .cookie_store(true)
        .timeout(Duration::from_secs(timeout_secs))
        .connect_timeout(Duration::from_secs(10))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Authenticated-session page provider
#[derive(Debug)]
pub struct PortalClient {
    http: Client,
    base: Url,
    context: SessionContext,
}

impl PortalClient {
    /// Creates a client for the given portal base URL and registration number
    pub fn new(http: Client, base_url: &str, username: &str) -> Result<Self, VtopError> {
        // Url::join treats a base without a trailing slash as a file path
        let normalized = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{}/", base_url)
        };
        Ok(PortalClient {
            http,
            base: Url::parse(&normalized)?,
            context: SessionContext::new(username),
        })
    }

    pub fn context(&self) -> &SessionContext {
        &self.context
    }

    pub fn context_mut(&mut self) -> &mut SessionContext {
        &mut self.context
    }

    /// Performs the portal login sequence
    ///
    /// Fetches the login page for the session cookie and pre-login token,
    /// posts the credentials, then loads the dashboard to harvest the
    /// session token every later request must carry.
    pub async fn login(&mut self, credentials: &Credentials) -> Result<(), VtopError> {
        let login_url = self.base.join("login")?;
        let login_page = self.get_text(login_url.clone()).await?;
        let prelogin_token = extract_csrf_token(&login_page).unwrap_or_default();

        let response = self
            .http
            .post(login_url.clone())
            .form(&[
                ("username", credentials.username.as_str()),
                ("password", credentials.password.as_str()),
                ("_csrf", prelogin_token.as_str()),
            ])
            .send()
            .await
            .map_err(|source| VtopError::Http {
                url: login_url.to_string(),
                source,
            })?;

        if !response.status().is_success() && !response.status().is_redirection() {
            return Err(SessionError::LoginRejected(format!(
                "login endpoint returned HTTP {}",
                response.status().as_u16()
            ))
            .into());
        }

        // The dashboard both confirms the session and exposes the token.
        self.refresh_token().await?;
        if self.context.csrf_token.is_none() {
            return Err(
                SessionError::LoginRejected("dashboard exposed no session token".to_string())
                    .into(),
            );
        }

        tracing::info!("Logged in as {}", self.context.authorized_id());
        Ok(())
    }

    /// Reloads the dashboard and re-harvests the CSRF token
    ///
    /// The portal rotates the token on some navigations; the semester fetch
    /// refreshes it the way the upstream flow does.
    pub async fn refresh_token(&mut self) -> Result<(), VtopError> {
        let url = self.base.join("content")?;
        let dashboard = self.get_text(url).await?;
        if let Some(token) = extract_csrf_token(&dashboard) {
            self.context.csrf_token = Some(token);
        }
        Ok(())
    }

    /// Raw markup of the full profile page
    pub async fn profile_page(&self) -> Result<String, VtopError> {
        self.post_page("studentsRecord/StudentProfileAllView", &self.menu_form()?)
            .await
    }

    /// Raw markup of the timetable page, which carries the semester list
    pub async fn semesters_page(&mut self) -> Result<String, VtopError> {
        self.refresh_token().await?;
        self.post_page("academics/common/StudentTimeTable", &self.menu_form()?)
            .await
    }

    /// Raw markup of the internal marks page for one semester
    pub async fn marks_page(&self, semester_id: &str) -> Result<String, VtopError> {
        self.post_page(
            "examinations/doStudentMarkView",
            &self.semester_form(semester_id)?,
        )
        .await
    }

    /// Raw markup of the exam schedule page for one semester
    pub async fn exam_schedule_page(&self, semester_id: &str) -> Result<String, VtopError> {
        self.post_page(
            "examinations/doSearchExamScheduleForStudent",
            &self.semester_form(semester_id)?,
        )
        .await
    }

    /// Raw markup of the attendance summary page for one semester
    pub async fn attendance_page(&self, semester_id: &str) -> Result<String, VtopError> {
        self.post_page(
            "processViewStudentAttendance",
            &self.semester_form(semester_id)?,
        )
        .await
    }

    /// Raw markup of the detail-level attendance page for one course
    ///
    /// `course_id` and `type_code` come from a summary entry's drill-down
    /// reference.
    pub async fn attendance_detail_page(
        &self,
        semester_id: &str,
        course_id: &str,
        type_code: &str,
    ) -> Result<String, VtopError> {
        let mut form = self.semester_form(semester_id)?;
        form.push(("registerNumber", self.context.authorized_id().to_string()));
        form.push(("courseId", course_id.to_string()));
        form.push(("courseType", type_code.to_string()));
        form.push((
            "x",
            Utc::now().format("%a, %d %b %Y %H:%M:%S GMT").to_string(),
        ));
        self.post_page("processViewAttendanceDetail", &form).await
    }

    /// Raw markup of the grade history (transcript) page
    pub async fn grade_history_page(&self) -> Result<String, VtopError> {
        self.post_page(
            "examinations/examGradeView/StudentGradeHistory",
            &self.menu_form()?,
        )
        .await
    }

    /// Base payload for menu-driven pages
    fn menu_form(&self) -> Result<Vec<(&'static str, String)>, VtopError> {
        let token = self.context.token()?;
        Ok(vec![
            ("verifyMenu", "true".to_string()),
            ("authorizedID", self.context.authorized_id().to_string()),
            ("_csrf", token.to_string()),
            ("nocache", format!("@{}", Utc::now().timestamp_millis())),
        ])
    }

    /// Base payload for semester-scoped pages
    fn semester_form(&self, semester_id: &str) -> Result<Vec<(&'static str, String)>, VtopError> {
        let mut form = self.menu_form()?;
        form.push(("semesterSubId", semester_id.to_string()));
        Ok(form)
    }

    async fn post_page(
        &self,
        path: &str,
        form: &[(&'static str, String)],
    ) -> Result<String, VtopError> {
        let url = self.base.join(path)?;
        let referer = self.base.join("content")?;

        let response = self
            .http
            .post(url.clone())
            .header("X-Requested-With", "XMLHttpRequest")
            .header("Referer", referer.to_string())
            .form(form)
            .send()
            .await
            .map_err(|source| VtopError::Http {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(SessionError::BadStatus {
                page: path.to_string(),
                status: status.as_u16(),
            }
            .into());
        }

        response.text().await.map_err(|source| VtopError::Http {
            url: url.to_string(),
            source,
        })
    }

    async fn get_text(&self, url: Url) -> Result<String, VtopError> {
        let response = self
            .http
            .get(url.clone())
            .send()
            .await
            .map_err(|source| VtopError::Http {
                url: url.to_string(),
                source,
            })?;

        response.text().await.map_err(|source| VtopError::Http {
            url: url.to_string(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_portal_client() {
        assert!(build_portal_client(30).is_ok());
    }

    #[test]
    fn test_base_url_gets_trailing_slash() {
        let http = build_portal_client(30).unwrap();
        let client = PortalClient::new(http, "https://vtop.vitap.ac.in/vtop", "22BCE7777").unwrap();
        assert_eq!(client.base.as_str(), "https://vtop.vitap.ac.in/vtop/");
    }

    #[test]
    fn test_forms_require_token() {
        let http = build_portal_client(30).unwrap();
        let client =
            PortalClient::new(http, "https://vtop.vitap.ac.in/vtop/", "22BCE7777").unwrap();
        assert!(client.menu_form().is_err());
    }

    #[test]
    fn test_semester_form_carries_id() {
        let http = build_portal_client(30).unwrap();
        let mut client =
            PortalClient::new(http, "https://vtop.vitap.ac.in/vtop/", "22BCE7777").unwrap();
        client.context_mut().csrf_token = Some("abc123".to_string());

        let form = client.semester_form("AP2025262").unwrap();
        assert!(form
            .iter()
            .any(|(k, v)| *k == "semesterSubId" && v == "AP2025262"));
        assert!(form.iter().any(|(k, v)| *k == "_csrf" && v == "abc123"));
        assert!(form
            .iter()
            .any(|(k, v)| *k == "authorizedID" && v == "22BCE7777"));
    }
}
