//! Claim Intake
//!
//! `/login` accepts one claim per call as multipart form data.

use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsValue;
use web_sys::FormData;

use super::{read_json, ApiClient};
use crate::error::ApiError;
use crate::models::{Credentials, LoginResponse, PendingClaim, ScheduleStatus, TerminateResponse};
use crate::submit::IntakeBackend;

fn js_err(e: JsValue) -> ApiError {
    ApiError::Network(format!("{:?}", e))
}

fn login_form(credentials: &Credentials, claim: &PendingClaim) -> Result<FormData, ApiError> {
    let form = FormData::new().map_err(js_err)?;
    form.append_with_str("username", &credentials.username).map_err(js_err)?;
    form.append_with_str("password", &credentials.password).map_err(js_err)?;
    form.append_with_str("claim_number", claim.claim_for_wire()).map_err(js_err)?;
    form.append_with_str("vin_number", claim.vin_for_wire()).map_err(js_err)?;
    // Checkbox semantics: present as "on" when enabled
    if credentials.svg_collection {
        form.append_with_str("svg_collection", "on").map_err(js_err)?;
    }
    Ok(form)
}

impl ApiClient {
    pub async fn login(&self, credentials: &Credentials, claim: &PendingClaim) -> Result<LoginResponse, ApiError> {
        let form = login_form(credentials, claim)?;
        let resp = Request::post(&self.url("/login")).body(form)?.send().await?;
        read_json(resp).await
    }

    /// Ask the backend to stop the running parser
    pub async fn terminate(&self) -> Result<TerminateResponse, ApiError> {
        self.post_empty("/terminate").await
    }
}

impl IntakeBackend for ApiClient {
    async fn submit_claim(&self, credentials: &Credentials, claim: &PendingClaim) -> Result<LoginResponse, ApiError> {
        self.login(credentials, claim).await
    }

    async fn schedule_status(&self) -> Result<ScheduleStatus, ApiError> {
        self.get_schedule_status().await
    }

    async fn pause(&self, ms: u32) {
        TimeoutFuture::new(ms).await;
    }
}
