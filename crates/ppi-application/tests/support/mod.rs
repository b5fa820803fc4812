//! In-memory fakes of the domain traits.

#![allow(dead_code)]

use std::sync::Mutex;

use async_trait::async_trait;
use ppi_core::auth::{
    AuthService, ChangePasswordRequest, ForgotPasswordRequest, LoginRequest, RegisterRequest,
    ResetPasswordRequest, UserInfo,
};
use ppi_core::batch::{BatchPredictionResult, BatchUpload};
use ppi_core::error::{PpiError, Result};
use ppi_core::history::{HistoryEntry, HistoryRepository, sort_newest_first};
use ppi_core::prediction::{PredictionRequest, PredictionResult, PredictionService};
use ppi_core::session::{SessionRepository, SessionState, Theme};
use serde_json::Value;

/// Prediction backend answering with a fixed outcome and counting calls.
pub struct FakePredictionService {
    pub single: Result<PredictionResult>,
    pub batch: Result<BatchPredictionResult>,
    pub calls: Mutex<usize>,
    pub uploads: Mutex<Vec<BatchUpload>>,
}

impl FakePredictionService {
    pub fn answering(result: PredictionResult) -> Self {
        Self {
            single: Ok(result),
            batch: Err(PpiError::internal("no batch answer configured")),
            calls: Mutex::new(0),
            uploads: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(status: u16, status_text: &str) -> Self {
        Self {
            single: Err(PpiError::request_failed("Predict", status, status_text)),
            batch: Err(PpiError::request_failed("Batch predict", status, status_text)),
            calls: Mutex::new(0),
            uploads: Mutex::new(Vec::new()),
        }
    }

    pub fn with_batch(result: BatchPredictionResult) -> Self {
        Self {
            single: Err(PpiError::internal("no single answer configured")),
            batch: Ok(result),
            calls: Mutex::new(0),
            uploads: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        *self.calls.lock().unwrap()
    }
}

#[async_trait]
impl PredictionService for FakePredictionService {
    async fn predict(&self, _request: &PredictionRequest) -> Result<PredictionResult> {
        *self.calls.lock().unwrap() += 1;
        self.single.clone()
    }

    async fn predict_batch(&self, upload: &BatchUpload) -> Result<BatchPredictionResult> {
        *self.calls.lock().unwrap() += 1;
        self.uploads.lock().unwrap().push(upload.clone());
        self.batch.clone()
    }
}

#[derive(Default)]
pub struct InMemoryHistory {
    entries: Mutex<Vec<HistoryEntry>>,
}

impl InMemoryHistory {
    pub fn stored(&self) -> Vec<HistoryEntry> {
        self.entries.lock().unwrap().clone()
    }
}

#[async_trait]
impl HistoryRepository for InMemoryHistory {
    async fn append(&self, entry: HistoryEntry) -> Result<()> {
        self.entries.lock().unwrap().push(entry);
        Ok(())
    }

    async fn read_all(&self) -> Result<Vec<HistoryEntry>> {
        let mut entries = self.stored();
        sort_newest_first(&mut entries);
        Ok(entries)
    }

    async fn remove_by_id(&self, id: &str) -> Result<Vec<HistoryEntry>> {
        let mut entries = self.entries.lock().unwrap();
        entries.retain(|entry| entry.id != id);
        Ok(entries.clone())
    }

    async fn clear(&self) -> Result<()> {
        self.entries.lock().unwrap().clear();
        Ok(())
    }
}

/// Auth backend returning one canned body for every call.
pub struct FakeAuthService {
    pub body: Value,
    pub last_token: Mutex<Option<Option<String>>>,
}

impl FakeAuthService {
    pub fn returning(body: Value) -> Self {
        Self {
            body,
            last_token: Mutex::new(None),
        }
    }
}

#[async_trait]
impl AuthService for FakeAuthService {
    async fn register(&self, _request: &RegisterRequest) -> Result<Value> {
        Ok(self.body.clone())
    }

    async fn login(&self, _request: &LoginRequest) -> Result<Value> {
        Ok(self.body.clone())
    }

    async fn forgot_password(&self, _request: &ForgotPasswordRequest) -> Result<Value> {
        Ok(self.body.clone())
    }

    async fn reset_password(&self, _request: &ResetPasswordRequest) -> Result<Value> {
        Ok(self.body.clone())
    }

    async fn change_password(
        &self,
        _request: &ChangePasswordRequest,
        access_token: Option<&str>,
    ) -> Result<Value> {
        *self.last_token.lock().unwrap() = Some(access_token.map(str::to_string));
        Ok(self.body.clone())
    }
}

#[derive(Default)]
pub struct InMemorySession {
    state: Mutex<SessionState>,
    theme: Mutex<Theme>,
}

#[async_trait]
impl SessionRepository for InMemorySession {
    async fn get_session(&self) -> SessionState {
        self.state.lock().unwrap().clone()
    }

    async fn set_login(&self, access_token: String, user: Option<UserInfo>) -> Result<()> {
        *self.state.lock().unwrap() = SessionState {
            access_token: Some(access_token),
            user,
        };
        Ok(())
    }

    async fn clear_login(&self) -> Result<()> {
        *self.state.lock().unwrap() = SessionState::default();
        Ok(())
    }

    async fn get_theme(&self) -> Theme {
        *self.theme.lock().unwrap()
    }

    async fn set_theme(&self, theme: Theme) -> Result<()> {
        *self.theme.lock().unwrap() = theme;
        Ok(())
    }
}
