//! 测试用的脚本化传输层：按 (方法, 路径) 排队预设响应，并记录每次调用

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;
use tokio::sync::oneshot;

use super::{MultipartForm, PortalTransport, RawResponse};
use crate::errors::{PortalError, Result};

enum Scripted {
    Ready(Result<RawResponse>),
    Gated(oneshot::Receiver<Result<RawResponse>>),
}

#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub method: &'static str,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub form: Option<MultipartForm>,
}

#[derive(Default)]
pub struct ScriptedTransport {
    queue: Mutex<HashMap<(&'static str, String), VecDeque<Scripted>>>,
    calls: Mutex<Vec<RecordedCall>>,
    cookies: Mutex<HashMap<String, String>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, method: &'static str, path: &str, response: Result<RawResponse>) {
        self.queue
            .lock()
            .unwrap()
            .entry((method, path.to_string()))
            .or_default()
            .push_back(Scripted::Ready(response));
    }

    pub fn respond_json(&self, method: &'static str, path: &str, value: serde_json::Value) {
        self.respond(method, path, Ok(RawResponse::ok_json(value)));
    }

    /// 响应在返回的 Sender 发送之后才到达
    pub fn respond_later(
        &self,
        method: &'static str,
        path: &str,
    ) -> oneshot::Sender<Result<RawResponse>> {
        let (tx, rx) = oneshot::channel();
        self.queue
            .lock()
            .unwrap()
            .entry((method, path.to_string()))
            .or_default()
            .push_back(Scripted::Gated(rx));
        tx
    }

    pub fn set_cookie(&self, name: &str, value: &str) {
        self.cookies
            .lock()
            .unwrap()
            .insert(name.to_string(), value.to_string());
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    async fn next(&self, call: RecordedCall) -> Result<RawResponse> {
        let key = (call.method, call.path.clone());
        self.calls.lock().unwrap().push(call);
        let scripted = self
            .queue
            .lock()
            .unwrap()
            .get_mut(&key)
            .and_then(|q| q.pop_front());
        match scripted {
            Some(Scripted::Ready(result)) => result,
            Some(Scripted::Gated(rx)) => rx
                .await
                .unwrap_or_else(|_| Err(PortalError::transport("gate dropped"))),
            None => Err(PortalError::transport(format!(
                "no scripted response for {} {}",
                key.0, key.1
            ))),
        }
    }
}

#[async_trait::async_trait]
impl PortalTransport for ScriptedTransport {
    async fn get(&self, path: &str) -> Result<RawResponse> {
        self.next(RecordedCall {
            method: "GET",
            path: path.to_string(),
            headers: Vec::new(),
            form: None,
        })
        .await
    }

    async fn post_json(
        &self,
        path: &str,
        headers: &[(String, String)],
        _body: serde_json::Value,
    ) -> Result<RawResponse> {
        self.next(RecordedCall {
            method: "POST",
            path: path.to_string(),
            headers: headers.to_vec(),
            form: None,
        })
        .await
    }

    async fn post_multipart(&self, path: &str, form: MultipartForm) -> Result<RawResponse> {
        self.next(RecordedCall {
            method: "POST",
            path: path.to_string(),
            headers: Vec::new(),
            form: Some(form),
        })
        .await
    }

    fn cookie(&self, name: &str) -> Option<String> {
        self.cookies.lock().unwrap().get(name).cloned()
    }
}
