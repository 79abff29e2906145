use async_trait::async_trait;
use bedrock_chat_relay::provider::ModelInvoker;
use bytes::Bytes;
use serde_json::json;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

/// What the mock provider does on every call.
#[derive(Clone, Debug)]
pub enum MockReply {
    Body(Vec<u8>),
    Fail(String),
}

#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub model_id: String,
    pub content_type: String,
    pub body: serde_json::Value,
}

/// In-process stand-in for Bedrock that records every invocation.
pub struct MockInvoker {
    reply: MockReply,
    calls: AtomicUsize,
    recorded: Mutex<Vec<RecordedCall>>,
}

impl MockInvoker {
    pub fn new(reply: MockReply) -> Self {
        Self {
            reply,
            calls: AtomicUsize::new(0),
            recorded: Mutex::new(Vec::new()),
        }
    }

    pub fn replying_text(texts: &[&str]) -> Self {
        let content: Vec<_> = texts
            .iter()
            .map(|t| json!({"type": "text", "text": t}))
            .collect();
        let body = json!({
            "id": "msg_bdrk_01",
            "type": "message",
            "role": "assistant",
            "model": "claude-3-haiku-20240307",
            "content": content,
            "stop_reason": "end_turn",
            "usage": {"input_tokens": 10, "output_tokens": 5}
        });
        Self::new(MockReply::Body(serde_json::to_vec(&body).unwrap()))
    }

    pub fn replying_raw(body: &str) -> Self {
        Self::new(MockReply::Body(body.as_bytes().to_vec()))
    }

    pub fn failing(msg: &str) -> Self {
        Self::new(MockReply::Fail(msg.to_string()))
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn recorded(&self) -> Vec<RecordedCall> {
        self.recorded.lock().unwrap().clone()
    }
}

#[async_trait]
impl ModelInvoker for MockInvoker {
    async fn invoke_model(
        &self,
        model_id: &str,
        content_type: &str,
        body: Vec<u8>,
    ) -> anyhow::Result<Bytes> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.recorded.lock().unwrap().push(RecordedCall {
            model_id: model_id.to_string(),
            content_type: content_type.to_string(),
            body: serde_json::from_slice(&body)?,
        });
        match &self.reply {
            MockReply::Body(body) => Ok(Bytes::from(body.clone())),
            MockReply::Fail(msg) => Err(anyhow::anyhow!("{}", msg)),
        }
    }
}
