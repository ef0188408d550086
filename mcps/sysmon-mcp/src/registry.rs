//! Tool registry and dispatch
//!
//! Tools are registered once at startup with a typed parameter struct. The
//! registry derives each tool's JSON input schema from that struct and
//! decodes arguments into it before the handler runs.

use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use rmcp::model::{JsonObject, Tool};
use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;
use tokio_util::sync::CancellationToken;

use crate::config::Config;
use crate::envelope::ResponseEnvelope;
use crate::error::{ToolError, ToolResult};
use crate::files::FileLister;
use crate::probe::SystemProbe;

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("tool registered twice: {0}")]
    DuplicateTool(String),
}

/// Everything a handler may touch during one invocation
#[derive(Clone)]
pub struct ToolContext {
    pub probe: Arc<dyn SystemProbe>,
    pub files: Arc<FileLister>,
    pub config: Arc<Config>,
    /// Cancelled when the caller abandons the call or it times out
    pub ct: CancellationToken,
}

/// Name, description and input schema of a registered tool
#[derive(Debug, Clone)]
pub struct ToolDescriptor {
    pub name: &'static str,
    pub description: &'static str,
    pub input_schema: Arc<JsonObject>,
}

impl ToolDescriptor {
    pub fn to_tool(&self) -> Tool {
        Tool::new(self.name, self.description, self.input_schema.clone())
    }
}

type HandlerFuture = Pin<Box<dyn Future<Output = ToolResult<ResponseEnvelope>> + Send>>;
type Handler = Arc<dyn Fn(Value, ToolContext) -> HandlerFuture + Send + Sync>;

struct Entry {
    descriptor: ToolDescriptor,
    handler: Handler,
}

/// Fixed set of tools, in registration order
#[derive(Default)]
pub struct ToolRegistry {
    entries: Vec<Entry>,
    index: HashMap<&'static str, usize>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handler` under `name`, taking parameters of type `P`
    pub fn register<P, F, Fut>(
        &mut self,
        name: &'static str,
        description: &'static str,
        handler: F,
    ) -> Result<(), RegistryError>
    where
        P: DeserializeOwned + JsonSchema + Send + 'static,
        F: Fn(P, ToolContext) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ToolResult<ResponseEnvelope>> + Send + 'static,
    {
        if self.index.contains_key(name) {
            return Err(RegistryError::DuplicateTool(name.to_string()));
        }

        let handler = Arc::new(handler);
        let erased: Handler = Arc::new(move |args: Value, ctx: ToolContext| {
            let handler = handler.clone();
            Box::pin(async move {
                let params = decode_args::<P>(args)?;
                handler(params, ctx).await
            }) as HandlerFuture
        });

        self.index.insert(name, self.entries.len());
        self.entries.push(Entry {
            descriptor: ToolDescriptor {
                name,
                description,
                input_schema: schema_for::<P>(),
            },
            handler: erased,
        });
        Ok(())
    }

    /// Decode `args` for `name` and run its handler
    pub async fn dispatch(
        &self,
        name: &str,
        args: Value,
        ctx: ToolContext,
    ) -> ToolResult<ResponseEnvelope> {
        let entry = self
            .index
            .get(name)
            .map(|&i| &self.entries[i])
            .ok_or_else(|| ToolError::UnknownTool(name.to_string()))?;
        (entry.handler)(args, ctx).await
    }

    pub fn descriptors(&self) -> impl Iterator<Item = &ToolDescriptor> {
        self.entries.iter().map(|e| &e.descriptor)
    }

    pub fn tools(&self) -> Vec<Tool> {
        self.descriptors().map(ToolDescriptor::to_tool).collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Missing arguments decode as an empty object
fn decode_args<P: DeserializeOwned>(args: Value) -> ToolResult<P> {
    let args = match args {
        Value::Null => Value::Object(Default::default()),
        other => other,
    };
    serde_json::from_value(args).map_err(|e| ToolError::InvalidArguments(e.to_string()))
}

fn schema_for<P: JsonSchema>() -> Arc<JsonObject> {
    let schema = schemars::schema_for!(P);
    let mut map = match serde_json::to_value(&schema) {
        Ok(Value::Object(map)) => map,
        _ => JsonObject::new(),
    };
    map.entry("type")
        .or_insert_with(|| Value::String("object".to_string()));
    Arc::new(map)
}
