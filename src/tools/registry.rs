//! Tool registry for managing the tools this server exposes

use super::dad_joke::DadJokeTool;
use super::exercise_search::ExerciseSearchTool;
use super::muscle_groups::MuscleGroupsTool;
use super::traits::Tool;
use crate::config::Settings;
use crate::network::HttpClient;
use crate::protocol::ToolDescriptor;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::info;

/// Registry of all callable tools
pub struct ToolRegistry {
    /// Tools by name
    tools: HashMap<String, Arc<dyn Tool>>,
}

impl ToolRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            tools: HashMap::new(),
        }
    }

    /// Build the registry with every tool this server ships
    pub fn load(settings: &Arc<Settings>, client: &HttpClient) -> Self {
        let mut registry = Self::new();

        registry.register(Arc::new(DadJokeTool::new(settings.clone(), client.clone())));
        registry.register(Arc::new(ExerciseSearchTool::new(
            settings.clone(),
            client.clone(),
        )));
        registry.register(Arc::new(MuscleGroupsTool::new(
            settings.clone(),
            client.clone(),
        )));

        info!("Loaded {} tools", registry.len());
        registry
    }

    /// Register a tool
    pub fn register(&mut self, tool: Arc<dyn Tool>) {
        self.tools.insert(tool.name().to_string(), tool);
    }

    /// Get a tool by name
    pub fn get(&self, name: &str) -> Option<&Arc<dyn Tool>> {
        self.tools.get(name)
    }

    /// Number of registered tools
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// All tool names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.tools.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Descriptors for `tools/list`, in name order
    pub fn descriptors(&self) -> Vec<ToolDescriptor> {
        let mut descriptors: Vec<ToolDescriptor> =
            self.tools.values().map(|tool| tool.descriptor()).collect();
        descriptors.sort_by(|a, b| a.name.cmp(&b.name));
        descriptors
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}
