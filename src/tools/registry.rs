use crate::{config::Config, tools::{KnownTool, ToolSpec}};

#[derive(Debug, Clone)]
pub struct ToolRegistry {
    tools: Vec<ToolSpec>,
}

impl ToolRegistry {
    /// Built-in tools followed by the ones declared in `cfg`. A configured tool
    /// with a built-in's name replaces it.
    pub fn new(cfg: &Config) -> Self {
        let mut tools: Vec<ToolSpec> = KnownTool::ALL
            .iter()
            .map(|t| t.spec())
            .filter(|t| !cfg.tool.iter().any(|c| c.name == t.name))
            .collect();
        tools.extend(cfg.tool.iter().cloned());
        tools.sort_by(|a, b| a.name.cmp(&b.name));
        Self { tools }
    }

    pub fn builtin() -> Self {
        Self::new(&Config::default())
    }

    pub fn get(&self, name: &str) -> Option<&ToolSpec> { self.tools.iter().find(|t| t.name == name) }
    pub fn list_names(&self) -> Vec<String> { self.tools.iter().map(|t| t.name.clone()).collect() }
}
