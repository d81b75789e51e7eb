use async_trait::async_trait;

/// Remote text-generation service behind the AI critique and idea
/// generation commands.
///
/// Treated as unreliable: callers substitute a static fallback message
/// on any error rather than surfacing it to the user.
#[async_trait]
pub trait Provider: Send + Sync {
    async fn complete(&self, prompt: &str, model: &str, temperature: f64)
    -> anyhow::Result<String>;
}
