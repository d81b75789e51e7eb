pub mod deepseek;
pub mod factory;
pub mod http_client;
pub mod traits;

pub use deepseek::DeepSeekProvider;
pub use factory::create_provider;
pub use traits::Provider;
