pub mod tool;

pub use tool::{load_config, PreprocessToolConfig, ToolOutputConfig};
