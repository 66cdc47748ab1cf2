use serde::{Deserialize, Serialize};

// Parameter values the compile service expects alongside the source text
pub const COMPILATION_LEVEL: &str = "SIMPLE_OPTIMIZATIONS";
pub const OUTPUT_FORMAT: &str = "text";
pub const OUTPUT_INFO: &str = "compiled_code";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompileRequest {
    /// Source text, passed through unparsed and unvalidated
    pub(crate) js_code: String,

    pub(crate) compilation_level: String,
    pub(crate) output_format: String,
    pub(crate) output_info: String,
}

impl CompileRequest {
    pub fn new(js_code: String) -> Self {
        CompileRequest {
            js_code,
            compilation_level: COMPILATION_LEVEL.to_string(),
            output_format: OUTPUT_FORMAT.to_string(),
            output_info: OUTPUT_INFO.to_string(),
        }
    }
}
