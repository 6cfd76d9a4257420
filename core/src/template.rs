/// Token replaced by the Go module path (the project name).
pub const MODULE_PLACEHOLDER: &str = "{{module}}";

/// Fills every module placeholder in `body` with `module`.
pub fn render(body: &str, module: &str) -> String {
    body.replace(MODULE_PLACEHOLDER, module)
}
