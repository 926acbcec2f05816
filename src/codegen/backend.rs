use std::path::Path;

use crate::codegen::{CodegenError, ValueType};

/// Construction requests the lowering engine issues.
///
/// Handles are opaque to the engine; a backend decides what a module,
/// function or value is. Only one function receives instructions at a time:
/// the one passed to the last `set_insertion_point`.
pub trait Backend {
    type Module;
    type Function: Copy;
    type Value: Copy;

    fn create_module(&mut self, name: &str) -> Self::Module;

    /// Declare a parameterless function returning `return_type`
    /// # Errors
    /// Backend-specific failure
    fn create_function(
        &mut self,
        module: &Self::Module,
        name: &str,
        return_type: ValueType,
    ) -> Result<Self::Function, CodegenError>;

    /// Direct all following instructions into `function`
    /// # Errors
    /// Backend-specific failure
    fn set_insertion_point(&mut self, function: Self::Function) -> Result<(), CodegenError>;

    /// Emit `ret void` or `ret <value>` at the insertion point
    /// # Errors
    /// Backend-specific failure, e.g. no insertion point
    fn emit_return(&mut self, value: Option<Self::Value>) -> Result<(), CodegenError>;

    /// Materialize a decimal integer constant
    /// # Errors
    /// Returns `CodegenError::NumericFormat` if `text` is not a base-10 integer that fits `ty`
    fn emit_integer_constant(&mut self, ty: ValueType, text: &str) -> Result<Self::Value, CodegenError>;

    fn render_textual_ir(&self, module: &Self::Module) -> String;

    /// Write a native object file for `module`
    /// # Errors
    /// Returns `CodegenError::Backend` on target selection or I/O failure
    fn emit_object_file(&self, module: &Self::Module, path: &Path) -> Result<(), CodegenError>;
}
