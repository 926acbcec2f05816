use std::fmt::Write as _;
use std::path::Path;

use crate::codegen::{parse_integer_literal, Backend, CodegenError, ValueType};

/// Integer constant materialized by [`RecordingBackend`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Constant {
    pub ty: ValueType,
    pub value: i128,
}

/// One request received by [`RecordingBackend`], in arrival order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    CreateModule(String),
    CreateFunction { name: String, return_type: ValueType },
    SetInsertionPoint(String),
    IntegerConstant(Constant),
    Return(Option<Constant>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModuleId(usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FunctionId(usize);

#[derive(Debug)]
struct RecordedModule {
    name: String,
    functions: Vec<FunctionId>,
}

#[derive(Debug)]
struct RecordedFunction {
    name: String,
    return_type: ValueType,
    returns: Vec<Option<Constant>>,
}

/// Backend without LLVM: records every request and renders an
/// LLVM-flavoured listing of what it was asked to build.
#[derive(Debug, Default)]
pub struct RecordingBackend {
    requests: Vec<Request>,
    modules: Vec<RecordedModule>,
    functions: Vec<RecordedFunction>,
    insertion_point: Option<FunctionId>,
}

impl RecordingBackend {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Every request received so far
    #[must_use]
    pub fn requests(&self) -> &[Request] {
        &self.requests
    }

    fn render_function(&self, out: &mut String, function: &RecordedFunction) {
        // Writing into a String cannot fail.
        let _ = writeln!(out, "define {} @{}() {{", function.return_type, function.name);
        let _ = writeln!(out, "{}:", function.name);
        for value in &function.returns {
            match value {
                Some(constant) => {
                    let _ = writeln!(out, "  ret {} {}", constant.ty, constant.value);
                }
                None => {
                    let _ = writeln!(out, "  ret void");
                }
            }
        }
        let _ = writeln!(out, "}}");
    }
}

impl Backend for RecordingBackend {
    type Module = ModuleId;
    type Function = FunctionId;
    type Value = Constant;

    fn create_module(&mut self, name: &str) -> ModuleId {
        self.requests.push(Request::CreateModule(name.to_string()));
        self.modules.push(RecordedModule {
            name: name.to_string(),
            functions: Vec::new(),
        });
        ModuleId(self.modules.len() - 1)
    }

    fn create_function(
        &mut self,
        module: &ModuleId,
        name: &str,
        return_type: ValueType,
    ) -> Result<FunctionId, CodegenError> {
        let id = FunctionId(self.functions.len());
        let module = self
            .modules
            .get_mut(module.0)
            .ok_or_else(|| CodegenError::Backend(format!("unknown module #{}", module.0)))?;

        module.functions.push(id);
        self.functions.push(RecordedFunction {
            name: name.to_string(),
            return_type,
            returns: Vec::new(),
        });
        self.requests.push(Request::CreateFunction {
            name: name.to_string(),
            return_type,
        });
        Ok(id)
    }

    fn set_insertion_point(&mut self, function: FunctionId) -> Result<(), CodegenError> {
        let name = self
            .functions
            .get(function.0)
            .map(|f| f.name.clone())
            .ok_or_else(|| CodegenError::Backend(format!("unknown function #{}", function.0)))?;

        self.insertion_point = Some(function);
        self.requests.push(Request::SetInsertionPoint(name));
        Ok(())
    }

    fn emit_return(&mut self, value: Option<Constant>) -> Result<(), CodegenError> {
        let function = self
            .insertion_point
            .and_then(|id| self.functions.get_mut(id.0))
            .ok_or_else(|| CodegenError::Backend("no insertion point for return".to_string()))?;

        function.returns.push(value);
        self.requests.push(Request::Return(value));
        Ok(())
    }

    fn emit_integer_constant(&mut self, ty: ValueType, text: &str) -> Result<Constant, CodegenError> {
        let constant = Constant {
            ty,
            value: parse_integer_literal(text, ty)?,
        };
        self.requests.push(Request::IntegerConstant(constant));
        Ok(constant)
    }

    fn render_textual_ir(&self, module: &ModuleId) -> String {
        let Some(module) = self.modules.get(module.0) else {
            return String::new();
        };

        let mut out = String::new();
        let _ = writeln!(out, "; ModuleID = '{}'", module.name);
        let _ = writeln!(out, "source_filename = \"{}\"", module.name);
        for id in &module.functions {
            if let Some(function) = self.functions.get(id.0) {
                out.push('\n');
                self.render_function(&mut out, function);
            }
        }
        out
    }

    fn emit_object_file(&self, _module: &ModuleId, path: &Path) -> Result<(), CodegenError> {
        Err(CodegenError::Backend(format!(
            "cannot write '{}': object emission requires the LLVM backend",
            path.display()
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_textual_ir() {
        let mut backend = RecordingBackend::new();
        let module = backend.create_module("main");
        let function = backend.create_function(&module, "main", ValueType::I32).unwrap();
        backend.set_insertion_point(function).unwrap();
        let value = backend.emit_integer_constant(ValueType::I32, "-3").unwrap();
        backend.emit_return(Some(value)).unwrap();
        backend.emit_return(None).unwrap();

        assert_eq!(
            backend.render_textual_ir(&module),
            "; ModuleID = 'main'\n\
             source_filename = \"main\"\n\
             \n\
             define i32 @main() {\n\
             main:\n  ret i32 -3\n  ret void\n\
             }\n"
        );
    }

    #[test]
    fn test_return_without_insertion_point() {
        let mut backend = RecordingBackend::new();
        assert!(matches!(backend.emit_return(None), Err(CodegenError::Backend(_))));
        assert!(backend.requests().is_empty());
    }

    #[test]
    fn test_unknown_module() {
        let mut backend = RecordingBackend::new();
        assert!(backend.create_function(&ModuleId(3), "f", ValueType::I32).is_err());
        assert_eq!(backend.render_textual_ir(&ModuleId(3)), "");
    }

    #[test]
    fn test_object_emission_unsupported() {
        let mut backend = RecordingBackend::new();
        let module = backend.create_module("main");
        let result = backend.emit_object_file(&module, Path::new("main.obj"));
        assert!(matches!(result, Err(CodegenError::Backend(_))));
    }
}
